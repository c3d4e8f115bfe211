use serde::Serialize;
use serde::ser::SerializeStruct;

/// Why a query produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotFoundReason {
    /// Dataset is loaded but has no entry for the symbol.
    Unsupported,
    /// Dataset is still pending or failed to load.
    DataUnavailable,
}

impl NotFoundReason {
    pub fn headline(self) -> &'static str {
        match self {
            NotFoundReason::Unsupported => {
                "Non-protein-coding gene or not included in STRING v11."
            }
            NotFoundReason::DataUnavailable => "Gene data is not available.",
        }
    }

    pub fn detail(self) -> &'static str {
        match self {
            NotFoundReason::Unsupported => {
                "IEI Gene Hunter currently supports only protein-coding genes with a STRING v11 protein ID. This gene is outside the supported set, so no prediction is available."
            }
            NotFoundReason::DataUnavailable => {
                "The ranking dataset could not be loaded, so no gene can be looked up right now."
            }
        }
    }
}

/// Fixed explanatory messages attached to a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Note {
    KnownIeiContext,
    KnownIeiUnranked,
    NovelIeiHighRank,
    NonImmuneControl,
}

impl Note {
    pub fn code(self) -> &'static str {
        match self {
            Note::KnownIeiContext => "known_iei_context",
            Note::KnownIeiUnranked => "known_iei_unranked",
            Note::NovelIeiHighRank => "novel_iei_high_rank",
            Note::NonImmuneControl => "non_immune_control",
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            // Both known IEI notes read the same; only the placement differs.
            Note::KnownIeiContext | Note::KnownIeiUnranked => {
                "Labeled as a known IEI gene in the IUIS classification used for training."
            }
            Note::NovelIeiHighRank => {
                "Recently added IEI gene in IUIS 2024; high model rank among all proteins."
            }
            Note::NonImmuneControl => {
                "This gene was included as a non-immune control during model training. It is not prioritized as an IEI candidate by this tool."
            }
        }
    }
}

impl Serialize for Note {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Note", 2)?;
        s.serialize_field("code", self.code())?;
        s.serialize_field("text", self.text())?;
        s.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankBlock {
    pub rank: u32,
    pub total: u32,
    /// `rank / total * 100`, rounded to two decimals.
    pub percentile: f64,
}

impl RankBlock {
    /// `None` for unranked genes or an empty denominator.
    pub fn new(rank: u32, total: u32) -> Option<Self> {
        if rank == 0 || total == 0 {
            return None;
        }
        let raw = f64::from(rank) / f64::from(total) * 100.0;
        Some(Self {
            rank,
            total,
            percentile: (raw * 100.0).round() / 100.0,
        })
    }

    /// Percentile with exactly two decimals, `0.50` rather than `0.5`.
    pub fn percentile_text(&self) -> String {
        format!("{:.2}", self.percentile)
    }

    pub fn top_label(&self) -> String {
        format!("Top {}%", self.percentile_text())
    }
}

impl Serialize for RankBlock {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("RankBlock", 5)?;
        s.serialize_field("rank", &self.rank)?;
        s.serialize_field("total", &self.total)?;
        s.serialize_field("percentile", &self.percentile)?;
        s.serialize_field("percentile_text", &self.percentile_text())?;
        s.serialize_field("top_label", &self.top_label())?;
        s.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Neighbor {
    pub rank: u32,
    pub symbol: String,
    pub current: bool,
}

/// Declarative result of one query, handed to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ResultView {
    NotFound {
        symbol: String,
        reason: NotFoundReason,
    },
    NonImmune {
        symbol: String,
        note: Note,
    },
    KnownIei {
        symbol: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        ranking: Option<RankBlock>,
        note: Note,
        #[serde(skip_serializing_if = "Option::is_none")]
        probability: Option<f64>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        neighbors: Vec<Neighbor>,
    },
    NovelIei {
        symbol: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        ranking: Option<RankBlock>,
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<Note>,
        #[serde(skip_serializing_if = "Option::is_none")]
        probability: Option<f64>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        neighbors: Vec<Neighbor>,
    },
    Standard {
        symbol: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        ranking: Option<RankBlock>,
        #[serde(skip_serializing_if = "Option::is_none")]
        probability: Option<f64>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        neighbors: Vec<Neighbor>,
    },
}

impl ResultView {
    pub fn symbol(&self) -> &str {
        match self {
            ResultView::NotFound { symbol, .. }
            | ResultView::NonImmune { symbol, .. }
            | ResultView::KnownIei { symbol, .. }
            | ResultView::NovelIei { symbol, .. }
            | ResultView::Standard { symbol, .. } => symbol,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ResultView::NotFound { .. } => "not_found",
            ResultView::NonImmune { .. } => "non_immune",
            ResultView::KnownIei { .. } => "known_iei",
            ResultView::NovelIei { .. } => "novel_iei",
            ResultView::Standard { .. } => "standard",
        }
    }

    pub fn ranking(&self) -> Option<&RankBlock> {
        match self {
            ResultView::KnownIei { ranking, .. }
            | ResultView::NovelIei { ranking, .. }
            | ResultView::Standard { ranking, .. } => ranking.as_ref(),
            ResultView::NotFound { .. } | ResultView::NonImmune { .. } => None,
        }
    }

    pub fn probability(&self) -> Option<f64> {
        match self {
            ResultView::KnownIei { probability, .. }
            | ResultView::NovelIei { probability, .. }
            | ResultView::Standard { probability, .. } => *probability,
            ResultView::NotFound { .. } | ResultView::NonImmune { .. } => None,
        }
    }

    pub fn neighbors(&self) -> &[Neighbor] {
        match self {
            ResultView::KnownIei { neighbors, .. }
            | ResultView::NovelIei { neighbors, .. }
            | ResultView::Standard { neighbors, .. } => neighbors,
            ResultView::NotFound { .. } | ResultView::NonImmune { .. } => &[],
        }
    }

    /// Notes in display order.
    pub fn notes(&self) -> Vec<Note> {
        match self {
            ResultView::NonImmune { note, .. } | ResultView::KnownIei { note, .. } => vec![*note],
            ResultView::NovelIei { note, .. } => note.iter().copied().collect(),
            ResultView::NotFound { .. } | ResultView::Standard { .. } => Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/view.rs"]
mod tests;
