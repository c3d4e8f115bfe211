pub mod neighbors;
pub mod quick_picks;
pub mod scan;

use crate::index::GeneIndex;
use crate::index::dataset::{Dataset, DatasetState};
use crate::input::symbols::normalize_symbol;
use crate::model::record::Label;
use crate::model::thresholds::NOVEL_HIGH_RANK_LIMIT;
use crate::model::view::{Note, NotFoundReason, RankBlock, ResultView};
use neighbors::neighbor_window;

/// Turns a free-text query into a [`ResultView`].
///
/// Neighbor resolution is off unless a window is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resolver {
    neighbor_window: Option<u32>,
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_neighbors(window: u32) -> Self {
        Self {
            neighbor_window: Some(window),
        }
    }

    /// `None` for blank input. Every other query yields a view, including
    /// queries made before the dataset is ready.
    pub fn classify(&self, query: &str, dataset: &Dataset) -> Option<ResultView> {
        let symbol = normalize_symbol(query);
        if symbol.is_empty() {
            return None;
        }
        let view = match dataset.state() {
            DatasetState::Ready(index) => self.resolve(symbol, index),
            DatasetState::Pending | DatasetState::Failed(_) => ResultView::NotFound {
                symbol,
                reason: NotFoundReason::DataUnavailable,
            },
        };
        tracing::debug!(symbol = view.symbol(), view = view.kind(), "query classified");
        Some(view)
    }

    fn resolve(&self, symbol: String, index: &GeneIndex) -> ResultView {
        let Some(record) = index.lookup(&symbol) else {
            return ResultView::NotFound {
                symbol,
                reason: NotFoundReason::Unsupported,
            };
        };

        let symbol = record.symbol.clone();
        let ranking = RankBlock::new(record.rank, index.size());
        let probability = record.probability.value();
        let neighbors = match (self.neighbor_window, &ranking) {
            (Some(window), Some(_)) => neighbor_window(index, &record.symbol, record.rank, window),
            _ => Vec::new(),
        };

        if record.has_label(&Label::NonImmune) {
            return ResultView::NonImmune {
                symbol,
                note: Note::NonImmuneControl,
            };
        }

        if record.has_label(&Label::KnownIei) {
            let note = if record.is_ranked() {
                Note::KnownIeiContext
            } else {
                Note::KnownIeiUnranked
            };
            return ResultView::KnownIei {
                symbol,
                ranking,
                note,
                probability,
                neighbors,
            };
        }

        if record.has_label(&Label::NovelIei) {
            let note = (record.is_ranked() && record.rank < NOVEL_HIGH_RANK_LIMIT)
                .then_some(Note::NovelIeiHighRank);
            return ResultView::NovelIei {
                symbol,
                ranking,
                note,
                probability,
                neighbors,
            };
        }

        if record.is_ranked() {
            ResultView::Standard {
                symbol,
                ranking,
                probability,
                neighbors,
            }
        } else {
            ResultView::Standard {
                symbol,
                ranking: None,
                probability: None,
                neighbors: Vec::new(),
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/query/classify.rs"]
mod tests;
