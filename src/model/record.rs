use serde::Serialize;

/// Classification tag attached to a gene record.
///
/// Tag membership is the only classification signal; a record may carry any
/// combination, so precedence is decided by the resolver, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Label {
    NonImmune,
    KnownIei,
    NovelIei,
    PredictedIei,
    Other(String),
}

impl Label {
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "Non-immune" => Label::NonImmune,
            "2022 IUIS IEI" => Label::KnownIei,
            "Novel 2024 IUIS" => Label::NovelIei,
            "Predicted IEI" => Label::PredictedIei,
            other => Label::Other(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            Label::NonImmune => "Non-immune",
            Label::KnownIei => "2022 IUIS IEI",
            Label::NovelIei => "Novel 2024 IUIS",
            Label::PredictedIei => "Predicted IEI",
            Label::Other(tag) => tag,
        }
    }
}

impl Serialize for Label {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Probability {
    Value(f64),
    NotApplicable,
}

impl Probability {
    pub fn value(self) -> Option<f64> {
        match self {
            Probability::Value(v) => Some(v),
            Probability::NotApplicable => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneRecord {
    pub symbol: String,
    /// 0 means unranked.
    pub rank: u32,
    pub labels: Vec<Label>,
    pub probability: Probability,
}

impl GeneRecord {
    pub fn has_label(&self, label: &Label) -> bool {
        self.labels.contains(label)
    }

    pub fn is_ranked(&self) -> bool {
        self.rank > 0
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/record.rs"]
mod tests;
