use serde::Serialize;

use crate::index::GeneIndex;
use crate::model::record::Label;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanHit {
    pub rank: u32,
    pub symbol: String,
    pub matched: Vec<Label>,
}

pub fn default_scan_labels() -> Vec<Label> {
    vec![Label::KnownIei, Label::NovelIei]
}

/// Labelled genes among the `within` best ranks.
pub fn scan_labeled(index: &GeneIndex, within: u32, labels: &[Label]) -> Vec<ScanHit> {
    index
        .ranked_with_labels(within, labels)
        .into_iter()
        .map(|record| ScanHit {
            rank: record.rank,
            symbol: record.symbol.clone(),
            matched: labels
                .iter()
                .filter(|l| record.has_label(l))
                .cloned()
                .collect(),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/query/scan.rs"]
mod tests;
