use super::*;
use crate::model::record::{GeneRecord, Probability};
use crate::model::thresholds::TotalCount;

fn record(symbol: &str, rank: u32, labels: &[Label]) -> GeneRecord {
    GeneRecord {
        symbol: symbol.to_string(),
        rank,
        labels: labels.to_vec(),
        probability: Probability::NotApplicable,
    }
}

#[test]
fn test_scan_reports_matched_labels_in_rank_order() {
    let index = GeneIndex::build(
        vec![
            record("STAT1", 40, &[Label::KnownIei, Label::PredictedIei]),
            record("NOVEL", 7, &[Label::NovelIei]),
            record("PLAIN", 3, &[]),
            record("DEEP", 250, &[Label::KnownIei]),
            record("UNRANKED", 0, &[Label::NovelIei]),
        ],
        TotalCount::default(),
    );
    let hits = scan_labeled(&index, 100, &default_scan_labels());
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].symbol, "NOVEL");
    assert_eq!(hits[0].matched, vec![Label::NovelIei]);
    assert_eq!(hits[1].symbol, "STAT1");
    assert_eq!(hits[1].rank, 40);
    assert_eq!(hits[1].matched, vec![Label::KnownIei]);
}

#[test]
fn test_scan_with_custom_label() {
    let index = GeneIndex::build(
        vec![record("STAT1", 40, &[Label::PredictedIei])],
        TotalCount::default(),
    );
    assert!(scan_labeled(&index, 100, &default_scan_labels()).is_empty());
    let hits = scan_labeled(&index, 100, &[Label::from_tag("Predicted IEI")]);
    assert_eq!(hits.len(), 1);
}
