use super::*;
use crate::model::record::{GeneRecord, Probability};
use crate::model::thresholds::TotalCount;

fn index_with_ranks(ranks: &[u32]) -> GeneIndex {
    let records = ranks
        .iter()
        .enumerate()
        .map(|(i, &rank)| GeneRecord {
            symbol: format!("GENE{i}"),
            rank,
            labels: Vec::new(),
            probability: Probability::NotApplicable,
        })
        .collect();
    GeneIndex::build(records, TotalCount::Live)
}

#[test]
fn test_picks_are_best_ranks_first() {
    let index = index_with_ranks(&[12, 0, 3, 1, 7, 2, 11, 4, 9, 5, 6, 8, 10]);
    let picks = QuickPicks::from_index(&index, 10);
    let ranks: Vec<u32> = picks.picks().iter().map(|p| p.rank).collect();
    assert_eq!(ranks, (1..=10).collect::<Vec<_>>());
    assert_eq!(picks.picks()[0].symbol, "GENE3");
}

#[test]
fn test_select_is_one_based() {
    let index = index_with_ranks(&[2, 1]);
    let picks = QuickPicks::from_index(&index, 10);
    assert_eq!(picks.select(1), Some("GENE1"));
    assert_eq!(picks.select(2), Some("GENE0"));
    assert_eq!(picks.select(0), None);
    assert_eq!(picks.select(3), None);
}

#[test]
fn test_pending_dataset_has_no_picks() {
    let dataset = Dataset::new();
    assert!(QuickPicks::from_dataset(&dataset, 10).is_none());

    dataset.install(Ok(index_with_ranks(&[1, 2]))).unwrap();
    let picks = QuickPicks::from_dataset(&dataset, 10).unwrap();
    assert_eq!(picks.picks().len(), 2);
}

#[test]
fn test_ready_dataset_without_ranks_has_empty_picks() {
    let dataset = Dataset::new();
    dataset.install(Ok(index_with_ranks(&[0, 0]))).unwrap();
    assert!(QuickPicks::from_dataset(&dataset, 10).unwrap().is_empty());
}

#[test]
fn test_picks_serialize_as_list() {
    let picks = QuickPicks::from_index(&index_with_ranks(&[1]), 10);
    let json = serde_json::to_string(&picks).unwrap();
    assert_eq!(json, r#"[{"rank":1,"symbol":"GENE0"}]"#);
}
