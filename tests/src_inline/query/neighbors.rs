use super::*;
use crate::model::record::{GeneRecord, Probability};
use crate::model::thresholds::TotalCount;

fn ranked_index(n: u32, total: TotalCount) -> GeneIndex {
    let records = (1..=n)
        .map(|rank| GeneRecord {
            symbol: format!("G{rank}"),
            rank,
            labels: Vec::new(),
            probability: Probability::NotApplicable,
        })
        .collect();
    GeneIndex::build(records, total)
}

fn ranks(neighbors: &[Neighbor]) -> Vec<u32> {
    neighbors.iter().map(|n| n.rank).collect()
}

#[test]
fn test_window_in_the_middle() {
    let index = ranked_index(10, TotalCount::Fixed(10));
    let out = neighbor_window(&index, "G3", 3, 2);
    assert_eq!(ranks(&out), vec![1, 2, 3, 4, 5]);
    let current: Vec<&Neighbor> = out.iter().filter(|n| n.current).collect();
    assert_eq!(current.len(), 1);
    assert_eq!(current[0].rank, 3);
    assert_eq!(current[0].symbol, "G3");
}

#[test]
fn test_window_clipped_at_first_rank() {
    let index = ranked_index(10, TotalCount::Fixed(10));
    assert_eq!(ranks(&neighbor_window(&index, "G1", 1, 2)), vec![1, 2, 3]);
}

#[test]
fn test_window_clipped_at_total() {
    let index = ranked_index(10, TotalCount::Fixed(10));
    assert_eq!(ranks(&neighbor_window(&index, "G10", 10, 2)), vec![8, 9, 10]);
}

#[test]
fn test_window_bounded_by_total_not_data() {
    let index = ranked_index(12, TotalCount::Fixed(10));
    assert_eq!(ranks(&neighbor_window(&index, "G9", 9, 2)), vec![7, 8, 9, 10]);
}

#[test]
fn test_unmapped_ranks_omitted() {
    let records = [1u32, 2, 4, 5]
        .iter()
        .map(|&rank| GeneRecord {
            symbol: format!("G{rank}"),
            rank,
            labels: Vec::new(),
            probability: Probability::NotApplicable,
        })
        .collect();
    let index = GeneIndex::build(records, TotalCount::Fixed(100));
    assert_eq!(ranks(&neighbor_window(&index, "G2", 2, 2)), vec![1, 2, 4]);
}

#[test]
fn test_zero_rank_or_window() {
    let index = ranked_index(10, TotalCount::Fixed(10));
    assert!(neighbor_window(&index, "G0", 0, 2).is_empty());
    assert_eq!(ranks(&neighbor_window(&index, "G4", 4, 0)), vec![4]);
}

#[test]
fn test_shared_rank_marks_queried_gene() {
    let records = [("AIRE", 1u32), ("ZAP70", 2), ("JAK3", 2), ("ADA", 3)]
        .iter()
        .map(|&(symbol, rank)| GeneRecord {
            symbol: symbol.to_string(),
            rank,
            labels: Vec::new(),
            probability: Probability::NotApplicable,
        })
        .collect();
    let index = GeneIndex::build(records, TotalCount::Live);

    let out = neighbor_window(&index, "ZAP70", 2, 1);
    let symbols: Vec<&str> = out.iter().map(|n| n.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["AIRE", "ZAP70", "ADA"]);
    assert!(out[1].current);
    assert!(!out.iter().any(|n| n.symbol == "JAK3" && n.current));
}
