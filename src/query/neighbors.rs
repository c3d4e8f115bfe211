use crate::index::GeneIndex;
use crate::model::view::Neighbor;

/// Genes ranked within `window` of `rank`, ascending.
///
/// Targets outside `1..=size()` or without a mapped symbol are omitted, not padded.
/// The `rank` slot always shows `symbol`, even when other genes share that rank.
pub fn neighbor_window(index: &GeneIndex, symbol: &str, rank: u32, window: u32) -> Vec<Neighbor> {
    if rank == 0 {
        return Vec::new();
    }
    let lo = rank.saturating_sub(window).max(1);
    let hi = rank.saturating_add(window).min(index.size());
    (lo..=hi)
        .filter_map(|target| {
            if target == rank {
                return Some(Neighbor {
                    rank: target,
                    symbol: symbol.to_string(),
                    current: true,
                });
            }
            index.symbol_at_rank(target).map(|other| Neighbor {
                rank: target,
                symbol: other.to_string(),
                current: false,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/query/neighbors.rs"]
mod tests;
