use serde::Serialize;

use crate::index::GeneIndex;
use crate::index::dataset::Dataset;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickPick {
    pub rank: u32,
    pub symbol: String,
}

/// Fixed strip of the best-ranked genes, built once after load.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct QuickPicks {
    picks: Vec<QuickPick>,
}

impl QuickPicks {
    pub fn from_index(index: &GeneIndex, n: usize) -> Self {
        let picks = index
            .top_by_rank(n)
            .into_iter()
            .map(|r| QuickPick {
                rank: r.rank,
                symbol: r.symbol.clone(),
            })
            .collect();
        Self { picks }
    }

    /// `None` until the dataset is ready, or for good if the load failed.
    pub fn from_dataset(dataset: &Dataset, n: usize) -> Option<Self> {
        dataset.index().map(|index| Self::from_index(index, n))
    }

    pub fn picks(&self) -> &[QuickPick] {
        &self.picks
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// Symbol of the pick at 1-based `position`, to be issued as a query.
    pub fn select(&self, position: usize) -> Option<&str> {
        let idx = position.checked_sub(1)?;
        self.picks.get(idx).map(|p| p.symbol.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/query/quick_picks.rs"]
mod tests;
