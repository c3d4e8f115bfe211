use std::collections::{BTreeMap, HashMap};

pub mod dataset;

use crate::input::symbols::normalize_symbol;
use crate::model::record::{GeneRecord, Label};
use crate::model::thresholds::TotalCount;

/// Read-only `symbol → record` mapping plus the derived `rank → symbol` index.
#[derive(Debug, Clone)]
pub struct GeneIndex {
    /// Input encounter order.
    records: Vec<GeneRecord>,
    by_symbol: HashMap<String, usize>,
    /// Only rank > 0. When ranks collide the last record encountered wins.
    by_rank: BTreeMap<u32, usize>,
    ranked_len: usize,
    total: u32,
}

impl GeneIndex {
    pub fn build(records: Vec<GeneRecord>, total: TotalCount) -> Self {
        let mut kept: Vec<GeneRecord> = Vec::with_capacity(records.len());
        let mut by_symbol: HashMap<String, usize> = HashMap::with_capacity(records.len());
        let mut by_rank: BTreeMap<u32, usize> = BTreeMap::new();
        let mut ranked_len = 0usize;

        for record in records {
            if by_symbol.contains_key(&record.symbol) {
                tracing::warn!(
                    symbol = %record.symbol,
                    "duplicate gene symbol after normalization; keeping first"
                );
                continue;
            }
            let idx = kept.len();
            by_symbol.insert(record.symbol.clone(), idx);
            if record.is_ranked() {
                ranked_len += 1;
                if let Some(prev) = by_rank.insert(record.rank, idx) {
                    tracing::debug!(
                        rank = record.rank,
                        previous = %kept[prev].symbol,
                        symbol = %record.symbol,
                        "rank shared by several genes"
                    );
                }
            }
            kept.push(record);
        }

        Self {
            records: kept,
            by_symbol,
            by_rank,
            ranked_len,
            total: total.resolve(ranked_len),
        }
    }

    pub fn lookup(&self, symbol: &str) -> Option<&GeneRecord> {
        let key = normalize_symbol(symbol);
        self.by_symbol.get(&key).map(|&idx| &self.records[idx])
    }

    pub fn symbol_at_rank(&self, rank: u32) -> Option<&str> {
        self.by_rank
            .get(&rank)
            .map(|&idx| self.records[idx].symbol.as_str())
    }

    /// Ranked genes, best first; equal ranks keep input order.
    pub fn top_by_rank(&self, n: usize) -> Vec<&GeneRecord> {
        let mut ranked: Vec<&GeneRecord> = self.records.iter().filter(|r| r.is_ranked()).collect();
        ranked.sort_by_key(|r| r.rank);
        ranked.truncate(n);
        ranked
    }

    /// Ranked genes with `rank <= max_rank` carrying any of `labels`, best first.
    pub fn ranked_with_labels(&self, max_rank: u32, labels: &[Label]) -> Vec<&GeneRecord> {
        let mut hits: Vec<&GeneRecord> = self
            .records
            .iter()
            .filter(|r| r.is_ranked() && r.rank <= max_rank)
            .filter(|r| labels.iter().any(|l| r.has_label(l)))
            .collect();
        hits.sort_by_key(|r| r.rank);
        hits
    }

    /// Percentile denominator chosen by the session's [`TotalCount`] policy.
    pub fn size(&self) -> u32 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ranked_len(&self) -> usize {
        self.ranked_len
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/index/tests.rs"]
mod tests;
