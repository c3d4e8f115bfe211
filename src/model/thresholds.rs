/// Number of STRING v11 proteins the offline ranking was computed over.
pub const STRING_V11_PROTEINS: u32 = 18_349;

/// Novel IEI genes ranked strictly below this get the high-rank note.
pub const NOVEL_HIGH_RANK_LIMIT: u32 = 500;

pub const DEFAULT_NEIGHBOR_WINDOW: u32 = 2;
pub const QUICK_PICK_COUNT: usize = 10;
pub const DEFAULT_SCAN_DEPTH: u32 = 100;

/// Denominator used for percentiles and neighbor bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalCount {
    Fixed(u32),
    /// Number of loaded entries with rank > 0.
    Live,
}

impl Default for TotalCount {
    fn default() -> Self {
        TotalCount::Fixed(STRING_V11_PROTEINS)
    }
}

impl TotalCount {
    pub fn resolve(self, ranked_len: usize) -> u32 {
        match self {
            TotalCount::Fixed(n) => n,
            TotalCount::Live => u32::try_from(ranked_len).unwrap_or(u32::MAX),
        }
    }
}
