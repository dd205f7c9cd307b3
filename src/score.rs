//! The JBR composite score: a fixed dot product over the nine tracked
//! statistics. No normalization or clamping is applied; missing statistics
//! enter as `0.0` and contribute nothing.

use crate::model::{CareerStats, StatColumn};

/// Weighted composite score for one player's career statistics.
pub fn jbr_score(stats: &CareerStats) -> f64 {
    StatColumn::ALL
        .iter()
        .map(|&column| stats.get(column) * column.weight())
        .sum()
}
