use serde::Serialize;

use crate::error::BbrError;
use crate::model::PlayerRecord;

/// Outcome of one batch run: the ranked players plus everyone who had to be
/// skipped, so callers can report failures without the batch aborting.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RankReport {
    pub rankings: RankingTable,
    pub skipped: Vec<SkippedPlayer>,
}

/// Ordered collection of processed players. Duplicate names are not
/// deduplicated; each roster row produces at most one record.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RankingTable {
    pub records: Vec<PlayerRecord>,
}

impl RankingTable {
    pub fn push(&mut self, record: PlayerRecord) {
        self.records.push(record);
    }

    /// Sort descending by score. The sort is stable, so players with exactly
    /// tied scores keep their roster order.
    pub fn sort_by_score(&mut self) {
        self.records.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A roster entry that produced no ranking row, with the reason why.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedPlayer {
    pub name: String,
    pub reason: SkipReason,
    pub detail: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
pub enum SkipReason {
    /// The display name could not be turned into a page slug.
    #[strum(serialize = "invalid name")]
    InvalidName,
    /// The player page could not be fetched (HTTP error or non-2xx status).
    #[strum(serialize = "page unavailable")]
    PageUnavailable,
}

impl From<&BbrError> for SkipReason {
    fn from(err: &BbrError) -> Self {
        match err {
            BbrError::NameParse { .. } => SkipReason::InvalidName,
            _ => SkipReason::PageUnavailable,
        }
    }
}
