use serde::{Deserialize, Serialize};

/// One row of the career points-per-game leaderboard.
///
/// The rank is kept as displayed (e.g. `"1."`, ties as `"5. (tie)"`) and the
/// player name as printed, asterisk honorifics included; the name normalizer
/// deals with those downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderEntry {
    #[serde(rename = "Rank")]
    pub rank: String,
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "PPG")]
    pub ppg: f64,
}
