use serde::Serialize;

use crate::model::StatColumn;
use crate::score;

/// Career statistics for one player, keyed by statistic name.
///
/// A statistic that could not be extracted stays at `0.0`: unknown values
/// contribute nothing to the score instead of failing the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CareerStats {
    pub points: f64,
    pub assists: f64,
    pub rebounds: f64,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
    pub fg_pct: f64,
    pub ws_per_48: f64,
    pub bpm: f64,
}

impl CareerStats {
    pub fn get(&self, column: StatColumn) -> f64 {
        match column {
            StatColumn::Points => self.points,
            StatColumn::Assists => self.assists,
            StatColumn::Rebounds => self.rebounds,
            StatColumn::Steals => self.steals,
            StatColumn::Blocks => self.blocks,
            StatColumn::Turnovers => self.turnovers,
            StatColumn::FieldGoalPct => self.fg_pct,
            StatColumn::WinSharesPer48 => self.ws_per_48,
            StatColumn::BoxPlusMinus => self.bpm,
        }
    }

    pub fn set(&mut self, column: StatColumn, value: f64) {
        match column {
            StatColumn::Points => self.points = value,
            StatColumn::Assists => self.assists = value,
            StatColumn::Rebounds => self.rebounds = value,
            StatColumn::Steals => self.steals = value,
            StatColumn::Blocks => self.blocks = value,
            StatColumn::Turnovers => self.turnovers = value,
            StatColumn::FieldGoalPct => self.fg_pct = value,
            StatColumn::WinSharesPer48 => self.ws_per_48 = value,
            StatColumn::BoxPlusMinus => self.bpm = value,
        }
    }
}

/// One fully processed player: name, extracted stats and derived JBR score.
///
/// The score is computed once at construction and not recomputed afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerRecord {
    pub name: String,
    pub stats: CareerStats,
    pub score: f64,
}

impl PlayerRecord {
    pub fn new(name: impl Into<String>, stats: CareerStats) -> Self {
        let score = score::jbr_score(&stats);
        Self {
            name: name.into(),
            stats,
            score,
        }
    }
}
