use serde::Serialize;

/// The nine tracked career statistics, in spreadsheet column order.
///
/// Each variant carries its own source table, source field and score weight,
/// so the stat/weight correspondence is keyed by name rather than by list
/// position and cannot drift silently.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, strum_macros::Display)]
pub enum StatColumn {
    #[strum(serialize = "PPG")]
    Points,
    #[strum(serialize = "APG")]
    Assists,
    #[strum(serialize = "RPG")]
    Rebounds,
    #[strum(serialize = "SPG")]
    Steals,
    #[strum(serialize = "BPG")]
    Blocks,
    #[strum(serialize = "TPG")]
    Turnovers,
    #[strum(serialize = "FG%")]
    FieldGoalPct,
    #[strum(serialize = "WS/48")]
    WinSharesPer48,
    #[strum(serialize = "BPM")]
    BoxPlusMinus,
}

impl StatColumn {
    pub const ALL: [StatColumn; 9] = [
        StatColumn::Points,
        StatColumn::Assists,
        StatColumn::Rebounds,
        StatColumn::Steals,
        StatColumn::Blocks,
        StatColumn::Turnovers,
        StatColumn::FieldGoalPct,
        StatColumn::WinSharesPer48,
        StatColumn::BoxPlusMinus,
    ];

    /// `id` attribute of the table this statistic is read from.
    pub fn table_id(self) -> &'static str {
        match self {
            StatColumn::WinSharesPer48 | StatColumn::BoxPlusMinus => "advanced",
            _ => "per_game_stats",
        }
    }

    /// `data-stat` attribute of the cell within the table.
    pub fn data_stat(self) -> &'static str {
        match self {
            StatColumn::Points => "pts_per_g",
            StatColumn::Assists => "ast_per_g",
            StatColumn::Rebounds => "trb_per_g",
            StatColumn::Steals => "stl_per_g",
            StatColumn::Blocks => "blk_per_g",
            StatColumn::Turnovers => "tov_per_g",
            StatColumn::FieldGoalPct => "fg_pct",
            StatColumn::WinSharesPer48 => "ws_per_48",
            StatColumn::BoxPlusMinus => "bpm",
        }
    }

    /// JBR weight. The model is a fixed linear one; these values are part of
    /// the score definition, not tunable configuration.
    pub fn weight(self) -> f64 {
        match self {
            StatColumn::Points => 4.0,
            StatColumn::Assists => 5.882352941,
            StatColumn::Rebounds => 3.0,
            StatColumn::Steals => 5.555555556,
            StatColumn::Blocks => 5.555555556,
            StatColumn::Turnovers => -5.0,
            StatColumn::FieldGoalPct => 80.0,
            StatColumn::WinSharesPer48 => 350.0,
            StatColumn::BoxPlusMinus => 9.090909091,
        }
    }
}
