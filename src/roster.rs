//! Roster CSV input and leaderboard CSV output.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::model::LeaderEntry;

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "Player")]
    player: String,
}

/// Read player names from any CSV with a `Player` column, in file order.
/// Blank names are dropped; other columns are ignored.
pub fn load_roster(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut names = Vec::new();
    for row in reader.deserialize::<RosterRow>() {
        let row = row?;
        let name = row.player.trim().to_string();
        if !name.is_empty() {
            names.push(name);
        }
    }
    debug!(count = names.len(), path = %path.display(), "loaded roster");
    Ok(names)
}

/// Write leaderboard entries as a `Rank,Player,PPG` roster file.
pub fn write_leaders_csv(path: &Path, leaders: &[LeaderEntry]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for entry in leaders {
        writer.serialize(entry)?;
    }
    writer.flush()?;
    Ok(())
}
