//! Rankings workbook export.

use std::path::Path;

use rust_xlsxwriter::Workbook;
use tracing::debug;

use crate::error::Result;
use crate::model::{RankingTable, StatColumn};

/// Spreadsheet header: player name, the nine stat labels, then the score.
pub fn header_labels() -> Vec<String> {
    let mut labels = vec!["Name".to_string()];
    labels.extend(StatColumn::ALL.iter().map(|c| c.to_string()));
    labels.push("JBR".to_string());
    labels
}

/// Write the ranking table to an XLSX workbook: one header row, then one row
/// per player in table order. Callers sort the table before exporting; rows
/// are written exactly as given.
pub fn write_rankings(path: &Path, table: &RankingTable) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Rankings")?;

    for (col, label) in header_labels().iter().enumerate() {
        sheet.write_string(0, col as u16, label)?;
    }

    for (i, record) in table.records.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, &record.name)?;
        for (j, column) in StatColumn::ALL.iter().enumerate() {
            sheet.write_number(row, (j + 1) as u16, record.stats.get(*column))?;
        }
        sheet.write_number(row, (StatColumn::ALL.len() + 1) as u16, record.score)?;
    }

    workbook.save(path)?;
    debug!(rows = table.len(), path = %path.display(), "saved rankings workbook");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CareerStats, PlayerRecord};
    use std::fs;

    #[test]
    fn header_has_name_stats_and_score() {
        let labels = header_labels();
        assert_eq!(labels.len(), 11);
        assert_eq!(labels[0], "Name");
        assert_eq!(labels[10], "JBR");
        assert_eq!(labels[1], "PPG");
        assert_eq!(labels[9], "BPM");
    }

    #[test]
    fn writes_a_workbook_file() {
        let path = std::env::temp_dir().join("bbr_scraper_rankings_test.xlsx");

        let mut table = RankingTable::default();
        table.push(PlayerRecord::new(
            "Killian Hayes",
            CareerStats {
                points: 10.0,
                assists: 5.0,
                ..CareerStats::default()
            },
        ));
        table.sort_by_score();

        write_rankings(&path, &table).unwrap();
        assert!(path.exists());

        fs::remove_file(&path).unwrap();
    }
}
