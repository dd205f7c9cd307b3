use ::scraper::{Html, Selector};
use itertools::Itertools;
use tracing::debug;

use crate::client::BbrClient;
use crate::error::{BbrError, Result};
use crate::model::LeaderEntry;
use crate::name::BASE_URL;
use crate::scraper::cell_text;

/// The leaderboard lists every qualifying player; only the top slice feeds
/// the roster.
const MAX_LEADERS: usize = 200;

pub(crate) async fn get_ppg_leaders(client: &BbrClient) -> Result<Vec<LeaderEntry>> {
    let url = format!("{BASE_URL}/leaders/pts_per_g_career.html");
    let document = client.get_document(&url).await?;
    let mut leaders = parse_leaders(&document)?;
    leaders.truncate(MAX_LEADERS);
    debug!(count = leaders.len(), "parsed career scoring leaders");
    Ok(leaders)
}

pub(crate) fn parse_leaders(document: &Html) -> Result<Vec<LeaderEntry>> {
    let table_selector = Selector::parse("table")?;
    let table = document
        .select(&table_selector)
        .next()
        .ok_or(BbrError::ElementNotFound {
            context: "career leaders table",
        })?;

    let row_selector = Selector::parse("tr")?;
    let cell_selector = Selector::parse("th, td")?;

    // First row is the header; rows without rank/player/value cells or with
    // a non-numeric value column are leaderboard chrome and get skipped.
    let leaders = table
        .select(&row_selector)
        .skip(1)
        .filter_map(|row| {
            let (rank, player, value) = row
                .select(&cell_selector)
                .map(|cell| cell_text(&cell))
                .next_tuple()?;
            let ppg = value.parse().ok()?;
            Some(LeaderEntry { rank, player, ppg })
        })
        .collect();
    Ok(leaders)
}
