use ::scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::client::BbrClient;
use crate::error::Result;
use crate::model::{CareerStats, PlayerRecord, StatColumn};
use crate::name;
use crate::scraper::cell_text;

pub(crate) async fn get_career_stats(client: &BbrClient, player_name: &str) -> Result<PlayerRecord> {
    let url = name::player_url(player_name)?;
    let document = client.get_document(&url).await?;
    let stats = parse_career_stats(&document)?;
    let record = PlayerRecord::new(player_name, stats);
    debug!(player = player_name, score = record.score, "scored player");
    Ok(record)
}

pub(crate) fn parse_career_stats(document: &Html) -> Result<CareerStats> {
    let mut stats = CareerStats::default();
    for column in StatColumn::ALL {
        stats.set(column, parse_stat(document, column)?);
    }
    Ok(stats)
}

/// Pull one statistic out of the document, defaulting to `0.0` whenever the
/// table, row or cell is missing or non-numeric. Missing data is not an
/// error here: a zero contributes nothing to the score.
///
/// The footer row carries the career aggregate and is tried first. Not every
/// page has one, so the last body row (the most recent season) stands in as
/// an approximation of career form. That substitution is a heuristic, not
/// equivalent data.
pub(crate) fn parse_stat(document: &Html, column: StatColumn) -> Result<f64> {
    let table_css = format!("table#{}", column.table_id());
    let table_selector = Selector::parse(&table_css)?;
    let table = match document.select(&table_selector).next() {
        Some(table) => table,
        None => {
            debug!(table = column.table_id(), "table not found, defaulting to 0");
            return Ok(0.0);
        }
    };

    let cell_css = format!("td[data-stat=\"{}\"]", column.data_stat());
    let cell_selector = Selector::parse(&cell_css)?;

    let footer_row_selector = Selector::parse("tfoot tr")?;
    if let Some(row) = table.select(&footer_row_selector).next() {
        if let Some(value) = row_stat(&row, &cell_selector) {
            return Ok(value);
        }
        debug!(
            table = column.table_id(),
            field = column.data_stat(),
            "career aggregate missing, falling back to last season row"
        );
    }

    let body_row_selector = Selector::parse("tbody tr")?;
    if let Some(row) = table.select(&body_row_selector).last() {
        if let Some(value) = row_stat(&row, &cell_selector) {
            return Ok(value);
        }
    }

    debug!(
        table = column.table_id(),
        field = column.data_stat(),
        "no usable cell, defaulting to 0"
    );
    Ok(0.0)
}

fn row_stat(row: &ElementRef, cell_selector: &Selector) -> Option<f64> {
    let cell = row.select(cell_selector).next()?;
    let text = cell_text(&cell);
    if text.is_empty() {
        return None;
    }
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_PAGE: &str = r#"
    <html><body>
    <table id="per_game_stats">
      <tbody>
        <tr><th data-stat="season">2022-23</th><td data-stat="pts_per_g">10.3</td><td data-stat="ast_per_g">6.2</td><td data-stat="trb_per_g">3.1</td><td data-stat="stl_per_g">1.2</td><td data-stat="blk_per_g">0.4</td><td data-stat="tov_per_g">2.8</td><td data-stat="fg_pct">.415</td></tr>
        <tr><th data-stat="season">2023-24</th><td data-stat="pts_per_g">12.1</td><td data-stat="ast_per_g">5.5</td><td data-stat="trb_per_g">2.8</td><td data-stat="stl_per_g">1.0</td><td data-stat="blk_per_g">0.3</td><td data-stat="tov_per_g">2.2</td><td data-stat="fg_pct">.442</td></tr>
      </tbody>
      <tfoot>
        <tr><th data-stat="season">Career</th><td data-stat="pts_per_g">11.2</td><td data-stat="ast_per_g">5.9</td><td data-stat="trb_per_g">2.9</td><td data-stat="stl_per_g">1.1</td><td data-stat="blk_per_g">0.4</td><td data-stat="tov_per_g">2.5</td><td data-stat="fg_pct">.428</td></tr>
      </tfoot>
    </table>
    <table id="advanced">
      <tbody>
        <tr><th data-stat="season">2022-23</th><td data-stat="ws_per_48">0.021</td><td data-stat="bpm">-2.4</td></tr>
        <tr><th data-stat="season">2023-24</th><td data-stat="ws_per_48">0.050</td><td data-stat="bpm">-1.0</td></tr>
      </tbody>
    </table>
    </body></html>"#;

    #[test]
    fn footer_aggregate_wins_over_body_rows() {
        let document = Html::parse_document(FULL_PAGE);
        assert_eq!(parse_stat(&document, StatColumn::Points).unwrap(), 11.2);
        assert_eq!(parse_stat(&document, StatColumn::Assists).unwrap(), 5.9);
        assert_eq!(
            parse_stat(&document, StatColumn::FieldGoalPct).unwrap(),
            0.428
        );
    }

    #[test]
    fn missing_footer_falls_back_to_last_body_row() {
        let document = Html::parse_document(FULL_PAGE);
        assert_eq!(
            parse_stat(&document, StatColumn::WinSharesPer48).unwrap(),
            0.050
        );
        assert_eq!(parse_stat(&document, StatColumn::BoxPlusMinus).unwrap(), -1.0);
    }

    #[test]
    fn absent_table_defaults_to_zero() {
        let document = Html::parse_document("<html><body><p>no tables</p></body></html>");
        for column in StatColumn::ALL {
            assert_eq!(parse_stat(&document, column).unwrap(), 0.0);
        }
    }

    #[test]
    fn empty_footer_cell_falls_back_to_body() {
        let page = r#"
        <table id="per_game_stats">
          <tbody>
            <tr><td data-stat="pts_per_g">12.1</td></tr>
          </tbody>
          <tfoot>
            <tr><td data-stat="pts_per_g">  </td></tr>
          </tfoot>
        </table>"#;
        let document = Html::parse_document(page);
        assert_eq!(parse_stat(&document, StatColumn::Points).unwrap(), 12.1);
    }

    #[test]
    fn non_numeric_footer_cell_falls_back_to_body() {
        let page = r#"
        <table id="per_game_stats">
          <tbody>
            <tr><td data-stat="pts_per_g">9.7</td></tr>
          </tbody>
          <tfoot>
            <tr><td data-stat="pts_per_g">&mdash;</td></tr>
          </tfoot>
        </table>"#;
        let document = Html::parse_document(page);
        assert_eq!(parse_stat(&document, StatColumn::Points).unwrap(), 9.7);
    }

    #[test]
    fn cell_absent_everywhere_defaults_to_zero() {
        let page = r#"
        <table id="per_game_stats">
          <tbody>
            <tr><td data-stat="pts_per_g">9.7</td></tr>
          </tbody>
          <tfoot>
            <tr><td data-stat="pts_per_g">9.9</td></tr>
          </tfoot>
        </table>"#;
        let document = Html::parse_document(page);
        assert_eq!(parse_stat(&document, StatColumn::Assists).unwrap(), 0.0);
    }

    #[test]
    fn full_page_parses_into_career_stats() {
        let document = Html::parse_document(FULL_PAGE);
        let stats = parse_career_stats(&document).unwrap();
        assert_eq!(
            stats,
            CareerStats {
                points: 11.2,
                assists: 5.9,
                rebounds: 2.9,
                steals: 1.1,
                blocks: 0.4,
                turnovers: 2.5,
                fg_pct: 0.428,
                ws_per_48: 0.050,
                bpm: -1.0,
            }
        );
    }
}
