//! Rank every player in a roster CSV by their JBR score.

use std::path::Path;

use bbr_scraper::{export, roster, BbrClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let roster_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "career_ppg_leaders.csv".to_string());
    let output_path = std::env::args()
        .nth(2)
        .unwrap_or_else(|| "jbr_rankings.xlsx".to_string());

    let names = roster::load_roster(Path::new(&roster_path))?;
    println!("Ranking {} players from {roster_path}", names.len());

    let client = BbrClient::new();
    let report = client.rank_players(&names).await;

    for skipped in &report.skipped {
        println!("Skipped {} ({}): {}", skipped.name, skipped.reason, skipped.detail);
    }

    println!("\nTop 10 by JBR:");
    for (i, record) in report.rankings.records.iter().take(10).enumerate() {
        println!("{:>2}. {:<24} {:>10.3}", i + 1, record.name, record.score);
    }

    export::write_rankings(Path::new(&output_path), &report.rankings)?;
    println!("\nSaved {} rankings to {output_path}", report.rankings.len());

    Ok(())
}
