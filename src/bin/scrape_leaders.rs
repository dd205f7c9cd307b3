//! Build the roster CSV from the career points-per-game leaderboard.

use std::path::Path;

use bbr_scraper::{roster, BbrClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "career_ppg_leaders.csv".to_string());

    let client = BbrClient::new();

    println!("Fetching career PPG leaders...");
    let leaders = client.get_ppg_leaders().await?;

    println!("Top {} players by career PPG:", leaders.len());
    for entry in leaders.iter().take(10) {
        println!("{:>4} {:<24} {:>6.2}", entry.rank, entry.player, entry.ppg);
    }

    roster::write_leaders_csv(Path::new(&output), &leaders)?;
    println!("Results saved to {output}");

    Ok(())
}
