use std::time::{Duration, Instant};

use ::scraper::Html;
use tokio::sync::Mutex;
use tokio::time::sleep;
use tracing::{debug, instrument, warn};

use crate::error::{BbrError, Result};
use crate::model::*;
use crate::scraper;

/// basketball-reference rejects requests without a browser User-Agent.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Flat minimum delay between page fetches. This is unconditional pacing to
/// stay under the site's rate limit, not a backoff.
const REQUEST_PACING: Duration = Duration::from_secs(3);

/// The main entry point for scraping basketball-reference.com.
///
/// `BbrClient` wraps a [`reqwest::Client`] and exposes methods to fetch the
/// career scoring leaderboard, fetch and score a single player, and rank a
/// whole roster.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> bbr_scraper::Result<()> {
/// use bbr_scraper::BbrClient;
///
/// let client = BbrClient::new();
/// let record = client.get_career_stats("Killian Hayes").await?;
/// println!("{} scored {:.3}", record.name, record.score);
/// # Ok(())
/// # }
/// ```
pub struct BbrClient {
    http: reqwest::Client,
    pacing: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl BbrClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            http: client,
            pacing: REQUEST_PACING,
            last_request: Mutex::new(None),
        }
    }

    /// Override the minimum delay between requests.
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    /// Fetch the top 200 career points-per-game leaders.
    #[instrument(skip(self))]
    pub async fn get_ppg_leaders(&self) -> Result<Vec<LeaderEntry>> {
        scraper::leaders::get_ppg_leaders(self).await
    }

    /// Fetch one player's career page and score their extracted statistics.
    #[instrument(skip(self))]
    pub async fn get_career_stats(&self, name: &str) -> Result<PlayerRecord> {
        scraper::career::get_career_stats(self, name).await
    }

    /// Process a roster strictly sequentially: fetch, extract and score each
    /// player, then sort the table descending by score.
    ///
    /// A player whose name cannot be parsed or whose page cannot be fetched
    /// is logged and reported as skipped; the batch itself never aborts.
    #[instrument(skip_all, fields(players = names.len()))]
    pub async fn rank_players(&self, names: &[String]) -> RankReport {
        let mut rankings = RankingTable::default();
        let mut skipped = Vec::new();

        for name in names {
            match self.get_career_stats(name).await {
                Ok(record) => rankings.push(record),
                Err(err) => {
                    warn!(player = %name, error = %err, "skipping player");
                    skipped.push(SkippedPlayer {
                        name: name.clone(),
                        reason: SkipReason::from(&err),
                        detail: err.to_string(),
                    });
                }
            }
        }

        rankings.sort_by_score();
        RankReport { rankings, skipped }
    }

    /// Fetch a URL and parse the response body as an HTML document, waiting
    /// out the pacing delay first.
    pub(crate) async fn get_document(&self, url: &str) -> Result<Html> {
        self.pace().await;
        debug!(url, "fetching page");

        let response = self
            .http
            .get(url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| BbrError::Http {
                url: url.to_owned(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BbrError::UnexpectedStatus {
                url: url.to_owned(),
                status,
            });
        }

        let body = response.text().await.map_err(|e| BbrError::ResponseBody {
            url: url.to_owned(),
            source: e,
        })?;

        Ok(Html::parse_document(&body))
    }

    async fn pace(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.pacing {
                sleep(self.pacing - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }
}

impl Default for BbrClient {
    fn default() -> Self {
        Self::new()
    }
}
