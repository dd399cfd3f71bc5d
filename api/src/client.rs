use crate::leaderboard;
use crate::teams::{Season, TeamKey};
use crate::{DataTable, StatKind};
use log::debug;
use reqwest::Client;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

pub const FANGRAPHS: &str = "https://www.fangraphs.com";
const LEADERBOARD_PATH: &str = "/leaders-legacy.aspx/major-league";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug)]
pub enum ApiError {
    /// Network failure, timeout, or an HTTP status >= 400.
    Fetch(reqwest::Error, String),
    Parse(String),
    CacheRead(PathBuf, csv::Error),
    CacheWrite(PathBuf, csv::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Fetch(_, url) => write!(f, "failed to fetch {url}"),
            ApiError::Parse(msg) => write!(f, "failed to parse leaderboard: {msg}"),
            ApiError::CacheRead(path, _) => write!(f, "failed to read cache file {}", path.display()),
            ApiError::CacheWrite(path, _) => write!(f, "failed to write cache file {}", path.display()),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Fetch(e, _) => Some(e),
            ApiError::CacheRead(_, e) | ApiError::CacheWrite(_, e) => Some(e),
            ApiError::Parse(_) => None,
        }
    }
}

/// FanGraphs legacy leaderboard client.
#[derive(Debug, Clone)]
pub struct FangraphsClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl Default for FangraphsClient {
    fn default() -> Self {
        Self {
            client: Client::builder()
                .user_agent(concat!("pts/", env!("CARGO_PKG_VERSION"), " (terminal points calculator)"))
                .build()
                .unwrap_or_default(),
            base_url: FANGRAPHS.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl FangraphsClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at another host, e.g. a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn leaderboard_url(&self, team: TeamKey, season: Season, kind: StatKind) -> String {
        leaderboard_url(&self.base_url, team, season, kind)
    }

    /// Fetch and parse one leaderboard table.
    pub async fn fetch_table(
        &self,
        team: TeamKey,
        season: Season,
        kind: StatKind,
    ) -> ApiResult<DataTable> {
        let url = self.leaderboard_url(team, season, kind);
        debug!("fetching {} leaderboard for {team} {season}: {url}", kind.label());
        let body = self.get_html(&url).await?;
        let table = leaderboard::parse_table(&body)?;
        debug!(
            "parsed {} {} rows ({} columns)",
            table.rows.len(),
            kind.label(),
            table.headers.len()
        );
        Ok(table)
    }

    async fn get_html(&self, url: &str) -> ApiResult<String> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Fetch(e, url.to_owned()))?;

        response
            .error_for_status()
            .map_err(|e| ApiError::Fetch(e, url.to_owned()))?
            .text()
            .await
            .map_err(|e| ApiError::Fetch(e, url.to_owned()))
    }
}

/// Leaderboard query for one team season. Only qualified players are requested.
pub fn leaderboard_url(base_url: &str, team: TeamKey, season: Season, kind: StatKind) -> String {
    format!(
        "{base_url}{LEADERBOARD_PATH}?pos=all&stats={stats}&lg=all&type=0&season={season}&month=0&season1={season}&ind=0&team={team_id}&qual=1&page=1_100",
        stats = kind.code(),
        team_id = team.id(),
    )
}
