use crate::cache::StatCache;
use crate::client::{ApiResult, FangraphsClient};
use crate::teams::{self, Season, TeamKey};
use crate::{StatKind, TeamStats};
use log::{debug, info, warn};
use std::error::Error;

/// Cache-first access to team leaderboards.
///
/// Past seasons are served from disk when a readable entry exists. The current
/// season is always refetched, since its numbers move daily. Whatever is fetched
/// is written back; a failed write is logged and otherwise ignored.
#[derive(Debug, Clone)]
pub struct StatSource {
    client: FangraphsClient,
    cache: StatCache,
    current_year: i32,
}

impl StatSource {
    pub fn new(client: FangraphsClient, cache: StatCache) -> Self {
        Self { client, cache, current_year: teams::current_year() }
    }

    /// Pin "now" instead of reading the clock.
    pub fn with_current_year(mut self, current_year: i32) -> Self {
        self.current_year = current_year;
        self
    }

    pub fn cache(&self) -> &StatCache {
        &self.cache
    }

    pub async fn get_team_stats(&self, team: TeamKey, season: Season) -> ApiResult<TeamStats> {
        if season.is_current(self.current_year) {
            debug!("{team} {season} is the current season, bypassing cache");
        } else {
            match self.cache.read(team, season) {
                Ok(stats) => {
                    info!("loaded {team} {season} from {}", self.cache.dir().display());
                    return Ok(stats);
                }
                Err(e) => debug!("cache miss for {team} {season}: {e}"),
            }
        }

        let batting = self.client.fetch_table(team, season, StatKind::Batting).await?;
        let fielding = self.client.fetch_table(team, season, StatKind::Fielding).await?;
        let stats = TeamStats { batting, fielding };
        info!(
            "fetched {team} {season}: {} batting rows, {} fielding rows",
            stats.batting.rows.len(),
            stats.fielding.rows.len()
        );

        if let Err(e) = self.cache.write(team, season, &stats) {
            match e.source() {
                Some(cause) => warn!("{e}: {cause}"),
                None => warn!("{e}"),
            }
        }
        Ok(stats)
    }
}
