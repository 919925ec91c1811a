use chrono::NaiveDate;
use tracing::instrument;

use crate::api;
use crate::config::ApiConfig;
use crate::error::Result;
use crate::model::*;

/// The main entry point for fetching fixtures.
///
/// `FootballClient` wraps a [`reqwest::Client`] together with the
/// [`ApiConfig`] it authenticates with, and returns fixtures already
/// normalized into [`MatchRecord`]s ready for [`select_matches`](crate::select_matches).
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> matchfeed::Result<()> {
/// use matchfeed::{select_matches, ApiConfig, FilterCriteria, FootballClient};
///
/// let client = FootballClient::new(ApiConfig::from_env()?);
/// let matches = client.get_live_matches(None).await?;
/// let selection = select_matches(&matches, &FilterCriteria::default());
/// println!("{} live", selection.live_count);
/// # Ok(())
/// # }
/// ```
pub struct FootballClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl FootballClient {
    /// Create a new client with default HTTP settings.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure proxies, headers, etc.
    pub fn with_client(client: reqwest::Client, config: ApiConfig) -> Self {
        Self {
            http: client,
            config,
        }
    }

    /// The settings this client authenticates with.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetch the fixtures matching an arbitrary query.
    #[instrument(skip(self))]
    pub async fn get_fixtures(&self, query: &MatchQuery) -> Result<Vec<MatchRecord>> {
        api::fixtures::get_fixtures(&self.http, &self.config, query).await
    }

    /// Fetch fixtures currently in play, optionally for one league.
    #[instrument(skip(self))]
    pub async fn get_live_matches(&self, league_id: Option<u32>) -> Result<Vec<MatchRecord>> {
        let mut query = MatchQuery::live();
        query.league_id = league_id;
        self.get_fixtures(&query).await
    }

    /// Fetch fixtures kicking off on `date`.
    #[instrument(skip(self))]
    pub async fn get_matches_by_date(
        &self,
        date: NaiveDate,
        league_id: Option<u32>,
        team_id: Option<u32>,
        season: Option<u16>,
    ) -> Result<Vec<MatchRecord>> {
        let query = MatchQuery {
            day: MatchDay::On(date),
            league_id,
            team_id,
            season,
            ..MatchQuery::default()
        };
        self.get_fixtures(&query).await
    }

    /// Fetch a league's fixtures for a season.
    #[instrument(skip(self))]
    pub async fn get_matches_by_league(
        &self,
        league_id: u32,
        season: u16,
    ) -> Result<Vec<MatchRecord>> {
        let query = MatchQuery::default().league(league_id).season(season);
        self.get_fixtures(&query).await
    }

    /// Fetch a team's fixtures, optionally limited to one season.
    #[instrument(skip(self))]
    pub async fn get_matches_by_team(
        &self,
        team_id: u32,
        season: Option<u16>,
    ) -> Result<Vec<MatchRecord>> {
        let mut query = MatchQuery::default().team(team_id);
        query.season = season;
        self.get_fixtures(&query).await
    }

    /// Fetch per-team statistics (shots, possession, cards, ...) for a fixture.
    #[instrument(skip(self))]
    pub async fn get_match_statistics(&self, fixture_id: u32) -> Result<Vec<TeamStatistics>> {
        api::statistics::get_match_statistics(&self.http, &self.config, fixture_id).await
    }

    /// Fetch the teams taking part in a league season.
    #[instrument(skip(self))]
    pub async fn get_teams_by_league(&self, league_id: u32, season: u16) -> Result<Vec<Team>> {
        api::teams::get_teams_by_league(&self.http, &self.config, league_id, season).await
    }

    /// Fetch a single competition by id.
    #[instrument(skip(self))]
    pub async fn get_league(&self, league_id: u32) -> Result<Option<League>> {
        api::leagues::get_league(&self.http, &self.config, league_id).await
    }

    /// Fetch the catalog competitions, most important first.
    #[instrument(skip(self))]
    pub async fn get_leagues(&self) -> Result<Vec<League>> {
        api::leagues::get_leagues(&self.http, &self.config).await
    }
}
