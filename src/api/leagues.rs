use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::api;
use crate::config::ApiConfig;
use crate::error::Result;
use crate::model::{default_football_league_ids, default_leagues, football_league_logo, League, Sport};

/// Pause between consecutive catalog lookups.
const CATALOG_REQUEST_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Deserialize)]
pub(crate) struct RawLeagueItem {
    league: RawLeague,
    country: Option<RawCountry>,
}

#[derive(Debug, Deserialize)]
struct RawLeague {
    id: u32,
    name: String,
    logo: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawCountry {
    name: String,
}

impl From<RawLeagueItem> for League {
    fn from(item: RawLeagueItem) -> Self {
        let id = item.league.id;
        Self {
            id,
            name: item.league.name,
            country: item.country.map(|c| c.name).unwrap_or_default(),
            logo_url: item
                .league
                .logo
                .unwrap_or_else(|| football_league_logo(id)),
            sport: Sport::Football,
        }
    }
}

#[instrument(skip(client, config))]
pub(crate) async fn get_league(
    client: &reqwest::Client,
    config: &ApiConfig,
    league_id: u32,
) -> Result<Option<League>> {
    let params = [("id", league_id.to_string())];
    let items: Vec<RawLeagueItem> = api::get_json(client, config, "/leagues", &params).await?;
    Ok(items.into_iter().next().map(League::from))
}

/// Look up every catalog competition, falling back to the built-in catalog
/// when none of them could be fetched.
#[instrument(skip(client, config))]
pub(crate) async fn get_leagues(client: &reqwest::Client, config: &ApiConfig) -> Result<Vec<League>> {
    let mut leagues = vec![];
    for (i, league_id) in default_football_league_ids().into_iter().enumerate() {
        if i > 0 {
            tokio::time::sleep(CATALOG_REQUEST_DELAY).await;
        }
        match get_league(client, config, league_id).await {
            Ok(Some(league)) => leagues.push(league),
            Ok(None) => warn!(league_id, "league not found"),
            Err(e) => warn!(league_id, error = %e, "skipping league"),
        }
    }

    if leagues.is_empty() {
        warn!("no leagues fetched, using built-in catalog");
        return Ok(default_leagues());
    }
    leagues.extend(
        default_leagues()
            .into_iter()
            .filter(|league| league.sport != Sport::Football),
    );
    debug!(count = leagues.len(), "collected leagues");
    Ok(leagues)
}
