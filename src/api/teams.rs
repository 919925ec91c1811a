use serde::Deserialize;
use tracing::{debug, instrument};

use crate::api;
use crate::config::ApiConfig;
use crate::error::Result;
use crate::model::Team;

#[derive(Debug, Deserialize)]
pub(crate) struct RawTeamItem {
    team: RawTeam,
}

#[derive(Debug, Deserialize)]
struct RawTeam {
    id: u32,
    name: String,
    logo: Option<String>,
    country: Option<String>,
}

impl From<RawTeamItem> for Team {
    fn from(item: RawTeamItem) -> Self {
        Self {
            id: item.team.id,
            name: item.team.name,
            logo_url: item.team.logo.unwrap_or_default(),
            country: item.team.country,
        }
    }
}

#[instrument(skip(client, config))]
pub(crate) async fn get_teams_by_league(
    client: &reqwest::Client,
    config: &ApiConfig,
    league_id: u32,
    season: u16,
) -> Result<Vec<Team>> {
    let params = [
        ("league", league_id.to_string()),
        ("season", season.to_string()),
    ];
    let items: Vec<RawTeamItem> = api::get_json(client, config, "/teams", &params).await?;
    let teams: Vec<Team> = items.into_iter().map(Team::from).collect();
    debug!(count = teams.len(), league_id, season, "parsed teams");
    Ok(teams)
}
