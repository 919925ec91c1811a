use serde::Deserialize;
use tracing::{debug, instrument};

use crate::api;
use crate::api::fixtures::RawSide;
use crate::config::ApiConfig;
use crate::error::Result;
use crate::model::{Statistic, TeamStatistics};

#[derive(Debug, Deserialize)]
pub(crate) struct RawTeamStatistics {
    team: RawSide,
    #[serde(default)]
    statistics: Vec<RawStatistic>,
}

#[derive(Debug, Deserialize)]
struct RawStatistic {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    value: serde_json::Value,
}

impl From<RawTeamStatistics> for TeamStatistics {
    fn from(raw: RawTeamStatistics) -> Self {
        Self {
            team: raw.team.into(),
            statistics: raw
                .statistics
                .into_iter()
                .map(|s| Statistic {
                    kind: s.kind,
                    value: s.value.into(),
                })
                .collect(),
        }
    }
}

#[instrument(skip(client, config))]
pub(crate) async fn get_match_statistics(
    client: &reqwest::Client,
    config: &ApiConfig,
    fixture_id: u32,
) -> Result<Vec<TeamStatistics>> {
    let params = [("fixture", fixture_id.to_string())];
    let items: Vec<RawTeamStatistics> =
        api::get_json(client, config, "/fixtures/statistics", &params).await?;
    let statistics: Vec<TeamStatistics> = items.into_iter().map(TeamStatistics::from).collect();
    debug!(teams = statistics.len(), fixture_id, "parsed match statistics");
    Ok(statistics)
}
