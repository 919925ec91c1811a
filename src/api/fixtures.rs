use std::collections::HashSet;

use chrono::DateTime;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::api;
use crate::config::ApiConfig;
use crate::error::{FeedError, Result};
use crate::model::{
    LeagueRef, MatchQuery, MatchRecord, MatchStatus, Score, ScoreLine, Sport, TeamRef, Venue,
};

#[derive(Debug, Deserialize)]
pub(crate) struct RawFixtureItem {
    fixture: RawFixture,
    league: RawLeague,
    teams: RawTeams,
    #[serde(default)]
    goals: RawScoreLine,
    #[serde(default)]
    score: RawScore,
}

#[derive(Debug, Deserialize)]
struct RawFixture {
    id: u32,
    date: String,
    status: RawStatus,
    venue: Option<RawVenue>,
    referee: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawStatus {
    short: String,
}

#[derive(Debug, Deserialize)]
struct RawVenue {
    name: Option<String>,
    city: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawLeague {
    id: u32,
    name: String,
    country: Option<String>,
    logo: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawTeams {
    home: RawSide,
    away: RawSide,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSide {
    pub(crate) id: u32,
    pub(crate) name: String,
}

impl From<RawSide> for TeamRef {
    fn from(side: RawSide) -> Self {
        Self {
            id: side.id,
            name: side.name,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawScore {
    #[serde(default)]
    halftime: RawScoreLine,
    #[serde(default)]
    fulltime: RawScoreLine,
}

#[derive(Debug, Default, Deserialize)]
struct RawScoreLine {
    home: Option<u8>,
    away: Option<u8>,
}

impl From<RawScoreLine> for ScoreLine {
    fn from(line: RawScoreLine) -> Self {
        Self {
            home: line.home,
            away: line.away,
        }
    }
}

impl TryFrom<RawFixtureItem> for MatchRecord {
    type Error = FeedError;

    fn try_from(item: RawFixtureItem) -> Result<Self> {
        let kickoff = DateTime::parse_from_rfc3339(&item.fixture.date)?;
        let status = MatchStatus::from_code(&item.fixture.status.short);
        let venue = item
            .fixture
            .venue
            .filter(|v| v.name.is_some() || v.city.is_some())
            .map(|v| Venue {
                name: v.name.unwrap_or_default(),
                city: v.city.unwrap_or_default(),
            });
        let referee = item.fixture.referee.filter(|r| !r.trim().is_empty());

        Ok(Self {
            id: item.fixture.id,
            league: LeagueRef {
                id: item.league.id,
                name: item.league.name,
                country: item.league.country.unwrap_or_default(),
                logo_url: item.league.logo.unwrap_or_default(),
            },
            home_team: item.teams.home.into(),
            away_team: item.teams.away.into(),
            status,
            status_code: item.fixture.status.short,
            kickoff,
            score: Score {
                goals: item.goals.into(),
                halftime: item.score.halftime.into(),
                fulltime: item.score.fulltime.into(),
            },
            venue,
            referee,
        })
    }
}

#[instrument(skip(client, config))]
pub(crate) async fn get_fixtures(
    client: &reqwest::Client,
    config: &ApiConfig,
    query: &MatchQuery,
) -> Result<Vec<MatchRecord>> {
    if query.sport != Sport::Football {
        return Err(FeedError::UnsupportedSport(query.sport));
    }
    let items: Vec<serde_json::Value> =
        api::get_json(client, config, "/fixtures", &query.params()).await?;
    let fetched = items.len();
    let matches = normalize_fixtures(items);
    debug!(fetched, count = matches.len(), "parsed fixtures");
    Ok(matches)
}

/// Convert raw fixtures one by one, dropping the ones that cannot be trusted.
pub(crate) fn normalize_fixtures(items: Vec<serde_json::Value>) -> Vec<MatchRecord> {
    let mut seen = HashSet::new();
    let mut matches = Vec::with_capacity(items.len());
    for item in items {
        let id = item.pointer("/fixture/id").and_then(|v| v.as_u64());
        let record = serde_json::from_value::<RawFixtureItem>(item)
            .map_err(FeedError::from)
            .and_then(MatchRecord::try_from);
        match record {
            Ok(record) if seen.insert(record.id) => matches.push(record),
            Ok(_) => warn!(id, "skipping duplicate fixture"),
            Err(e) => warn!(id, error = %e, "skipping unparsable fixture"),
        }
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURES: &str = r#"[
        {
            "fixture": {
                "id": 1002,
                "referee": "Alejandro Hernández",
                "date": "2023-05-15T19:00:00+00:00",
                "status": {"short": "FT", "long": "Match Finished"},
                "venue": {"name": "Camp Nou", "city": "Barcelona"}
            },
            "league": {"id": 140, "name": "La Liga", "country": "Spain",
                       "logo": "https://media.api-sports.io/football/leagues/140.png"},
            "teams": {
                "home": {"id": 529, "name": "Barcelona", "logo": "x"},
                "away": {"id": 541, "name": "Real Madrid", "logo": "x"}
            },
            "goals": {"home": 3, "away": 2},
            "score": {
                "halftime": {"home": 2, "away": 1},
                "fulltime": {"home": 3, "away": 2},
                "extratime": {"home": null, "away": null}
            }
        },
        {
            "fixture": {
                "id": 1005,
                "referee": null,
                "date": "2023-05-18T20:00:00-03:00",
                "status": {"short": "NS", "long": "Not Started"},
                "venue": {"name": null, "city": null}
            },
            "league": {"id": 71, "name": "Brasileirão"},
            "teams": {
                "home": {"id": 118, "name": "Flamengo"},
                "away": {"id": 119, "name": "Palmeiras"}
            },
            "goals": {"home": null, "away": null}
        },
        {
            "fixture": {"id": 1006, "date": "soon", "status": {"short": "NS"}},
            "league": {"id": 71, "name": "Brasileirão"},
            "teams": {
                "home": {"id": 121, "name": "Palmeiras"},
                "away": {"id": 126, "name": "São Paulo"}
            }
        },
        {
            "fixture": {"id": 1007, "date": "2023-05-19T18:00:00+00:00", "status": {"short": "HT"}},
            "league": {"id": 135, "name": "Serie A"},
            "teams": {
                "home": {"id": 489, "name": "AC Milan"},
                "away": {"id": 496, "name": "Juventus"}
            },
            "goals": {"home": 0, "away": 1},
            "score": {"halftime": {"home": 0, "away": 1}, "fulltime": {"home": null, "away": null}}
        },
        {
            "fixture": {"id": 1002, "date": "2023-05-15T19:00:00+00:00", "status": {"short": "FT"}},
            "league": {"id": 140, "name": "La Liga"},
            "teams": {
                "home": {"id": 529, "name": "Barcelona"},
                "away": {"id": 541, "name": "Real Madrid"}
            }
        }
    ]"#;

    fn parse(body: &str) -> Vec<MatchRecord> {
        let items: Vec<serde_json::Value> = serde_json::from_str(body).unwrap();
        normalize_fixtures(items)
    }

    #[test]
    fn test_normalize_fixtures() {
        let matches = parse(FIXTURES);
        let ids: Vec<u32> = matches.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1002, 1005, 1007]);

        let clasico = &matches[0];
        assert_eq!(clasico.league.name, "La Liga");
        assert_eq!(clasico.league.country, "Spain");
        assert!(clasico.league.logo_url.ends_with("140.png"));
        assert_eq!(clasico.home_team.name, "Barcelona");
        assert_eq!(clasico.away_team.id, 541);
        assert_eq!(clasico.status, MatchStatus::Finished);
        assert_eq!(clasico.status_code, "FT");
        assert_eq!(clasico.referee.as_deref(), Some("Alejandro Hernández"));
        assert_eq!(clasico.venue.as_ref().map(|v| v.city.as_str()), Some("Barcelona"));
    }

    #[test]
    fn test_score_lines() {
        let matches = parse(FIXTURES);
        assert_eq!(
            matches[0].score,
            Score {
                goals: ScoreLine::new(3, 2),
                halftime: ScoreLine::new(2, 1),
                fulltime: ScoreLine::new(3, 2),
            }
        );

        let milan = &matches[2];
        assert_eq!(milan.score.goals, ScoreLine::new(0, 1));
        assert_eq!(milan.score.halftime, ScoreLine::new(0, 1));
        assert_eq!(milan.score.fulltime, ScoreLine::default());
    }

    #[test]
    fn test_kickoff_keeps_offset() {
        let matches = parse(FIXTURES);
        let flamengo = &matches[1];
        assert_eq!(flamengo.kickoff.to_rfc3339(), "2023-05-18T20:00:00-03:00");
        assert_eq!(flamengo.status, MatchStatus::Scheduled);
        assert_eq!(flamengo.score, Score::default());
        assert!(flamengo.venue.is_none());
        assert!(flamengo.referee.is_none());
        assert_eq!(flamengo.league.country, "");
    }

    #[test]
    fn test_halftime_is_live() {
        let matches = parse(FIXTURES);
        assert!(matches[2].is_live());
        assert_eq!(matches[2].status_code, "HT");
    }

    #[test]
    fn test_malformed_item_does_not_drop_the_batch() {
        let body = r#"[
            {
                "fixture": {"id": 2001, "date": "2024-03-12T20:00:00+00:00", "status": {"short": "NS"}},
                "league": {"id": 2, "name": "Champions League"},
                "teams": {
                    "home": {"id": null, "name": "Winner QF1"},
                    "away": {"id": null, "name": "Winner QF2"}
                }
            },
            {"fixture": {"id": 2002}},
            "not even an object",
            {
                "fixture": {"id": 2003, "date": "2024-03-12T20:00:00+00:00", "status": {"short": "NS"}},
                "league": {"id": 2, "name": "Champions League"},
                "teams": {
                    "home": {"id": 50, "name": "Manchester City"},
                    "away": {"id": 541, "name": "Real Madrid"}
                }
            }
        ]"#;
        let matches = parse(body);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, 2003);
        assert_eq!(matches[0].home_team.name, "Manchester City");
    }

    #[tokio::test]
    async fn test_basketball_is_rejected_before_any_request() {
        let client = reqwest::Client::new();
        let config = ApiConfig::new("unused");
        let query = MatchQuery::live().sport(Sport::Basketball);
        let err = get_fixtures(&client, &config, &query).await.unwrap_err();
        assert!(matches!(err, FeedError::UnsupportedSport(Sport::Basketball)));
    }
}
