use serde::Serialize;

/// The identity of a competition as carried on a fixture.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LeagueRef {
    pub id: u32,
    pub name: String,
    /// Empty when the source did not say.
    pub country: String,
    pub logo_url: String,
}

/// A competition with the details needed for a league picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct League {
    pub id: u32,
    pub name: String,
    pub country: String,
    pub logo_url: String,
    pub sport: Sport,
}

impl From<&League> for LeagueRef {
    fn from(league: &League) -> Self {
        Self {
            id: league.id,
            name: league.name.clone(),
            country: league.country.clone(),
            logo_url: league.logo_url.clone(),
        }
    }
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum_macros::EnumString,
    strum_macros::Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    #[default]
    Football,
    Basketball,
}

/// Competitions offered when nothing better is known, most important first.
const CATALOG: &[(u32, &str, &str, Sport)] = &[
    (39, "Premier League", "England", Sport::Football),
    (140, "La Liga", "Spain", Sport::Football),
    (135, "Serie A", "Italy", Sport::Football),
    (78, "Bundesliga", "Germany", Sport::Football),
    (61, "Ligue 1", "France", Sport::Football),
    (71, "Brasileirão", "Brazil", Sport::Football),
    (1000, "NBA", "USA", Sport::Basketball),
];

const NBA_LOGO_URL: &str = "https://cdn.ssref.net/req/202403151/tlogo/bbr/NBA-2024.png";

/// The built-in league catalog, ordered by importance.
pub fn default_leagues() -> Vec<League> {
    CATALOG
        .iter()
        .map(|&(id, name, country, sport)| League {
            id,
            name: name.to_string(),
            country: country.to_string(),
            logo_url: match sport {
                Sport::Football => football_league_logo(id),
                Sport::Basketball => NBA_LOGO_URL.to_string(),
            },
            sport,
        })
        .collect()
}

/// Ids of the catalog leagues that the fixture API can serve.
pub fn default_football_league_ids() -> Vec<u32> {
    CATALOG
        .iter()
        .filter(|(_, _, _, sport)| *sport == Sport::Football)
        .map(|(id, ..)| *id)
        .collect()
}

/// Media URL of a football competition's logo.
pub fn football_league_logo(id: u32) -> String {
    format!("https://media.api-sports.io/football/leagues/{id}.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_and_contents() {
        let leagues = default_leagues();
        assert_eq!(leagues.len(), 7);
        assert_eq!(leagues[0].name, "Premier League");
        assert_eq!(leagues[0].logo_url, "https://media.api-sports.io/football/leagues/39.png");
        let nba = leagues.last().unwrap();
        assert_eq!(nba.id, 1000);
        assert_eq!(nba.sport, Sport::Basketball);
    }

    #[test]
    fn test_football_ids_exclude_basketball() {
        assert_eq!(default_football_league_ids(), vec![39, 140, 135, 78, 61, 71]);
    }
}
