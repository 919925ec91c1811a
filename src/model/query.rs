use chrono::NaiveDate;
use serde::Serialize;

use crate::model::Sport;

/// Which day's fixtures a query asks for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MatchDay {
    /// Fixtures currently in play.
    Live,
    /// Fixtures kicking off on a calendar date.
    On(NaiveDate),
    /// No date restriction; pair with a league, team or season.
    #[default]
    Any,
}

/// The key a batch of fixtures is fetched for.
///
/// ```
/// use matchfeed::{MatchDay, MatchQuery};
///
/// let query = MatchQuery::live().league(39);
/// assert_eq!(query.day, MatchDay::Live);
/// assert_eq!(query.league_id, Some(39));
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MatchQuery {
    pub sport: Sport,
    pub day: MatchDay,
    pub league_id: Option<u32>,
    pub team_id: Option<u32>,
    pub season: Option<u16>,
}

impl MatchQuery {
    /// Fixtures in play right now.
    pub fn live() -> Self {
        Self {
            day: MatchDay::Live,
            ..Self::default()
        }
    }

    /// Fixtures kicking off on `date`.
    pub fn on(date: NaiveDate) -> Self {
        Self {
            day: MatchDay::On(date),
            ..Self::default()
        }
    }

    /// Set the sport the fixtures belong to.
    pub fn sport(mut self, sport: Sport) -> Self {
        self.sport = sport;
        self
    }

    /// Restrict to one competition.
    pub fn league(mut self, league_id: u32) -> Self {
        self.league_id = Some(league_id);
        self
    }

    /// Restrict to fixtures of one team.
    pub fn team(mut self, team_id: u32) -> Self {
        self.team_id = Some(team_id);
        self
    }

    /// Restrict to one season, given by its starting year.
    pub fn season(mut self, season: u16) -> Self {
        self.season = Some(season);
        self
    }

    /// Query-string parameters for the fixtures endpoint.
    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![];
        match self.day {
            MatchDay::Live => params.push(("live", "all".to_string())),
            MatchDay::On(date) => params.push(("date", date.format("%Y-%m-%d").to_string())),
            MatchDay::Any => {}
        }
        if let Some(league_id) = self.league_id {
            params.push(("league", league_id.to_string()));
        }
        if let Some(team_id) = self.team_id {
            params.push(("team", team_id.to_string()));
        }
        if let Some(season) = self.season {
            params.push(("season", season.to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_params() {
        let params = MatchQuery::live().league(140).params();
        assert_eq!(
            params,
            vec![("live", "all".to_string()), ("league", "140".to_string())]
        );
    }

    #[test]
    fn test_dated_params() {
        let date = NaiveDate::from_ymd_opt(2023, 5, 15).unwrap();
        let params = MatchQuery::on(date).team(529).season(2023).params();
        assert_eq!(
            params,
            vec![
                ("date", "2023-05-15".to_string()),
                ("team", "529".to_string()),
                ("season", "2023".to_string()),
            ]
        );
    }

    #[test]
    fn test_unrestricted_query_has_no_params() {
        assert!(MatchQuery::default().params().is_empty());
    }
}
