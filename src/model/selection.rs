use serde::Serialize;
use tracing::debug;

use crate::model::{MatchRecord, MatchStatus};

/// Number of cards a match list shows unless told otherwise.
pub const DEFAULT_LIMIT: usize = 6;

/// Sentinel value the league, team and status pickers use for "no filter".
const ALL: &str = "all";

/// User-chosen narrowing of a match list. Every field is independent and
/// an unset field filters nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against team and league names.
    pub search_text: String,
    pub league_id: Option<u32>,
    /// Matches either the home or the away side.
    pub team_id: Option<u32>,
    pub status: Option<MatchStatus>,
    pub limit: usize,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            league_id: None,
            team_id: None,
            status: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl FilterCriteria {
    /// Only keep fixtures whose team or league names contain `text`.
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Only keep fixtures from one competition.
    pub fn league(mut self, league_id: u32) -> Self {
        self.league_id = Some(league_id);
        self
    }

    /// Only keep fixtures where `team_id` plays, home or away.
    pub fn team(mut self, team_id: u32) -> Self {
        self.team_id = Some(team_id);
        self
    }

    /// Only keep fixtures in the given state.
    pub fn status(mut self, status: MatchStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Show at most `limit` fixtures.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Build criteria from raw picker values.
    ///
    /// `"all"`, empty and unparsable values mean "no filter" for that field,
    /// and an unparsable limit falls back to [`DEFAULT_LIMIT`].
    pub fn from_params(search: &str, league: &str, team: &str, status: &str, limit: &str) -> Self {
        Self {
            search_text: search.to_string(),
            league_id: parse_picker("league", league),
            team_id: parse_picker("team", team),
            status: parse_picker("status", status),
            limit: parse_picker("limit", limit).unwrap_or(DEFAULT_LIMIT),
        }
    }

    /// The trimmed, lowercased search needle, if any.
    pub(crate) fn needle(&self) -> Option<String> {
        let needle = self.search_text.trim();
        (!needle.is_empty()).then(|| needle.to_lowercase())
    }
}

fn parse_picker<T: std::str::FromStr>(field: &'static str, raw: &str) -> Option<T> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case(ALL) {
        return None;
    }
    let parsed = raw.parse().ok();
    if parsed.is_none() {
        debug!(field, value = raw, "ignoring unparsable filter value");
    }
    parsed
}

/// What a match list renders: the cards to show and the live badge count.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSelection {
    pub shown: Vec<MatchRecord>,
    /// Live fixtures among `shown`, not among everything that matched.
    pub live_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.limit, 6);
        assert!(criteria.needle().is_none());
        assert!(criteria.league_id.is_none());
    }

    #[test]
    fn test_from_params_parses_picker_values() {
        let criteria = FilterCriteria::from_params("Barça", "140", "529", "live", "3");
        assert_eq!(criteria.search_text, "Barça");
        assert_eq!(criteria.league_id, Some(140));
        assert_eq!(criteria.team_id, Some(529));
        assert_eq!(criteria.status, Some(MatchStatus::Live));
        assert_eq!(criteria.limit, 3);
    }

    #[test]
    fn test_from_params_degrades_to_no_filter() {
        let criteria = FilterCriteria::from_params("", "all", "ALL", "whatever", "");
        assert_eq!(criteria, FilterCriteria::default());

        let criteria = FilterCriteria::from_params("  ", "not-a-number", "-3", "", "many");
        assert_eq!(criteria.league_id, None);
        assert_eq!(criteria.team_id, None);
        assert_eq!(criteria.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn test_needle_is_trimmed_and_lowercased() {
        let criteria = FilterCriteria::default().search("  Real MADRID ");
        assert_eq!(criteria.needle().as_deref(), Some("real madrid"));
        assert!(FilterCriteria::default().search(" \t").needle().is_none());
    }
}
