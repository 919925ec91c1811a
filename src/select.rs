use itertools::Itertools;

use crate::model::{FilterCriteria, MatchRecord, MatchSelection};

/// Narrow and order a batch of fixtures for display.
///
/// Records are kept when they satisfy every criterion that is set, then
/// ordered live-first and by ascending kickoff within each tier, and only
/// then cut down to `criteria.limit`. Finished and scheduled fixtures share
/// the lower tier. The sort is stable, so records that tie on both keys keep
/// their input order.
///
/// ```
/// use matchfeed::{select_matches, FilterCriteria};
///
/// let selection = select_matches(&[], &FilterCriteria::default());
/// assert!(selection.shown.is_empty());
/// assert_eq!(selection.live_count, 0);
/// ```
pub fn select_matches(records: &[MatchRecord], criteria: &FilterCriteria) -> MatchSelection {
    let needle = criteria.needle();

    let shown = records
        .iter()
        .filter(|record| matches_criteria(record, criteria, needle.as_deref()))
        .sorted_by_key(|record| (!record.is_live(), record.kickoff))
        .take(criteria.limit)
        .cloned()
        .collect_vec();
    let live_count = shown.iter().filter(|record| record.is_live()).count();

    MatchSelection { shown, live_count }
}

fn matches_criteria(record: &MatchRecord, criteria: &FilterCriteria, needle: Option<&str>) -> bool {
    if let Some(needle) = needle {
        let found = [
            &record.home_team.name,
            &record.away_team.name,
            &record.league.name,
        ]
        .iter()
        .any(|name| name.to_lowercase().contains(needle));
        if !found {
            return false;
        }
    }
    if criteria
        .league_id
        .is_some_and(|league_id| record.league.id != league_id)
    {
        return false;
    }
    if criteria
        .team_id
        .is_some_and(|team_id| record.home_team.id != team_id && record.away_team.id != team_id)
    {
        return false;
    }
    criteria.status.is_none_or(|status| record.status == status)
}
