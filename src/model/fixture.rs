use chrono::{DateTime, FixedOffset};
use itertools::Itertools;
use serde::Serialize;
use strum_macros::EnumString;
use tracing::warn;

use crate::model::{LeagueRef, TeamRef};

/// A single fixture, normalized from the source API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub id: u32,
    pub league: LeagueRef,
    pub home_team: TeamRef,
    pub away_team: TeamRef,
    pub status: MatchStatus,
    /// Short status code exactly as the source reported it.
    pub status_code: String,
    pub kickoff: DateTime<FixedOffset>,
    pub score: Score,
    pub venue: Option<Venue>,
    pub referee: Option<String>,
}

impl MatchRecord {
    /// Whether the fixture is in play right now.
    pub fn is_live(&self) -> bool {
        self.status == MatchStatus::Live
    }
}

/// Merge fixtures from several fetches, keeping the first copy of each id.
///
/// Put the freshest batch first: a fixture that was live in one fetch and
/// finished by the next one is kept as it appeared first.
pub fn merge_batches<I>(batches: I) -> Vec<MatchRecord>
where
    I: IntoIterator,
    I::Item: IntoIterator<Item = MatchRecord>,
{
    batches
        .into_iter()
        .flatten()
        .unique_by(|record| record.id)
        .collect_vec()
}

/// Scorelines of a fixture at the points the source reports them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score {
    /// Goals scored so far.
    pub goals: ScoreLine,
    pub halftime: ScoreLine,
    /// Result after regular time, once it is known.
    pub fulltime: ScoreLine,
}

/// Goals per side. Both sides are `None` until the line is reached.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreLine {
    pub home: Option<u8>,
    pub away: Option<u8>,
}

impl ScoreLine {
    pub fn new(home: u8, away: u8) -> Self {
        Self {
            home: Some(home),
            away: Some(away),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Venue {
    pub name: String,
    pub city: String,
}

/// Coarse state of a fixture as shown to the user.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    EnumString,
    strum_macros::Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    #[default]
    #[strum(to_string = "scheduled", serialize = "upcoming")]
    Scheduled,
    Live,
    Finished,
}

impl From<StatusCode> for MatchStatus {
    fn from(code: StatusCode) -> Self {
        match code {
            StatusCode::FirstHalf
            | StatusCode::Halftime
            | StatusCode::SecondHalf
            | StatusCode::ExtraTime
            | StatusCode::BreakTime
            | StatusCode::Penalties
            | StatusCode::Suspended
            | StatusCode::Interrupted
            | StatusCode::Live => Self::Live,
            StatusCode::FullTime
            | StatusCode::AfterExtraTime
            | StatusCode::AfterPenalties
            | StatusCode::TechnicalLoss
            | StatusCode::WalkOver
            | StatusCode::Abandoned
            | StatusCode::Cancelled => Self::Finished,
            StatusCode::TimeToBeDefined
            | StatusCode::NotStarted
            | StatusCode::Postponed
            | StatusCode::Unknown => Self::Scheduled,
        }
    }
}

impl MatchStatus {
    /// Map a source short code such as `NS`, `HT` or `FT` onto a status.
    ///
    /// Unrecognized codes are logged and treated as scheduled.
    pub fn from_code(code: &str) -> Self {
        let parsed: StatusCode = code.trim().parse().unwrap_or_else(|_| {
            warn!(code, "unknown fixture status code");
            StatusCode::Unknown
        });
        parsed.into()
    }
}

/// Short fixture status codes used by the source API.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, strum_macros::Display,
)]
#[strum(ascii_case_insensitive)]
pub enum StatusCode {
    #[strum(serialize = "TBD")]
    TimeToBeDefined,
    #[strum(serialize = "NS")]
    NotStarted,
    #[strum(serialize = "1H")]
    FirstHalf,
    #[strum(serialize = "HT")]
    Halftime,
    #[strum(serialize = "2H")]
    SecondHalf,
    #[strum(serialize = "ET")]
    ExtraTime,
    #[strum(serialize = "BT")]
    BreakTime,
    #[strum(serialize = "P")]
    Penalties,
    #[strum(serialize = "SUSP")]
    Suspended,
    #[strum(serialize = "INT")]
    Interrupted,
    #[strum(serialize = "LIVE")]
    Live,
    #[strum(serialize = "FT")]
    FullTime,
    #[strum(serialize = "AET")]
    AfterExtraTime,
    #[strum(serialize = "PEN")]
    AfterPenalties,
    #[strum(serialize = "PST")]
    Postponed,
    #[strum(serialize = "CANC")]
    Cancelled,
    #[strum(serialize = "ABD")]
    Abandoned,
    #[strum(serialize = "AWD")]
    TechnicalLoss,
    #[strum(serialize = "WO")]
    WalkOver,
    #[default]
    #[strum(disabled)]
    Unknown,
}
