use serde::Serialize;

use crate::model::TeamRef;

/// One side's statistics for a fixture.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStatistics {
    pub team: TeamRef,
    pub statistics: Vec<Statistic>,
}

impl TeamStatistics {
    /// Look up a statistic by its source name, e.g. `"Ball Possession"`.
    pub fn get(&self, kind: &str) -> Option<&StatValue> {
        self.statistics
            .iter()
            .find(|s| s.kind.eq_ignore_ascii_case(kind))
            .map(|s| &s.value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistic {
    /// Source name of the statistic, such as `"Total Shots"`.
    pub kind: String,
    pub value: StatValue,
}

/// A statistic value. The source mixes counts, percentages like `"60%"`
/// and nulls for figures it has not recorded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatValue {
    Count(i64),
    Ratio(f64),
    Text(String),
    Missing,
}

impl From<serde_json::Value> for StatValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Missing,
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(count) => Self::Count(count),
                None => n.as_f64().map(Self::Ratio).unwrap_or(Self::Missing),
            },
            serde_json::Value::String(s) => Self::Text(s),
            other => Self::Text(other.to_string()),
        }
    }
}
