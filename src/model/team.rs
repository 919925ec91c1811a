use serde::Serialize;

/// The identity of a team as carried on a fixture.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TeamRef {
    pub id: u32,
    pub name: String,
}

/// A team as listed by a league's team directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub logo_url: String,
    pub country: Option<String>,
}
