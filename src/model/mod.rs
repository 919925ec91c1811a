mod fixture;
mod league;
mod query;
mod selection;
mod statistics;
mod team;

pub use fixture::*;
pub use league::*;
pub use query::*;
pub use selection::*;
pub use statistics::*;
pub use team::*;
