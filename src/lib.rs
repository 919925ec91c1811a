//! Fetch sports fixtures and turn them into the live-first, filtered match
//! lists a match browser renders.

pub use client::FootballClient;
pub use config::ApiConfig;
pub use error::{FeedError, Result};
pub use model::*;
pub use select::select_matches;

mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
mod select;
