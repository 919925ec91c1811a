use crate::model::Sport;

/// All errors that can occur while fetching and normalizing fixtures.
#[derive(thiserror::Error, Debug)]
pub enum FeedError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The response body was not the JSON envelope we expected.
    #[error("failed to decode response from {url}: {source}")]
    Json {
        url: String,
        source: serde_json::Error,
    },

    /// A single payload item did not have the expected shape.
    #[error("failed to decode item: {0}")]
    Decode(#[from] serde_json::Error),

    /// The API answered with a populated `errors` field.
    #[error("api reported errors for {url}: {}", messages.join("; "))]
    Api { url: String, messages: Vec<String> },

    /// A request URL could not be built from the configured base URL.
    #[error("invalid request url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Failed to parse a kickoff timestamp.
    #[error("failed to parse date: {0}")]
    DateParse(#[from] chrono::ParseError),

    /// No API key was configured.
    #[error("no api key configured (set MATCHFEED_API_KEY)")]
    MissingApiKey,

    /// A configuration value was present but unusable.
    #[error("invalid configuration value for {key}: {value}")]
    InvalidConfig { key: &'static str, value: String },

    /// The remote source has no fixture endpoint for this sport.
    #[error("sport not supported by the fixture api: {0}")]
    UnsupportedSport(Sport),
}

pub type Result<T> = std::result::Result<T, FeedError>;
