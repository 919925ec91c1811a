pub(crate) mod fixtures;
pub(crate) mod leagues;
pub(crate) mod statistics;
pub(crate) mod teams;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::{FeedError, Result};

const KEY_HEADER: &str = "X-RapidAPI-Key";
const HOST_HEADER: &str = "X-RapidAPI-Host";

/// The envelope every endpoint wraps its payload in.
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    #[serde(default)]
    response: Option<T>,
    #[serde(default)]
    results: u32,
    #[serde(default)]
    paging: Paging,
    /// Either a list of messages or an object of `field: message` pairs.
    #[serde(default)]
    errors: serde_json::Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Paging {
    current: u32,
    total: u32,
}

/// Fetch `path` with the given query parameters and decode its payload.
pub(crate) async fn get_json<T>(
    client: &reqwest::Client,
    config: &ApiConfig,
    path: &str,
    params: &[(&'static str, String)],
) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let base = format!("{}{path}", config.base_url);
    let url = reqwest::Url::parse_with_params(&base, params).map_err(|e| FeedError::InvalidUrl {
        url: base.clone(),
        reason: e.to_string(),
    })?;
    let url_text = url.to_string();
    debug!(url = %url_text, "fetching");

    let response = client
        .get(url)
        .header(KEY_HEADER, &config.api_key)
        .header(HOST_HEADER, &config.api_host)
        .timeout(config.timeout)
        .send()
        .await
        .map_err(|e| FeedError::Http {
            url: url_text.clone(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FeedError::UnexpectedStatus {
            url: url_text,
            status,
        });
    }

    let body = response.text().await.map_err(|e| FeedError::ResponseBody {
        url: url_text.clone(),
        source: e,
    })?;

    decode(&url_text, &body)
}

/// Decode a response body, surfacing any errors the API reported.
fn decode<T>(url: &str, body: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let envelope: ApiResponse<T> = serde_json::from_str(body).map_err(|e| FeedError::Json {
        url: url.to_owned(),
        source: e,
    })?;

    let messages = error_messages(&envelope.errors);
    if !messages.is_empty() {
        return Err(FeedError::Api {
            url: url.to_owned(),
            messages,
        });
    }

    debug!(
        results = envelope.results,
        page = envelope.paging.current,
        total_pages = envelope.paging.total,
        "decoded response"
    );
    Ok(envelope.response.unwrap_or_default())
}

fn error_messages(errors: &serde_json::Value) -> Vec<String> {
    match errors {
        serde_json::Value::Array(items) => items.iter().map(value_text).collect(),
        serde_json::Value::Object(fields) => fields
            .iter()
            .map(|(field, message)| format!("{field}: {}", value_text(message)))
            .collect(),
        _ => vec![],
    }
}

fn value_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_payload() {
        let body = r#"{"get":"status","parameters":[],"errors":[],"results":2,
            "paging":{"current":1,"total":1},"response":[1,2]}"#;
        let payload: Vec<u32> = decode("u", body).unwrap();
        assert_eq!(payload, vec![1, 2]);
    }

    #[test]
    fn test_decode_missing_response_is_empty() {
        let payload: Vec<u32> = decode("u", r#"{"errors":[]}"#).unwrap();
        assert!(payload.is_empty());
    }

    #[test]
    fn test_decode_error_object() {
        let body = r#"{"errors":{"token":"Error/Missing application key."},"response":[]}"#;
        let err = decode::<Vec<u32>>("https://example.test/fixtures", body).unwrap_err();
        match err {
            FeedError::Api { url, messages } => {
                assert_eq!(url, "https://example.test/fixtures");
                assert_eq!(messages, vec!["token: Error/Missing application key."]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_error_list() {
        let body = r#"{"errors":["rate limited"],"response":[]}"#;
        let err = decode::<Vec<u32>>("u", body).unwrap_err();
        assert!(matches!(err, FeedError::Api { ref messages, .. } if messages == &["rate limited"]));
    }

    #[test]
    fn test_decode_invalid_json() {
        let err = decode::<Vec<u32>>("u", "<html>").unwrap_err();
        assert!(matches!(err, FeedError::Json { .. }));
    }
}
