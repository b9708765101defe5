use chrono::Utc;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::{Client, ClientBuilder};
use tracing::{error, info, warn};
use url::Url;

use crate::config::SourceConfig;
use crate::error::{BoardError, Result};

pub fn create_client(source: &SourceConfig) -> Result<Client> {
    let client = ClientBuilder::new()
        .user_agent(&source.user_agent)
        .timeout(source.timeout())
        .pool_max_idle_per_host(2)
        .build()
        .map_err(BoardError::Client)?;

    Ok(client)
}

/// Append `<param>=<stamp>` so every request sees a fresh copy of the sheet
pub fn cache_busted_url(url: &str, param: &str, stamp: i64) -> Result<Url> {
    let mut parsed = Url::parse(url).map_err(|e| BoardError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    let existing: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(key, _)| &**key != param)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    parsed
        .query_pairs_mut()
        .clear()
        .extend_pairs(existing)
        .append_pair(param, &stamp.to_string());

    Ok(parsed)
}

/// Fetch the sheet text once. No retries: a failed run leaves the board empty
/// until the next refresh.
pub async fn fetch_table(client: &Client, source: &SourceConfig) -> Result<String> {
    let url = cache_busted_url(&source.url, &source.cache_bust_param, Utc::now().timestamp_millis())?;

    let response = client
        .get(url.clone())
        .header(CACHE_CONTROL, "no-cache")
        .header(PRAGMA, "no-cache")
        .send()
        .await
        .map_err(|source| {
            error!("Request failed for {}: {}", url, source);
            BoardError::Fetch {
                url: url.to_string(),
                source,
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        warn!("HTTP error {}: {}", status, url);
        return Err(BoardError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let text = response.text().await.map_err(|source| BoardError::Fetch {
        url: url.to_string(),
        source,
    })?;

    let text = text.trim_start_matches('\u{feff}');
    if text.trim().is_empty() {
        return Err(BoardError::EmptyDocument);
    }

    info!("Fetched {} bytes of sheet data", text.len());
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_bust_keeps_existing_query() {
        let url = cache_busted_url("https://docs.example.com/pub?gid=0&output=csv", "_ts", 42).unwrap();
        assert_eq!(url.as_str(), "https://docs.example.com/pub?gid=0&output=csv&_ts=42");
    }

    #[test]
    fn cache_bust_replaces_previous_stamp() {
        let url = cache_busted_url("https://docs.example.com/pub?_ts=1&output=csv", "_ts", 2).unwrap();
        assert_eq!(url.as_str(), "https://docs.example.com/pub?output=csv&_ts=2");
    }

    #[test]
    fn invalid_url_is_reported() {
        assert!(matches!(
            cache_busted_url("not a url", "_ts", 1),
            Err(BoardError::InvalidUrl { .. })
        ));
    }
}
