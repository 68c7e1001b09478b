// Recent Search Client
// Single-attempt calls to the recent-search endpoint

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::env;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{info, warn};

use super::config_store::{ConfigStore, SearchConfig, DEFAULT_SEARCH_URL};
use super::query_normalizer::{clamp_fetch_limit, resolve_language};

const RECENT_SEARCH_PATH: &str = "/2/tweets/search/recent";
const TOKEN_ENV_VARS: [&str; 2] = ["TWEETPULSE_BEARER_TOKEN", "TWITTER_BEARER_TOKEN"];

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Rate limit exceeded")]
    RateLimited,
    #[error("Authentication failed")]
    Unauthorized,
    #[error("Malformed query: {0}")]
    MalformedQuery(String),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("JSON parse error: {0}")]
    Json(String),
    #[error("Bearer token not configured")]
    MissingToken,
}

impl SearchError {
    /// Distinct text per failure class for the driver to show.
    pub fn user_message(&self) -> String {
        match self {
            SearchError::RateLimited => {
                "Rate limit reached. Please wait a few minutes and try again.".to_string()
            }
            SearchError::Unauthorized => {
                "Authentication failed. Check your bearer token.".to_string()
            }
            SearchError::MalformedQuery(detail) => {
                format!("The search query was rejected: {}", detail)
            }
            SearchError::MissingToken => {
                "No bearer token found. Set TWEETPULSE_BEARER_TOKEN or store one in the config file."
                    .to_string()
            }
            SearchError::Api { .. } | SearchError::Http(_) | SearchError::Json(_) => {
                format!("Something went wrong while fetching posts: {}", self)
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Option<Vec<PostPayload>>,
}

#[derive(Debug, Deserialize)]
struct PostPayload {
    text: String,
    #[serde(default)]
    lang: Option<String>,
}

pub struct SearchClient {
    client: Client,
    base_url: String,
}

impl Default for SearchClient {
    fn default() -> Self {
        Self::from_config(&SearchConfig::default())
    }
}

impl SearchClient {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `TWEETPULSE_SEARCH_URL` overrides the configured base URL.
    pub fn from_config(config: &SearchConfig) -> Self {
        let base_url = env::var("TWEETPULSE_SEARCH_URL")
            .ok()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| {
                if config.base_url.trim().is_empty() {
                    DEFAULT_SEARCH_URL.to_string()
                } else {
                    config.base_url.clone()
                }
            });
        Self::new(&base_url, Duration::from_secs(config.timeout_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch post texts for an already-normalized query. Posts tagged with a
    /// language other than `language` are dropped; a blank `language` means
    /// the default, as in the query's `lang:` clause.
    pub async fn search_recent(
        &self,
        bearer_token: &str,
        query: &str,
        max_results: u32,
        language: &str,
    ) -> Result<Vec<String>, SearchError> {
        let url = format!("{}{}", self.base_url, RECENT_SEARCH_PATH);
        let max_results = clamp_fetch_limit(max_results);
        let language = resolve_language(language);
        let start = Instant::now();

        let response = self
            .client
            .get(&url)
            .bearer_auth(bearer_token)
            .query(&[
                ("query", query.to_string()),
                ("max_results", max_results.to_string()),
                ("tweet.fields", "text,lang".to_string()),
            ])
            .send()
            .await?;

        let latency_ms = start.elapsed().as_millis() as i64;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), latency_ms, "search.failed");
            return Err(match status {
                StatusCode::TOO_MANY_REQUESTS => SearchError::RateLimited,
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => SearchError::Unauthorized,
                StatusCode::BAD_REQUEST => SearchError::MalformedQuery(error_detail(&body)),
                _ => SearchError::Api {
                    status: status.as_u16(),
                    message: body,
                },
            });
        }

        let data: SearchResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Json(e.to_string()))?;

        let fetched = data.data.unwrap_or_default();
        let fetched_count = fetched.len();
        let texts: Vec<String> = fetched
            .into_iter()
            .filter(|p| p.lang.as_deref().map_or(true, |l| l.eq_ignore_ascii_case(language)))
            .map(|p| p.text)
            .collect();

        info!(
            latency_ms,
            fetched = fetched_count,
            kept = texts.len(),
            language,
            "search.completed"
        );

        Ok(texts)
    }
}

/// Pull a readable reason out of an error body, falling back to the raw body.
fn error_detail(body: &str) -> String {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
    parsed
        .as_ref()
        .and_then(|v| {
            v["errors"][0]["message"]
                .as_str()
                .or_else(|| v["detail"].as_str())
                .or_else(|| v["title"].as_str())
        })
        .map(|s| s.to_string())
        .unwrap_or_else(|| body.trim().to_string())
}

/// Get bearer token from environment or config file
pub fn get_bearer_token(store: &ConfigStore) -> Result<String, SearchError> {
    for key in TOKEN_ENV_VARS {
        if let Ok(val) = env::var(key) {
            let v = val.trim();
            if !v.is_empty() {
                return Ok(v.to_string());
            }
        }
    }

    match store.get_bearer_token() {
        Ok(Some(token)) => Ok(token),
        Ok(None) => Err(SearchError::MissingToken),
        Err(e) => {
            warn!(error = %e, "config.token_read_failed");
            Err(SearchError::MissingToken)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> SearchClient {
        SearchClient::new(&server.uri(), Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_search_success_filters_language() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(RECENT_SEARCH_PATH))
            .and(query_param("query", "\"Bitcoin\" lang:en -is:retweet"))
            .and(query_param("max_results", "100"))
            .and(header("authorization", "Bearer token-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    {"id": "1", "text": "I love this!", "lang": "en"},
                    {"id": "2", "text": "J'adore", "lang": "fr"},
                    {"id": "3", "text": "no lang field"}
                ],
                "meta": {"result_count": 3}
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let texts = client
            .search_recent("token-1", "\"Bitcoin\" lang:en -is:retweet", 250, "en")
            .await
            .unwrap();

        assert_eq!(texts, vec!["I love this!".to_string(), "no lang field".to_string()]);
    }

    #[tokio::test]
    async fn test_blank_or_padded_language_matches_query() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(RECENT_SEARCH_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    {"id": "1", "text": "english post", "lang": "en"},
                    {"id": "2", "text": "post en français", "lang": "fr"}
                ]
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let blank = client.search_recent("t", "q", 10, "").await.unwrap();
        assert_eq!(blank, vec!["english post".to_string()]);

        let padded = client.search_recent("t", "q", 10, " fr ").await.unwrap();
        assert_eq!(padded, vec!["post en français".to_string()]);
    }

    #[tokio::test]
    async fn test_search_without_data_is_empty() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(RECENT_SEARCH_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "meta": {"result_count": 0}
            })))
            .mount(&mock_server)
            .await;

        let texts = client_for(&mock_server)
            .search_recent("t", "#nothing lang:en", 10, "en")
            .await
            .unwrap();
        assert!(texts.is_empty());
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let cases: [(u16, &str); 5] = [
            (401, "unauthorized"),
            (403, "unauthorized"),
            (429, "rate_limited"),
            (400, "malformed"),
            (503, "api"),
        ];

        for (status, expected) in cases {
            let mock_server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path(RECENT_SEARCH_PATH))
                .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                    "errors": [{"message": "There were errors processing your request"}]
                })))
                .mount(&mock_server)
                .await;

            let err = client_for(&mock_server)
                .search_recent("t", "q", 10, "en")
                .await
                .unwrap_err();

            let kind = match &err {
                SearchError::Unauthorized => "unauthorized",
                SearchError::RateLimited => "rate_limited",
                SearchError::MalformedQuery(detail) => {
                    assert_eq!(detail, "There were errors processing your request");
                    "malformed"
                }
                SearchError::Api { status: 503, .. } => "api",
                other => panic!("unexpected error for {}: {:?}", status, other),
            };
            assert_eq!(kind, expected);
        }
    }

    #[test]
    fn test_user_messages_are_distinct() {
        let errors = [
            SearchError::RateLimited,
            SearchError::Unauthorized,
            SearchError::MalformedQuery("bad operator".to_string()),
            SearchError::Api { status: 500, message: "boom".to_string() },
            SearchError::MissingToken,
        ];
        let messages: std::collections::HashSet<String> =
            errors.iter().map(|e| e.user_message()).collect();
        assert_eq!(messages.len(), errors.len());
    }

    #[test]
    fn test_error_detail_fallback() {
        assert_eq!(error_detail("  plain text "), "plain text");
        assert_eq!(error_detail(r#"{"detail": "Invalid query"}"#), "Invalid query");
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = SearchClient::new("http://localhost:9999/", Duration::from_secs(1));
        assert_eq!(client.base_url(), "http://localhost:9999");
    }
}
