//! HTTP client for the RegattaCentral results pages and results servlet.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{Query, RaceResultsQuery, ResultsPageQuery},
    types::RaceResults,
    user_agent::get_user_agent,
    Error,
};

/// Production RegattaCentral host.
pub const DEFAULT_BASE_URL: &str = "https://www.regattacentral.com";

const RESULTS_PAGE_PATH: &str = "/regatta/results2";
const RESULTS_JSON_PATH: &str = "/servlet/DisplayRacesResults";

/// HTTP client for RegattaCentral.
///
/// Sends requests with browser-like headers and a randomized user agent.
/// Each request builds a fresh `reqwest::Client` with a 30-second timeout.
pub struct Client {
    /// Base URL for the service. Defaults to [`DEFAULT_BASE_URL`].
    base_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production RegattaCentral site.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_url(&self, path: &str, query: &impl Query) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        Ok(query.add_to_url(&url))
    }

    async fn get_text<Q: Query>(&self, path: &str, query: &Q, accept: &str) -> Result<String, Error> {
        let url = self.get_url(path, query)?;
        tracing::debug!("GET {}", url);
        let client = reqwest::Client::builder()
            .user_agent(get_user_agent())
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header("accept", accept)
            .header("accept-language", "en-US,en;q=0.9")
            .header("referer", "https://www.regattacentral.com/")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        Ok(body)
    }

    async fn get_json<T, Q>(&self, path: &str, query: &Q) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let body = self
            .get_text(path, query, "application/json, text/plain, */*")
            .await?;

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::RequestFailed
        })?;

        Ok(parsed)
    }

    /// Fetches the HTML results-listing page of one regatta instance.
    pub async fn get_results_page(&self, query: &ResultsPageQuery) -> Result<String, Error> {
        self.get_text(
            RESULTS_PAGE_PATH,
            query,
            "text/html,application/xhtml+xml",
        )
        .await
    }

    /// Fetches the race results of one event as JSON.
    pub async fn get_race_results(&self, query: &RaceResultsQuery) -> Result<RaceResults, Error> {
        self.get_json::<RaceResults, RaceResultsQuery>(RESULTS_JSON_PATH, query)
            .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
