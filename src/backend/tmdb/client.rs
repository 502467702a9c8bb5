/**
 * TMDB Client
 *
 * Holds one `reqwest::Client` (and with it one connection pool) for the
 * lifetime of the server. Cloning is cheap; clones share the pool.
 */

use serde_json::Value;

use crate::backend::error::ApiError;
use crate::backend::server::config::Config;

/// Query parameter carrying the TMDB key
const API_KEY_PARAM: &str = "api_key";

/// Outbound client for the TMDB v3 API
#[derive(Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for TmdbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TmdbClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl TmdbClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.tmdb_base_url, &config.tmdb_api_key)
    }

    /// Full upstream URL for `path`, without query string
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Caller parameters with any `api_key` replaced by the server's key
    fn upstream_query(&self, query: Vec<(String, String)>) -> Vec<(String, String)> {
        let mut params: Vec<(String, String)> = query
            .into_iter()
            .filter(|(name, _)| name != API_KEY_PARAM)
            .collect();
        params.push((API_KEY_PARAM.to_string(), self.api_key.clone()));
        params
    }

    /// GET `path` upstream and return the JSON body
    ///
    /// The upstream status is not inspected. Transport and decoding failures
    /// become `ApiError::Upstream`; the URL is stripped from the error first
    /// because it contains the API key.
    pub async fn proxy(&self, path: &str, query: Vec<(String, String)>) -> Result<Value, ApiError> {
        tracing::debug!("Proxying TMDB request: {}", path);

        let response = self
            .http
            .get(self.endpoint(path))
            .query(&self.upstream_query(query))
            .send()
            .await
            .map_err(upstream_error)?;

        let status = response.status();
        let body = response.json::<Value>().await.map_err(upstream_error)?;

        if !status.is_success() {
            tracing::debug!("TMDB returned {} for {}", status, path);
        }

        Ok(body)
    }
}

fn upstream_error(err: reqwest::Error) -> ApiError {
    let err = err.without_url();
    tracing::error!("TMDB request failed: {}", err);
    ApiError::upstream(err.to_string())
}
