//! Remote search client.

use crate::error::ClientError;
use crate::types::{SearchRequest, SearchResponse};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::{debug, instrument};
use url::Url;
use zdk_search_core::{Error, Result};

/// Integration name sent for attribution; has no effect on results
pub const FRAMEWORK_NAME: &str = "zdk";
pub const FRAMEWORK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Anything that can run a search against a named collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(
        &self,
        collection: &str,
        request: &SearchRequest,
    ) -> std::result::Result<SearchResponse, ClientError>;
}

/// HTTP client for the hosted (or self-hosted) search API.
///
/// Building one never touches the network. Requests are sent once: there is
/// no retry, no caching and no client-side timeout.
#[derive(Clone)]
pub struct HttpSearchClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpSearchClient {
    /// Create a client bound to `api_key`, targeting `base_url` or the hosted API.
    pub fn new(api_key: &str, base_url: Option<&str>) -> Result<Self> {
        let raw_url = base_url.unwrap_or(crate::config::DEFAULT_BASE_URL);
        let base_url = Url::parse(raw_url)
            .map_err(|e| Error::config_error(format!("Invalid base URL '{}': {}", raw_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::config_error(format!(
                "Base URL '{}' cannot carry a path",
                raw_url
            )));
        }

        let mut key = HeaderValue::from_str(api_key).map_err(|_| {
            Error::config_error("API key contains characters that are not valid in an HTTP header")
        })?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("x-api-key", key);
        headers.insert("x-framework-name", HeaderValue::from_static(FRAMEWORK_NAME));
        headers.insert(
            "x-framework-version",
            HeaderValue::from_static(FRAMEWORK_VERSION),
        );

        let client = reqwest::Client::builder()
            .user_agent(concat!("zdk-airweave/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(|e| Error::config_error(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/collections/{collection}/search`, with the collection as one encoded segment
    fn search_url(&self, collection: &str) -> std::result::Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["collections", collection, "search"]);
        Ok(url)
    }
}

impl std::fmt::Debug for HttpSearchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpSearchClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl SearchBackend for HttpSearchClient {
    #[instrument(skip(self, request), fields(limit = request.limit))]
    async fn search(
        &self,
        collection: &str,
        request: &SearchRequest,
    ) -> std::result::Result<SearchResponse, ClientError> {
        let url = self.search_url(collection)?;
        debug!("Request URL: POST {}", url);

        let response = self.client.post(url).json(request).send().await?;
        let status = response.status();

        debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
