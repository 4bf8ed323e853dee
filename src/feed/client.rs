//! The posts source seam and its HTTP implementation.
//!
//! `PostSource` is the trait the rest of the app talks to; `HttpPostSource`
//! is the reqwest-backed implementation pointed at JSONPlaceholder (or any
//! base URL handed to it, which is how the integration tests drive it
//! against a mock server).

use async_trait::async_trait;
use log::{debug, info, warn};

use super::types::{FetchError, Post};

/// Default listing endpoint, used when no config/env/CLI override is given.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";

/// Anything that can produce the post listing.
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Returns the name of the source (for logging).
    fn name(&self) -> &str;

    /// Fetches the full post listing, preserving server order.
    /// Issues at most one outbound request; never retries.
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError>;
}

/// HTTP source: one GET against the configured endpoint, no headers,
/// no query parameters. Timeout behavior is whatever reqwest defaults to.
pub struct HttpPostSource {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpPostSource {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PostSource for HttpPostSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        info!("GET {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            warn!("Listing endpoint returned HTTP {}", status.as_u16());
            return Err(FetchError::Api {
                status: status.as_u16(),
            });
        }

        // Read the full body before decoding so a mid-stream transport
        // failure surfaces as Network, not Parse.
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let posts: Vec<Post> =
            serde_json::from_slice(&body).map_err(|e| FetchError::Parse(e.to_string()))?;

        info!("Fetched {} posts", posts.len());
        Ok(posts)
    }
}
