//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::core::state::App;
use crate::feed::{FetchError, Post, PostSource};

/// A fixed three-post listing used across state and render tests.
pub fn sample_posts() -> Vec<Post> {
    vec![
        Post {
            id: 1,
            title: "first title".to_string(),
            body: "first body".to_string(),
        },
        Post {
            id: 2,
            title: "second title".to_string(),
            body: "second body".to_string(),
        },
        Post {
            id: 3,
            title: "third title".to_string(),
            body: "third body".to_string(),
        },
    ]
}

/// A source that returns a canned listing without touching the network.
pub struct StaticSource(pub Vec<Post>);

#[async_trait]
impl PostSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        Ok(self.0.clone())
    }
}

/// A source that always fails with the given status.
pub struct FailingSource(pub u16);

#[async_trait]
impl PostSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        Err(FetchError::Api { status: self.0 })
    }
}

/// Creates a test App pointed at a throwaway endpoint.
pub fn test_app() -> App {
    App::new("http://localhost:0/posts".to_string())
}
