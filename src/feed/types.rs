//! Wire types for the posts listing endpoint.

use std::fmt;

use serde::Deserialize;

/// A single post as returned by the listing endpoint.
///
/// The server is the source of truth; we deserialize the fields we render
/// and ignore anything else the payload carries (e.g. `userId`).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
}

/// Errors that can occur while fetching the post listing.
/// The user surface collapses all of these into one message; the variants
/// exist so the log (and any future per-cause UI) can tell them apart.
#[derive(Debug)]
pub enum FetchError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The server responded with a status outside 200-299.
    Api { status: u16 },
    /// The response body was not a JSON array of posts.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Api { status } => write!(f, "API error (HTTP {status})"),
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_deserializes_known_fields() {
        let json = r#"{"id": 7, "title": "hello", "body": "world"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, 7);
        assert_eq!(post.title, "hello");
        assert_eq!(post.body, "world");
    }

    #[test]
    fn test_post_ignores_extra_fields() {
        // JSONPlaceholder includes userId; anything unknown must not break us.
        let json = r#"{"userId": 1, "id": 1, "title": "t", "body": "b", "tags": []}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, 1);
    }

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(
            FetchError::Api { status: 500 }.to_string(),
            "API error (HTTP 500)"
        );
        assert_eq!(
            FetchError::Network("connection refused".into()).to_string(),
            "network error: connection refused"
        );
    }
}
