//! # Application State
//!
//! Core business state for postdeck. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── fetch: FetchState        // Loading | Failed | Succeeded
//! ├── endpoint: String         // where the listing came from
//! └── status_message: String   // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::feed::Post;

/// The one-shot fetch lifecycle. Created as `Loading`, transitions exactly
/// once to `Failed` or `Succeeded`, then never changes again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState {
    Loading,
    Failed(String),
    Succeeded(Vec<Post>),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

pub struct App {
    pub fetch: FetchState,
    pub endpoint: String,
    pub status_message: String,
}

impl App {
    pub fn new(endpoint: String) -> Self {
        Self {
            fetch: FetchState::Loading,
            endpoint,
            status_message: String::from("Fetching posts..."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_starts_loading() {
        let app = test_app();
        assert_eq!(app.fetch, FetchState::Loading);
        assert!(app.fetch.is_loading());
        assert_eq!(app.status_message, "Fetching posts...");
    }

    #[test]
    fn test_app_new_keeps_endpoint() {
        let app = App::new("http://localhost:9/posts".to_string());
        assert_eq!(app.endpoint, "http://localhost:9/posts");
    }
}
