//! # Actions
//!
//! Everything that can happen in postdeck becomes an `Action`.
//! The fetch task finishes? That's `Action::FetchCompleted(result)`.
//! User presses q? That's `Action::Quit`.
//!
//! The `update()` function takes the current state and an action,
//! then returns the new state. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State
//! ```
//!
//! This makes everything testable: `assert_eq!(update(state, action), expected)`.

use log::{info, warn};

use crate::core::state::{App, FetchState};
use crate::feed::{FetchError, Post};

/// Fixed user-facing failure message. Transport faults, bad statuses, and
/// parse failures all collapse to this; the cause detail only goes to the log.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data. Please try again later.";

#[derive(Debug)]
pub enum Action {
    /// The single outbound request resolved, one way or the other.
    FetchCompleted(Result<Vec<Post>, FetchError>),
    Quit,
}

/// What the caller should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::FetchCompleted(result) => {
            // The fetch resolves exactly once; anything after the first
            // completion is a stale result and must not touch state.
            if !app.fetch.is_loading() {
                warn!("FetchCompleted arrived after the fetch already resolved; ignoring");
                return Effect::None;
            }

            match result {
                Ok(posts) => {
                    info!("Fetch succeeded with {} posts", posts.len());
                    app.status_message = format!("{} posts", posts.len());
                    app.fetch = FetchState::Succeeded(posts);
                }
                Err(e) => {
                    warn!("Fetch failed: {}", e);
                    app.status_message = String::from("Fetch failed");
                    app.fetch = FetchState::Failed(FETCH_FAILED_MESSAGE.to_string());
                }
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_posts, test_app};

    #[test]
    fn test_fetch_success_transitions_to_succeeded() {
        let mut app = test_app();
        let posts = sample_posts();

        let effect = update(&mut app, Action::FetchCompleted(Ok(posts.clone())));

        assert_eq!(effect, Effect::None);
        assert_eq!(app.fetch, FetchState::Succeeded(posts));
        assert_eq!(app.status_message, "3 posts");
    }

    #[test]
    fn test_fetch_success_preserves_server_order() {
        let mut app = test_app();
        let posts = sample_posts();
        let ids: Vec<u64> = posts.iter().map(|p| p.id).collect();

        update(&mut app, Action::FetchCompleted(Ok(posts)));

        let FetchState::Succeeded(got) = &app.fetch else {
            panic!("expected Succeeded");
        };
        assert_eq!(got.iter().map(|p| p.id).collect::<Vec<_>>(), ids);
    }

    #[test]
    fn test_fetch_failure_collapses_to_fixed_message() {
        for err in [
            FetchError::Network("connection refused".into()),
            FetchError::Api { status: 500 },
            FetchError::Parse("expected value at line 1".into()),
        ] {
            let mut app = test_app();
            update(&mut app, Action::FetchCompleted(Err(err)));
            assert_eq!(app.fetch, FetchState::Failed(FETCH_FAILED_MESSAGE.to_string()));
        }
    }

    #[test]
    fn test_duplicate_completion_is_a_no_op() {
        let mut app = test_app();
        update(&mut app, Action::FetchCompleted(Ok(sample_posts())));
        let settled = app.fetch.clone();

        // A stale error must not overwrite the settled state.
        let effect = update(
            &mut app,
            Action::FetchCompleted(Err(FetchError::Api { status: 500 })),
        );

        assert_eq!(effect, Effect::None);
        assert_eq!(app.fetch, settled);
    }

    #[test]
    fn test_empty_listing_is_a_success() {
        let mut app = test_app();
        update(&mut app, Action::FetchCompleted(Ok(vec![])));
        assert_eq!(app.fetch, FetchState::Succeeded(vec![]));
        assert_eq!(app.status_message, "0 posts");
    }

    #[test]
    fn test_quit_produces_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
