//! # TitleBar Component
//!
//! Top status bar showing the feed endpoint and the current status message.
//!
//! Purely presentational: it receives everything as props and has no
//! internal state, so it renders the same text for the same inputs.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::tui::component::Component;

pub struct TitleBar {
    /// The resolved listing endpoint.
    pub endpoint: String,
    /// Transient status (e.g. "Fetching posts...", "100 posts").
    pub status_message: String,
}

impl TitleBar {
    pub fn new(endpoint: String, status_message: String) -> Self {
        Self {
            endpoint,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            format!("Postdeck ({})", self.endpoint)
        } else {
            format!("Postdeck ({}) | {}", self.endpoint, self.status_message)
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}
