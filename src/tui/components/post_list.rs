//! # PostList Component
//!
//! Scrollable view of the fetched post listing.
//!
//! ## Responsibilities
//!
//! - Display the "Posts" heading and decorative illustration
//! - Display each post in server order: id, title as sub-heading, body
//! - Manage scrolling specific logic
//!
//! ## Architecture
//!
//! `PostList` is a transient component (created each frame) that wraps
//! `&'a mut PostListState` (persistent state) and the posts slice (props).
//!
//! Since `Component::render` takes `&mut self`, we can safely mutate the
//! state (including the height cache and scroll state) during the render
//! pass, aligning with Ratatui's `StatefulWidget` pattern.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::feed::Post;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// The terminal stand-in for the original blog-posts illustration.
const POSTS_ART: &[&str] = &[
    r" ____________________ ",
    r"| ================== |",
    r"| ==========         |",
    r"|                    |",
    r"| ================== |",
    r"| ==========         |",
    r"|____________________|",
];

/// Scroll state for the post list. Must be persisted in the parent TuiState.
pub struct PostListState {
    pub scroll_state: ScrollViewState,
    /// Cached per-entry heights (header rows included at index 0)
    pub heights: Vec<u16>,
    /// Width the cache was built for; a resize invalidates it
    cached_width: u16,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
}

impl Default for PostListState {
    fn default() -> Self {
        Self::new()
    }
}

impl PostListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            heights: Vec::new(),
            cached_width: 0,
            viewport_height: 0,
        }
    }

    fn total_height(&self) -> u16 {
        self.heights.iter().sum()
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    /// Prevents overscrolling past the last post.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.total_height().saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    fn scroll_to_top(&mut self) {
        self.scroll_state.set_offset(Position { x: 0, y: 0 });
    }

    fn scroll_to_bottom(&mut self) {
        let max_y = self.total_height().saturating_sub(self.viewport_height);
        self.scroll_state.set_offset(Position { x: 0, y: max_y });
    }
}

/// EventHandler is implemented on `PostListState` rather than `PostList`
/// because event handling needs the persistent scroll state, and `PostList`
/// is recreated each frame with fresh props.
impl EventHandler for PostListState {
    type Event = (); // Scrolling is handled internally; nothing bubbles up.

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
            }
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.clamp_scroll();
            }
            TuiEvent::ScrollToTop => self.scroll_to_top(),
            TuiEvent::ScrollToBottom => self.scroll_to_bottom(),
            _ => {}
        }
        None
    }
}

/// Scrollable post listing component.
/// Created fresh each frame with references to state and data.
pub struct PostList<'a> {
    pub state: &'a mut PostListState,
    pub posts: &'a [Post],
}

impl<'a> PostList<'a> {
    pub fn new(state: &'a mut PostListState, posts: &'a [Post]) -> Self {
        Self { state, posts }
    }

    /// The heading + illustration block rendered above the entries.
    fn header_paragraph() -> Paragraph<'static> {
        let mut lines = vec![
            Line::styled(
                "Posts",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
        ];
        lines.extend(
            POSTS_ART
                .iter()
                .map(|l| Line::styled(*l, Style::default().fg(Color::DarkGray))),
        );
        lines.push(Line::raw(""));
        Paragraph::new(lines).alignment(Alignment::Center)
    }

    fn header_height() -> u16 {
        // heading + blank + art + blank
        POSTS_ART.len() as u16 + 3
    }

    /// One post entry: bordered block keyed by the post id, title as a
    /// bold sub-heading, body wrapped below it.
    fn entry_paragraph(post: &Post) -> Paragraph<'_> {
        let lines = vec![
            Line::styled(
                post.title.as_str(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::raw(post.body.as_str()),
        ];
        Paragraph::new(lines)
            .block(
                Block::bordered()
                    .title(format!("#{}", post.id))
                    .border_style(Style::default().add_modifier(Modifier::DIM)),
            )
            .wrap(Wrap { trim: true })
    }

    fn entry_height(post: &Post, content_width: u16) -> u16 {
        let inner_width = content_width.saturating_sub(2);
        Self::entry_paragraph(post).line_count(inner_width) as u16
    }
}

impl<'a> Component for PostList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area

        // Rebuild the height cache on first render or after a resize.
        if self.state.cached_width != content_width
            || self.state.heights.len() != self.posts.len() + 1
        {
            self.state.heights.clear();
            self.state.heights.push(Self::header_height());
            for post in self.posts {
                self.state
                    .heights
                    .push(Self::entry_height(post, content_width));
            }
            self.state.cached_width = content_width;
        }

        let total_height = self.state.total_height();

        self.state.viewport_height = area.height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let header_rect = Rect::new(0, 0, content_width, self.state.heights[0]);
        scroll_view.render_widget(Self::header_paragraph(), header_rect);

        let mut y_offset = self.state.heights[0];
        for (post, &height) in self.posts.iter().zip(self.state.heights.iter().skip(1)) {
            let entry_rect = Rect::new(0, y_offset, content_width, height);
            scroll_view.render_widget(Self::entry_paragraph(post), entry_rect);
            y_offset += height;
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_posts;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(posts: &[Post], width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = PostListState::new();
        terminal
            .draw(|f| {
                let mut list = PostList::new(&mut state, posts);
                list.render(f, f.area());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_heading_and_illustration() {
        let text = render_to_text(&sample_posts(), 80, 40);
        assert!(text.contains("Posts"));
        assert!(text.contains("| ================== |"));
    }

    #[test]
    fn test_renders_entries_in_server_order() {
        let text = render_to_text(&sample_posts(), 80, 60);
        let first = text.find("first title").expect("first post rendered");
        let second = text.find("second title").expect("second post rendered");
        let third = text.find("third title").expect("third post rendered");
        assert!(first < second && second < third);
    }

    #[test]
    fn test_entries_keyed_by_post_id() {
        let posts = vec![Post {
            id: 42,
            title: "T".to_string(),
            body: "B".to_string(),
        }];
        let text = render_to_text(&posts, 80, 40);
        assert!(text.contains("#42"));
        assert!(text.contains('T'));
        assert!(text.contains('B'));
    }

    #[test]
    fn test_empty_listing_still_shows_heading() {
        let text = render_to_text(&[], 80, 40);
        assert!(text.contains("Posts"));
        // No entry borders below the header art.
        assert!(!text.contains('#'));
    }

    #[test]
    fn test_height_cache_counts_header_and_entries() {
        let posts = sample_posts();
        let backend = TestBackend::new(80, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = PostListState::new();
        terminal
            .draw(|f| {
                let mut list = PostList::new(&mut state, &posts);
                list.render(f, f.area());
            })
            .unwrap();
        assert_eq!(state.heights.len(), posts.len() + 1);
        // Each entry is title + body + 2 border rows.
        assert!(state.heights[1] >= 4);
    }

    #[test]
    fn test_scroll_events_move_offset() {
        let posts = sample_posts();
        let backend = TestBackend::new(80, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = PostListState::new();
        terminal
            .draw(|f| {
                let mut list = PostList::new(&mut state, &posts);
                list.render(f, f.area());
            })
            .unwrap();

        state.handle_event(&TuiEvent::ScrollDown);
        assert_eq!(state.scroll_state.offset().y, 1);

        state.handle_event(&TuiEvent::ScrollToTop);
        assert_eq!(state.scroll_state.offset().y, 0);

        state.handle_event(&TuiEvent::ScrollToBottom);
        let max_y = state
            .heights
            .iter()
            .sum::<u16>()
            .saturating_sub(state.viewport_height);
        assert_eq!(state.scroll_state.offset().y, max_y);
    }
}
