//! # Error View Component
//!
//! Shown when the fetch has failed. An illustration (the terminal stand-in
//! for the original error image asset) above the user-facing message.
//!
//! The message is fixed by the reducer; this component renders whatever
//! `FetchState::Failed` carries and prefixes it with "An error has occurred:".

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

const ERROR_ART: &[&str] = &[
    r"   _______________   ",
    r"  /               \  ",
    r" |   ___     ___   | ",
    r" |  | X |   | X |  | ",
    r" |  |___|   |___|  | ",
    r" |                 | ",
    r" |    _________    | ",
    r" |   /         \   | ",
    r"  \_/           \_/  ",
];

pub struct ErrorView {
    pub message: String,
}

impl ErrorView {
    pub fn new(message: String) -> Self {
        Self { message }
    }
}

impl Component for ErrorView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let art_height = ERROR_ART.len() as u16;

        let [art_area, _spacer, text_area] = Layout::vertical([
            Constraint::Length(art_height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(area);

        let art_lines: Vec<Line> = ERROR_ART.iter().map(|l| Line::from(*l)).collect();
        let art = Paragraph::new(art_lines)
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        frame.render_widget(art, art_area);

        let text = Paragraph::new(format!("An error has occurred: {}", self.message))
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(text, text_area);
    }
}
