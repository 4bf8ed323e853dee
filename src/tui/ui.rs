//! Frame layout: the title bar on top, and below it exactly one of the
//! three views, chosen purely from the current `FetchState`.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::{App, FetchState};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ErrorView, LoadingView, PostList, TitleBar};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0)]);
    let [title_area, main_area] = layout.areas(frame.area());

    let mut title_bar = TitleBar::new(app.endpoint.clone(), app.status_message.clone());
    title_bar.render(frame, title_area);

    // The displayed view is a pure function of the tri-state; never two at once.
    match &app.fetch {
        FetchState::Loading => {
            LoadingView::new(spinner_frame).render(frame, main_area);
        }
        FetchState::Failed(message) => {
            ErrorView::new(message.clone()).render(frame, main_area);
        }
        FetchState::Succeeded(posts) => {
            PostList::new(&mut tui.post_list, posts).render(frame, main_area);
        }
    }
}
