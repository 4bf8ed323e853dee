//! The postdeck view components: one for each of the three fetch states,
//! plus the status bar.

pub mod error_view;
pub mod loading;
pub mod post_list;
pub mod title_bar;

pub use error_view::ErrorView;
pub use loading::LoadingView;
pub use post_list::{PostList, PostListState};
pub use title_bar::TitleBar;
