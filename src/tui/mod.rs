//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Loading**: draws every ~80ms for a smooth spinner.
//! - **Settled** (list or error on screen): sleeps up to 500ms, only redraws
//!   on events or terminal resize.
//!
//! ## The one fetch
//!
//! The fetch is spawned exactly once, before the loop starts, and its result
//! comes back over an mpsc channel as `Action::FetchCompleted`. Nothing in
//! the loop can spawn it again. If the loop has already exited when the
//! result lands, the channel send fails and the result is dropped with a
//! log line; state is never touched after teardown.

pub mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::feed::{HttpPostSource, PostSource};
use crate::tui::component::EventHandler;
use crate::tui::components::PostListState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub post_list: PostListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            post_list: PostListState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Spawns the single outbound fetch. Called exactly once, before the event
/// loop; the returned result is delivered through `tx` as an Action.
fn spawn_fetch(source: Arc<dyn PostSource>, tx: mpsc::Sender<Action>) {
    info!("Spawning fetch via {} source", source.name());
    tokio::spawn(async move {
        let result = source.fetch_posts().await;
        if tx.send(Action::FetchCompleted(result)).is_err() {
            // The UI has been torn down; dropping the result is the no-op.
            warn!("Fetch resolved after teardown: receiver dropped");
        }
    });
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source: Arc<dyn PostSource> = Arc::new(HttpPostSource::new(config.endpoint.clone()));
    let mut app = App::new(config.endpoint);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for the fetch result from the background task
    let (tx, rx) = mpsc::channel();
    spawn_fetch(source, tx);

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.fetch.is_loading();
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short while the spinner runs, long when settled
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => {}
                TuiEvent::Quit => {
                    if update(&mut app, Action::Quit) == Effect::Quit {
                        should_quit = true;
                    }
                }
                // Everything else is scrolling; route it to the list state
                _ => {
                    tui.post_list.handle_event(&event);
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle the fetch result from the background task
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            update(&mut app, action);
        }
    }

    ratatui::restore();
    Ok(())
}
