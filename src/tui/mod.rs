//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The loop subscribes to the navigator: every selection change flips a
//! shared dirty flag. Frames are drawn only when that flag is set or an
//! event arrived, and the loop otherwise sleeps up to 500ms in `poll`.

mod component;
pub mod components;
mod event;
mod ui;

use log::{debug, info};
use std::cell::Cell;
use std::io::stdout;
use std::rc::Rc;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::navigator::View;
use crate::core::routes::NavigationSink;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    ContentListEvent, ContentListState, DestinationEvent, DestinationState, SubjectListEvent,
    SubjectListState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub subjects: SubjectListState,
    pub content: ContentListState,
    // Destination overlay (None = hidden)
    pub destination: Option<DestinationState>,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        Self {
            subjects: SubjectListState::new(app.navigator.catalog().len()),
            content: ContentListState::default(),
            destination: None,
        }
    }
}

/// The terminal's side of the navigation channel: show the destination overlay.
impl NavigationSink for TuiState {
    fn navigate(&mut self, destination: &str) {
        info!("Navigating to {}", destination);
        self.destination = Some(DestinationState::new(destination));
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse scroll, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

/// Route one terminal event to whatever is on screen, producing an action
/// for the core when the event means something to it.
pub fn route_event(tui: &mut TuiState, app: &App, event: &TuiEvent) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }

    // The overlay swallows everything until dismissed
    if let Some(destination) = tui.destination.as_mut() {
        if let Some(DestinationEvent::Dismiss) = destination.handle_event(event) {
            tui.destination = None;
        }
        return None;
    }

    match app.navigator.current_view() {
        View::Dashboard(subjects) => {
            if matches!(event, TuiEvent::Quit) {
                return Some(Action::Quit);
            }
            match tui.subjects.handle_event(event)? {
                SubjectListEvent::Open(index) => {
                    let item_count = subjects.get(index).map_or(0, |s| s.content.len());
                    tui.content.reset(item_count);
                    Some(Action::SelectSubject(index))
                }
            }
        }
        View::Detail(_) => {
            if matches!(event, TuiEvent::Quit) {
                return Some(Action::Quit);
            }
            match tui.content.handle_event(event)? {
                ContentListEvent::Activate(index) => Some(Action::ActivateContent(index)),
                ContentListEvent::Back => Some(Action::Back),
            }
        }
    }
}

/// Apply an action and carry out its effect. Returns true when the app should exit.
pub fn dispatch(app: &mut App, tui: &mut TuiState, action: Action) -> bool {
    match update(app, action) {
        Effect::None => false,
        Effect::Navigate(destination) => {
            tui.navigate(&destination);
            false
        }
        Effect::Quit => true,
    }
}

pub fn run(catalog: Catalog, config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(Rc::new(catalog), &config);
    let mut tui = TuiState::new(&app);

    let dirty = Rc::new(Cell::new(true)); // Force first frame
    let flag = Rc::clone(&dirty);
    app.navigator.subscribe(move |view| {
        debug!("View changed (dashboard: {})", view.is_dashboard());
        flag.set(true);
    });

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let result = event_loop(&mut terminal, &mut app, &mut tui, &dirty);

    ratatui::restore();
    info!("BridgeLearn shutting down");
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    dirty: &Cell<bool>,
) -> std::io::Result<()> {
    loop {
        if dirty.replace(false) {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(500));
        if first_event.is_some() {
            dirty.set(true);
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = route_event(tui, app, &event) else {
                continue;
            };
            if dispatch(app, tui, action) {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    fn setup() -> (App, TuiState) {
        let app = test_app();
        let tui = TuiState::new(&app);
        (app, tui)
    }

    /// Feed events through routing and dispatch, returning whether the app quit.
    fn feed(app: &mut App, tui: &mut TuiState, events: &[TuiEvent]) -> bool {
        for event in events {
            if let Some(action) = route_event(tui, app, event)
                && dispatch(app, tui, action)
            {
                return true;
            }
        }
        false
    }

    #[test]
    fn test_open_subject_and_back() {
        let (mut app, mut tui) = setup();
        feed(&mut app, &mut tui, &[TuiEvent::CursorDown, TuiEvent::Submit]);
        assert_eq!(
            app.navigator.current_view().subject().map(|s| s.name.as_str()),
            Some("Poetry")
        );
        assert_eq!(tui.content.cursor.len(), 1);

        feed(&mut app, &mut tui, &[TuiEvent::Escape]);
        assert!(app.navigator.current_view().is_dashboard());
    }

    #[test]
    fn test_activating_item_one_opens_interactive() {
        let (mut app, mut tui) = setup();
        feed(&mut app, &mut tui, &[TuiEvent::Submit, TuiEvent::Submit]);
        assert_eq!(
            tui.destination.as_ref().map(|d| d.destination.as_str()),
            Some("Interactive")
        );

        // Overlay eats Esc, subject stays open
        feed(&mut app, &mut tui, &[TuiEvent::Escape]);
        assert!(tui.destination.is_none());
        assert!(!app.navigator.current_view().is_dashboard());
    }

    #[test]
    fn test_activating_other_item_stays_put() {
        let (mut app, mut tui) = setup();
        feed(
            &mut app,
            &mut tui,
            &[TuiEvent::Submit, TuiEvent::CursorDown, TuiEvent::Submit],
        );
        assert!(tui.destination.is_none());
        assert_eq!(app.status_message, "Solving for x (READING)");
    }

    #[test]
    fn test_reopening_subject_resets_content_cursor() {
        let (mut app, mut tui) = setup();
        feed(
            &mut app,
            &mut tui,
            &[TuiEvent::Submit, TuiEvent::Last, TuiEvent::Escape, TuiEvent::Submit],
        );
        assert_eq!(tui.content.cursor.selected(), Some(0));
    }

    #[test]
    fn test_quit_from_anywhere() {
        let (mut app, mut tui) = setup();
        assert!(feed(&mut app, &mut tui, &[TuiEvent::Quit]));

        let (mut app, mut tui) = setup();
        feed(&mut app, &mut tui, &[TuiEvent::Submit, TuiEvent::Submit]);
        assert!(tui.destination.is_some());
        assert!(!feed(&mut app, &mut tui, &[TuiEvent::Quit]));
        assert!(feed(&mut app, &mut tui, &[TuiEvent::ForceQuit]));
    }
}
