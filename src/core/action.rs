//! # Actions
//!
//! Everything that can happen in BridgeLearn becomes an `Action`.
//! User picks a subject card? That's `Action::SelectSubject(index)`.
//! User presses Esc in a subject? That's `Action::Back`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing any I/O the adapter should
//! perform. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};
use std::rc::Rc;

use crate::core::navigator::View;
use crate::core::routes::NavigationSink;
use crate::core::state::{App, WELCOME_MESSAGE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Open the subject at this catalog index.
    SelectSubject(usize),
    /// Leave the open subject.
    Back,
    /// Activate the content item at this index of the open subject.
    ActivateContent(usize),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The adapter should open this destination.
    Navigate(String),
    Quit,
}

/// Captures the navigator's request so it can be handed back as an `Effect`.
#[derive(Default)]
struct PendingNavigation(Option<String>);

impl NavigationSink for PendingNavigation {
    fn navigate(&mut self, destination: &str) {
        self.0 = Some(destination.to_string());
    }
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::SelectSubject(index) => {
            if app.navigator.select_subject_at(index)
                && let Some(subject) = app.navigator.selected_subject()
            {
                app.status_message = format!("{} | {} items", subject.name, subject.content.len());
            }
            Effect::None
        }
        Action::Back => {
            if !app.navigator.current_view().is_dashboard() {
                app.navigator.clear_selected_subject();
                app.status_message = String::from(WELCOME_MESSAGE);
            }
            Effect::None
        }
        Action::ActivateContent(index) => {
            let subject = match app.navigator.current_view() {
                View::Detail(subject) => Rc::clone(subject),
                View::Dashboard(_) => return Effect::None,
            };
            let Some(content) = subject.content.get(index) else {
                return Effect::None;
            };

            let mut pending = PendingNavigation::default();
            app.navigator
                .activate_content(content, &app.routes, &mut pending);
            match pending.0 {
                Some(destination) => {
                    info!("Opening {} for content {}", destination, content.id);
                    app.status_message = format!("Opening {destination}");
                    Effect::Navigate(destination)
                }
                None => {
                    app.status_message = format!("{} ({})", content.title, content.kind);
                    Effect::None
                }
            }
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_select_and_back() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::SelectSubject(0)), Effect::None);
        assert_eq!(
            app.navigator.current_view().subject().map(|s| s.name.as_str()),
            Some("Algebra")
        );
        assert!(app.status_message.starts_with("Algebra"));

        assert_eq!(update(&mut app, Action::Back), Effect::None);
        assert!(app.navigator.current_view().is_dashboard());
        assert_eq!(app.status_message, WELCOME_MESSAGE);
    }

    #[test]
    fn test_back_on_dashboard_is_noop() {
        let mut app = test_app();
        app.status_message = "unchanged".to_string();
        assert_eq!(update(&mut app, Action::Back), Effect::None);
        assert!(app.navigator.current_view().is_dashboard());
        assert_eq!(app.status_message, "unchanged");
    }

    #[test]
    fn test_activate_interactive_item() {
        let mut app = test_app();
        update(&mut app, Action::SelectSubject(0));
        assert_eq!(
            update(&mut app, Action::ActivateContent(0)),
            Effect::Navigate("Interactive".to_string())
        );
    }

    #[test]
    fn test_activate_plain_item() {
        let mut app = test_app();
        update(&mut app, Action::SelectSubject(0));
        assert_eq!(update(&mut app, Action::ActivateContent(1)), Effect::None);
        assert_eq!(app.status_message, "Solving for x (READING)");
    }

    #[test]
    fn test_activate_ignored_on_dashboard_or_out_of_range() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::ActivateContent(0)), Effect::None);

        update(&mut app, Action::SelectSubject(2));
        assert_eq!(update(&mut app, Action::ActivateContent(0)), Effect::None);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
