//! # TitleBar Component
//!
//! Top status bar: app name, where the user is, and the latest status message.
//!
//! Stateless: it receives all data as props and renders a single line.
//!
//! 1. **Detail**: `"BridgeLearn › Physics | Opening Interactive"`
//! 2. **Dashboard**: `"BridgeLearn | Pick a subject to start learning"`
//! 3. **No status**: `"BridgeLearn"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub const APP_NAME: &str = "BridgeLearn";

pub struct TitleBar {
    /// Name of the open subject, `None` on the dashboard
    pub location: Option<String>,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(location: Option<String>, status_message: String) -> Self {
        Self {
            location,
            status_message,
        }
    }

    pub fn title_text(&self) -> String {
        let mut text = APP_NAME.to_string();
        if let Some(location) = &self.location {
            text.push_str(" › ");
            text.push_str(location);
        }
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(&self.status_message);
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.title_text(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}
