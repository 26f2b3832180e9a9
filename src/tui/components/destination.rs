//! # Destination Screen
//!
//! Overlay opened when activated content routes somewhere (the
//! "Interactive" player by default). The destination itself lives outside
//! this app; the overlay marks that the navigation request arrived and
//! waits to be dismissed.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationState {
    pub destination: String,
}

impl DestinationState {
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationEvent {
    Dismiss,
}

impl EventHandler for DestinationState {
    type Event = DestinationEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DestinationEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::Submit => Some(DestinationEvent::Dismiss),
            _ => None,
        }
    }
}

pub struct DestinationScreen<'a> {
    state: &'a DestinationState,
}

impl<'a> DestinationScreen<'a> {
    pub fn new(state: &'a DestinationState) -> Self {
        Self { state }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 40, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {} ", self.state.destination))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Esc Back ").centered())
            .padding(Padding::uniform(1));

        let body = vec![
            Line::from(Span::styled(
                self.state.destination.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                opened_message(&self.state.destination),
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(body)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, overlay);
    }
}

fn opened_message(destination: &str) -> String {
    format!("Opened in {destination}. Press Esc to return.")
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
