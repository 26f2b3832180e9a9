//! # Subject List Component
//!
//! The dashboard: one card per subject with its description and the average
//! progress of its content.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SubjectListState` lives in `TuiState`
//! - `SubjectList` is created each frame with borrowed state

use std::rc::Rc;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::catalog::Subject;
use crate::core::progress::{average_progress, percent_label};
use crate::tui::component::EventHandler;
use crate::tui::components::list_cursor::ListCursor;
use crate::tui::components::text::{progress_bar, truncate_str};
use crate::tui::event::TuiEvent;

pub const DASHBOARD_TITLE: &str = "Interactive Learning";
const HIGHLIGHT_SYMBOL: &str = "› ";

/// Persistent state for the dashboard list.
#[derive(Debug)]
pub struct SubjectListState {
    pub cursor: ListCursor,
}

impl SubjectListState {
    pub fn new(subject_count: usize) -> Self {
        Self {
            cursor: ListCursor::new(subject_count),
        }
    }
}

/// Events emitted by the dashboard list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectListEvent {
    Open(usize),
}

impl EventHandler for SubjectListState {
    type Event = SubjectListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SubjectListEvent> {
        if self.cursor.apply(event) {
            return None;
        }
        match event {
            TuiEvent::Submit => self.cursor.selected().map(SubjectListEvent::Open),
            _ => None,
        }
    }
}

/// Transient render wrapper for the dashboard.
pub struct SubjectList<'a> {
    state: &'a mut SubjectListState,
    subjects: &'a [Rc<Subject>],
}

impl<'a> SubjectList<'a> {
    pub fn new(state: &'a mut SubjectListState, subjects: &'a [Rc<Subject>]) -> Self {
        Self { state, subjects }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {DASHBOARD_TITLE} "))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" ↑↓ Move  Enter Open  q Quit ").centered())
            .padding(Padding::horizontal(1));

        if self.subjects.is_empty() {
            let empty = Paragraph::new("No subjects available.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        // borders + padding + highlight symbol
        let inner_width = area.width.saturating_sub(4 + HIGHLIGHT_SYMBOL.width() as u16) as usize;
        let items: Vec<ListItem> = self
            .subjects
            .iter()
            .map(|subject| subject_card(subject, inner_width))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_symbol(HIGHLIGHT_SYMBOL)
            .highlight_style(Style::default().fg(Color::Cyan));

        frame.render_stateful_widget(list, area, &mut self.state.cursor.list_state);
    }
}

fn subject_card(subject: &Subject, width: usize) -> ListItem<'static> {
    let progress = average_progress(&subject.content);
    let percent = percent_label(progress);
    // bar + space + "100%"
    let bar_width = width.saturating_sub(5);

    let lines = vec![
        Line::from(Span::styled(
            truncate_str(&subject.name, width),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate_str(&subject.description, width),
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![
            Span::styled(progress_bar(progress, bar_width), Style::default().fg(Color::Green)),
            Span::raw(format!(" {percent:>4}")),
        ]),
        Line::default(),
    ];
    ListItem::new(Text::from(lines))
}
