//! # Content List Component
//!
//! The detail view for one subject: each learning item with its kind icon,
//! title, kind name and its own progress bar.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ContentListState` lives in `TuiState`, reset whenever a subject opens
//! - `ContentList` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::catalog::{LearningContent, Subject};
use crate::core::kind::{ContentKind, resolve_kind_label};
use crate::core::progress::percent_label;
use crate::tui::component::EventHandler;
use crate::tui::components::list_cursor::ListCursor;
use crate::tui::components::text::{progress_bar, truncate_str};
use crate::tui::event::TuiEvent;

const HIGHLIGHT_SYMBOL: &str = "› ";

#[derive(Debug, Default)]
pub struct ContentListState {
    pub cursor: ListCursor,
}

impl ContentListState {
    /// Start over at the top of a subject with `item_count` items.
    pub fn reset(&mut self, item_count: usize) {
        self.cursor.reset(item_count);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentListEvent {
    Activate(usize),
    Back,
}

impl EventHandler for ContentListState {
    type Event = ContentListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ContentListEvent> {
        if self.cursor.apply(event) {
            return None;
        }
        match event {
            TuiEvent::Escape => Some(ContentListEvent::Back),
            TuiEvent::Submit => self.cursor.selected().map(ContentListEvent::Activate),
            _ => None,
        }
    }
}

pub struct ContentList<'a> {
    state: &'a mut ContentListState,
    subject: &'a Subject,
}

impl<'a> ContentList<'a> {
    pub fn new(state: &'a mut ContentListState, subject: &'a Subject) -> Self {
        Self { state, subject }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" ← {} ", self.subject.name))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" ↑↓ Move  Enter Open  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        if self.subject.content.is_empty() {
            let empty = Paragraph::new("No learning content yet.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let inner_width = area.width.saturating_sub(4 + HIGHLIGHT_SYMBOL.width() as u16) as usize;
        let items: Vec<ListItem> = self
            .subject
            .content
            .iter()
            .map(|content| content_card(content, inner_width))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_symbol(HIGHLIGHT_SYMBOL)
            .highlight_style(Style::default().fg(Color::Cyan));

        frame.render_stateful_widget(list, area, &mut self.state.cursor.list_state);
    }
}

fn content_card(content: &LearningContent, width: usize) -> ListItem<'static> {
    let label = resolve_kind_label(&content.kind);
    let progress = content.progress();
    // glyph + space
    let text_width = width.saturating_sub(label.glyph.width() + 1);
    let bar_width = text_width.saturating_sub(5);

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", label.glyph), kind_style(&content.kind)),
            Span::styled(
                truncate_str(&content.title, text_width),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw(" ".repeat(label.glyph.width() + 1)),
            Span::styled(
                truncate_str(content.kind.name(), text_width),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(vec![
            Span::raw(" ".repeat(label.glyph.width() + 1)),
            Span::styled(progress_bar(progress, bar_width), Style::default().fg(Color::Green)),
            Span::raw(format!(" {:>4}", percent_label(progress))),
        ]),
        Line::default(),
    ];
    ListItem::new(Text::from(lines))
}

fn kind_style(kind: &ContentKind) -> Style {
    match kind {
        ContentKind::Reading => Style::default().fg(Color::Yellow),
        ContentKind::Simulation => Style::default().fg(Color::Magenta),
        ContentKind::Video => Style::default().fg(Color::Red),
        ContentKind::Other(_) => Style::default().fg(Color::DarkGray),
    }
}
