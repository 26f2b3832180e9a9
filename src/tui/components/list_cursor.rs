//! Selection cursor shared by the card lists.

use ratatui::widgets::ListState;

use crate::tui::event::TuiEvent;

/// Selected row plus the ratatui `ListState` that scrolls to it.
#[derive(Debug, Default)]
pub struct ListCursor {
    len: usize,
    selected: usize,
    pub list_state: ListState,
}

impl ListCursor {
    pub fn new(len: usize) -> Self {
        let mut cursor = Self::default();
        cursor.reset(len);
        cursor
    }

    /// Point at the first row of a list with `len` rows.
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.selected = 0;
        self.list_state = ListState::default();
        if len > 0 {
            self.list_state.select(Some(0));
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn selected(&self) -> Option<usize> {
        (self.selected < self.len).then_some(self.selected)
    }

    /// Move for a navigation event. Returns true if the event was a movement key.
    pub fn apply(&mut self, event: &TuiEvent) -> bool {
        let target = match event {
            TuiEvent::CursorUp => self.selected.saturating_sub(1),
            TuiEvent::CursorDown => self.selected + 1,
            TuiEvent::First => 0,
            TuiEvent::Last => self.len.saturating_sub(1),
            _ => return false,
        };
        if self.len > 0 {
            self.selected = target.min(self.len - 1);
            self.list_state.select(Some(self.selected));
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_are_clamped() {
        let mut cursor = ListCursor::new(3);
        cursor.apply(&TuiEvent::CursorUp);
        assert_eq!(cursor.selected(), Some(0));
        for _ in 0..5 {
            cursor.apply(&TuiEvent::CursorDown);
        }
        assert_eq!(cursor.selected(), Some(2));
        cursor.apply(&TuiEvent::First);
        assert_eq!(cursor.selected(), Some(0));
        cursor.apply(&TuiEvent::Last);
        assert_eq!(cursor.selected(), Some(2));
        assert_eq!(cursor.list_state.selected(), Some(2));
    }

    #[test]
    fn test_empty_list_has_no_selection() {
        let mut cursor = ListCursor::new(0);
        assert!(cursor.apply(&TuiEvent::CursorDown));
        assert_eq!(cursor.selected(), None);
        assert_eq!(cursor.list_state.selected(), None);
    }

    #[test]
    fn test_non_movement_events_pass_through() {
        let mut cursor = ListCursor::new(2);
        assert!(!cursor.apply(&TuiEvent::Submit));
        assert!(!cursor.apply(&TuiEvent::Escape));
    }

    #[test]
    fn test_reset_returns_to_top() {
        let mut cursor = ListCursor::new(4);
        cursor.apply(&TuiEvent::Last);
        cursor.reset(2);
        assert_eq!(cursor.selected(), Some(0));
        assert_eq!(cursor.len(), 2);
    }
}
