//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::rc::Rc;

use crate::core::catalog::{Catalog, LearningContent, Subject};
use crate::core::kind::ContentKind;
use crate::core::routes::{NavigationSink, RouteTable};
use crate::core::state::App;

/// Records every navigation request instead of acting on it.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub requests: Vec<String>,
}

impl NavigationSink for RecordingSink {
    fn navigate(&mut self, destination: &str) {
        self.requests.push(destination.to_string());
    }
}

/// Three subjects: "Algebra" (routed item "1" first), "Poetry", and "Empty" with no content.
pub fn test_catalog() -> Catalog {
    Catalog::new(vec![
        Subject::new(
            "Algebra",
            "Equations and inequalities",
            "sigma",
            vec![
                LearningContent::new("1", "Balance Scales", ContentKind::Simulation, 0.2),
                LearningContent::new("2", "Solving for x", ContentKind::Reading, 0.4),
                LearningContent::new("3", "Word Problems", ContentKind::Video, 0.6),
            ],
        ),
        Subject::new(
            "Poetry",
            "Reading verse aloud",
            "quill",
            vec![LearningContent::new(
                "p1",
                "Sonnets",
                ContentKind::Other("PODCAST".to_string()),
                1.0,
            )],
        ),
        Subject::new("Empty", "Nothing here yet", "box", Vec::new()),
    ])
}

/// Creates a test App over `test_catalog()` with the default routes.
pub fn test_app() -> App {
    App::new(Rc::new(test_catalog()), RouteTable::default())
}

/// Rows of a rendered buffer as plain strings, for asserting on screen text.
pub fn buffer_lines(buffer: &ratatui::buffer::Buffer) -> Vec<String> {
    let width = buffer.area.width.max(1) as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}
