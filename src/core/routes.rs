//! # Content Routes
//!
//! Some content items open a dedicated screen when activated (the
//! "Interactive" simulation player, for instance). Which items do so is a
//! lookup table, not a hardcoded id check:
//!
//! ```text
//! content id "1"        ──► "Interactive"
//! kind SIMULATION       ──► (optional) "Simulator"
//! anything else         ──► no navigation
//! ```
//!
//! Id entries win over kind entries. The table comes from `[[routes]]` in
//! the config file; without any, `RouteTable::default()` keeps the single
//! `"1" -> "Interactive"` route.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::catalog::LearningContent;
use crate::core::kind::ContentKind;

pub const INTERACTIVE_DESTINATION: &str = "Interactive";
pub const INTERACTIVE_CONTENT_ID: &str = "1";

/// The external navigation collaborator. Receives "go to this destination" requests.
pub trait NavigationSink {
    fn navigate(&mut self, destination: &str);
}

/// A `[[routes]]` entry from the config file. Set `content_id` or `kind`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RouteEntry {
    pub content_id: Option<String>,
    pub kind: Option<String>,
    pub destination: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteTable {
    by_id: HashMap<String, String>,
    by_kind: HashMap<ContentKind, String>,
}

impl RouteTable {
    pub fn empty() -> Self {
        Self {
            by_id: HashMap::new(),
            by_kind: HashMap::new(),
        }
    }

    pub fn with_content(mut self, content_id: impl Into<String>, destination: impl Into<String>) -> Self {
        self.by_id.insert(content_id.into(), destination.into());
        self
    }

    pub fn with_kind(mut self, kind: ContentKind, destination: impl Into<String>) -> Self {
        self.by_kind.insert(kind, destination.into());
        self
    }

    /// Build from config entries. Entries naming neither an id nor a kind are
    /// skipped (and reported back so the caller can log them).
    pub fn from_entries(entries: &[RouteEntry]) -> (Self, Vec<RouteEntry>) {
        let mut table = Self::empty();
        let mut skipped = Vec::new();
        for entry in entries {
            match (&entry.content_id, &entry.kind) {
                (Some(id), _) => table.by_id.insert(id.clone(), entry.destination.clone()),
                (None, Some(kind)) => table
                    .by_kind
                    .insert(ContentKind::from(kind.as_str()), entry.destination.clone()),
                (None, None) => {
                    skipped.push(entry.clone());
                    continue;
                }
            };
        }
        (table, skipped)
    }

    pub fn destination_for(&self, content: &LearningContent) -> Option<&str> {
        self.by_id
            .get(&content.id)
            .or_else(|| self.by_kind.get(&content.kind))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty() && self.by_kind.is_empty()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::empty().with_content(INTERACTIVE_CONTENT_ID, INTERACTIVE_DESTINATION)
    }
}
