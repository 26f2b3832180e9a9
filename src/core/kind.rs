//! # Content Kinds
//!
//! What sort of learning unit an item is, and how it is labelled on screen.
//!
//! Kinds travel as their upper-case name (`"READING"`, `"VIDEO"`, ...).
//! Anything we don't recognise is kept verbatim in `ContentKind::Other` so a
//! catalog written for a newer version still loads.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum ContentKind {
    Reading,
    Simulation,
    Video,
    Other(String),
}

impl ContentKind {
    /// The wire/display name, e.g. `"READING"`.
    pub fn name(&self) -> &str {
        match self {
            ContentKind::Reading => "READING",
            ContentKind::Simulation => "SIMULATION",
            ContentKind::Video => "VIDEO",
            ContentKind::Other(name) => name,
        }
    }
}

impl From<String> for ContentKind {
    fn from(name: String) -> Self {
        match name.trim().to_ascii_uppercase().as_str() {
            "READING" => ContentKind::Reading,
            "SIMULATION" => ContentKind::Simulation,
            "VIDEO" => ContentKind::Video,
            _ => ContentKind::Other(name),
        }
    }
}

impl From<&str> for ContentKind {
    fn from(name: &str) -> Self {
        ContentKind::from(name.to_string())
    }
}

impl From<ContentKind> for String {
    fn from(kind: ContentKind) -> Self {
        kind.name().to_string()
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Display tag for a kind: an icon id plus a glyph the terminal can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindLabel {
    pub icon: &'static str,
    pub glyph: &'static str,
}

pub const READING_LABEL: KindLabel = KindLabel {
    icon: "book-open-text",
    glyph: "≡",
};
pub const SIMULATION_LABEL: KindLabel = KindLabel {
    icon: "waves",
    glyph: "~",
};
pub const VIDEO_LABEL: KindLabel = KindLabel {
    icon: "monitor-play",
    glyph: "▶",
};
/// Used for every kind without a dedicated icon.
pub const FALLBACK_LABEL: KindLabel = KindLabel {
    icon: "launcher",
    glyph: "•",
};

/// Map a kind to its label. Total: unknown kinds get `FALLBACK_LABEL`.
pub fn resolve_kind_label(kind: &ContentKind) -> KindLabel {
    match kind {
        ContentKind::Reading => READING_LABEL,
        ContentKind::Simulation => SIMULATION_LABEL,
        ContentKind::Video => VIDEO_LABEL,
        ContentKind::Other(_) => FALLBACK_LABEL,
    }
}
