//! # TUI Components
//!
//! All UI pieces of the terminal interface.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: top line with location and status
//!
//! ### Stateful Components (Event-Driven)
//!
//! Persistent state lives in `TuiState`; a transient wrapper borrows it
//! each frame to render:
//! - `SubjectList`: dashboard of subject cards
//! - `ContentList`: one subject's learning items
//! - `DestinationScreen`: overlay for routed content
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (top status line)
//! ├── subject_list.rs  (dashboard)
//! ├── content_list.rs  (subject detail)
//! ├── destination.rs   (routed-content overlay)
//! ├── list_cursor.rs   (shared list selection)
//! └── text.rs          (truncation, progress bars)
//! ```

pub mod content_list;
pub mod destination;
pub mod list_cursor;
pub mod subject_list;
pub mod text;
mod title_bar;

pub use content_list::{ContentList, ContentListEvent, ContentListState};
pub use destination::{DestinationEvent, DestinationScreen, DestinationState};
pub use subject_list::{SubjectList, SubjectListEvent, SubjectListState};
pub use title_bar::TitleBar;
