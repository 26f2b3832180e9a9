//! # Application State
//!
//! Core business state for BridgeLearn. This module contains domain logic
//! only, no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── navigator: Navigator        // catalog + selected subject
//! ├── routes: RouteTable          // content -> destination lookup
//! └── status_message: String      // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::rc::Rc;

use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::navigator::Navigator;
use crate::core::routes::RouteTable;

pub const WELCOME_MESSAGE: &str = "Pick a subject to start learning";

#[derive(Debug)]
pub struct App {
    pub navigator: Navigator,
    pub routes: RouteTable,
    pub status_message: String,
}

impl App {
    pub fn new(catalog: Rc<Catalog>, routes: RouteTable) -> Self {
        Self {
            navigator: Navigator::new(catalog),
            routes,
            status_message: String::from(WELCOME_MESSAGE),
        }
    }

    pub fn from_config(catalog: Rc<Catalog>, config: &ResolvedConfig) -> Self {
        Self::new(catalog, config.routes.clone())
    }
}
