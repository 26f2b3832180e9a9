//! # Core Application Logic
//!
//! This module contains BridgeLearn's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (subjects)   │
//!                    │  • Navigator (view)     │
//!                    │  • Action / update()    │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │   other    │
//!             │  Adapter   │          │  adapters  │
//!             │ (ratatui)  │          │            │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: `Subject` / `LearningContent` and catalog loading
//! - [`navigator`]: selection state and the derived `View`
//! - [`progress`], [`kind`]: pure helpers used when drawing cards
//! - [`routes`]: which content opens which destination
//! - [`state`]: the `App` struct, all application state in one place
//! - [`action`]: the `Action` enum and `update()` reducer
//! - [`config`]: layered settings

pub mod action;
pub mod catalog;
pub mod config;
pub mod kind;
pub mod navigator;
pub mod progress;
pub mod routes;
pub mod state;
