//! # Core Application Logic
//!
//! This module contains HealMate's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌──────────────────────────┐
//!                    │          CORE            │
//!                    │  (this module)           │
//!                    │                          │
//!                    │  • State (log, panel)    │
//!                    │  • Action (user intents) │
//!                    │  • Classifier (replies)  │
//!                    │                          │
//!                    │  No terminal. No I/O.    │
//!                    └────────────┬─────────────┘
//!                                 │ InputSource + ChatSurface
//!                    ┌────────────┴─────────────┐
//!                    ▼                          ▼
//!             ┌────────────┐             ┌────────────┐
//!             │    TUI     │             │   Tests    │
//!             │  Adapter   │             │ (recording │
//!             │ (ratatui)  │             │  surface)  │
//!             └────────────┘             └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, the session object owning the log and panel state
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`classifier`]: Keyword rules that pick a canned reply
//! - [`surface`]: Traits the presentation layer implements
//! - [`transcript`]: The append-only message log
//! - [`config`]: Settings resolution

pub mod action;
pub mod classifier;
pub mod config;
pub mod state;
pub mod surface;
pub mod transcript;
