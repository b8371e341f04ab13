//! # Core Application Logic
//!
//! This module contains Roam's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • MapScreen (wiring)   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    POI     │      │  Location  │
//!     │  Adapter   │      │  service   │      │  provider  │
//!     │ (ratatui)  │      │ (reqwest)  │      │ (reqwest)  │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`screen`]: The map screen — wires providers to state updates
//! - [`config`]: Settings with a defaults → file → env → CLI hierarchy

pub mod action;
pub mod config;
pub mod screen;
pub mod state;
