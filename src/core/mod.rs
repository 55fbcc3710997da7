//! # Core Application Logic
//!
//! This module contains Lifedeck's business logic.
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
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    Web     │      │ Simulator  │
//!     │  Adapter   │      │  Adapter   │      │ (external) │
//!     │ (ratatui)  │      │  (future)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum — everything that can happen in the app
//! - [`command`]: The `ControlBoard` — shared command state for the simulator
//! - [`submission`]: The pattern save flow — validation and phases
//! - [`pattern`]: Grid-to-body encoding helpers
//! - [`config`]: Settings file loading and resolution

pub mod action;
pub mod command;
pub mod config;
pub mod pattern;
pub mod state;
pub mod submission;
