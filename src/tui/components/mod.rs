//! # TUI Components
//!
//! Each component file contains everything related to that component:
//! state types, event types, rendering logic, and tests.
//!
//! Stateless pieces (alerts) are plain render functions; stateful pieces
//! (control panel, save dialog, profile card) follow the persistent state +
//! event handler pattern and receive external data as props synced before
//! each frame.

pub mod alerts;
pub mod control_panel;
pub mod profile_card;
pub mod save_dialog;

pub use control_panel::{ControlPanelState, PanelEvent};
pub use profile_card::{ProfileCard, ProfileEvent};
pub use save_dialog::{DialogEvent, SaveDialogState};
