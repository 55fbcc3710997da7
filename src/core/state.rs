//! # Application State
//!
//! Core business state for Lifedeck. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── store: Arc<dyn PatternStore>   // pattern persistence API
//! ├── board: ControlBoard            // shared simulator command state
//! ├── game: GameParameters           // simulator-owned flags + grid
//! ├── mode: Mode                     // 2D / 3D board variant
//! ├── route: Route                   // current screen
//! ├── phase: SubmissionPhase         // save-flow state machine
//! ├── error: Option<String>          // dismissible error banner
//! ├── success_visible: bool          // success banner
//! ├── status_message: String         // status bar text
//! ├── profile: Option<Profile>       // signed-in identity card data
//! └── patterns: Vec<SavedPattern>    // fetched per-user listing
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::Mode;
use crate::api::{PatternStore, SavedPattern};
use crate::core::command::ControlBoard;
use crate::core::pattern::Grid;
use crate::core::submission::SubmissionPhase;

/// Which screen the TUI is showing. Explicit, never derived from a path
/// string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Board,
    Login,
    Patterns(String),
}

/// Parameters owned by the external simulator, consumed here to drive the
/// deck: running/physics flags gate which controls are enabled, the username
/// gates saving, and the configuration is what gets saved.
#[derive(Debug, Clone, Default)]
pub struct GameParameters {
    pub is_running: bool,
    pub physics_active: bool,
    pub username: Option<String>,
    pub configuration: Grid,
}

/// Identity fields rendered on the profile card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub username: String,
    pub account_owner: Option<String>,
    pub email: Option<String>,
}

pub struct App {
    pub store: Arc<dyn PatternStore>,
    pub board: ControlBoard,
    pub game: GameParameters,
    pub mode: Mode,
    pub route: Route,
    pub phase: SubmissionPhase,
    pub error: Option<String>,
    pub success_visible: bool,
    pub status_message: String,
    pub profile: Option<Profile>,
    pub patterns: Vec<SavedPattern>,
    /// True while a listing fetch is in flight.
    pub patterns_loading: bool,
}

impl App {
    pub fn new(store: Arc<dyn PatternStore>, game: GameParameters, mode: Mode) -> Self {
        let profile = game.username.clone().map(|username| Profile {
            username,
            account_owner: None,
            email: None,
        });
        Self {
            store,
            board: ControlBoard::new(),
            game,
            mode,
            route: Route::Board,
            phase: SubmissionPhase::Idle,
            error: None,
            success_visible: false,
            status_message: String::from("Welcome to Lifedeck!"),
            profile,
            patterns: Vec::new(),
            patterns_loading: false,
        }
    }

    /// True while the save dialog should be on screen.
    pub fn dialog_open(&self) -> bool {
        self.phase == SubmissionPhase::Editing
    }
}
