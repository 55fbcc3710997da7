//! # Actions
//!
//! Everything that can happen in Lifedeck becomes an `Action`.
//! User triggers a control? That's `Action::Control(input)`.
//! The API responds? That's `Action::SubmissionAccepted` or `Failed`.
//!
//! The `update()` function takes the current state and an action,
//! then mutates the state and returns an `Effect` for the I/O the caller
//! should perform. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: drive `update()` with a scripted action
//! sequence and assert on the resulting state.

use crate::api::{NewPattern, SavedPattern};
use crate::core::command::{ControlAction, ControlInput};
use crate::core::pattern;
use crate::core::state::{App, Route};
use crate::core::submission::{self, SubmissionPhase};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A control-panel interaction. `None` means the triggering element had
    /// no action id.
    Control(Option<ControlInput>),
    OpenSaveDialog,
    CloseSaveDialog,
    /// Submit the current board under the given name.
    SubmitPattern { name: String },
    SubmissionAccepted,
    SubmissionFailed(String),
    PatternsLoaded(Vec<SavedPattern>),
    PatternsFailed(String),
    DismissError,
    DismissSuccess,
    Navigate(Route),
    Quit,
}

/// I/O the caller must perform after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Spawn the API call that persists this pattern.
    SubmitPattern(NewPattern),
    /// Spawn the API call that fetches this owner's listing.
    FetchPatterns(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Control(input) => {
            if app.board.dispatch(input) {
                apply_command_flags(app);
                if let Some(action) = app.board.current().action {
                    app.status_message = action.label().to_string();
                }
            }
            Effect::None
        }

        Action::OpenSaveDialog => {
            if app.phase == SubmissionPhase::Idle {
                app.phase = SubmissionPhase::Editing;
            }
            Effect::None
        }

        Action::CloseSaveDialog => {
            if app.phase == SubmissionPhase::Editing {
                app.phase = SubmissionPhase::Idle;
            }
            Effect::None
        }

        Action::SubmitPattern { name } => {
            // The source had no in-flight guard; that was a latent
            // double-submit bug, so submits are ignored while one is pending.
            if app.phase == SubmissionPhase::Submitting {
                return Effect::None;
            }

            let body = pattern::encode_body(&app.game.configuration);
            if let Err(e) = submission::validate(app.game.username.as_deref(), &name, &body) {
                app.phase = SubmissionPhase::Idle;
                app.error = Some(e.to_string());
                return Effect::None;
            }

            // Validation guarantees a username at this point
            let owner = app.game.username.clone().unwrap_or_default();
            app.phase = SubmissionPhase::Submitting;
            app.status_message = format!("Saving '{name}'...");
            Effect::SubmitPattern(NewPattern { owner, name, body })
        }

        Action::SubmissionAccepted => {
            app.phase = SubmissionPhase::Succeeded;
            app.success_visible = true;
            app.status_message = String::from("Pattern saved");
            Effect::None
        }

        Action::SubmissionFailed(msg) => {
            app.phase = SubmissionPhase::Idle;
            app.error = Some(msg);
            Effect::None
        }

        Action::PatternsLoaded(patterns) => {
            app.patterns = patterns;
            app.patterns_loading = false;
            Effect::None
        }

        Action::PatternsFailed(msg) => {
            app.patterns_loading = false;
            app.error = Some(msg);
            Effect::None
        }

        Action::DismissError => {
            app.error = None;
            Effect::None
        }

        Action::DismissSuccess => {
            app.success_visible = false;
            app.phase = SubmissionPhase::Idle;
            Effect::None
        }

        Action::Navigate(route) => {
            app.route = route.clone();
            match route {
                Route::Patterns(owner) => {
                    app.patterns.clear();
                    app.patterns_loading = true;
                    Effect::FetchPatterns(owner)
                }
                _ => Effect::None,
            }
        }

        Action::Quit => Effect::Quit,
    }
}

/// Mirrors the flags the deck needs for its disabled rules off the last
/// command. The real accumulation (speed, size, the grid itself) belongs to
/// the external simulator.
fn apply_command_flags(app: &mut App) {
    match app.board.current().action {
        Some(ControlAction::Start) => app.game.is_running = true,
        Some(ControlAction::Stop) | Some(ControlAction::Clear) => app.game.is_running = false,
        Some(ControlAction::EnablePhysics) => app.game.physics_active = true,
        Some(ControlAction::DisablePhysics) => app.game.physics_active = false,
        _ => {}
    }
}
