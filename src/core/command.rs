//! # Simulator Commands
//!
//! Every button and menu item on the control deck maps to a `ControlAction`.
//! The `ControlBoard` owns the shared command state the external simulation
//! controller reads from, and `dispatch()` defines the merge semantics.
//!
//! One owner, one update method, last write wins: consuming views hold the
//! board through `App` rather than an ambient shared context.

/// A discrete simulator control. The fixed set of action ids the deck emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Start,
    Stop,
    Reset,
    Randomise,
    Clear,
    Faster,
    Slower,
    Larger,
    Smaller,
    Edge,
    Wrap,
    EnableClick,
    DisableClick,
    Stars,
    Sky,
    Bloom,
    ToggleText,
    EnablePhysics,
    DisablePhysics,
    Save,
}

impl ControlAction {
    /// Returns a human-readable label for display
    pub fn label(self) -> &'static str {
        match self {
            ControlAction::Start => "Start",
            ControlAction::Stop => "Stop",
            ControlAction::Reset => "Reset",
            ControlAction::Randomise => "Randomise",
            ControlAction::Clear => "Clear",
            ControlAction::Faster => "Faster",
            ControlAction::Slower => "Slower",
            ControlAction::Larger => "Larger",
            ControlAction::Smaller => "Smaller",
            ControlAction::Edge => "Hard edge",
            ControlAction::Wrap => "Wrap around",
            ControlAction::EnableClick => "Interact: enable",
            ControlAction::DisableClick => "Interact: disable",
            ControlAction::Stars => "Stars",
            ControlAction::Sky => "Sky",
            ControlAction::Bloom => "Bloom (toggle)",
            ControlAction::ToggleText => "3D text (toggle)",
            ControlAction::EnablePhysics => "Physics: enable",
            ControlAction::DisablePhysics => "Physics: disable",
            ControlAction::Save => "Save pattern",
        }
    }
}

/// What a panel interaction carries into the dispatcher.
///
/// `PhysicsMenu` is the inert menu-label sentinel: it reaches the dispatcher
/// like any other interaction but never produces a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlInput {
    Action(ControlAction),
    PhysicsMenu,
}

/// One user-initiated simulation command. Produced per interaction, consumed
/// immediately by the external controller, never persisted.
///
/// The speed/size modifiers are rate steps, not absolute values: each
/// dispatch emits step 1 and the controller accumulates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Command {
    pub action: Option<ControlAction>,
    pub speed_modifier: Option<u32>,
    pub size_modifier: Option<u32>,
}

/// Owner of the shared command state.
///
/// Consuming views hold the board through `App`; the external controller
/// reads `current()` after each dispatch.
#[derive(Debug, Default)]
pub struct ControlBoard {
    current: Command,
}

impl ControlBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last command dispatched.
    pub fn current(&self) -> &Command {
        &self.current
    }

    /// Translate one interaction into the shared command state.
    ///
    /// Returns true if the state changed. Semantics:
    /// - `None` (no action id) and the physics menu label are no-ops.
    /// - Faster/Slower replace the whole command with a fresh speed step.
    /// - Larger/Smaller replace the whole command with a fresh size step.
    /// - Everything else shallow-merges: only `action` is replaced.
    pub fn dispatch(&mut self, input: Option<ControlInput>) -> bool {
        let action = match input {
            None | Some(ControlInput::PhysicsMenu) => return false,
            Some(ControlInput::Action(action)) => action,
        };

        // Step counter is local to this dispatch: it always emits 1.
        // The external controller accumulates across commands.
        let mut step = 0;

        match action {
            ControlAction::Faster | ControlAction::Slower => {
                step += 1;
                self.current = Command {
                    action: Some(action),
                    speed_modifier: Some(step),
                    size_modifier: None,
                };
            }
            ControlAction::Larger | ControlAction::Smaller => {
                step += 1;
                self.current = Command {
                    action: Some(action),
                    speed_modifier: None,
                    size_modifier: Some(step),
                };
            }
            other => {
                self.current.action = Some(other);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_without_action_is_noop() {
        let mut board = ControlBoard::new();
        board.dispatch(Some(ControlInput::Action(ControlAction::Start)));
        let before = *board.current();

        assert!(!board.dispatch(None));
        assert_eq!(*board.current(), before);
    }

    #[test]
    fn test_physics_menu_label_is_inert() {
        let mut board = ControlBoard::new();
        assert!(!board.dispatch(Some(ControlInput::PhysicsMenu)));
        assert_eq!(*board.current(), Command::default());
    }

    #[test]
    fn test_faster_twice_emits_step_one_both_times() {
        let mut board = ControlBoard::new();

        board.dispatch(Some(ControlInput::Action(ControlAction::Faster)));
        assert_eq!(board.current().speed_modifier, Some(1));

        board.dispatch(Some(ControlInput::Action(ControlAction::Faster)));
        assert_eq!(board.current().speed_modifier, Some(1));
    }

    #[test]
    fn test_speed_dispatch_replaces_whole_command() {
        let mut board = ControlBoard::new();
        board.dispatch(Some(ControlInput::Action(ControlAction::Larger)));
        assert_eq!(board.current().size_modifier, Some(1));

        board.dispatch(Some(ControlInput::Action(ControlAction::Slower)));
        assert_eq!(board.current().action, Some(ControlAction::Slower));
        assert_eq!(board.current().speed_modifier, Some(1));
        // Full replace: the earlier size step does not survive
        assert_eq!(board.current().size_modifier, None);
    }

    #[test]
    fn test_plain_action_merges_and_preserves_modifiers() {
        let mut board = ControlBoard::new();
        board.dispatch(Some(ControlInput::Action(ControlAction::Faster)));

        board.dispatch(Some(ControlInput::Action(ControlAction::Stop)));
        assert_eq!(board.current().action, Some(ControlAction::Stop));
        assert_eq!(board.current().speed_modifier, Some(1));
    }
}
