//! # Control Panel Component
//!
//! The deck itself: a navigable list of simulator controls. Entry order and
//! the disabled rules mirror the board's button group:
//!
//! - an active physics simulation disables everything except the physics
//!   menu and Save
//! - a running simulation additionally disables the size controls
//! - the 3D effects and physics menus only exist in ThreeD mode
//!
//! Disabled entries stay visible and selectable but never emit a trigger;
//! enforcement lives here, not in the dispatcher.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding};

use crate::Mode;
use crate::core::command::{ControlAction, ControlInput};
use crate::core::state::GameParameters;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// One row of the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelEntry {
    pub input: ControlInput,
    pub label: &'static str,
    pub enabled: bool,
}

/// Events emitted by the control panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    Trigger(ControlInput),
}

/// Persistent state for the control panel.
pub struct ControlPanelState {
    pub entries: Vec<PanelEntry>,
    pub selected: usize,
    list_state: ListState,
}

impl ControlPanelState {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            entries: Vec::new(),
            selected: 0,
            list_state,
        }
    }

    /// Rebuild the entry list from the current game flags. Called once per
    /// frame before events are routed.
    pub fn sync(&mut self, mode: Mode, game: &GameParameters) {
        self.entries = build_entries(mode, game);
        if self.selected >= self.entries.len() {
            self.selected = self.entries.len().saturating_sub(1);
        }
        self.list_state.select(Some(self.selected));
    }
}

impl Default for ControlPanelState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for ControlPanelState {
    type Event = PanelEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<PanelEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                if !self.entries.is_empty() {
                    self.selected = (self.selected + 1).min(self.entries.len() - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::Submit => {
                let entry = self.entries.get(self.selected)?;
                // Disabled controls are not dispatchable
                if !entry.enabled {
                    return None;
                }
                Some(PanelEvent::Trigger(entry.input))
            }
            _ => None,
        }
    }
}

impl Component for ControlPanelState {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let style = if !entry.enabled {
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
                } else if matches!(entry.input, ControlInput::PhysicsMenu) {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let style = if i == self.selected {
                    style.add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    style
                };
                ListItem::new(Line::from(entry.label).style(style))
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Controls ")
            .padding(Padding::horizontal(1));

        frame.render_stateful_widget(List::new(items).block(block), area, &mut self.list_state);
    }
}

fn build_entries(mode: Mode, game: &GameParameters) -> Vec<PanelEntry> {
    let physics = game.physics_active;
    let running = game.is_running;

    let entry = |action: ControlAction, enabled: bool| PanelEntry {
        input: ControlInput::Action(action),
        label: action.label(),
        enabled,
    };

    let mut entries = vec![
        entry(ControlAction::Start, !physics),
        entry(ControlAction::Stop, !physics),
        entry(ControlAction::Reset, !physics),
        entry(ControlAction::Randomise, !physics),
        entry(ControlAction::Clear, !physics),
        entry(ControlAction::Faster, !physics),
        entry(ControlAction::Slower, !physics),
        // Size changes only make sense on a paused board
        entry(ControlAction::Larger, !physics && !running),
        entry(ControlAction::Smaller, !physics && !running),
        entry(ControlAction::Edge, !physics),
        entry(ControlAction::Wrap, !physics),
        entry(ControlAction::EnableClick, !physics),
        entry(ControlAction::DisableClick, !physics),
    ];

    if mode == Mode::ThreeD {
        entries.push(entry(ControlAction::Stars, !physics));
        entries.push(entry(ControlAction::Sky, !physics));
        entries.push(entry(ControlAction::Bloom, !physics));
        entries.push(entry(ControlAction::ToggleText, !physics));
        // The menu label itself: selectable, dispatches as the inert sentinel
        entries.push(PanelEntry {
            input: ControlInput::PhysicsMenu,
            label: "Physics",
            enabled: true,
        });
        entries.push(entry(ControlAction::EnablePhysics, true));
        entries.push(entry(ControlAction::DisablePhysics, true));
    }

    entries.push(entry(ControlAction::Save, true));
    entries
}
