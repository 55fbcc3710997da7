//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event model
//!
//! One loop thread. Handlers never overlap: every event is translated into
//! an `Action`, run through `update()`, and the returned `Effect` decides
//! what I/O to spawn. The only async work is the pattern API call, which
//! runs on a tokio task and resolves back into the loop through an mpsc
//! channel — last write wins.

pub mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{debug, info, warn};
use std::sync::{Arc, mpsc};

use ratatui::widgets::ListState;

use crate::api::{HttpPatternClient, PatternStore};
use crate::core::action::{Action, Effect, update};
use crate::core::command::{ControlAction, ControlInput};
use crate::core::config::ResolvedConfig;
use crate::core::pattern::Grid;
use crate::core::state::{App, GameParameters, Route};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    ControlPanelState, DialogEvent, PanelEvent, ProfileCard, ProfileEvent, SaveDialogState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub control_panel: ControlPanelState,
    pub save_dialog: SaveDialogState,
    /// Profile card overlay (false = hidden)
    pub profile_open: bool,
    /// Selection/scroll state for the pattern listing screen
    pub patterns_list: ListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            control_panel: ControlPanelState::new(),
            save_dialog: SaveDialogState::new(),
            profile_open: false,
            patterns_list: ListState::default(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

/// The board the deck starts with: a glider in the corner of an 8x8 grid.
// TODO: subscribe to the simulator's board feed instead of this stand-in.
fn starting_grid() -> Grid {
    let mut grid = vec![vec![0u8; 8]; 8];
    grid[0][1] = 1;
    grid[1][2] = 1;
    grid[2][0] = 1;
    grid[2][1] = 1;
    grid[2][2] = 1;
    grid
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let store: Arc<dyn PatternStore> =
        Arc::new(HttpPatternClient::new(config.server_base_url.clone()));
    let game = GameParameters {
        is_running: false,
        physics_active: false,
        username: config.username.clone(),
        configuration: starting_grid(),
    };
    let mut app = App::new(store, game, config.mode);
    if let Some(profile) = app.profile.as_mut() {
        profile.email = config.email.clone();
    }
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();

    // Channel for actions coming back from spawned API tasks
    let (tx, rx) = mpsc::channel();

    let mut should_quit = false;
    loop {
        // Sync component props with App state
        tui.control_panel.sync(app.mode, &app.game);
        tui.save_dialog.authenticated = app.game.username.is_some();

        terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;

        // Process first event + drain all pending events before the next draw
        let first_event = poll_event_timeout(std::time::Duration::from_millis(100));
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits regardless of focus
            if matches!(event, TuiEvent::ForceQuit) {
                should_quit = true;
                continue;
            }

            // The save dialog owns input while it is open
            if app.dialog_open() {
                if let Some(dialog_event) = tui.save_dialog.handle_event(&event) {
                    match dialog_event {
                        DialogEvent::Submit(name) => {
                            let effect = update(&mut app, Action::SubmitPattern { name });
                            handle_effect(&app, effect, &tx, &mut should_quit);
                        }
                        DialogEvent::LogIn => {
                            update(&mut app, Action::CloseSaveDialog);
                            update(&mut app, Action::Navigate(Route::Login));
                        }
                        DialogEvent::Dismiss => {
                            update(&mut app, Action::CloseSaveDialog);
                        }
                    }
                }
                continue;
            }

            // Then the profile card overlay
            if tui.profile_open {
                let profile_event = app
                    .profile
                    .as_ref()
                    .and_then(|profile| ProfileCard::new(profile).handle_event(&event));
                match profile_event {
                    Some(ProfileEvent::ViewPatterns(owner)) => {
                        tui.profile_open = false;
                        // Fresh listing starts at the top
                        tui.patterns_list = ListState::default();
                        let effect = update(&mut app, Action::Navigate(Route::Patterns(owner)));
                        handle_effect(&app, effect, &tx, &mut should_quit);
                    }
                    Some(ProfileEvent::Dismiss) => tui.profile_open = false,
                    None => {
                        if app.profile.is_none() {
                            tui.profile_open = false;
                        }
                    }
                }
                continue;
            }

            // Feedback banners swallow their dismissal keys
            if app.success_visible && matches!(event, TuiEvent::Submit | TuiEvent::Escape) {
                update(&mut app, Action::DismissSuccess);
                continue;
            }
            if app.error.is_some() && matches!(event, TuiEvent::Escape) {
                update(&mut app, Action::DismissError);
                continue;
            }

            match app.route {
                Route::Board => handle_board_event(&mut app, &mut tui, &event, &mut should_quit),
                Route::Patterns(_) | Route::Login => {
                    handle_listing_event(&mut app, &mut tui, &event, &mut should_quit)
                }
            }
        }

        // Handle actions coming back from API tasks
        while let Ok(action) = rx.try_recv() {
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            handle_effect(&app, effect, &tx, &mut should_quit);
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

fn handle_board_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent, should_quit: &mut bool) {
    match event {
        TuiEvent::InputChar('q') | TuiEvent::Escape => {
            if update(app, Action::Quit) == Effect::Quit {
                *should_quit = true;
            }
        }
        TuiEvent::InputChar('p') => {
            if app.profile.is_some() {
                tui.profile_open = true;
            }
        }
        _ => {
            if let Some(PanelEvent::Trigger(input)) = tui.control_panel.handle_event(event) {
                update(app, Action::Control(Some(input)));
                // Save doubles as a control and the dialog opener
                if input == ControlInput::Action(ControlAction::Save) {
                    update(app, Action::OpenSaveDialog);
                }
            }
        }
    }
}

fn handle_listing_event(
    app: &mut App,
    tui: &mut TuiState,
    event: &TuiEvent,
    should_quit: &mut bool,
) {
    match event {
        TuiEvent::Escape => {
            update(app, Action::Navigate(Route::Board));
        }
        TuiEvent::InputChar('q') => {
            if update(app, Action::Quit) == Effect::Quit {
                *should_quit = true;
            }
        }
        TuiEvent::CursorUp => {
            if !app.patterns.is_empty() {
                let prev = tui
                    .patterns_list
                    .selected()
                    .map(|i| i.saturating_sub(1))
                    .unwrap_or(0);
                tui.patterns_list.select(Some(prev));
            }
        }
        TuiEvent::CursorDown => {
            if !app.patterns.is_empty() {
                let next = tui
                    .patterns_list
                    .selected()
                    .map(|i| (i + 1).min(app.patterns.len() - 1))
                    .unwrap_or(0);
                tui.patterns_list.select(Some(next));
            }
        }
        _ => {}
    }
}

fn handle_effect(app: &App, effect: Effect, tx: &mpsc::Sender<Action>, should_quit: &mut bool) {
    match effect {
        Effect::None => {}
        Effect::Quit => *should_quit = true,
        Effect::SubmitPattern(pattern) => {
            info!(
                "Spawning pattern submission: {} for {}",
                pattern.name, pattern.owner
            );
            let store = app.store.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let action = match store.create_pattern(&pattern).await {
                    Ok(()) => Action::SubmissionAccepted,
                    Err(e) => Action::SubmissionFailed(e.to_string()),
                };
                if tx.send(action).is_err() {
                    warn!("Failed to send submission result: receiver dropped");
                }
            });
        }
        Effect::FetchPatterns(owner) => {
            info!("Spawning pattern listing fetch for {}", owner);
            let store = app.store.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let action = match store.list_patterns(&owner).await {
                    Ok(patterns) => Action::PatternsLoaded(patterns),
                    Err(e) => Action::PatternsFailed(e.to_string()),
                };
                if tx.send(action).is_err() {
                    warn!("Failed to send listing result: receiver dropped");
                }
            });
        }
    }
}
