//! Screen layout: one draw function per route plus the shared chrome
//! (title bar, status bar, overlays).

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Padding, Paragraph};

use crate::core::state::{App, Route};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ProfileCard, alerts};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, status_area] = layout.areas(frame.area());

    // Title bar
    let title_text = if app.status_message.is_empty() {
        format!("Lifedeck ({})", app.mode.label())
    } else {
        format!("Lifedeck ({}) | {}", app.mode.label(), app.status_message)
    };
    frame.render_widget(Span::raw(title_text), title_area);

    match &app.route {
        Route::Board => draw_board(frame, main_area, app, tui),
        Route::Patterns(owner) => draw_patterns(frame, main_area, app, tui, owner),
        Route::Login => draw_login(frame, main_area),
    }

    // Status bar: key help for the current screen
    let help = match app.route {
        Route::Board => " ↑/↓ Select  Enter Trigger  p Profile  q Quit ",
        _ => " Esc Back  q Quit ",
    };
    frame.render_widget(
        Span::styled(help, Style::default().fg(Color::DarkGray)),
        status_area,
    );

    // Overlays
    if app.dialog_open() {
        tui.save_dialog.render(frame, main_area);
    }
    if tui.profile_open {
        if let Some(profile) = &app.profile {
            ProfileCard::new(profile).render(frame, main_area);
        }
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    // The success banner replaces the deck until dismissed
    if app.success_visible {
        let [_, banner, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(6),
            Constraint::Fill(1),
        ])
        .areas(area);
        alerts::render_success(frame, banner);
        return;
    }

    let area = if let Some(msg) = &app.error {
        let [alert_area, rest] =
            Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(area);
        alerts::render_error(frame, alert_area, msg);
        rest
    } else {
        area
    };

    let [panel_area, grid_area] =
        Layout::horizontal([Constraint::Length(26), Constraint::Min(0)]).areas(area);

    tui.control_panel.render(frame, panel_area);
    draw_grid(frame, grid_area, app);
}

fn draw_grid(frame: &mut Frame, area: Rect, app: &App) {
    let state = if app.game.physics_active {
        "physics"
    } else if app.game.is_running {
        "running"
    } else {
        "paused"
    };
    let title = format!(" Board ({state}) ");

    let lines: Vec<Line> = app
        .game
        .configuration
        .iter()
        .map(|row| {
            let cells: String = row
                .iter()
                .map(|cell| if *cell == 0 { "· " } else { "█ " })
                .collect();
            Line::from(cells)
        })
        .collect();

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(title),
        );
    frame.render_widget(board, area);
}

fn draw_patterns(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, owner: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {owner}'s patterns "))
        .padding(Padding::horizontal(1));

    if app.patterns_loading {
        let loading = Paragraph::new("Loading...")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(loading, area);
        return;
    }

    if app.patterns.is_empty() {
        let empty = Paragraph::new("No saved patterns.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .patterns
        .iter()
        .enumerate()
        .map(|(i, pattern)| {
            let date = pattern
                .created_at
                .map(|ts| ts.format("%b %d").to_string())
                .unwrap_or_default();
            let style = if Some(i) == tui.patterns_list.selected() {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::Gray)
            };
            let line = Line::from(vec![
                Span::styled(format!("{:<20}", pattern.name), style),
                Span::styled(truncate_str(&pattern.body, 32), style),
                Span::styled(format!("  {date}"), style),
            ]);
            ListItem::new(line)
        })
        .collect();

    frame.render_stateful_widget(List::new(items).block(block), area, &mut tui.patterns_list);
}

fn draw_login(frame: &mut Frame, area: Rect) {
    let text = "Authentication happens outside the deck.\n\n\
                Sign in on the simulator site, then set your username in\n\
                ~/.lifedeck/config.toml (or pass --user) and restart.";
    let login = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Log in "),
        );
    frame.render_widget(login, area);
}

/// Truncate a string to fit within `max_width` chars, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.len() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        ".".repeat(max_width)
    } else {
        format!("{}...", &s[..max_width - 3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use crate::core::action::{Action, update};
    use crate::core::state::Route;
    use crate::test_support::test_app;
    use crate::tui::TuiState;

    fn render_to_text(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_board_screen_renders_controls_and_board() {
        let app = test_app();
        let mut tui = TuiState::new();
        tui.control_panel.sync(app.mode, &app.game);

        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("Controls"));
        assert!(text.contains("Board"));
        assert!(text.contains("Randomise"));
    }

    #[test]
    fn test_error_banner_shows_message() {
        let mut app = test_app();
        update(&mut app, Action::SubmissionFailed("duplicate name".to_string()));
        let mut tui = TuiState::new();
        tui.control_panel.sync(app.mode, &app.game);

        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("Something went wrong..."));
        assert!(text.contains("duplicate name"));
    }

    #[test]
    fn test_success_banner_replaces_the_deck() {
        let mut app = test_app();
        update(&mut app, Action::SubmitPattern { name: "glider".to_string() });
        update(&mut app, Action::SubmissionAccepted);
        let mut tui = TuiState::new();

        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("added to your collection"));
        assert!(!text.contains("Randomise"));
    }

    #[test]
    fn test_save_dialog_overlay_renders() {
        let mut app = test_app();
        update(&mut app, Action::OpenSaveDialog);
        let mut tui = TuiState::new();
        tui.save_dialog.authenticated = true;
        tui.control_panel.sync(app.mode, &app.game);

        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("Save pattern"));
        assert!(text.contains("name this pattern"));
    }

    #[test]
    fn test_patterns_screen_shows_loading_then_listing() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Route::Patterns("alice".to_string())));
        let mut tui = TuiState::new();

        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("alice's patterns"));
        assert!(text.contains("Loading..."));

        update(
            &mut app,
            Action::PatternsLoaded(vec![crate::api::SavedPattern {
                owner: "alice".to_string(),
                name: "glider".to_string(),
                body: "010 001 111".to_string(),
                created_at: None,
            }]),
        );
        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("glider"));
    }
}
