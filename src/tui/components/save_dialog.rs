//! # Save Dialog Component
//!
//! Modal for naming and submitting the current pattern. Opened by the Save
//! control, dismissed with Esc.
//!
//! When no user is signed in the dialog switches to its sign-in-required
//! variant: the prompt disappears and Enter routes to the login screen
//! instead of submitting.
//!
//! The name buffer survives dismissal, so reopening the dialog shows the
//! previously typed name.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Events emitted by the save dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogEvent {
    /// Submit the pattern under this name.
    Submit(String),
    /// Unauthenticated user chose to go sign in.
    LogIn,
    Dismiss,
}

/// Persistent state for the save dialog.
pub struct SaveDialogState {
    /// Pattern name being typed (internal state).
    pub name: String,
    /// Whether a user is signed in (prop, synced each frame).
    pub authenticated: bool,
}

impl SaveDialogState {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            authenticated: false,
        }
    }
}

impl Default for SaveDialogState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for SaveDialogState {
    type Event = DialogEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DialogEvent> {
        match event {
            TuiEvent::Escape => Some(DialogEvent::Dismiss),
            TuiEvent::Submit => {
                if self.authenticated {
                    Some(DialogEvent::Submit(self.name.clone()))
                } else {
                    Some(DialogEvent::LogIn)
                }
            }
            TuiEvent::InputChar(c) if self.authenticated => {
                self.name.push(*c);
                None
            }
            TuiEvent::Backspace if self.authenticated => {
                self.name.pop();
                None
            }
            _ => None,
        }
    }
}

impl Component for SaveDialogState {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 30, area);
        frame.render_widget(Clear, overlay);

        let title = if self.authenticated {
            " Save pattern "
        } else {
            " Sign-in required. "
        };
        let help = if self.authenticated {
            " Enter Save  Esc Close "
        } else {
            " Enter Log in  Esc Close "
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title)
            .title_bottom(Line::from(help).centered())
            .padding(Padding::horizontal(1));

        if !self.authenticated {
            let info = Paragraph::new("Sign in to save any patterns you've created.")
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(info, overlay);
            return;
        }

        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let [prompt_area, input_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Length(3)]).areas(inner);

        let prompt = Paragraph::new("What would you like to name this pattern?");
        frame.render_widget(prompt, prompt_area);

        let input = Paragraph::new(self.name.as_str())
            .style(Style::default().fg(Color::Green))
            .block(Block::bordered().title("Name"));
        frame.render_widget(input, input_area);

        let cursor_x = input_area.x + 1 + self.name.width() as u16;
        frame.set_cursor_position((cursor_x.min(input_area.right().saturating_sub(2)), input_area.y + 1));
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
