//! # Profile Card Component
//!
//! Stateless identity card with a single navigation affordance: jump to the
//! owner's pattern listing. No validation, no error states.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::core::state::Profile;
use crate::tui::event::TuiEvent;

/// Events emitted by the profile card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileEvent {
    /// Navigate to this user's pattern listing.
    ViewPatterns(String),
    Dismiss,
}

/// Transient render wrapper; the card carries no state of its own.
pub struct ProfileCard<'a> {
    profile: &'a Profile,
}

impl<'a> ProfileCard<'a> {
    pub fn new(profile: &'a Profile) -> Self {
        Self { profile }
    }

    pub fn handle_event(&self, event: &TuiEvent) -> Option<ProfileEvent> {
        match event {
            TuiEvent::Submit => Some(ProfileEvent::ViewPatterns(self.profile.username.clone())),
            TuiEvent::Escape => Some(ProfileEvent::Dismiss),
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let overlay = centered_card(area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Profile ")
            .title_bottom(Line::from(" Enter View patterns  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        let mut lines = vec![
            Line::from(self.profile.username.clone())
                .style(Style::default().add_modifier(Modifier::BOLD)),
        ];
        if let Some(owner) = &self.profile.account_owner {
            lines.push(Line::from(owner.clone()).style(Style::default().fg(Color::DarkGray)));
        }
        if let Some(email) = &self.profile.email {
            lines.push(Line::from(email.clone()).style(Style::default().fg(Color::DarkGray)));
        }

        frame.render_widget(Paragraph::new(lines).block(block), overlay);
    }
}

fn centered_card(outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(7),
        Constraint::Fill(1),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(40),
        Constraint::Fill(1),
    ])
    .areas(center_v);
    center
}
