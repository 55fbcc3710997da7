//! Feedback banners: one dismissible error alert and one success alert.
//!
//! New errors overwrite old ones; there is no queue. The success banner
//! replaces the deck until dismissed.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render_error(frame: &mut Frame, area: Rect, msg: &str) {
    let text = Text::from(vec![
        Line::from("Something went wrong..."),
        Line::from(msg.to_string()),
    ]);
    let alert = Paragraph::new(text)
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Error ")
                .title_bottom(Line::from(" Esc Dismiss ").centered()),
        );
    frame.render_widget(alert, area);
}

pub fn render_success(frame: &mut Frame, area: Rect) {
    let text = Text::from(vec![
        Line::from("Your pattern has been added to your collection."),
        Line::from("Job done. Now let's get back to the game."),
    ]);
    let alert = Paragraph::new(text)
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green))
                .title(" Saved ")
                .title_bottom(Line::from(" Enter Dismiss ").centered()),
        );
    frame.render_widget(alert, area);
}
