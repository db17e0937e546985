//! Home view shown after a successful login

use crate::app::App;
use crate::router::Route;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the home view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(10),
            Constraint::Min(0),
        ])
        .split(area);

    let block = Block::default()
        .title(format!(" {} ", Route::Home.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = match app.state.session.current() {
        Some(active) => {
            let user = &active.data.user;
            let mut lines = vec![
                Line::from(Span::styled(
                    format!("Welcome, {}", user.display_name()),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::default(),
                Line::from(vec![
                    Span::styled("Email: ", Style::default().fg(Color::DarkGray)),
                    Span::raw(user.email.as_str()),
                ]),
            ];
            if !user.phone_number.is_empty() {
                lines.push(Line::from(vec![
                    Span::styled("Phone: ", Style::default().fg(Color::DarkGray)),
                    Span::raw(user.phone_number.as_str()),
                ]));
            }
            if let Some(image) = &user.image {
                lines.push(Line::from(vec![
                    Span::styled("Avatar: ", Style::default().fg(Color::DarkGray)),
                    Span::raw(image.as_str()),
                ]));
            }
            let mark = |present: bool| if present { "✓" } else { "✗" };
            lines.push(Line::from(Span::styled(
                format!(
                    "Access token {}  Refresh token {}",
                    mark(active.data.access_token.is_some()),
                    mark(active.data.refresh_token.is_some())
                ),
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::from(Span::styled(
                format!(
                    "Signed in at {}",
                    active.established_at.format("%Y-%m-%d %H:%M:%S UTC")
                ),
                Style::default().fg(Color::DarkGray),
            )));
            lines
        }
        None => vec![Line::from(Span::styled(
            "Not signed in",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let content = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(content, chunks[1]);
}
