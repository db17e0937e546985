//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field rendering utilities
//! - `login_form`: Login form
//! - `register_form`: Registration form

mod field_renderer;
mod login_form;
mod register_form;

pub use login_form::draw_login;
pub use register_form::draw_register;

use crate::state::SubmissionState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Form box width in columns
const FORM_WIDTH: u16 = 60;

/// Center a form box of `height` rows in `area`
fn centered(area: Rect, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(FORM_WIDTH),
            Constraint::Min(0),
        ])
        .split(vertical[1])[1]
}

/// Feedback line under the submit button
fn feedback<'a>(
    state: &SubmissionState,
    error: Option<&'a str>,
    notice: Option<&'a str>,
    busy_text: &'a str,
) -> Paragraph<'a> {
    let line = if state.is_in_flight() {
        Line::from(Span::styled(busy_text, Style::default().fg(Color::Yellow)))
    } else if let Some(message) = error {
        Line::from(Span::styled(message, Style::default().fg(Color::Red)))
    } else if let Some(message) = notice {
        Line::from(Span::styled(message, Style::default().fg(Color::Green)))
    } else {
        Line::default()
    };
    Paragraph::new(line)
}
