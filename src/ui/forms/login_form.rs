//! Login form rendering

use super::field_renderer::{draw_field, draw_help_text};
use super::{centered, feedback};
use crate::app::App;
use crate::platform::{REVEAL_SHORTCUT, SWITCH_FORM_SHORTCUT};
use crate::router::Route;
use crate::state::Form;
use crate::ui::components::{render_submit_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the login form
pub fn draw_login(frame: &mut Frame, area: Rect, app: &App) {
    let page = &app.state.login;
    let form = &page.form;
    let errors = page.controller.errors();

    let area = centered(area, 14);
    let block = Block::default()
        .title(format!(" {} ", Route::Login.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Email
            Constraint::Length(3),             // Password
            Constraint::Length(1),             // Reveal hint
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Feedback
            Constraint::Length(1),             // Register link
            Constraint::Min(0),
        ])
        .horizontal_margin(1)
        .split(inner);

    let active = form.active_field();
    draw_field(
        frame,
        chunks[0],
        &form.email,
        active == 0,
        form.show_password,
        errors.get(form.email.name),
    );
    draw_field(
        frame,
        chunks[1],
        &form.password,
        active == 1,
        form.show_password,
        errors.get(form.password.name),
    );

    let reveal = if form.show_password { "Hide" } else { "Show" };
    draw_help_text(
        frame,
        chunks[2],
        &format!("{REVEAL_SHORTCUT}: {reveal} password"),
    );

    let state = page.controller.state();
    render_submit_button(
        frame,
        chunks[3],
        "Log in",
        "Logging in...",
        !state.is_in_flight(),
    );
    frame.render_widget(
        feedback(
            state,
            state.failure_reason(),
            app.state.status_message.as_deref(),
            "Contacting the server...",
        ),
        chunks[4],
    );

    draw_help_text(
        frame,
        chunks[5],
        &format!("Don't have an account? {SWITCH_FORM_SHORTCUT}: Register"),
    );
}
