//! Registration form rendering

use super::field_renderer::{draw_field, draw_help_text};
use super::{centered, feedback};
use crate::app::App;
use crate::platform::{REVEAL_SHORTCUT, SWITCH_FORM_SHORTCUT};
use crate::router::Route;
use crate::state::{Form, RegisterForm};
use crate::ui::components::{render_submit_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the registration form
pub fn draw_register(frame: &mut Frame, area: Rect, app: &App) {
    let page = &app.state.register;
    let form = &page.form;

    let area = centered(area, 26);
    let block = Block::default()
        .title(format!(" {} ", Route::Register.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(3); 6];
    constraints.extend([
        Constraint::Length(1),             // Image and reveal hints
        Constraint::Length(BUTTON_HEIGHT), // Submit
        Constraint::Length(1),             // Feedback
        Constraint::Length(1),             // Login link
        Constraint::Min(0),
    ]);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    let active = form.active_field();
    for idx in 0..form.field_count() {
        let Some(field) = form.get_field(idx) else {
            continue;
        };
        let error = if idx == RegisterForm::IMAGE_FIELD_INDEX {
            page.image_error.as_deref()
        } else {
            None
        };
        draw_field(
            frame,
            chunks[idx],
            field,
            idx == active,
            form.show_password,
            error,
        );
    }

    let hint = if form.is_image_field_active() {
        "Type an image path, Enter: attach".to_string()
    } else {
        let reveal = if form.show_password { "Hide" } else { "Show" };
        format!("{REVEAL_SHORTCUT}: {reveal} passwords")
    };
    draw_help_text(frame, chunks[6], &hint);

    let state = page.controller.state();
    render_submit_button(
        frame,
        chunks[7],
        "Register",
        "Registering...",
        !state.is_in_flight(),
    );
    frame.render_widget(
        feedback(state, page.controller.error(), None, "Contacting the server..."),
        chunks[8],
    );

    draw_help_text(
        frame,
        chunks[9],
        &format!("Already have an account? {SWITCH_FORM_SHORTCUT}: Log in"),
    );
}
