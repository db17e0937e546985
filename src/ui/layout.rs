//! Layout components (content area, status bar)

use crate::app::App;
use crate::platform::{REVEAL_SHORTCUT, SWITCH_FORM_SHORTCUT};
use crate::router::Route;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Session status
    let session_status = if app.state.session.is_logged_in() {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::DarkGray))
    };
    spans.push(session_status);

    let route = app.state.current_route();
    spans.push(Span::styled(
        format!("{} ", route.path()),
        Style::default().fg(Color::Blue),
    ));

    // Route-specific hints
    spans.push(Span::styled(
        get_route_hints(route),
        Style::default().fg(Color::Gray),
    ));

    if app.state.is_busy() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled("⟳ sending", Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current route
fn get_route_hints(route: Route) -> String {
    match route {
        Route::Login => format!(
            "Tab:next  Enter:log in  {REVEAL_SHORTCUT}:reveal  {SWITCH_FORM_SHORTCUT}:register  Esc:quit"
        ),
        Route::Register => format!(
            "Tab:next  Enter:attach/register  {REVEAL_SHORTCUT}:reveal  {SWITCH_FORM_SHORTCUT}:log in  Esc:quit"
        ),
        Route::Home => "l:log out  q:quit".to_string(),
    }
}
