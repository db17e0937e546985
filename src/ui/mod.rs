//! UI module for rendering the TUI

mod components;
mod forms;
mod home;
mod layout;

use crate::app::App;
use crate::router::Route;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    // Draw main content based on current route
    match app.state.current_route() {
        Route::Login => forms::draw_login(frame, main_area, app),
        Route::Register => forms::draw_register(frame, main_area, app),
        Route::Home => home::draw(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, status_area, app);
}
