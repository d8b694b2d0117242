//! UI module for rendering the TUI

mod detail;
mod forms;
mod layout;
mod list;

use crate::app::App;
use crate::state::navigation::Route;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Draw the main layout with sidebar
    let (sidebar_area, main_area) = layout::create_layout(area);

    // Draw sidebar
    layout::draw_sidebar(frame, sidebar_area, app);

    // Draw main content based on current route
    match app.nav.current() {
        Route::List(kind) => list::draw(frame, main_area, app, *kind),
        Route::Detail(..) => detail::draw(frame, main_area, app),
        Route::Create(_) | Route::Edit(..) => forms::draw_form_page(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);
}
