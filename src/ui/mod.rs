mod help;
mod home;
pub mod layout;
mod modal;

use crate::app::App;
use ratatui::Frame;

/// Top-level render dispatch.
pub fn render(app: &App, frame: &mut Frame) {
    home::render(app, frame);

    // Modals stack in the order they were raised
    for id in app.visible_modals() {
        modal::render(app, id, frame);
    }

    // Render help overlay on top if active
    if app.show_help {
        help::render(frame);
    }
}
