use crate::app::{App, InputMode};
use crate::fetch::FetchRequest;
use crate::ui::layout::{close_button_rect, contains, home_layout, modal_rect};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

const PAGE: isize = 10;

/// Handle one key press. Returns a request to dispatch, if any.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Option<FetchRequest> {
    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return None;
    }

    // If help is showing, any key closes it
    if app.show_help {
        app.show_help = false;
        return None;
    }

    // The topmost modal owns the keyboard while visible
    if app.topmost().is_some() {
        handle_modal_key(app, key);
        return None;
    }

    match app.input_mode {
        InputMode::Editing => handle_search_input(app, key),
        InputMode::Normal => handle_home_key(app, key),
    }
}

fn handle_modal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.close_topmost();
        }
        KeyCode::Down | KeyCode::Char('j') => app.scroll_topmost(1),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_topmost(-1),
        KeyCode::PageDown => app.scroll_topmost(PAGE),
        KeyCode::PageUp => app.scroll_topmost(-PAGE),
        _ => {}
    }
}

fn handle_search_input(app: &mut App, key: KeyEvent) -> Option<FetchRequest> {
    match key.code {
        KeyCode::Enter => return app.submit_search(),
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            app.search_input.pop();
        }
        KeyCode::Char(c) => {
            app.search_input.push(c);
        }
        _ => {}
    }
    None
}

fn handle_home_key(app: &mut App, key: KeyEvent) -> Option<FetchRequest> {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Char('/') | KeyCode::Char('i') => {
            app.input_mode = InputMode::Editing;
        }
        KeyCode::Enter | KeyCode::Char('s') => return app.submit_search(),
        KeyCode::Char('a') => return Some(app.request_show_all()),
        KeyCode::Esc => {
            app.search_input.clear();
        }
        _ => {}
    }
    None
}

/// Handle one mouse event against the last known viewport.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) -> Option<FetchRequest> {
    let (mx, my) = (mouse.column, mouse.row);
    let left_down = matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left));

    // Help sits above everything; any click dismisses it
    if app.show_help {
        if left_down {
            app.show_help = false;
        }
        return None;
    }

    if let Some(id) = app.topmost() {
        let area = modal_rect(id, app.viewport);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if contains(close_button_rect(area), mx, my) => {
                app.close_modal(id);
            }
            MouseEventKind::Down(MouseButton::Left) => app.click_topmost(contains(area, mx, my)),
            MouseEventKind::ScrollDown => app.scroll_topmost(1),
            MouseEventKind::ScrollUp => app.scroll_topmost(-1),
            _ => {}
        }
        // Consume all mouse events while a modal is open
        return None;
    }

    if !left_down {
        return None;
    }

    let layout = home_layout(app.viewport);
    if contains(layout.search_button, mx, my) {
        app.submit_search()
    } else if contains(layout.show_all_button, mx, my) {
        Some(app.request_show_all())
    } else {
        app.input_mode = if contains(layout.search_box, mx, my) {
            InputMode::Editing
        } else {
            InputMode::Normal
        };
        None
    }
}
