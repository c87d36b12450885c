//! Screen geometry shared by drawing and mouse hit-testing.

use crate::modal::ModalId;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Areas of the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeLayout {
    pub header: Rect,
    pub search_box: Rect,
    pub search_button: Rect,
    pub show_all_button: Rect,
    pub top_list: Rect,
    pub status: Rect,
}

pub fn home_layout(area: Rect) -> HomeLayout {
    // Layout: header(3) + controls(3) + top list(min) + status(1)
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    let controls = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),
            Constraint::Length(12),
            Constraint::Length(14),
        ])
        .split(rows[1]);

    HomeLayout {
        header: rows[0],
        search_box: controls[0],
        search_button: controls[1],
        show_all_button: controls[2],
        top_list: rows[2],
        status: rows[3],
    }
}

/// Outer box of a modal, borders included.
pub fn modal_rect(id: ModalId, area: Rect) -> Rect {
    match id {
        ModalId::Search => centered_rect(90, 40, area),
        ModalId::ShowAll => centered_rect(80, 70, area),
    }
}

/// Title-bar cells of the `[x]` close control of a modal drawn in `modal`.
pub fn close_button_rect(modal: Rect) -> Rect {
    let width = CLOSE_LABEL.len() as u16;
    Rect::new(
        modal.right().saturating_sub(width + 1),
        modal.y,
        width.min(modal.width),
        1,
    )
}

pub const CLOSE_LABEL: &str = " [x] ";

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(Position::new(column, row))
}

/// Create a centered rectangle using percentage of parent area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_layout_controls_share_a_row() {
        let layout = home_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.search_box.y, 3);
        assert_eq!(layout.search_button.y, 3);
        assert_eq!(layout.show_all_button.width, 14);
        assert_eq!(layout.status.y, 29);
    }

    #[test]
    fn test_modal_is_inside_viewport() {
        let area = Rect::new(0, 0, 120, 40);
        for id in [ModalId::Search, ModalId::ShowAll] {
            let rect = modal_rect(id, area);
            assert!(rect.width > 0 && rect.height > 0);
            assert_eq!(rect.intersection(area), rect);
            assert!(!contains(rect, 0, 0));
        }
    }

    #[test]
    fn test_close_button_sits_on_top_border() {
        let modal = Rect::new(10, 5, 60, 20);
        let close = close_button_rect(modal);
        assert_eq!(close.y, 5);
        assert_eq!(close.right(), 69);
        assert!(contains(modal, close.x, close.y));
    }
}
