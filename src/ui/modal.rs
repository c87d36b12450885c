use super::layout::{CLOSE_LABEL, modal_rect};
use crate::app::App;
use crate::modal::{ModalId, ModalState};
use crate::render::TableView;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Row, Table, TableState},
};
use unicode_width::UnicodeWidthStr;

pub fn render(app: &App, id: ModalId, frame: &mut Frame) {
    let modal = app.modal(id);
    let area = modal_rect(id, frame.area());

    // Clear the area behind the popup
    frame.render_widget(Clear, area);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {} ", id.title()))
        .title(
            Line::from(CLOSE_LABEL)
                .alignment(Alignment::Right)
                .style(Style::default().fg(Color::Red)),
        );

    match (modal.state(), modal.table()) {
        (ModalState::Open, Some(table)) => {
            block = block.title_bottom(
                Line::from(format!(" {} row(s)  Esc to close ", table.rows.len()))
                    .alignment(Alignment::Right)
                    .style(Style::default().fg(Color::DarkGray)),
            );
            let mut state = TableState::default().with_offset(modal.scroll());
            frame.render_stateful_widget(table_widget(table).block(block), area, &mut state);
        }
        _ => {
            let loading = Paragraph::new("Loading…")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Yellow))
                .block(block);
            frame.render_widget(loading, area);
        }
    }
}

fn table_widget(table: &TableView) -> Table<'_> {
    let header = Row::new(table.headers.iter().copied()).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    let rows = table
        .rows
        .iter()
        .map(|row| Row::new(row.iter().map(String::as_str)));

    Table::new(rows, column_widths(table))
        .header(header)
        .column_spacing(2)
}

/// Each column as wide as its widest cell, header included.
fn column_widths(table: &TableView) -> Vec<Constraint> {
    table
        .headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            let widest = table
                .rows
                .iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.width())
                .chain(std::iter::once(header.width()))
                .max()
                .unwrap_or(0);
            Constraint::Length(widest as u16)
        })
        .collect()
}
