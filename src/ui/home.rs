use super::layout::home_layout;
use crate::app::{App, InputMode};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

pub fn render(app: &App, frame: &mut Frame) {
    let layout = home_layout(frame.area());

    // ── Header ──
    let header = Paragraph::new(" Resort Explorer   ski conditions & rankings")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(header, layout.header);

    // ── Search box ──
    let editing = app.input_mode == InputMode::Editing;
    let search_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let search_label = if editing {
        " Resort (Enter to search, Esc to leave): "
    } else {
        " Resort (/): "
    };
    let search_box = Paragraph::new(format!("{}{}", search_label, app.search_input))
        .style(search_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(search_style)
                .title(" Search "),
        );
    frame.render_widget(search_box, layout.search_box);

    // Set cursor position when editing
    if editing {
        let cursor_x = layout.search_box.x
            + 1
            + search_label.width() as u16
            + app.search_input.width() as u16;
        let cursor_y = layout.search_box.y + 1;
        frame.set_cursor_position((cursor_x, cursor_y));
    }

    frame.render_widget(button("Search", "s"), layout.search_button);
    frame.render_widget(button("Show all", "a"), layout.show_all_button);

    // ── Top resorts ──
    let items: Vec<ListItem> = app
        .top_slots
        .iter()
        .enumerate()
        .map(|(i, name)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>3}. ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(name.as_str(), Style::default().fg(Color::White)),
            ]))
        })
        .collect();

    let top_list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" Top {} Resorts ", app.top_slots.len())),
    );
    frame.render_widget(top_list, layout.top_list);

    // ── Status bar ──
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let status_line = Line::from(vec![
        Span::styled(" /", key_style),
        Span::raw(" Type  "),
        Span::styled("Enter", key_style),
        Span::raw(" Search  "),
        Span::styled("a", key_style),
        Span::raw(" All  "),
        Span::styled("Esc", key_style),
        Span::raw(" Close  "),
        Span::styled("?", key_style),
        Span::raw(" Help  "),
        Span::styled("q", key_style),
        Span::raw(" Quit  "),
        Span::styled(&app.status_msg, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(status_line), layout.status);
}

fn button<'a>(label: &'a str, key: &'a str) -> Paragraph<'a> {
    Paragraph::new(Line::from(vec![
        Span::styled(label, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        Span::styled(format!(" ({key})"), Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    )
}
