use super::layout::centered_rect;
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Global",
        &[
            ("?", "Toggle this help"),
            ("Ctrl+C", "Quit application"),
        ],
    ),
    (
        "Main Screen",
        &[
            ("q", "Quit application"),
            ("/ or i", "Type a resort name"),
            ("Enter / s", "Search for the typed resort"),
            ("a", "Show all resorts ranked by score"),
            ("click", "Search box, [Search] and [Show all] buttons"),
        ],
    ),
    (
        "Modals",
        &[
            ("Esc / q", "Close the top modal"),
            ("↑/↓ PgUp/PgDn", "Scroll rows"),
            ("click outside", "Close the top modal"),
        ],
    ),
];

pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 60, frame.area());

    frame.render_widget(Clear, area);

    let mut help_text = vec![Line::from("")];
    for (title, bindings) in SECTIONS {
        help_text.push(Line::from(Span::styled(
            format!("  {title}"),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        for (keys, action) in *bindings {
            help_text.push(Line::from(vec![
                Span::styled(format!("    {keys:<16}"), Style::default().fg(Color::Yellow)),
                Span::raw(*action),
            ]));
        }
        help_text.push(Line::from(""));
    }

    let help = Paragraph::new(help_text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help: Keybindings ")
                .title_bottom(Line::from(" Press any key to close ").style(Style::default().fg(Color::DarkGray))),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(help, area);
}
