use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render(frame: &mut Frame, area: Rect, message: &str) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Fill(1),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RELOAD FAILED",
            Style::default().fg(Color::Red).bold(),
        )),
        Line::from(""),
        Line::from(message.to_string().fg(Color::Gray)),
        Line::from(""),
        Line::from(""),
        Line::from(vec![
            Span::styled("r", Style::default().fg(Color::Green).bold()),
            Span::raw(" retry  ·  "),
            Span::styled("q", Style::default().fg(Color::Green).bold()),
            Span::raw(" quit"),
        ]),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::Red),
        );

    frame.render_widget(widget, chunks[1]);
}
