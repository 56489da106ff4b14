use ratatui::{
    prelude::*,
    widgets::{Gauge, Paragraph, Wrap},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_header(frame, chunks[0], app);
    render_score_line(frame, chunks[1], app);
    render_progress_gauge(frame, chunks[2], app);
    render_question_text(frame, chunks[4], &app.session().current_question().text);
    render_answers(frame, chunks[5], app);
    render_verdict(frame, chunks[6], app);
    render_controls(frame, chunks[7], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let title = if session.in_review() {
        Span::styled(
            "REVIEW · incorrect answers",
            Style::default().fg(Color::Yellow).bold(),
        )
    } else {
        Span::styled("QUIZ", Style::default().fg(Color::Cyan).bold())
    };
    frame.render_widget(Paragraph::new(Line::from(title)), area);

    let progress = format!("{}/{}", session.position() + 1, session.total());
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_score_line(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let score = session.score();
    let mut line = format!(
        "Score: {}/{} (of {})",
        score.correct, score.answered, score.total
    );
    if !session.in_review() && session.incorrect_count() > 0 {
        line.push_str(&format!("  ·  {} to review", session.incorrect_count()));
    }
    frame.render_widget(Paragraph::new(line).fg(Color::DarkGray), area);
}

fn render_progress_gauge(frame: &mut Frame, area: Rect, app: &App) {
    let score = app.session().score();
    let ratio = if score.total > 0 {
        score.answered as f64 / score.total as f64
    } else {
        0.0
    };
    let widget = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
        .ratio(ratio)
        .use_unicode(true)
        .label("");
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_answers(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let question = session.current_question();
    let revealed = session.is_revealed();
    let selection = session.selection();

    let mut lines: Vec<Line> = Vec::with_capacity(question.answers.len() * 2);
    for (row, (index, answer)) in question.displayed_answers().enumerate() {
        let selected = selection.contains(&index);
        let under_cursor = row == app.cursor();

        let (checkbox, style) = if revealed {
            answer_reveal_style(answer.is_correct, selected)
        } else if selected {
            ("[x]", Style::default().fg(Color::Cyan).bold())
        } else {
            ("[ ]", Style::default().fg(Color::Gray))
        };
        let style = if under_cursor && !revealed {
            style.bold().fg(Color::Cyan)
        } else {
            style
        };
        let marker = if under_cursor { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{} ", checkbox), style),
            Span::styled(answer.text.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Checkbox and color for one answer row once correctness is shown:
/// correct answers green-checked, a selected wrong answer red-crossed,
/// the rest dimmed.
fn answer_reveal_style(is_correct: bool, selected: bool) -> (&'static str, Style) {
    if is_correct {
        ("[✓]", Style::default().fg(Color::Green))
    } else if selected {
        ("[✗]", Style::default().fg(Color::Red))
    } else {
        ("[ ]", Style::default().fg(Color::DarkGray))
    }
}

fn render_verdict(frame: &mut Frame, area: Rect, app: &App) {
    let Some(correct) = app.session().current_verdict() else {
        return;
    };
    let (text, color) = if correct {
        ("Correct!", Color::Green)
    } else {
        ("Incorrect", Color::Red)
    };
    let widget = Paragraph::new(Span::styled(text, Style::default().fg(color).bold()))
        .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let hints = if app.session().is_revealed() {
        "h/l navigate  ·  r retry  ·  v review  ·  tab summary  ·  q quit"
    } else {
        "j/k move  ·  space toggle  ·  enter check  ·  h/l navigate  ·  s shuffle  ·  q quit"
    };
    let widget = Paragraph::new(hints)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
