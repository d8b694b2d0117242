//! Read-only record page

use crate::app::App;
use crate::state::list::Listable;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(entity) = &app.detail else {
        let content = Paragraph::new("Record not loaded.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(content, area);
        return;
    };

    let rows = entity.detail_rows();
    let label_width = rows.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);

    let mut lines: Vec<Line> = rows
        .into_iter()
        .map(|(label, value)| {
            let value = if value.is_empty() {
                Span::styled("-", Style::default().fg(Color::DarkGray))
            } else {
                Span::raw(value)
            };
            Line::from(vec![
                Span::styled(
                    format!("{label:>label_width$}  "),
                    Style::default().fg(Color::Cyan),
                ),
                value,
            ])
        })
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("id {}", entity.id()),
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .title(Span::styled(
            format!(" {}: {} ", entity.kind().singular(), entity.name()),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}
