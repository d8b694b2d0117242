//! Layout components (sidebar, status bar)

use crate::app::App;
use crate::state::entities::EntityKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const SIDEBAR_WIDTH: u16 = 24;

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH), // Sidebar
            Constraint::Min(0),                // Main content
        ])
        .split(area);

    // Reserve bottom line for status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(chunks[1]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(chunks[0]);

    (sidebar_chunks[0], main_chunks[0])
}

/// Draw the entity list menu
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let current = app.nav.current().kind();

    let lines: Vec<Line> = EntityKind::ALL
        .iter()
        .enumerate()
        .map(|(idx, kind)| {
            let is_selected = *kind == current;
            let style = if is_selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let prefix = if is_selected { "▸" } else { " " };
            Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(format!("F{} ", idx + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(kind.label(), style),
            ])
        })
        .collect();

    let sidebar = Paragraph::new(lines).block(
        Block::default()
            .title(" Farm Admin ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(sidebar, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", app.nav.current().label()),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    if let Some(back) = app.nav.back_label() {
        spans.push(Span::styled(
            format!(" Esc: {back} "),
            Style::default().fg(Color::Gray),
        ));
    }

    spans.push(Span::styled(
        format!(" {}", app.key_hints()),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
