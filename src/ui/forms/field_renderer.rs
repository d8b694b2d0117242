//! Field rendering for form pages
//!
//! One renderer per [`FieldKind`]; the match below is the only place that
//! maps a kind to its widget.

use crate::state::forms::{FieldKind, FieldProps, FieldValue};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

const ADDRESS_PARTS: [&str; 4] = ["Street", "City", "State", "Postal code"];
const COORDINATE_PARTS: [&str; 2] = ["Latitude", "Longitude"];

/// Rows a field needs, borders included
pub fn field_height(kind: &FieldKind) -> u16 {
    match kind {
        FieldKind::TextInput | FieldKind::Select { .. } | FieldKind::Coordinates => 3,
        FieldKind::Textarea => 6,
        FieldKind::Address => 6,
    }
}

/// Draw one field from its props. `active_part` is the focused sub-part when active.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    props: &FieldProps<'_>,
    is_active: bool,
    active_part: usize,
) {
    let color = if is_active { Color::Cyan } else { Color::DarkGray };
    let cursor = |on: bool| {
        Span::styled(if on { CURSOR } else { "" }, Style::default().fg(Color::Cyan))
    };

    let lines: Vec<Line> = match (&props.config.kind, props.value) {
        (FieldKind::TextInput, value) => {
            vec![text_line(
                value,
                props.config.placeholder.as_deref(),
                is_active,
                cursor(is_active),
            )]
        }
        (FieldKind::Textarea, value) => {
            let text = value.as_text();
            let mut lines: Vec<Line> = text.lines().map(|l| Line::from(l.to_string())).collect();
            if text.ends_with('\n') || lines.is_empty() {
                lines.push(Line::default());
            }
            if let Some(last) = lines.last_mut() {
                last.spans.push(cursor(is_active));
            }
            lines
        }
        (FieldKind::Select { options }, value) => {
            let current = value.as_text();
            let mut spans = vec![Span::styled("◂ ", Style::default().fg(color))];
            for option in options {
                let style = if *option == current {
                    Style::default().fg(Color::Black).bg(color)
                } else {
                    Style::default().fg(Color::Gray)
                };
                spans.push(Span::styled(format!(" {option} "), style));
            }
            spans.push(Span::styled(" ▸", Style::default().fg(color)));
            vec![Line::from(spans)]
        }
        (FieldKind::Address, FieldValue::Address(address)) => {
            let parts = [
                &address.street,
                &address.city,
                &address.state,
                &address.postal_code,
            ];
            ADDRESS_PARTS
                .iter()
                .zip(parts)
                .enumerate()
                .map(|(idx, (label, part))| {
                    part_line(label, part, is_active && idx == active_part, &cursor)
                })
                .collect()
        }
        (FieldKind::Coordinates, FieldValue::Coordinates(coordinates)) => {
            let parts = [&coordinates.latitude, &coordinates.longitude];
            let mut spans = Vec::new();
            for (idx, (label, part)) in COORDINATE_PARTS.iter().zip(parts).enumerate() {
                let focused = is_active && idx == active_part;
                spans.extend(part_line(label, part, focused, &cursor).spans);
                spans.push(Span::raw("   "));
            }
            vec![Line::from(spans)]
        }
        // Value shape does not match the kind; show it as plain text
        (FieldKind::Address | FieldKind::Coordinates, value) => {
            vec![Line::from(value.as_text())]
        }
    };

    let required = if props.config.is_required() { " *" } else { "" };
    let mut block = Block::default()
        .title(format!(" {}{} ", props.config.label, required))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    if let Some(error) = props.visible_error() {
        block = block
            .border_style(Style::default().fg(Color::Red))
            .title_bottom(Line::from(Span::styled(
                format!(" {error} "),
                Style::default().fg(Color::Red),
            )));
    }

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

fn text_line<'a>(
    value: &FieldValue,
    placeholder: Option<&'a str>,
    is_active: bool,
    cursor: Span<'a>,
) -> Line<'a> {
    let text = value.as_text();
    if text.is_empty() && !is_active {
        let hint = placeholder.unwrap_or("(empty)");
        return Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray)));
    }
    Line::from(vec![Span::raw(text), cursor])
}

fn part_line<'a>(
    label: &'a str,
    value: &str,
    focused: bool,
    cursor: &dyn Fn(bool) -> Span<'static>,
) -> Line<'a> {
    let label_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Line::from(vec![
        Span::styled(format!("{label}: "), label_style),
        Span::raw(value.to_string()),
        cursor(focused),
    ])
}
