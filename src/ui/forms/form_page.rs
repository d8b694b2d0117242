//! Create/edit page: the engine's fields stacked vertically, scrolled to
//! keep the focused field visible

use super::field_renderer::{draw_field, field_height};
use crate::app::App;
use crate::state::forms::FormPage;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_form_page(frame: &mut Frame, area: Rect, app: &App) {
    let Some(page) = &app.form else {
        return;
    };

    let outer = Block::default()
        .title(Span::styled(
            format!(" {} ", page.title()),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    draw_fields(frame, chunks[0], page);
    draw_footer(frame, chunks[1], page);
}

fn draw_fields(frame: &mut Frame, area: Rect, page: &FormPage) {
    let fields = page.engine.fields();
    let heights: Vec<u16> = fields.iter().map(|f| field_height(&f.kind)).collect();
    let first = first_visible(&heights, page.active_field_index, area.height);

    let mut y = area.y;
    for (idx, field) in fields.iter().enumerate().skip(first) {
        let height = heights[idx];
        if y + height > area.y + area.height {
            break;
        }
        let Some(props) = page.engine.field_props(&field.name) else {
            continue;
        };
        let rect = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };
        draw_field(
            frame,
            rect,
            &props,
            idx == page.active_field_index,
            page.active_part,
        );
        y += height;
    }
}

/// First field index to draw so the active one fits in `available` rows
fn first_visible(heights: &[u16], active: usize, available: u16) -> usize {
    let mut used: u16 = 0;
    let mut first = active.min(heights.len().saturating_sub(1));
    for idx in (0..=first).rev() {
        let next = used.saturating_add(heights.get(idx).copied().unwrap_or(0));
        if next > available {
            break;
        }
        used = next;
        first = idx;
    }
    first
}

fn draw_footer(frame: &mut Frame, area: Rect, page: &FormPage) {
    let state = page.engine.state();
    let mut spans = Vec::new();

    if state.is_submitting {
        spans.push(Span::styled("Saving… ", Style::default().fg(Color::Yellow)));
    } else if !state.is_valid {
        spans.push(Span::styled(
            format!("{} error(s) ", state.errors.len()),
            Style::default().fg(Color::Red),
        ));
    }
    if state.is_dirty {
        spans.push(Span::styled("● modified ", Style::default().fg(Color::Yellow)));
    }
    spans.push(Span::styled(
        "* required  Ctrl-S: save  Ctrl-R: reset",
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
