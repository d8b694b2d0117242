//! Entity list page: search box, status chips, sortable table and pager

use crate::app::App;
use crate::state::entities::EntityKind;
use crate::state::list::{ListConfig, ListState, StatusFilter};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App, kind: EntityKind) {
    let config = app.list_config(kind);
    let list = app.list_state(kind);
    let records = app.records(kind);
    let view = list.view(records, config);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search box
            Constraint::Length(1), // Status chips
            Constraint::Min(0),    // Table
            Constraint::Length(1), // Pager
        ])
        .split(area);

    draw_search_box(frame, chunks[0], list);
    draw_status_chips(frame, chunks[1], config, &list.status_filter);

    let block = Block::default()
        .title(format!(" {} ({}) ", kind.label(), records.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if view.items.is_empty() {
        let message = if records.is_empty() {
            format!("No {} yet.\nPress Ctrl-N to create one.", kind.label().to_lowercase())
        } else {
            "No results match the current search and filter.\nPress Esc to clear the search."
                .to_string()
        };
        let content = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(content, chunks[2]);
    } else {
        let header = Row::new(config.columns.iter().map(|column| {
            let symbol = if list.sort.is_active(column.key) {
                list.sort.direction.symbol()
            } else {
                ""
            };
            Cell::from(format!("{}{}", column.label, symbol))
        }))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

        let rows = view.items.iter().map(|entity| {
            Row::new(
                config
                    .columns
                    .iter()
                    .map(|column| Cell::from(entity.cell(column.key))),
            )
        });
        let widths = config
            .columns
            .iter()
            .map(|column| Constraint::Length(column.width));

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("▸ ");

        let mut state = TableState::default().with_selected(Some(list.selected_index));
        frame.render_stateful_widget(table, chunks[2], &mut state);
    }

    let pager = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" Page {}/{} ", view.page, view.total_pages.max(1)),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("· {} result(s) ", view.filtered_count),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("←/→ page  Alt+n sort", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(pager, chunks[3]);
}

fn draw_search_box(frame: &mut Frame, area: Rect, list: &ListState) {
    let pending = if list.search.is_pending() { " …" } else { "" };
    let content = Paragraph::new(Line::from(vec![
        Span::raw(list.search.raw()),
        Span::styled("▌", Style::default().fg(Color::Cyan)),
        Span::styled(pending, Style::default().fg(Color::DarkGray)),
    ]));
    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(content.block(block), area);
}

fn draw_status_chips(frame: &mut Frame, area: Rect, config: &ListConfig, filter: &StatusFilter) {
    let chip = |label: &str, active: bool| {
        let style = if active {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        Span::styled(format!(" {label} "), style)
    };

    let mut spans = vec![
        Span::styled(" Status (Tab): ", Style::default().fg(Color::DarkGray)),
        chip("all", *filter == StatusFilter::All),
    ];
    for status in &config.statuses {
        spans.push(Span::raw(" "));
        spans.push(chip(*status, filter.matches(status) && *filter != StatusFilter::All));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
