use catalog_core::{AppViewModel, CountOverlayView, RecordRowView};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use super::constants::*;
use super::layout;

pub fn render(frame: &mut Frame, view: &AppViewModel, status_line: &str) {
    let areas = layout::split(frame.area());

    frame.render_widget(
        Paragraph::new(APP_TITLE).style(Style::default().add_modifier(Modifier::BOLD)),
        areas.title,
    );
    render_table(frame, view, areas.table);
    frame.render_widget(Paragraph::new(paginator_text(view)), areas.paginator);
    frame.render_widget(
        Paragraph::new(status_line).style(Style::default().add_modifier(Modifier::DIM)),
        areas.status,
    );
    frame.render_widget(
        Paragraph::new(HELP_TEXT).style(Style::default().add_modifier(Modifier::DIM)),
        areas.help,
    );

    if let Some(overlay) = &view.overlay {
        render_overlay(frame, overlay, layout::overlay(areas.table));
    }
}

fn render_table(frame: &mut Frame, view: &AppViewModel, area: Rect) {
    let header = Row::new(
        std::iter::once(checkbox(view.page_all_checked).to_string())
            .chain(COLUMN_HEADERS.iter().map(|title| title.to_string())),
    )
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = view.rows.iter().map(record_row);
    let title = if view.loading { "Loading..." } else { "" };
    let table = Table::new(rows, COLUMN_WIDTHS)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default();
    if !view.rows.is_empty() {
        state.select(Some(view.cursor));
    }
    frame.render_stateful_widget(table, area, &mut state);
}

fn record_row(row: &RecordRowView) -> Row<'static> {
    Row::new(vec![
        Cell::from(checkbox(row.checked)),
        Cell::from(row.title.clone()),
        Cell::from(first_line(&row.place_of_origin)),
        Cell::from(first_line(&row.artist)),
        Cell::from(first_line(&row.inscriptions)),
        Cell::from(format_year(row.date_start)),
        Cell::from(format_year(row.date_end)),
    ])
}

fn render_overlay(frame: &mut Frame, overlay: &CountOverlayView, area: Rect) {
    let hint = match overlay.progress {
        Some((taken, requested)) => format!("Selecting... {taken} / {requested}"),
        None => format!("[Enter] Submit  [Esc] Close  (max {})", overlay.max),
    };
    let lines = vec![
        Line::from(OVERLAY_PROMPT),
        Line::from(format!("> {}", overlay.input)),
        Line::from(""),
        Line::from(hint),
    ];
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(OVERLAY_TITLE)),
        area,
    );
}

pub fn paginator_text(view: &AppViewModel) -> String {
    let shown_from = if view.rows.is_empty() { 0 } else { view.first + 1 };
    let shown_to = view.first + view.rows.len() as u64;
    format!(
        "Page {} of {} | rows {}-{} of {} | {} per page | {} selected",
        view.page_index,
        view.page_count,
        shown_from,
        shown_to,
        format_with_commas(view.total_records),
        view.page_size,
        view.selected_count
    )
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

fn first_line(text: &str) -> String {
    text.lines().next().unwrap_or_default().to_string()
}

fn format_year(year: Option<i32>) -> String {
    year.map(|y| y.to_string()).unwrap_or_default()
}

fn format_with_commas(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}
