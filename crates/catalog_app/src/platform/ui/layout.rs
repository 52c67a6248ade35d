use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::constants::{OVERLAY_HEIGHT, OVERLAY_WIDTH};

pub struct Areas {
    pub title: Rect,
    pub table: Rect,
    pub paginator: Rect,
    pub status: Rect,
    pub help: Rect,
}

pub fn split(area: Rect) -> Areas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Min(5),    // table
            Constraint::Length(1), // paginator
            Constraint::Length(1), // status
            Constraint::Length(1), // key help
        ])
        .split(area);
    Areas {
        title: chunks[0],
        table: chunks[1],
        paginator: chunks[2],
        status: chunks[3],
        help: chunks[4],
    }
}

/// Count overlay anchored near the top-left of the table, like a header popover.
pub fn overlay(table: Rect) -> Rect {
    let width = OVERLAY_WIDTH.min(table.width);
    let height = OVERLAY_HEIGHT.min(table.height);
    Rect {
        x: table.x + 1.min(table.width.saturating_sub(width)),
        y: table.y + 1.min(table.height.saturating_sub(height)),
        width,
        height,
    }
}
