use std::time::Duration;

use ratatui::layout::Constraint;

pub const APP_TITLE: &str = "Artworks Catalog";

pub const COLUMN_HEADERS: [&str; 6] = [
    "Title",
    "Place of Origin",
    "Artist",
    "Inscriptions",
    "Date Start",
    "Date End",
];

/// Checkbox column followed by [`COLUMN_HEADERS`].
pub const COLUMN_WIDTHS: [Constraint; 7] = [
    Constraint::Length(3),
    Constraint::Percentage(28),
    Constraint::Percentage(14),
    Constraint::Percentage(22),
    Constraint::Percentage(20),
    Constraint::Length(10),
    Constraint::Length(8),
];

pub const HELP_TEXT: &str =
    "space toggle row | a toggle page | n/p page | g/G first/last | +/- page size | s select N | q quit";

pub const OVERLAY_TITLE: &str = "Select rows";
pub const OVERLAY_PROMPT: &str = "Enter number of rows to select:";
pub const OVERLAY_WIDTH: u16 = 44;
pub const OVERLAY_HEIGHT: u16 = 7;

/// How long the loop waits for a key before checking the engine again.
pub const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);
