use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::models::HISTORY_CAPACITY;

/// Height of the error banner when shown
const ERROR_BANNER_HEIGHT: u16 = 3;
/// One row per history item plus borders
const HISTORY_HEIGHT: u16 = HISTORY_CAPACITY as u16 + 2;

/// Screen layout:
/// - Error banner: top, only while an error is shown
/// - Input and output panels: side by side, 50% width each
/// - Recent conversions: below the panels
/// - Status bar: bottom row
pub struct AppLayout {
    pub error_area: Rect,
    pub input_area: Rect,
    pub output_area: Rect,
    pub history_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    pub fn new(area: Rect, show_error: bool) -> Self {
        let banner = if show_error { ERROR_BANNER_HEIGHT } else { 0 };

        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(banner),
                Constraint::Min(3), // Panels (at least 3 rows)
                Constraint::Length(HISTORY_HEIGHT),
                Constraint::Length(1), // Status bar (1 row)
            ])
            .split(area);

        let panel_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(vertical_chunks[1]);

        Self {
            error_area: vertical_chunks[0],
            input_area: panel_chunks[0],
            output_area: panel_chunks[1],
            history_area: vertical_chunks[2],
            status_area: vertical_chunks[3],
        }
    }
}
