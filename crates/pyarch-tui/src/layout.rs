//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Explorer width never shrinks below this many columns
pub const MIN_EXPLORER_WIDTH: u16 = 24;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Main header area (title + project name)
    pub header: Rect,

    /// Screen body (prompt, loading, failure or project panels)
    pub body: Rect,

    /// One-line status/hints bar
    pub status: Rect,
}

/// Explorer and viewer side by side
#[derive(Debug, Clone, Copy)]
pub struct ProjectAreas {
    pub explorer: Rect,
    pub viewer: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Min(3),    // Body
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// Split the body into explorer (about a quarter, at least
/// `MIN_EXPLORER_WIDTH`) and viewer
pub fn split_project(body: Rect) -> ProjectAreas {
    let explorer_width = (body.width / 4).max(MIN_EXPLORER_WIDTH).min(body.width);
    let chunks =
        Layout::horizontal([Constraint::Length(explorer_width), Constraint::Min(0)]).split(body);

    ProjectAreas {
        explorer: chunks[0],
        viewer: chunks[1],
    }
}
