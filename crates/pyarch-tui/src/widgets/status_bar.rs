//! Status bar widget
//!
//! Displays the generation state, key hints for the current screen and,
//! on the right, the latest notice or the project's file count.

use pyarch_app::state::{AppState, GenerationState, NoticeKind};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

/// Status bar widget showing application state
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Get the state indicator with appropriate styling
    fn state_indicator(&self) -> Span<'static> {
        let (icon, color) = match &self.state.generation {
            GenerationState::Idle => ("○", palette::TEXT_SECONDARY),
            GenerationState::Generating { .. } => ("◐", palette::STATUS_YELLOW),
            GenerationState::Ready(_) => ("●", palette::STATUS_GREEN),
            GenerationState::Failed { .. } => ("✗", palette::STATUS_RED),
        };
        Span::styled(
            format!("{} {}", icon, self.state.generation.label()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    }

    /// Key hints for the current screen
    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match &self.state.generation {
            GenerationState::Idle => &[("Enter", "Generate"), ("^U", "Clear"), ("Esc", "Quit")],
            GenerationState::Generating { .. } => &[("q", "Quit")],
            GenerationState::Ready(_) => &[
                ("Tab", "Focus"),
                ("Enter", "Open"),
                ("c", "Copy"),
                ("d", "Download"),
                ("e", "Export"),
                ("n", "New"),
                ("q", "Quit"),
            ],
            GenerationState::Failed { .. } => &[("Enter", "Try Again"), ("q", "Quit")],
        }
    }

    /// Notice text, or the file count while browsing a project
    fn right_segment(&self) -> Option<Span<'static>> {
        if let Some(notice) = &self.state.notice {
            let style = match notice.kind {
                NoticeKind::Info => Style::default().fg(palette::STATUS_BLUE),
                NoticeKind::Error => styles::status_red(),
            };
            return Some(Span::styled(notice.text.clone(), style));
        }

        self.state.project_view().map(|view| {
            let count = view.project.file_count();
            let noun = if count == 1 { "file" } else { "files" };
            Span::styled(format!("{} {}", count, noun), styles::text_muted())
        })
    }

    /// Build all left-hand segments with separators
    fn build_segments(&self) -> Vec<Span<'static>> {
        let separator = Span::styled(" │ ", Style::default().fg(palette::BORDER_DIM));

        let mut segments = vec![Span::raw(" "), self.state_indicator(), separator];
        for (i, (key, action)) in self.hints().iter().enumerate() {
            if i > 0 {
                segments.push(Span::raw("  "));
            }
            segments.push(Span::styled(*key, styles::keybinding()));
            segments.push(Span::styled(format!(" {}", action), styles::text_muted()));
        }
        segments
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let left = Line::from(self.build_segments());
        let left_width = left.width() as u16;
        Paragraph::new(left).render(area, buf);

        let Some(right) = self.right_segment() else {
            return;
        };
        let right_width = right.width() as u16 + 1;

        // Notices win over hints when space is tight
        let (x, max_width) = if left_width + right_width + 1 <= area.width {
            (area.right() - right_width, right_width)
        } else {
            for x in area.x..area.right() {
                if let Some(cell) = buf.cell_mut((x, area.y)) {
                    cell.reset();
                }
            }
            (area.x + 1, area.width.saturating_sub(1))
        };
        buf.set_line(x, area.y, &Line::from(right), max_width);
    }
}
