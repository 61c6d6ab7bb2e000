//! Header bar widget
//!
//! Provides the main header with app title and the current project name.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{icons::IconSet, palette, styles};

/// Main header showing app title and project name
pub struct MainHeader<'a> {
    project_name: Option<&'a str>,
    icons: IconSet,
}

impl<'a> MainHeader<'a> {
    pub fn new(project_name: Option<&'a str>, icons: IconSet) -> Self {
        Self {
            project_name,
            icons,
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.logo(), styles::accent()),
            Span::raw(" "),
            Span::styled(
                "PyArchitect AI",
                Style::default()
                    .fg(palette::TEXT_BRIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled("Codebase Generator", styles::text_muted()),
        ]);
        let left_width = left.width() as u16;
        buf.set_line(inner.x, inner.y, &left, inner.width);

        // Project name on the right, only if it fits beside the title
        if let Some(name) = self.project_name {
            let label = "Project: ";
            let right_width = (label.width() + name.width() + 1) as u16;
            if left_width + right_width + 2 <= inner.width {
                let right = Line::from(vec![
                    Span::styled(label, styles::text_secondary()),
                    Span::styled(name, styles::accent_bold()),
                    Span::raw(" "),
                ]);
                let x = inner.right().saturating_sub(right_width);
                buf.set_line(x, inner.y, &right, right_width);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use pyarch_app::config::IconMode;

    #[test]
    fn test_header_shows_title() {
        let mut term = TestTerminal::new();
        let header = MainHeader::new(None, IconSet::new(IconMode::Unicode));
        term.render_widget(header, Rect::new(0, 0, 80, 3));

        assert!(term.line_contains(1, "PyArchitect AI"));
        assert!(term.line_contains(1, "Codebase Generator"));
        assert!(!term.buffer_contains("Project:"));
    }

    #[test]
    fn test_header_shows_project_name() {
        let mut term = TestTerminal::new();
        let header = MainHeader::new(Some("todo-app"), IconSet::new(IconMode::Unicode));
        term.render_widget(header, Rect::new(0, 0, 80, 3));

        assert!(term.line_contains(1, "Project: todo-app"));
    }

    #[test]
    fn test_header_drops_project_name_when_narrow() {
        let mut term = TestTerminal::with_size(40, 3);
        let header = MainHeader::new(Some("a-very-long-project-name"), IconSet::new(IconMode::Unicode));
        term.render_widget(header, Rect::new(0, 0, 40, 3));

        assert!(term.buffer_contains("PyArchitect AI"));
        assert!(!term.buffer_contains("Project:"));
    }
}
