//! Code viewer panel
//!
//! Shows the selected file with a line-number gutter. The title carries the
//! file path; the right side of the top border shows the language and
//! either the copy/download hints or a short "Copied" confirmation.

use pyarch_app::state::{Selection, ViewerState};
use pyarch_core::classify;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};

use super::truncate_str;
use crate::theme::{icons::IconSet, palette, styles};

const TAB: &str = "    ";

pub struct CodeViewer<'a> {
    selection: Option<&'a Selection>,
    icons: IconSet,
    focused: bool,
    line_numbers: bool,
    copied: bool,
}

impl<'a> CodeViewer<'a> {
    pub fn new(selection: Option<&'a Selection>, icons: IconSet) -> Self {
        Self {
            selection,
            icons,
            focused: false,
            line_numbers: true,
            copied: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn line_numbers(mut self, show: bool) -> Self {
        self.line_numbers = show;
        self
    }

    /// Show the "Copied" confirmation instead of the action hints
    pub fn copied(mut self, copied: bool) -> Self {
        self.copied = copied;
        self
    }

    fn badge(&self, selection: &Selection) -> Line<'static> {
        let language = classify(&selection.path);
        let mut spans = vec![Span::styled(
            format!(" {} ", language.label()),
            styles::language(language),
        )];
        if self.copied {
            spans.push(Span::styled(
                format!("{} Copied ", self.icons.check()),
                styles::status_green(),
            ));
        } else {
            spans.extend([
                Span::styled(self.icons.copy(), styles::text_muted()),
                Span::styled(" c", styles::keybinding()),
                Span::styled(" Copy  ", styles::text_muted()),
                Span::styled(self.icons.download(), styles::text_muted()),
                Span::styled(" d", styles::keybinding()),
                Span::styled(" Download ", styles::text_muted()),
            ]);
        }
        Line::from(spans)
    }
}

impl StatefulWidget for CodeViewer<'_> {
    type State = ViewerState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ViewerState) {
        let mut block = styles::glass_block(self.focused).style(Style::default().bg(palette::CARD_BG));
        if let Some(selection) = self.selection {
            block = block
                .title(Span::styled(
                    format!(" {} ", selection.path),
                    styles::text_primary(),
                ))
                .title_top(self.badge(selection).alignment(Alignment::Right));
        }
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let Some(selection) = self.selection else {
            let y = inner.y + inner.height / 2;
            let empty = Rect::new(inner.x, y, inner.width, 1);
            Paragraph::new(Span::styled("Select a file to view code", styles::text_muted()))
                .alignment(Alignment::Center)
                .render(empty, buf);
            return;
        };

        let lines: Vec<&str> = selection.content.lines().collect();
        let total = lines.len();
        state.viewport_height = inner.height as usize;
        // Clamp after a resize or a file switch
        state.scroll_down(0, total);

        let gutter_width = if self.line_numbers {
            total.max(1).to_string().len() as u16 + 1
        } else {
            0
        };
        let gutter_width = gutter_width.min(inner.width);
        let text_x = inner.x + gutter_width;
        let text_width = inner.width - gutter_width;

        for row in 0..inner.height {
            let y = inner.y + row;
            let index = state.scroll + row as usize;

            if gutter_width > 0 {
                for x in inner.x..text_x {
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_style(Style::default().bg(palette::GUTTER_BG));
                    }
                }
            }

            let Some(line) = lines.get(index) else {
                continue;
            };

            if gutter_width > 0 {
                let number = format!(
                    "{:>width$} ",
                    index + 1,
                    width = (gutter_width - 1) as usize
                );
                buf.set_stringn(
                    inner.x,
                    y,
                    &number,
                    gutter_width as usize,
                    styles::text_muted().bg(palette::GUTTER_BG),
                );
            }

            // One column of padding between gutter and code
            if text_width > 1 {
                let expanded = line.replace('\t', TAB);
                let visible = truncate_str(&expanded, (text_width - 1) as usize);
                buf.set_stringn(
                    text_x + 1,
                    y,
                    visible,
                    (text_width - 1) as usize,
                    styles::text_primary(),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use pyarch_app::config::IconMode;

    fn selection(path: &str, content: &str) -> Selection {
        Selection {
            path: path.to_string(),
            content: content.to_string(),
        }
    }

    fn icons() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    #[test]
    fn test_empty_state() {
        let mut state = ViewerState::default();
        let mut term = TestTerminal::with_size(60, 10);

        term.render_stateful_widget(CodeViewer::new(None, icons()), term.area(), &mut state);

        assert!(term.buffer_contains("Select a file to view code"));
    }

    #[test]
    fn test_renders_path_language_and_numbered_lines() {
        let sel = selection("app/main.py", "import os\nprint(os.getcwd())\n");
        let mut state = ViewerState::default();
        let mut term = TestTerminal::with_size(70, 8);

        term.render_stateful_widget(CodeViewer::new(Some(&sel), icons()), term.area(), &mut state);

        assert!(term.line_contains(0, "app/main.py"));
        assert!(term.line_contains(0, "python"));
        assert!(term.line_contains(0, "Copy"));
        assert!(term.buffer_contains("1  import os"));
        assert!(term.buffer_contains("2  print(os.getcwd())"));
        assert_eq!(state.viewport_height, 6);
    }

    #[test]
    fn test_copied_badge_replaces_hints() {
        let sel = selection("README.md", "# Hi\n");
        let mut state = ViewerState::default();
        let mut term = TestTerminal::with_size(70, 6);

        term.render_stateful_widget(
            CodeViewer::new(Some(&sel), icons()).copied(true),
            term.area(),
            &mut state,
        );

        assert!(term.line_contains(0, "Copied"));
        assert!(!term.line_contains(0, "Download"));
    }

    #[test]
    fn test_scroll_offset_and_clamp() {
        let content: String = (1..=30).map(|i| format!("line {}\n", i)).collect();
        let sel = selection("notes.txt", &content);
        let mut state = ViewerState {
            scroll: 100,
            viewport_height: 0,
        };
        let mut term = TestTerminal::with_size(40, 12);

        term.render_stateful_widget(CodeViewer::new(Some(&sel), icons()), term.area(), &mut state);

        // 10 visible rows, 30 lines
        assert_eq!(state.scroll, 20);
        assert!(term.buffer_contains("line 30"));
        assert!(!term.buffer_contains("line 20 "));
        assert!(term.buffer_contains("line 21"));
    }

    #[test]
    fn test_tabs_expand_and_numbers_can_hide() {
        let sel = selection("Makefile", "run:\n\tpython main.py\n");
        let mut state = ViewerState::default();
        let mut term = TestTerminal::with_size(50, 6);

        term.render_stateful_widget(
            CodeViewer::new(Some(&sel), icons()).line_numbers(false),
            term.area(),
            &mut state,
        );

        assert!(term.buffer_contains("│ run:"));
        assert!(term.buffer_contains("│     python main.py"));
    }
}
