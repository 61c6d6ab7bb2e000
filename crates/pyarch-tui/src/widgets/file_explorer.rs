//! File explorer panel
//!
//! Renders the generated forest as an indented list. Directory rows show
//! an open/closed marker; file rows show a per-language icon. The row
//! under the cursor gets a full-width highlight and the file open in the
//! viewer is drawn in the accent color.

use pyarch_app::explorer::ExplorerState;
use pyarch_core::FileNode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};

use super::truncate_str;
use crate::theme::{icons::IconSet, palette, styles};

pub struct FileExplorer<'a> {
    tree: &'a [FileNode],
    selected_path: Option<&'a str>,
    focused: bool,
    icons: IconSet,
}

impl<'a> FileExplorer<'a> {
    pub fn new(tree: &'a [FileNode], icons: IconSet) -> Self {
        Self {
            tree,
            selected_path: None,
            focused: false,
            icons,
        }
    }

    /// Path of the file shown in the viewer
    pub fn selected_path(mut self, path: Option<&'a str>) -> Self {
        self.selected_path = path;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn row_line(
        &self,
        node: &'a FileNode,
        depth: usize,
        expanded: bool,
        is_cursor: bool,
        max_width: usize,
    ) -> Line<'a> {
        let indent = "  ".repeat(depth);
        let (icon, icon_style) = if node.is_dir() {
            (self.icons.folder(expanded), styles::accent())
        } else {
            let language = node.language();
            (self.icons.file(language), styles::language(language))
        };

        let is_open = !node.is_dir() && self.selected_path == Some(node.path.as_str());
        let mut name_style = if is_open {
            Style::default().fg(palette::ACCENT)
        } else if node.is_dir() {
            styles::text_primary()
        } else {
            styles::text_secondary()
        };
        if is_cursor {
            name_style = name_style.add_modifier(Modifier::BOLD);
        }

        let used = indent.chars().count() + icon.chars().count() + 1;
        let name = truncate_str(&node.name, max_width.saturating_sub(used));

        Line::from(vec![
            Span::raw(indent),
            Span::styled(icon, icon_style),
            Span::raw(" "),
            Span::styled(name, name_style),
        ])
    }
}

impl StatefulWidget for FileExplorer<'_> {
    type State = ExplorerState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ExplorerState) {
        let block = styles::glass_block(self.focused)
            .title(Span::styled(" Explorer ", styles::text_secondary()))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.tree.is_empty() {
            Paragraph::new(Span::styled("No files generated yet.", styles::text_muted()))
                .render(inner, buf);
            return;
        }

        let visible = state.visible_rows(self.tree);
        let total = visible.len();
        state.clamp_cursor(total);
        let viewport_height = inner.height as usize;
        let (start, end) = state.visible_range(viewport_height, total);

        for (offset, (node, depth)) in visible[start..end].iter().enumerate() {
            let y = inner.y + offset as u16;
            let is_cursor = start + offset == state.cursor;

            // Full-row background for the cursor
            if is_cursor {
                let bg = if self.focused {
                    palette::SELECTED_ROW_BG
                } else {
                    palette::POPUP_BG
                };
                for x in inner.x..inner.right() {
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_style(Style::default().bg(bg));
                    }
                }
            }

            let expanded = node.is_dir() && state.is_expanded(&node.path);
            let line = self.row_line(*node, *depth, expanded, is_cursor, inner.width as usize);
            buf.set_line(inner.x, y, &line, inner.width);
        }

        // Simple scroll indicator (right edge) if content overflows
        if total > viewport_height {
            let scroll_x = inner.right().saturating_sub(1);
            let thumb_y = inner.y
                + ((state.cursor * viewport_height / total) as u16)
                    .min(inner.height.saturating_sub(1));
            if let Some(cell) = buf.cell_mut((scroll_x, thumb_y)) {
                cell.set_symbol("█").set_fg(palette::BORDER_DIM);
            }
        }
    }
}
