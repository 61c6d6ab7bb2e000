//! File explorer view state
//!
//! Expand/collapse state is keyed by node path, so it stays attached to the
//! right directory however the forest is rendered. Directories start
//! expanded; only collapsed paths are recorded.

use std::collections::HashSet;

use pyarch_core::{FileNode, NodeKind};

/// Cursor and expansion state for the explorer panel
#[derive(Debug, Clone, Default)]
pub struct ExplorerState {
    collapsed: HashSet<String>,

    /// Index into the visible rows
    pub cursor: usize,

    /// First visible row in the viewport
    pub scroll_offset: usize,
}

impl ExplorerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        !self.collapsed.contains(path)
    }

    pub fn toggle(&mut self, path: &str) {
        if !self.collapsed.remove(path) {
            self.collapsed.insert(path.to_string());
        }
    }

    pub fn expand(&mut self, path: &str) {
        self.collapsed.remove(path);
    }

    pub fn collapse(&mut self, path: &str) {
        self.collapsed.insert(path.to_string());
    }

    /// Flatten the forest into `(node, depth)` rows in pre-order.
    ///
    /// Children of collapsed directories are skipped.
    pub fn visible_rows<'a>(&self, forest: &'a [FileNode]) -> Vec<(&'a FileNode, usize)> {
        let mut rows = Vec::new();
        self.collect_rows(forest, 0, &mut rows);
        rows
    }

    fn collect_rows<'a>(
        &self,
        nodes: &'a [FileNode],
        depth: usize,
        rows: &mut Vec<(&'a FileNode, usize)>,
    ) {
        for node in nodes {
            rows.push((node, depth));
            if node.kind == NodeKind::Directory && self.is_expanded(&node.path) {
                self.collect_rows(&node.children, depth + 1, rows);
            }
        }
    }

    /// Node under the cursor
    pub fn cursor_node<'a>(&self, forest: &'a [FileNode]) -> Option<&'a FileNode> {
        self.visible_rows(forest).get(self.cursor).map(|(node, _)| *node)
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self, total: usize) {
        if self.cursor + 1 < total {
            self.cursor += 1;
        }
    }

    pub fn move_to_top(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_bottom(&mut self, total: usize) {
        self.cursor = total.saturating_sub(1);
    }

    /// Keep the cursor in range after rows disappear (e.g. on collapse)
    pub fn clamp_cursor(&mut self, total: usize) {
        if self.cursor >= total {
            self.cursor = total.saturating_sub(1);
        }
    }

    /// Put the cursor on `path`, expanding its ancestors first
    pub fn reveal(&mut self, forest: &[FileNode], path: &str) -> bool {
        let mut prefix = String::new();
        let segments: Vec<&str> = path.split('/').collect();
        for segment in &segments[..segments.len().saturating_sub(1)] {
            if !prefix.is_empty() {
                prefix.push('/');
            }
            prefix.push_str(segment);
            self.expand(&prefix);
        }

        match self
            .visible_rows(forest)
            .iter()
            .position(|(node, _)| node.path == path)
        {
            Some(index) => {
                self.cursor = index;
                true
            }
            None => false,
        }
    }

    /// Row range `[start, end)` to draw so the cursor stays visible
    pub fn visible_range(&mut self, viewport_height: usize, total: usize) -> (usize, usize) {
        if viewport_height == 0 || total == 0 {
            return (0, 0);
        }
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + viewport_height {
            self.scroll_offset = self.cursor + 1 - viewport_height;
        }
        let max_offset = total.saturating_sub(viewport_height);
        self.scroll_offset = self.scroll_offset.min(max_offset);
        (self.scroll_offset, (self.scroll_offset + viewport_height).min(total))
    }
}
