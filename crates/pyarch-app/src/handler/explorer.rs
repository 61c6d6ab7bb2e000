//! Explorer and viewer navigation handlers

use pyarch_core::prelude::*;

use crate::message::Message;
use crate::state::AppState;

use super::UpdateResult;

pub fn handle_explorer_up(state: &mut AppState) -> UpdateResult {
    if let Some(view) = state.project_view_mut() {
        view.explorer.move_up();
    }
    UpdateResult::none()
}

pub fn handle_explorer_down(state: &mut AppState) -> UpdateResult {
    if let Some(view) = state.project_view_mut() {
        let total = view.visible_row_count();
        view.explorer.move_down(total);
    }
    UpdateResult::none()
}

pub fn handle_explorer_top(state: &mut AppState) -> UpdateResult {
    if let Some(view) = state.project_view_mut() {
        view.explorer.move_to_top();
    }
    UpdateResult::none()
}

pub fn handle_explorer_bottom(state: &mut AppState) -> UpdateResult {
    if let Some(view) = state.project_view_mut() {
        let total = view.visible_row_count();
        view.explorer.move_to_bottom(total);
    }
    UpdateResult::none()
}

/// Directories toggle; files open in the viewer
pub fn handle_explorer_activate(state: &mut AppState) -> UpdateResult {
    let Some(view) = state.project_view_mut() else {
        return UpdateResult::none();
    };
    let Some((path, is_dir)) = view
        .explorer
        .cursor_node(&view.tree)
        .map(|node| (node.path.clone(), node.is_dir()))
    else {
        return UpdateResult::none();
    };

    if is_dir {
        view.explorer.toggle(&path);
        let total = view.visible_row_count();
        view.explorer.clamp_cursor(total);
        UpdateResult::none()
    } else {
        UpdateResult::message(Message::SelectFile { path })
    }
}

/// Collapse an open directory, otherwise move to the parent directory
pub fn handle_explorer_collapse(state: &mut AppState) -> UpdateResult {
    let Some(view) = state.project_view_mut() else {
        return UpdateResult::none();
    };
    let Some((path, is_dir)) = view
        .explorer
        .cursor_node(&view.tree)
        .map(|node| (node.path.clone(), node.is_dir()))
    else {
        return UpdateResult::none();
    };

    if is_dir && view.explorer.is_expanded(&path) {
        view.explorer.collapse(&path);
        return UpdateResult::none();
    }

    if let Some((parent, _)) = path.rsplit_once('/') {
        let index = view
            .explorer
            .visible_rows(&view.tree)
            .iter()
            .position(|(node, _)| node.path == parent);
        if let Some(index) = index {
            view.explorer.cursor = index;
        }
    }
    UpdateResult::none()
}

pub fn handle_explorer_expand(state: &mut AppState) -> UpdateResult {
    if let Some(view) = state.project_view_mut() {
        let dir = view
            .explorer
            .cursor_node(&view.tree)
            .filter(|node| node.is_dir())
            .map(|node| node.path.clone());
        if let Some(path) = dir {
            view.explorer.expand(&path);
        }
    }
    UpdateResult::none()
}

pub fn handle_select_file(state: &mut AppState, path: &str) -> UpdateResult {
    if let Some(view) = state.project_view_mut() {
        if !view.select(path) {
            debug!("No file at {}", path);
        }
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Viewer
// ─────────────────────────────────────────────────────────

pub fn handle_viewer_scroll_up(state: &mut AppState) -> UpdateResult {
    if let Some(view) = state.project_view_mut() {
        view.viewer.scroll_up(1);
    }
    UpdateResult::none()
}

pub fn handle_viewer_scroll_down(state: &mut AppState) -> UpdateResult {
    if let Some(view) = state.project_view_mut() {
        let total = view.selected_line_count();
        view.viewer.scroll_down(1, total);
    }
    UpdateResult::none()
}

pub fn handle_viewer_page_up(state: &mut AppState) -> UpdateResult {
    if let Some(view) = state.project_view_mut() {
        let page = view.viewer.page();
        view.viewer.scroll_up(page);
    }
    UpdateResult::none()
}

pub fn handle_viewer_page_down(state: &mut AppState) -> UpdateResult {
    if let Some(view) = state.project_view_mut() {
        let total = view.selected_line_count();
        let page = view.viewer.page();
        view.viewer.scroll_down(page, total);
    }
    UpdateResult::none()
}

pub fn handle_viewer_top(state: &mut AppState) -> UpdateResult {
    if let Some(view) = state.project_view_mut() {
        view.viewer.scroll = 0;
    }
    UpdateResult::none()
}

pub fn handle_viewer_bottom(state: &mut AppState) -> UpdateResult {
    if let Some(view) = state.project_view_mut() {
        let total = view.selected_line_count();
        view.viewer.scroll_to_bottom(total);
    }
    UpdateResult::none()
}
