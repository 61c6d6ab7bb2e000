//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use pyarch_core::prelude::*;

use crate::message::Message;
use crate::state::{AppState, GenerationState, LoadingState, Notice, ProjectView};

use super::{explorer, keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            if let Some(loading) = &mut state.loading_state {
                loading.tick();
            }
            let feedback = state.settings.ui.copy_feedback();
            if let Some(view) = state.project_view_mut() {
                view.expire_copy_feedback(Instant::now(), feedback);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Prompt & Generation
        // ─────────────────────────────────────────────────────────
        Message::PromptInput { text } => {
            if !state.generation.is_generating() {
                state.prompt = text;
            }
            UpdateResult::none()
        }

        Message::PromptPaste { text } => {
            // Only the prompt screen takes text; line breaks never submit
            if matches!(state.generation, GenerationState::Idle) {
                state.prompt.extend(
                    text.chars()
                        .filter(|c| *c != '\r')
                        .map(|c| if c == '\n' || c == '\t' { ' ' } else { c }),
                );
            }
            UpdateResult::none()
        }

        Message::SubmitPrompt => handle_submit_prompt(state),

        Message::GenerationCompleted { project } => handle_generation_completed(state, project),

        Message::GenerationFailed { error } => {
            if !state.generation.is_generating() {
                warn!("Ignoring generation failure outside of a request: {}", error);
                return UpdateResult::none();
            }
            error!("Generation failed: {}", error);
            state.generation = GenerationState::Failed {
                message: error.to_string(),
            };
            state.loading_state = None;
            UpdateResult::none()
        }

        Message::Reset => {
            match state.generation {
                GenerationState::Ready(_) | GenerationState::Failed { .. } => {
                    debug!("Reset from {} to idle", state.generation.label());
                    state.generation = GenerationState::Idle;
                    state.notice = None;
                }
                _ => {}
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Explorer & Viewer
        // ─────────────────────────────────────────────────────────
        Message::ExplorerUp => explorer::handle_explorer_up(state),
        Message::ExplorerDown => explorer::handle_explorer_down(state),
        Message::ExplorerTop => explorer::handle_explorer_top(state),
        Message::ExplorerBottom => explorer::handle_explorer_bottom(state),
        Message::ExplorerActivate => explorer::handle_explorer_activate(state),
        Message::ExplorerCollapse => explorer::handle_explorer_collapse(state),
        Message::ExplorerExpand => explorer::handle_explorer_expand(state),
        Message::SelectFile { path } => explorer::handle_select_file(state, &path),
        Message::FocusNext => {
            if let Some(view) = state.project_view_mut() {
                view.focus = view.focus.next();
            }
            UpdateResult::none()
        }

        Message::ViewerScrollUp => explorer::handle_viewer_scroll_up(state),
        Message::ViewerScrollDown => explorer::handle_viewer_scroll_down(state),
        Message::ViewerPageUp => explorer::handle_viewer_page_up(state),
        Message::ViewerPageDown => explorer::handle_viewer_page_down(state),
        Message::ViewerTop => explorer::handle_viewer_top(state),
        Message::ViewerBottom => explorer::handle_viewer_bottom(state),

        // ─────────────────────────────────────────────────────────
        // Copy & Export
        // ─────────────────────────────────────────────────────────
        Message::CopySelected => match state.project_view().and_then(|v| v.selection.as_ref()) {
            Some(selection) => UpdateResult::action(UpdateAction::CopyToClipboard {
                content: selection.content.clone(),
            }),
            None => UpdateResult::none(),
        },

        Message::CopyCompleted => {
            if let Some(view) = state.project_view_mut() {
                view.mark_copied(Instant::now());
            }
            UpdateResult::none()
        }

        Message::CopyFailed { error } => {
            warn!("Copy failed: {}", error);
            state.notice = Some(Notice::error(format!("Copy failed: {}", error)));
            UpdateResult::none()
        }

        Message::ExportSelected => {
            let directory = state.settings.export.resolve_dir();
            match state.project_view().and_then(|v| v.selection.as_ref()) {
                Some(selection) => UpdateResult::action(UpdateAction::ExportFile {
                    file_name: selection.file_name().to_string(),
                    content: selection.content.clone(),
                    directory,
                }),
                None => UpdateResult::none(),
            }
        }

        Message::FileExported { path } => {
            info!("Saved file to {}", path.display());
            state.notice = Some(Notice::info(format!("Saved {}", path.display())));
            UpdateResult::none()
        }

        Message::ExportProject => {
            let directory = state.settings.export.resolve_dir();
            match state.project_view() {
                Some(view) => UpdateResult::action(UpdateAction::ExportProject {
                    project: Box::new(view.project.clone()),
                    directory,
                }),
                None => UpdateResult::none(),
            }
        }

        Message::ProjectExported { path, files } => {
            info!("Exported {} files to {}", files, path.display());
            state.notice = Some(Notice::info(format!(
                "Exported {} files to {}",
                files,
                path.display()
            )));
            UpdateResult::none()
        }

        Message::ExportFailed { error } => {
            warn!("Export failed: {}", error);
            state.notice = Some(Notice::error(format!("Export failed: {}", error)));
            UpdateResult::none()
        }
    }
}

fn handle_submit_prompt(state: &mut AppState) -> UpdateResult {
    if !state.can_submit_prompt() {
        debug!(
            "Ignoring submit in {} state (prompt empty: {})",
            state.generation.label(),
            state.prompt.trim().is_empty()
        );
        return UpdateResult::none();
    }

    let prompt = state.prompt.clone();
    info!("Submitting prompt ({} chars)", prompt.chars().count());

    state.generation = GenerationState::Generating {
        prompt: prompt.clone(),
        started_at: Instant::now(),
    };
    state.loading_state = Some(LoadingState::new());
    state.notice = None;

    UpdateResult::action(UpdateAction::Generate { prompt })
}

fn handle_generation_completed(
    state: &mut AppState,
    project: pyarch_core::ProjectStructure,
) -> UpdateResult {
    let started_at = match &state.generation {
        GenerationState::Generating { started_at, .. } => *started_at,
        _ => {
            warn!(
                "Ignoring generated project '{}' outside of a request",
                project.project_name
            );
            return UpdateResult::none();
        }
    };

    info!(
        "Generated '{}' with {} files in {:.1}s",
        project.project_name,
        project.file_count(),
        started_at.elapsed().as_secs_f64()
    );

    state.generation = GenerationState::Ready(Box::new(ProjectView::new(project)));
    state.loading_state = None;
    UpdateResult::none()
}
