//! Tests for handler module

use std::path::PathBuf;
use std::time::{Duration, Instant};

use super::*;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus, GenerationState, NoticeKind};
use pyarch_core::{GeneratedFile, GenerationError, ProjectStructure};

fn test_project(paths: &[&str]) -> ProjectStructure {
    ProjectStructure {
        project_name: "todo-app".to_string(),
        description: "A todo list".to_string(),
        files: paths
            .iter()
            .map(|p| GeneratedFile::new(*p, format!("line 1\nline 2\n# {}", p)))
            .collect(),
    }
}

/// State with a prompt already submitted
fn generating_state() -> AppState {
    let mut state = AppState::new();
    state.prompt = "a todo app".to_string();
    update(&mut state, Message::SubmitPrompt);
    state
}

fn ready_state(paths: &[&str]) -> AppState {
    let mut state = generating_state();
    update(
        &mut state,
        Message::GenerationCompleted {
            project: test_project(paths),
        },
    );
    state
}

fn selected_path(state: &AppState) -> Option<String> {
    state
        .project_view()
        .and_then(|v| v.selected_path())
        .map(str::to_string)
}

// ─────────────────────────────────────────────────────────
// Lifecycle
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting() {
    let mut state = AppState::new();
    assert!(!state.should_quit());

    update(&mut state, Message::Quit);

    assert!(state.should_quit());
}

#[test]
fn test_submit_prompt_starts_generation() {
    let mut state = AppState::new();
    state.prompt = "  a todo app  ".to_string();

    let result = update(&mut state, Message::SubmitPrompt);

    assert!(state.generation.is_generating());
    assert!(state.loading_state.is_some());
    // Sent as typed, not trimmed
    assert!(matches!(
        result.action,
        Some(UpdateAction::Generate { ref prompt }) if prompt == "  a todo app  "
    ));
}

#[test]
fn test_submit_blank_prompt_is_ignored() {
    let mut state = AppState::new();
    state.prompt = " \t ".to_string();

    let result = update(&mut state, Message::SubmitPrompt);

    assert!(matches!(state.generation, GenerationState::Idle));
    assert!(result.action.is_none());
}

#[test]
fn test_submit_while_generating_is_ignored() {
    let mut state = generating_state();

    let result = update(&mut state, Message::SubmitPrompt);

    assert!(state.generation.is_generating());
    assert!(result.action.is_none());
}

#[test]
fn test_prompt_input_ignored_while_generating() {
    let mut state = generating_state();

    update(
        &mut state,
        Message::PromptInput {
            text: "changed".to_string(),
        },
    );

    assert_eq!(state.prompt, "a todo app");
}

#[test]
fn test_generation_completed_selects_readme() {
    let state = ready_state(&["main.py", "app/readme.txt", "README.md"]);

    assert!(matches!(state.generation, GenerationState::Ready(_)));
    assert!(state.loading_state.is_none());
    // First match in list order
    assert_eq!(selected_path(&state), Some("app/readme.txt".to_string()));
}

#[test]
fn test_generation_completed_without_readme_selects_first_file() {
    let state = ready_state(&["src/main.py", "setup.py"]);
    assert_eq!(selected_path(&state), Some("src/main.py".to_string()));
}

#[test]
fn test_generation_completed_with_no_files() {
    let state = ready_state(&[]);
    let view = state.project_view().unwrap();
    assert!(view.selection.is_none());
    assert!(view.tree.is_empty());
}

#[test]
fn test_generation_completed_ignored_when_idle() {
    let mut state = AppState::new();

    update(
        &mut state,
        Message::GenerationCompleted {
            project: test_project(&["main.py"]),
        },
    );

    assert!(matches!(state.generation, GenerationState::Idle));
}

#[test]
fn test_generation_failed_shows_message_and_allows_resubmit() {
    let mut state = generating_state();

    update(
        &mut state,
        Message::GenerationFailed {
            error: GenerationError::EmptyResponse,
        },
    );

    match &state.generation {
        GenerationState::Failed { message } => assert_eq!(message, "No response generated from AI."),
        other => panic!("expected Failed, got {:?}", other),
    }
    assert!(state.loading_state.is_none());

    let result = update(&mut state, Message::SubmitPrompt);
    assert!(state.generation.is_generating());
    assert!(result.action.is_some());
}

#[test]
fn test_reset_from_ready_keeps_prompt() {
    let mut state = ready_state(&["main.py"]);

    update(&mut state, Message::Reset);

    assert!(matches!(state.generation, GenerationState::Idle));
    assert_eq!(state.prompt, "a todo app");
}

#[test]
fn test_reset_from_failed() {
    let mut state = generating_state();
    update(
        &mut state,
        Message::GenerationFailed {
            error: GenerationError::service("HTTP 500"),
        },
    );

    update(&mut state, Message::Reset);

    assert!(matches!(state.generation, GenerationState::Idle));
}

#[test]
fn test_reset_ignored_while_generating() {
    let mut state = generating_state();
    update(&mut state, Message::Reset);
    assert!(state.generation.is_generating());
}

#[test]
fn test_tick_advances_loading_animation() {
    let mut state = generating_state();
    update(&mut state, Message::Tick);
    assert_eq!(state.loading_state.as_ref().unwrap().animation_frame, 1);
}

// ─────────────────────────────────────────────────────────
// Keys
// ─────────────────────────────────────────────────────────

#[test]
fn test_ctrl_c_quits_in_every_state() {
    let states = [
        AppState::new(),
        generating_state(),
        ready_state(&["main.py"]),
    ];
    for state in &states {
        assert!(matches!(
            handle_key(state, InputKey::CharCtrl('c')),
            Some(Message::Quit)
        ));
    }
}

#[test]
fn test_typing_appends_to_prompt() {
    let mut state = AppState::new();

    for c in "hi!".chars() {
        let msg = handle_key(&state, InputKey::Char(c)).unwrap();
        update(&mut state, msg);
    }
    assert_eq!(state.prompt, "hi!");

    let msg = handle_key(&state, InputKey::Backspace).unwrap();
    update(&mut state, msg);
    assert_eq!(state.prompt, "hi");

    let msg = handle_key(&state, InputKey::CharCtrl('u')).unwrap();
    update(&mut state, msg);
    assert!(state.prompt.is_empty());
}

#[test]
fn test_paste_appends_flattened_text() {
    let mut state = AppState::new();
    state.prompt = "build ".to_string();

    update(
        &mut state,
        Message::PromptPaste {
            text: "a todo\r\napp".to_string(),
        },
    );

    assert_eq!(state.prompt, "build a todo app");
    assert!(matches!(state.generation, GenerationState::Idle));
}

#[test]
fn test_paste_ignored_outside_prompt() {
    let mut state = ready_state(&["main.py"]);

    update(
        &mut state,
        Message::PromptPaste {
            text: "q".to_string(),
        },
    );

    assert_eq!(state.prompt, "a todo app");
    assert!(!state.should_quit());
}

#[test]
fn test_q_in_prompt_is_text_not_quit() {
    let state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::PromptInput { .. })
    ));
}

#[test]
fn test_enter_submits_prompt() {
    let state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::Enter),
        Some(Message::SubmitPrompt)
    ));
}

#[test]
fn test_failed_enter_tries_again() {
    let mut state = generating_state();
    update(
        &mut state,
        Message::GenerationFailed {
            error: GenerationError::EmptyResponse,
        },
    );
    assert!(matches!(
        handle_key(&state, InputKey::Enter),
        Some(Message::Reset)
    ));
}

#[test]
fn test_key_routes_follow_focus() {
    let mut state = ready_state(&["main.py"]);
    assert!(matches!(
        handle_key(&state, InputKey::Down),
        Some(Message::ExplorerDown)
    ));

    update(&mut state, Message::FocusNext);
    assert_eq!(state.project_view().unwrap().focus, Focus::Viewer);
    assert!(matches!(
        handle_key(&state, InputKey::Down),
        Some(Message::ViewerScrollDown)
    ));
}

// ─────────────────────────────────────────────────────────
// Explorer
// ─────────────────────────────────────────────────────────

#[test]
fn test_activate_file_selects_it() {
    // Rows: src/, src/main.py, README.md
    let mut state = ready_state(&["README.md", "src/main.py"]);
    update(&mut state, Message::ExplorerTop);
    update(&mut state, Message::ExplorerDown);

    let result = update(&mut state, Message::ExplorerActivate);
    let follow_up = result.message.expect("file activation selects");
    update(&mut state, follow_up);

    assert_eq!(selected_path(&state), Some("src/main.py".to_string()));
}

#[test]
fn test_activate_directory_toggles() {
    let mut state = ready_state(&["README.md", "src/main.py"]);
    update(&mut state, Message::ExplorerTop);

    update(&mut state, Message::ExplorerActivate);
    {
        let view = state.project_view().unwrap();
        assert!(!view.explorer.is_expanded("src"));
        assert_eq!(view.visible_row_count(), 2);
    }

    update(&mut state, Message::ExplorerActivate);
    let view = state.project_view().unwrap();
    assert!(view.explorer.is_expanded("src"));
    assert_eq!(view.visible_row_count(), 3);
}

#[test]
fn test_collapse_on_file_moves_to_parent() {
    let mut state = ready_state(&["src/app/main.py"]);
    update(&mut state, Message::ExplorerBottom);

    update(&mut state, Message::ExplorerCollapse);

    let view = state.project_view().unwrap();
    assert_eq!(view.explorer.cursor_node(&view.tree).unwrap().path, "src/app");
}

#[test]
fn test_collapse_then_expand_directory() {
    let mut state = ready_state(&["src/main.py"]);
    update(&mut state, Message::ExplorerTop);

    update(&mut state, Message::ExplorerCollapse);
    assert!(!state.project_view().unwrap().explorer.is_expanded("src"));

    update(&mut state, Message::ExplorerExpand);
    assert!(state.project_view().unwrap().explorer.is_expanded("src"));
}

#[test]
fn test_viewer_scroll_is_bounded_by_content() {
    let mut state = ready_state(&["main.py"]);
    state.project_view_mut().unwrap().viewer.viewport_height = 2;

    for _ in 0..10 {
        update(&mut state, Message::ViewerScrollDown);
    }
    // 3 lines, 2 visible
    assert_eq!(state.project_view().unwrap().viewer.scroll, 1);

    update(&mut state, Message::ViewerTop);
    assert_eq!(state.project_view().unwrap().viewer.scroll, 0);
}

// ─────────────────────────────────────────────────────────
// Copy & Export
// ─────────────────────────────────────────────────────────

#[test]
fn test_copy_selected_returns_clipboard_action() {
    let mut state = ready_state(&["README.md"]);

    let result = update(&mut state, Message::CopySelected);

    assert!(matches!(
        result.action,
        Some(UpdateAction::CopyToClipboard { ref content }) if content.contains("README.md")
    ));
}

#[test]
fn test_copy_completed_shows_feedback() {
    let mut state = ready_state(&["README.md"]);
    update(&mut state, Message::CopyCompleted);

    let view = state.project_view().unwrap();
    assert!(view.copy_feedback_active(Instant::now(), Duration::from_secs(2)));
}

#[test]
fn test_copy_feedback_expires_on_tick() {
    let mut state = ready_state(&["README.md"]);
    state.settings.ui.copy_feedback_ms = 0;
    update(&mut state, Message::CopyCompleted);

    update(&mut state, Message::Tick);

    assert!(state.project_view().unwrap().copied_at.is_none());
}

#[test]
fn test_copy_without_project_does_nothing() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::CopySelected);
    assert!(result.action.is_none());
}

#[test]
fn test_export_selected_uses_last_segment() {
    let mut state = ready_state(&["src/pkg/main.py"]);
    state.settings.export.directory = Some(PathBuf::from("/tmp/out"));

    let result = update(&mut state, Message::ExportSelected);

    match result.action {
        Some(UpdateAction::ExportFile {
            file_name,
            directory,
            ..
        }) => {
            assert_eq!(file_name, "main.py");
            assert_eq!(directory, PathBuf::from("/tmp/out"));
        }
        other => panic!("expected ExportFile, got {:?}", other),
    }
}

#[test]
fn test_export_project_action() {
    let mut state = ready_state(&["README.md", "main.py"]);

    let result = update(&mut state, Message::ExportProject);

    match result.action {
        Some(UpdateAction::ExportProject { project, .. }) => {
            assert_eq!(project.project_name, "todo-app");
            assert_eq!(project.files.len(), 2);
        }
        other => panic!("expected ExportProject, got {:?}", other),
    }
}

#[test]
fn test_export_failure_sets_error_notice() {
    let mut state = ready_state(&["README.md"]);

    update(
        &mut state,
        Message::ExportFailed {
            error: "disk full".to_string(),
        },
    );

    let notice = state.notice.as_ref().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert!(notice.text.contains("disk full"));
}
