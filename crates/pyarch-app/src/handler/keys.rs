//! Key event handlers for each generation state

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus, GenerationState, ProjectView};

/// Convert key events to messages based on the current generation state
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match &state.generation {
        GenerationState::Idle => handle_key_prompt(state, key),
        GenerationState::Generating { .. } => handle_key_generating(key),
        GenerationState::Ready(view) => handle_key_project(view, key),
        GenerationState::Failed { .. } => handle_key_failed(key),
    }
}

/// Handle key events while editing the prompt
fn handle_key_prompt(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Enter => Some(Message::SubmitPrompt),

        // Delete character
        InputKey::Backspace => {
            let mut text = state.prompt.clone();
            text.pop();
            Some(Message::PromptInput { text })
        }

        // Clear all input
        InputKey::CharCtrl('u') => Some(Message::PromptInput {
            text: String::new(),
        }),

        InputKey::Char(c) => {
            let mut text = state.prompt.clone();
            text.push(c);
            Some(Message::PromptInput { text })
        }

        InputKey::Esc => Some(Message::Quit),

        _ => None,
    }
}

/// Handle key events while a request is in flight
fn handle_key_generating(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events on the failure screen
fn handle_key_failed(key: InputKey) -> Option<Message> {
    match key {
        // Try again
        InputKey::Enter | InputKey::Char('r') => Some(Message::Reset),
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events while browsing a generated project
fn handle_key_project(view: &ProjectView, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),

        InputKey::Tab | InputKey::BackTab => Some(Message::FocusNext),

        // Actions on the selected file / project
        InputKey::Char('c') => Some(Message::CopySelected),
        InputKey::Char('d') => Some(Message::ExportSelected),
        InputKey::Char('e') => Some(Message::ExportProject),
        InputKey::Char('n') => Some(Message::Reset),

        InputKey::PageUp => Some(Message::ViewerPageUp),
        InputKey::PageDown => Some(Message::ViewerPageDown),

        key => match view.focus {
            Focus::Explorer => handle_key_explorer(key),
            Focus::Viewer => handle_key_viewer(key),
        },
    }
}

fn handle_key_explorer(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('k') | InputKey::Up => Some(Message::ExplorerUp),
        InputKey::Char('j') | InputKey::Down => Some(Message::ExplorerDown),
        InputKey::Char('g') | InputKey::Home => Some(Message::ExplorerTop),
        InputKey::Char('G') | InputKey::End => Some(Message::ExplorerBottom),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ExplorerActivate),
        InputKey::Char('h') | InputKey::Left => Some(Message::ExplorerCollapse),
        InputKey::Char('l') | InputKey::Right => Some(Message::ExplorerExpand),
        _ => None,
    }
}

fn handle_key_viewer(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('k') | InputKey::Up => Some(Message::ViewerScrollUp),
        InputKey::Char('j') | InputKey::Down => Some(Message::ViewerScrollDown),
        InputKey::Char('g') | InputKey::Home => Some(Message::ViewerTop),
        InputKey::Char('G') | InputKey::End => Some(Message::ViewerBottom),
        InputKey::Char(' ') => Some(Message::ViewerPageDown),
        _ => None,
    }
}
