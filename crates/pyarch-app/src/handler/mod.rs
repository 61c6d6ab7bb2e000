//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for each generation state
//! - `explorer`: Explorer and viewer navigation handlers

pub(crate) mod explorer;
pub(crate) mod keys;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use pyarch_core::ProjectStructure;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Send the prompt to the generation service
    Generate { prompt: String },

    /// Put text on the system clipboard
    CopyToClipboard { content: String },

    /// Save one file's content under `directory`
    ExportFile {
        file_name: String,
        content: String,
        directory: PathBuf,
    },

    /// Write every file of the project under `directory/<project name>`
    ExportProject {
        project: Box<ProjectStructure>,
        directory: PathBuf,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
