//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use pyarch_core::{GenerationError, ProjectStructure};

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick for periodic updates (spinner animation, copy feedback expiry)
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Prompt & Generation
    // ─────────────────────────────────────────────────────────
    /// Replace the prompt text
    PromptInput { text: String },

    /// Text pasted into the terminal
    PromptPaste { text: String },

    /// Submit the prompt for generation
    SubmitPrompt,

    /// Generation finished with a project
    GenerationCompleted { project: ProjectStructure },

    /// Generation failed
    GenerationFailed { error: GenerationError },

    /// Discard the current result or failure and return to the prompt
    Reset,

    // ─────────────────────────────────────────────────────────
    // Explorer
    // ─────────────────────────────────────────────────────────
    ExplorerUp,
    ExplorerDown,
    ExplorerTop,
    ExplorerBottom,

    /// Toggle the directory or open the file under the cursor
    ExplorerActivate,

    /// Collapse the directory under the cursor (or jump to its parent)
    ExplorerCollapse,

    /// Expand the directory under the cursor
    ExplorerExpand,

    /// Select a file by path
    SelectFile { path: String },

    /// Move focus between explorer and viewer
    FocusNext,

    // ─────────────────────────────────────────────────────────
    // Viewer
    // ─────────────────────────────────────────────────────────
    ViewerScrollUp,
    ViewerScrollDown,
    ViewerPageUp,
    ViewerPageDown,
    ViewerTop,
    ViewerBottom,

    // ─────────────────────────────────────────────────────────
    // Copy & Export
    // ─────────────────────────────────────────────────────────
    /// Copy the selected file's content to the clipboard
    CopySelected,
    CopyCompleted,
    CopyFailed { error: String },

    /// Save the selected file to the export directory
    ExportSelected,
    FileExported { path: PathBuf },

    /// Write the whole project tree to the export directory
    ExportProject,
    ProjectExported { path: PathBuf, files: usize },

    ExportFailed { error: String },
}
