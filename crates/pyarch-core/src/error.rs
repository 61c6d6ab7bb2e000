//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Failure of a single generation request.
///
/// Every variant is surfaced to the user as one message; none are retried.
/// `Clone` so the same failure can travel through the message channel and
/// into the headless event stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// No credential configured (checked when the request is made)
    #[error("API key not found in environment variables (set {env_var})")]
    MissingCredential { env_var: String },

    /// Transport failure or non-success status from the service
    #[error("Generation service error: {message}")]
    Service { message: String },

    /// The service answered but produced no text
    #[error("No response generated from AI.")]
    EmptyResponse,

    /// The text was not a valid project description
    #[error("Failed to parse generated project: {message}")]
    Parse { message: String },
}

impl GenerationError {
    pub fn missing_credential(env_var: impl Into<String>) -> Self {
        Self::MissingCredential {
            env_var: env_var.into(),
        }
    }

    pub fn service(message: impl Into<String>) -> Self {
        Self::Service {
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Generation Errors
    // ─────────────────────────────────────────────────────────────
    #[error(transparent)]
    Generation(#[from] GenerationError),

    // ─────────────────────────────────────────────────────────────
    // File Tree Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Duplicate file path in generated project: {path}")]
    DuplicatePath { path: String },

    #[error("Path is used as both a file and a directory: {path}")]
    PathConflict { path: String },

    // ─────────────────────────────────────────────────────────────
    // Export Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Export error: {message}")]
    Export { message: String },

    #[error("Refusing to write outside the export directory: {path}")]
    UnsafePath { path: String },

    #[error("Export directory not found: {path}")]
    ExportDirNotFound { path: PathBuf },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn export(message: impl Into<String>) -> Self {
        Self::Export {
            message: message.into(),
        }
    }

    pub fn unsafe_path(path: impl Into<String>) -> Self {
        Self::UnsafePath { path: path.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
