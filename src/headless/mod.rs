//! Headless mode - JSON event output for scripting
//!
//! Runs a single generation without the TUI and reports progress as
//! structured JSON events on stdout, so the result can be consumed by
//! scripts and CI jobs instead of parsing terminal output.
//!
//! # Event Format
//!
//! Events are output as NDJSON (newline-delimited JSON), one event per line.
//! Each event has an "event" field indicating its type, along with event-specific data.
//!
//! # Example Output
//!
//! ```json
//! {"event":"generation_started","model":"gemini-3-pro-preview","prompt":"a todo app","timestamp":1704700001000}
//! {"event":"generation_completed","project_name":"todo-app","description":"...","file_count":2,"duration_ms":8123,"timestamp":1704700009123}
//! {"event":"file","path":"README.md","language":"markdown","bytes":42,"timestamp":1704700009123}
//! ```

pub mod runner;

use std::io::{self, Write};

use chrono::Utc;
use pyarch_core::{classify, GeneratedFile};
use serde::Serialize;
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Request sent to the model
    GenerationStarted {
        model: String,
        prompt: String,
        timestamp: i64,
    },

    /// Model returned a valid project
    GenerationCompleted {
        project_name: String,
        description: String,
        file_count: usize,
        duration_ms: u64,
        timestamp: i64,
    },

    /// One generated file
    File {
        path: String,
        language: String,
        bytes: usize,
        timestamp: i64,
    },

    /// Project written to disk
    ProjectExported {
        path: String,
        files: usize,
        timestamp: i64,
    },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        // Serialize to JSON
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        // Write to stdout with newline (NDJSON format)
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        // Flush to ensure immediate output
        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn generation_started(model: &str, prompt: &str) -> Self {
        Self::GenerationStarted {
            model: model.to_string(),
            prompt: prompt.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn generation_completed(
        project_name: &str,
        description: &str,
        file_count: usize,
        duration_ms: u64,
    ) -> Self {
        Self::GenerationCompleted {
            project_name: project_name.to_string(),
            description: description.to_string(),
            file_count,
            duration_ms,
            timestamp: Self::now(),
        }
    }

    pub fn file(file: &GeneratedFile) -> Self {
        Self::File {
            path: file.path.clone(),
            language: classify(&file.path).label().to_string(),
            bytes: file.content.len(),
            timestamp: Self::now(),
        }
    }

    pub fn project_exported(path: &str, files: usize) -> Self {
        Self::ProjectExported {
            path: path.to_string(),
            files,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_value(event: &HeadlessEvent) -> serde_json::Value {
        let json = serde_json::to_string(event).expect("serialization failed");
        serde_json::from_str(&json).expect("invalid JSON")
    }

    #[test]
    fn test_generation_started_serialization() {
        let value = to_value(&HeadlessEvent::generation_started(
            "gemini-3-pro-preview",
            "a todo app",
        ));

        assert_eq!(value["event"], "generation_started");
        assert_eq!(value["model"], "gemini-3-pro-preview");
        assert_eq!(value["prompt"], "a todo app");
        assert!(value["timestamp"].is_number());
    }

    #[test]
    fn test_generation_completed_serialization() {
        let value = to_value(&HeadlessEvent::generation_completed(
            "todo-app",
            "A todo list",
            3,
            1250,
        ));

        assert_eq!(value["event"], "generation_completed");
        assert_eq!(value["project_name"], "todo-app");
        assert_eq!(value["file_count"], 3);
        assert_eq!(value["duration_ms"], 1250);
    }

    #[test]
    fn test_file_serialization() {
        let file = GeneratedFile::new("app/main.py", "print('hi')\n");
        let value = to_value(&HeadlessEvent::file(&file));

        assert_eq!(value["event"], "file");
        assert_eq!(value["path"], "app/main.py");
        assert_eq!(value["language"], "python");
        assert_eq!(value["bytes"], 12);
    }

    #[test]
    fn test_error_serialization() {
        let value = to_value(&HeadlessEvent::error("Empty response".to_string(), true));

        assert_eq!(value["event"], "error");
        assert_eq!(value["message"], "Empty response");
        assert_eq!(value["fatal"], true);
    }
}
