//! Test doubles for the generation client
//!
//! [`MockGenerator`] replays a canned raw payload through the same parser the
//! real client uses, so malformed-JSON paths behave exactly like production.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use pyarch_core::{GenerationError, ProjectStructure};

use crate::protocol::parse_project_payload;
use crate::Generator;

#[derive(Debug, Clone)]
enum MockResponse {
    Payload(String),
    Error(GenerationError),
}

/// Canned generator for tests
#[derive(Debug)]
pub struct MockGenerator {
    response: MockResponse,
    delay: Option<Duration>,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl MockGenerator {
    /// Respond with this raw model text (parsed like a real response)
    pub fn with_payload(text: impl Into<String>) -> Self {
        Self::from_response(MockResponse::Payload(text.into()))
    }

    /// Respond with a serialized project
    pub fn with_project(project: &ProjectStructure) -> Self {
        let text = serde_json::to_string(project).unwrap_or_default();
        Self::with_payload(text)
    }

    /// Fail every call with this error
    pub fn failing(error: GenerationError) -> Self {
        Self::from_response(MockResponse::Error(error))
    }

    fn from_response(response: MockResponse) -> Self {
        Self {
            response,
            delay: None,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    /// Sleep before answering, to observe the in-flight state
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().ok().and_then(|p| p.clone())
    }
}

impl Generator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<ProjectStructure, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_prompt.lock() {
            *last = Some(prompt.to_string());
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.response {
            MockResponse::Payload(text) => parse_project_payload(text),
            MockResponse::Error(error) => Err(error.clone()),
        }
    }
}

/// Payload for a small two-file project with a README
pub fn todo_app_payload() -> String {
    serde_json::json!({
        "projectName": "todo-app",
        "description": "A command-line todo list",
        "files": [
            { "path": "README.md", "content": "# Todo App\n\nRun with `python main.py`.\n" },
            { "path": "main.py", "content": "def main() -> None:\n    print(\"todo\")\n" }
        ]
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_generator_parses_payload() {
        let mock = MockGenerator::with_payload(todo_app_payload());
        let project = mock.generate("todo").await.unwrap();

        assert_eq!(project.project_name, "todo-app");
        assert_eq!(mock.call_count(), 1);
        assert_eq!(mock.last_prompt().as_deref(), Some("todo"));
    }

    #[tokio::test]
    async fn test_mock_generator_malformed_payload_is_parse_error() {
        let mock = MockGenerator::with_payload("{\"projectName\": ");
        let err = mock.generate("x").await.unwrap_err();
        assert!(matches!(err, GenerationError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_mock_generator_failing() {
        let mock = MockGenerator::failing(GenerationError::EmptyResponse);
        assert_eq!(
            mock.generate("x").await.unwrap_err(),
            GenerationError::EmptyResponse
        );
    }
}
