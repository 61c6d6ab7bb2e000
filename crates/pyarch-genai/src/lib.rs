//! # pyarch-genai - Generation Client
//!
//! One request/response exchange with the Gemini `generateContent` REST
//! endpoint, turning a user prompt into a [`ProjectStructure`].
//!
//! Depends on [`pyarch_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Generator Trait
//! - [`Generator`] - `Send` async trait implemented by every backend
//! - [`LocalGenerator`] - Non-`Send` variant generated alongside it
//!
//! ### Gemini Backend
//! - [`GeminiClient`] - reqwest-based client
//! - [`ClientConfig`] - Endpoint, model, credential and timeout
//! - [`resolve_api_key()`] - Read the credential from the environment
//!
//! ### Protocol
//! - [`protocol::GenerateContentRequest`] / [`protocol::GenerateContentResponse`] - Wire types
//! - [`parse_project_payload()`] - Validate and parse the returned text
//!
//! ### Prompt
//! - [`build_prompt()`] - Fixed instructional wrapper around the user request
//! - [`response_schema()`] - Structured output schema sent with every request

pub mod client;
pub mod prompt;
pub mod protocol;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{resolve_api_key, ClientConfig, GeminiClient, FALLBACK_API_KEY_ENV};
pub use prompt::{build_prompt, response_schema, DEFAULT_MODEL};
pub use protocol::{extract_candidate_text, parse_project_payload};

use pyarch_core::{GenerationError, ProjectStructure};

/// A backend that turns a prompt into a generated project.
///
/// No retries and no caching: one call is one request.
#[trait_variant::make(Generator: Send)]
pub trait LocalGenerator {
    /// Generate a project for the given user prompt
    async fn generate(&self, prompt: &str) -> Result<ProjectStructure, GenerationError>;
}
