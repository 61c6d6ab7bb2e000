//! Gemini REST client
//!
//! One POST per generation. The credential is read once at construction
//! (see [`resolve_api_key`]) but only checked when a request is made, so the
//! UI can start without one and report the problem on first use.

use std::time::{Duration, Instant};

use pyarch_core::{GenerationError, ProjectStructure};
use tracing::{debug, info, warn};
use url::Url;

use crate::prompt::DEFAULT_MODEL;
use crate::protocol::{
    extract_candidate_text, parse_project_payload, service_error_message, GenerateContentRequest,
    GenerateContentResponse,
};
use crate::Generator;

/// Default REST base URL (API version included)
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variable holding the credential by default
pub const DEFAULT_API_KEY_ENV: &str = "API_KEY";

/// Checked when the configured variable is unset or empty
pub const FALLBACK_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default request timeout. Large projects take minutes to generate.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Read the credential from `env_var`, falling back to `GEMINI_API_KEY`.
///
/// Empty values count as missing.
pub fn resolve_api_key(env_var: &str) -> Option<String> {
    let read = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
    read(env_var).or_else(|| {
        if env_var == FALLBACK_API_KEY_ENV {
            None
        } else {
            read(FALLBACK_API_KEY_ENV)
        }
    })
}

/// Connection settings for [`GeminiClient`]
#[derive(Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    /// Variable the key was read from, for the missing-credential message
    pub api_key_env: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_key_env", &self.api_key_env)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Full `generateContent` URL for the configured model
    pub fn endpoint(&self) -> Result<Url, GenerationError> {
        let base = self.base_url.trim_end_matches('/');
        let raw = format!("{}/models/{}:generateContent", base, self.model);
        Url::parse(&raw)
            .map_err(|e| GenerationError::service(format!("Invalid endpoint URL {raw}: {e}")))
    }
}

/// Gemini `generateContent` client
pub struct GeminiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl GeminiClient {
    pub fn new(config: ClientConfig) -> Result<Self, GenerationError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GenerationError::service(format!("Failed to build HTTP client: {e}")))?;
        debug!("Created Gemini client: {:?}", config);
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl Generator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<ProjectStructure, GenerationError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| GenerationError::missing_credential(&self.config.api_key_env))?;
        let url = self.config.endpoint()?;
        let request = GenerateContentRequest::for_prompt(prompt);

        info!("Requesting generation from model {}", self.config.model);
        let started = Instant::now();

        let response = self
            .http
            .post(url)
            .header(API_KEY_HEADER, api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerationError::service(format!("Request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::service(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            let message = service_error_message(status.as_u16(), &body);
            warn!("Generation request failed: {}", message);
            return Err(GenerationError::service(message));
        }

        let response: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| GenerationError::service(format!("Unexpected response body: {e}")))?;

        if let Some(reason) = response
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            warn!("Prompt blocked by the service: {}", reason);
        }

        let text = extract_candidate_text(&response).ok_or(GenerationError::EmptyResponse)?;
        let project = parse_project_payload(&text)?;

        info!(
            "Generated project '{}' with {} files in {:?}",
            project.project_name,
            project.files.len(),
            started.elapsed()
        );
        Ok(project)
    }
}
