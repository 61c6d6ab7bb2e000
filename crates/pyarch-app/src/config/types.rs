//! Configuration types for PyArchitect
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `GenerationSettings`, `UiSettings`, `ExportSettings` - Per-section settings

use std::path::PathBuf;
use std::time::Duration;

use pyarch_genai::client::{DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL};
use pyarch_genai::{resolve_api_key, ClientConfig, DEFAULT_MODEL};
use serde::{Deserialize, Serialize};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub generation: GenerationSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub export: ExportSettings,
}

/// Generation service settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerationSettings {
    /// Gemini model name
    #[serde(default = "default_model")]
    pub model: String,

    /// REST base URL, API version included
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GenerationSettings {
    /// Client configuration, reading the API key from the environment now
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            api_key: resolve_api_key(&self.api_key_env),
            api_key_env: self.api_key_env.clone(),
            timeout: Duration::from_secs(self.timeout_secs.max(1)),
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

fn default_timeout_secs() -> u64 {
    300
}

/// Icon rendering mode
///
/// Controls whether the TUI uses Nerd Font glyphs (requires a Nerd Font)
/// or safe Unicode characters (works in all terminals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,

    /// How long the "Copied" confirmation stays visible
    #[serde(default = "default_copy_feedback_ms")]
    pub copy_feedback_ms: u64,

    /// Show line numbers in the code viewer
    #[serde(default = "default_true")]
    pub show_line_numbers: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            copy_feedback_ms: default_copy_feedback_ms(),
            show_line_numbers: true,
        }
    }
}

impl UiSettings {
    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }
}

fn default_copy_feedback_ms() -> u64 {
    2000
}

fn default_true() -> bool {
    true
}

/// Export settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ExportSettings {
    /// Target directory for downloads and project exports.
    /// Empty means the user's download directory.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl ExportSettings {
    /// Configured directory, else the download directory, else the current one
    pub fn resolve_dir(&self) -> PathBuf {
        self.directory
            .clone()
            .filter(|d| !d.as_os_str().is_empty())
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
