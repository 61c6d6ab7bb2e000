//! Settings loading and command-line overrides

use std::path::{Path, PathBuf};

use pyarch_core::prelude::*;

use super::types::Settings;

/// Directory under the user config dir
pub const CONFIG_DIR_NAME: &str = "pyarchitect";

/// Settings file name
pub const CONFIG_FILENAME: &str = "config.toml";

/// `~/.config/pyarchitect/config.toml` (platform equivalent)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILENAME))
}

/// Load settings from a config file
///
/// Returns default settings if the file doesn't exist or is invalid.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config file if none exists
pub fn init_config_file(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let default_content = r#"# PyArchitect Configuration

[generation]
# Gemini model used for generation
model = "gemini-3-pro-preview"
# REST base URL (API version included)
base_url = "https://generativelanguage.googleapis.com/v1beta"
# Environment variable holding the API key (GEMINI_API_KEY is tried as a fallback)
api_key_env = "API_KEY"
# Request timeout in seconds
timeout_secs = 300

[ui]
# "unicode" or "nerd_fonts"
icons = "unicode"
# How long the "Copied" confirmation stays visible
copy_feedback_ms = 2000
show_line_numbers = true

[export]
# Where downloads and project exports are written.
# Defaults to your Downloads directory.
# directory = "~/projects/generated"
"#;

    std::fs::write(config_path, default_content)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;
    info!("Created default config at {:?}", config_path);
    Ok(())
}

/// Values given on the command line, applied over the config file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub model: Option<String>,
    pub export_dir: Option<PathBuf>,
}

impl CliOverrides {
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(model) = &self.model {
            debug!("Model overridden from command line: {}", model);
            settings.generation.model = model.clone();
        }
        if let Some(dir) = &self.export_dir {
            settings.export.directory = Some(dir.clone());
        }
    }
}
