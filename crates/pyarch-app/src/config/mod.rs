//! Configuration file parsing for PyArchitect
//!
//! Supports `~/.config/pyarchitect/config.toml` (or `--config FILE`) with
//! `[generation]`, `[ui]` and `[export]` sections. Command-line flags are
//! applied on top via [`CliOverrides`].

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, init_config_file, load_settings, CliOverrides, CONFIG_DIR_NAME,
    CONFIG_FILENAME,
};
pub use types::*;
