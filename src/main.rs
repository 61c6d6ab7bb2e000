//! PyArchitect - describe a Python project, get a complete codebase
//!
//! This is the binary entry point. All logic lives in the workspace crates.

mod headless;

use std::path::PathBuf;

use clap::Parser;
use pyarch_app::config::{default_config_path, init_config_file, load_settings, CliOverrides};
use pyarch_core::prelude::*;

/// PyArchitect - turn ideas into production code
#[derive(Parser, Debug)]
#[command(name = "pyarchitect")]
#[command(about = "Generate a structured Python codebase from a description", long_about = None)]
struct Args {
    /// Project description; submitted immediately instead of showing the prompt screen
    #[arg(short, long)]
    prompt: Option<String>,

    /// Gemini model to use
    #[arg(short, long)]
    model: Option<String>,

    /// Directory for downloaded files and project exports
    #[arg(long, value_name = "DIR")]
    export_dir: Option<PathBuf>,

    /// Path to config.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Run in headless mode (JSON output, no TUI); requires --prompt.
    /// The project is exported when --export-dir is given.
    #[arg(long)]
    headless: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    pyarch_core::logging::init()?;

    let mut settings = match args.config.clone().or_else(default_config_path) {
        Some(path) => {
            if args.config.is_none() {
                if let Err(e) = init_config_file(&path) {
                    warn!("Could not create default config: {}", e);
                }
            }
            load_settings(&path)
        }
        None => Default::default(),
    };
    let export = args.export_dir.is_some();
    CliOverrides {
        model: args.model,
        export_dir: args.export_dir,
    }
    .apply(&mut settings);

    if args.headless {
        let Some(prompt) = args.prompt else {
            eprintln!("--headless requires --prompt \"<project description>\"");
            std::process::exit(2);
        };
        let outcome = headless::runner::run_headless(settings, prompt, export).await?;
        if !outcome.is_success() {
            std::process::exit(1);
        }
        return Ok(());
    }

    pyarch_tui::run(settings, args.prompt).await
}
