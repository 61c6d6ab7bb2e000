//! Main TUI runner - entry point and event loop
//!
//! Contains the core application lifecycle:
//! - `run`: builds the Gemini client and Engine, owns the terminal
//! - `run_loop`: drains engine messages, renders, polls terminal events

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use pyarch_app::config::Settings;
use pyarch_app::Engine;
use pyarch_core::prelude::*;
use pyarch_genai::{GeminiClient, Generator};

use super::{event, render, terminal};

/// Run the TUI application
///
/// When `initial_prompt` is given it is submitted right away, skipping the
/// prompt screen.
pub async fn run(settings: Settings, initial_prompt: Option<String>) -> Result<()> {
    let client = GeminiClient::new(settings.generation.client_config())?;
    info!(
        "Starting PyArchitect (model: {}, export dir: {:?})",
        settings.generation.model,
        settings.export.resolve_dir()
    );

    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut engine = Engine::new(settings, client);

    let mut term = terminal::init()?;
    if let Err(e) = crossterm::execute!(std::io::stdout(), EnableBracketedPaste) {
        warn!("Bracketed paste unavailable: {}", e);
    }

    if let Some(prompt) = initial_prompt {
        engine.submit_prompt(prompt);
    }

    let result = run_loop(&mut term, &mut engine);

    if let Err(e) = crossterm::execute!(std::io::stdout(), DisableBracketedPaste) {
        warn!("Failed to disable bracketed paste: {}", e);
    }
    terminal::restore();
    engine.shutdown();

    result
}

/// Main event loop
fn run_loop<G>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<G>) -> Result<()>
where
    G: Generator + Sync + 'static,
{
    while !engine.should_quit() {
        // Process external messages (generation results, signals, exports)
        engine.drain_pending_messages();

        // Render
        terminal.draw(|frame| render::view(frame, &mut engine.state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
