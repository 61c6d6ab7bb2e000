//! Headless mode runner - one generation without the TUI
//!
//! Submits the prompt through the same Engine the TUI uses, waits for the
//! result on the message channel, and reports it as JSON events.

use std::time::Instant;

use pyarch_app::config::Settings;
use pyarch_app::message::Message;
use pyarch_app::state::GenerationState;
use pyarch_app::Engine;
use pyarch_core::prelude::*;
use pyarch_genai::{GeminiClient, Generator};

use super::HeadlessEvent;

/// How a headless run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlessOutcome {
    Generated,
    Exported,
    Failed,
    Interrupted,
}

impl HeadlessOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, HeadlessOutcome::Generated | HeadlessOutcome::Exported)
    }
}

/// Run in headless mode - output JSON events instead of TUI
///
/// With `export` set, the project is written to the export directory
/// after a successful generation.
pub async fn run_headless(settings: Settings, prompt: String, export: bool) -> Result<HeadlessOutcome> {
    info!("═══════════════════════════════════════════════════════");
    info!("PyArchitect starting in HEADLESS mode");
    info!("Model: {}", settings.generation.model);
    info!("═══════════════════════════════════════════════════════");

    let client = match GeminiClient::new(settings.generation.client_config()) {
        Ok(client) => client,
        Err(e) => {
            HeadlessEvent::error(e.to_string(), true).emit();
            return Err(e.into());
        }
    };

    let mut engine = Engine::new(settings, client);
    let outcome =
        headless_event_loop(&mut engine, &prompt, export, &mut |event: HeadlessEvent| {
            event.emit()
        })
        .await;

    engine.shutdown();
    info!("PyArchitect headless mode exiting ({:?})", outcome);
    Ok(outcome)
}

/// Main headless event loop
async fn headless_event_loop<G>(
    engine: &mut Engine<G>,
    prompt: &str,
    export: bool,
    emit: &mut impl FnMut(HeadlessEvent),
) -> HeadlessOutcome
where
    G: Generator + Sync + 'static,
{
    emit(HeadlessEvent::generation_started(
        &engine.settings.generation.model,
        prompt,
    ));
    let started = Instant::now();

    engine.submit_prompt(prompt);
    if !engine.state.generation.is_generating() {
        emit(HeadlessEvent::error("Prompt is empty".to_string(), true));
        return HeadlessOutcome::Failed;
    }

    if let Some(outcome) = wait_for_generation(engine, started, emit).await {
        return outcome;
    }

    if !export {
        return HeadlessOutcome::Generated;
    }

    engine.process_message(Message::ExportProject);
    wait_for_export(engine, emit)
        .await
        .unwrap_or(HeadlessOutcome::Interrupted)
}

/// Process messages until generation settles
///
/// Returns `None` when the project is ready, otherwise how the run ended.
async fn wait_for_generation<G>(
    engine: &mut Engine<G>,
    started: Instant,
    emit: &mut impl FnMut(HeadlessEvent),
) -> Option<HeadlessOutcome>
where
    G: Generator + Sync + 'static,
{
    loop {
        let Some(msg) = engine.msg_rx.recv().await else {
            info!("Message channel closed");
            return Some(HeadlessOutcome::Interrupted);
        };
        engine.process_message(msg);

        if engine.should_quit() {
            info!("Quit requested");
            return Some(HeadlessOutcome::Interrupted);
        }

        match &engine.state.generation {
            GenerationState::Generating { .. } => continue,
            GenerationState::Ready(view) => {
                let project = &view.project;
                emit(HeadlessEvent::generation_completed(
                    &project.project_name,
                    &project.description,
                    project.file_count(),
                    started.elapsed().as_millis() as u64,
                ));
                for file in &project.files {
                    emit(HeadlessEvent::file(file));
                }
                return None;
            }
            GenerationState::Failed { message } => {
                emit(HeadlessEvent::error(message.clone(), true));
                return Some(HeadlessOutcome::Failed);
            }
            GenerationState::Idle => return Some(HeadlessOutcome::Interrupted),
        }
    }
}

/// Process messages until the export task reports back
async fn wait_for_export<G>(
    engine: &mut Engine<G>,
    emit: &mut impl FnMut(HeadlessEvent),
) -> Option<HeadlessOutcome>
where
    G: Generator + Sync + 'static,
{
    while let Some(msg) = engine.msg_rx.recv().await {
        // Emit before the update consumes the message
        let outcome = match &msg {
            Message::ProjectExported { path, files } => {
                emit(HeadlessEvent::project_exported(
                    &path.display().to_string(),
                    *files,
                ));
                Some(HeadlessOutcome::Exported)
            }
            Message::ExportFailed { error } => {
                emit(HeadlessEvent::error(error.clone(), true));
                Some(HeadlessOutcome::Failed)
            }
            _ => None,
        };

        engine.process_message(msg);

        if outcome.is_some() {
            return outcome;
        }
        if engine.should_quit() {
            return Some(HeadlessOutcome::Interrupted);
        }
    }
    None
}
