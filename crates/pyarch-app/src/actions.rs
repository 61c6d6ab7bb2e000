//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::mpsc;

use pyarch_core::prelude::*;
use pyarch_genai::Generator;

use crate::message::Message;
use crate::{clipboard, export, UpdateAction};

/// Execute an action, spawning a background task where it does I/O
pub fn handle_action<G>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, generator: Arc<G>)
where
    G: Generator + Sync + 'static,
{
    match action {
        UpdateAction::Generate { prompt } => {
            spawn_generation(prompt, msg_tx, generator);
        }

        UpdateAction::CopyToClipboard { content } => {
            // Written inline so the sequence never interleaves with a frame
            let msg = match clipboard::copy_to_clipboard(&content) {
                Ok(()) => Message::CopyCompleted,
                Err(e) => Message::CopyFailed {
                    error: e.to_string(),
                },
            };
            if let Err(e) = msg_tx.try_send(msg) {
                warn!("Failed to report copy result: {}", e);
            }
        }

        UpdateAction::ExportFile {
            file_name,
            content,
            directory,
        } => {
            tokio::spawn(async move {
                let result = tokio::task::spawn_blocking(move || {
                    export::export_file(&directory, &file_name, &content)
                })
                .await;

                let msg = match result {
                    Ok(Ok(path)) => Message::FileExported { path },
                    Ok(Err(e)) => Message::ExportFailed {
                        error: e.to_string(),
                    },
                    Err(e) => Message::ExportFailed {
                        error: format!("Export task failed: {}", e),
                    },
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::ExportProject { project, directory } => {
            tokio::spawn(async move {
                let result = tokio::task::spawn_blocking(move || {
                    export::export_project(&directory, &project)
                })
                .await;

                let msg = match result {
                    Ok(Ok((path, files))) => Message::ProjectExported { path, files },
                    Ok(Err(e)) => Message::ExportFailed {
                        error: e.to_string(),
                    },
                    Err(e) => Message::ExportFailed {
                        error: format!("Export task failed: {}", e),
                    },
                };
                let _ = msg_tx.send(msg).await;
            });
        }
    }
}

/// Run one generation request and report the outcome as a message
pub fn spawn_generation<G>(prompt: String, msg_tx: mpsc::Sender<Message>, generator: Arc<G>)
where
    G: Generator + Sync + 'static,
{
    tokio::spawn(async move {
        let msg = match generator.generate(&prompt).await {
            Ok(project) => Message::GenerationCompleted { project },
            Err(error) => Message::GenerationFailed { error },
        };

        if msg_tx.send(msg).await.is_err() {
            debug!("Generation finished after the message channel closed");
        }
    });
}
