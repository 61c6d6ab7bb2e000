//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the message channel, the settings and the
//! generation backend. Both frontends drive it the same way: feed messages
//! into `process_message`, drain results from `msg_rx`, stop on
//! `should_quit`.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info};

use pyarch_genai::Generator;

use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Orchestration engine for PyArchitect.
///
/// Generic over the generation backend so tests can drive the full
/// prompt → project cycle with a canned generator.
pub struct Engine<G> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, background tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Loaded settings (config file plus command-line overrides)
    pub settings: Settings,

    generator: Arc<G>,
}

impl<G> Engine<G>
where
    G: Generator + Sync + 'static,
{
    /// Create a new Engine.
    ///
    /// Creates the message channel (capacity 256) and spawns the signal
    /// handler, so it must be called inside a tokio runtime.
    pub fn new(settings: Settings, generator: G) -> Self {
        let state = AppState::with_settings(settings.clone());
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

        signals::spawn_signal_handler(msg_tx.clone());

        Self {
            state,
            msg_tx,
            msg_rx,
            settings,
            generator: Arc::new(generator),
        }
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &self.msg_tx, &self.generator);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Used by the TUI runner
    /// which needs to drain all pending messages before rendering.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Set the prompt and submit it, as if typed and confirmed
    pub fn submit_prompt(&mut self, prompt: impl Into<String>) {
        self.process_message(Message::PromptInput {
            text: prompt.into(),
        });
        self.process_message(Message::SubmitPrompt);
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// The generation backend
    pub fn generator(&self) -> &Arc<G> {
        &self.generator
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Stop accepting messages. In-flight tasks finish and their results are dropped.
    pub fn shutdown(&mut self) {
        info!("Engine shutting down ({})", self.state.generation.label());
        self.msg_rx.close();
        debug!("Message channel closed");
    }
}
