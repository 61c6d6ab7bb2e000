//! Message processing
//!
//! Runs the TEA update loop for one incoming message, following chained
//! messages and dispatching any resulting actions.

use std::sync::Arc;

use tokio::sync::mpsc;

use pyarch_genai::Generator;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<G>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    generator: &Arc<G>,
) where
    G: Generator + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), generator.clone());
        }

        msg = result.message;
    }
}
