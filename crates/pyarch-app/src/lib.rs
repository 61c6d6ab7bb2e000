//! pyarch-app - Application state and orchestration for PyArchitect
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management,
//! the Engine abstraction shared by the TUI and headless runners, configuration
//! loading, and the side effects (generation, clipboard, export) run as actions.

pub mod actions;
pub mod clipboard;
pub mod config;
pub mod engine;
pub mod explorer;
pub mod export;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, GenerationState, ProjectView};
