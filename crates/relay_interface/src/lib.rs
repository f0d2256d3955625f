//! Trait definitions for the relay API clients.
//!
//! The chat loop talks to the outside world only through these seams, so
//! tests can script console input and substitute a fake model.

mod chat_client;
mod line_source;

pub use chat_client::ChatClient;
pub use line_source::{LineSource, ScriptedLines, StdinLines};
