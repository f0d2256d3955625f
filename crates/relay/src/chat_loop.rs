//! Interactive read-send-print loop.

use crate::ChatConfig;
use relay_error::RelayResult;
use relay_interface::{ChatClient, LineSource};
use std::io::Write;
use tracing::{debug, info, instrument, warn};

/// Input that ends the loop instead of being sent, compared case-insensitively.
pub const SENTINEL: &str = "goodbye";
/// Written before each line is read.
pub const PROMPT: &str = "You: ";
/// Written when the sentinel is entered.
pub const FAREWELL: &str = "AI Assistant: Goodbye!";
/// Prefix for every printed reply block.
pub const ASSISTANT_LABEL: &str = "Assistant:";

/// Where the loop stands between lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ChatState {
    /// Waiting for the next console line.
    AwaitingInput,
    /// A request is in flight.
    AwaitingResponse,
    /// The loop has ended; terminal.
    Terminated,
}

/// True if `line` is the sentinel in any letter case.
///
/// # Examples
///
/// ```
/// use relay::is_sentinel;
///
/// assert!(is_sentinel("GoodBye"));
/// assert!(!is_sentinel("goodbye!"));
/// ```
pub fn is_sentinel(line: &str) -> bool {
    line.to_lowercase() == SENTINEL
}

/// Reads a line, sends it as a single-turn request, prints the reply, and
/// repeats until the sentinel arrives.
///
/// Each request carries only the configured system instruction and the
/// current line; no history is kept between turns.
#[derive(Debug)]
pub struct ChatLoop<C> {
    config: ChatConfig,
    client: C,
    state: ChatState,
}

impl<C: ChatClient> ChatLoop<C> {
    /// Creates a loop in [`ChatState::AwaitingInput`].
    pub fn new(config: ChatConfig, client: C) -> Self {
        Self {
            config,
            client,
            state: ChatState::AwaitingInput,
        }
    }

    /// Current state.
    pub fn state(&self) -> ChatState {
        self.state
    }

    /// Settings the loop was built with.
    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// The model client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Writes the welcome banner.
    pub fn write_banner<W: Write>(&self, out: &mut W) -> RelayResult<()> {
        writeln!(
            out,
            "Welcome to your AI Assistant. Type '{}' to quit.",
            SENTINEL
        )?;
        writeln!(
            out,
            "Testing connection to Anthropic API... and model is set to: {}",
            self.config.model()
        )?;
        Ok(())
    }

    /// Runs one prompt/read/respond cycle and returns the resulting state.
    ///
    /// Exhausted input terminates the loop without a farewell. A failed
    /// remote call terminates it and returns the error; nothing is retried.
    #[instrument(skip_all, fields(state = %self.state))]
    pub async fn turn<L, W>(&mut self, input: &mut L, out: &mut W) -> RelayResult<ChatState>
    where
        L: LineSource,
        W: Write,
    {
        if self.state == ChatState::Terminated {
            return Ok(self.state);
        }

        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = input.next_line()? else {
            info!("Input closed");
            writeln!(out)?;
            self.state = ChatState::Terminated;
            return Ok(self.state);
        };

        if is_sentinel(&line) {
            info!("Sentinel received");
            writeln!(out, "{}", FAREWELL)?;
            self.state = ChatState::Terminated;
            return Ok(self.state);
        }

        self.state = ChatState::AwaitingResponse;
        debug!(chars = line.chars().count(), "Sending turn");

        let response = match self
            .client
            .send(self.config.system_prompt(), &line)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Model request failed");
                self.state = ChatState::Terminated;
                return Err(e);
            }
        };

        debug!(blocks = response.blocks().len(), "Received reply");
        for text in response.texts() {
            writeln!(out, "{} {}", ASSISTANT_LABEL, text)?;
        }
        out.flush()?;

        self.state = ChatState::AwaitingInput;
        Ok(self.state)
    }

    /// Writes the banner, then runs turns until the loop terminates.
    pub async fn run<L, W>(&mut self, input: &mut L, out: &mut W) -> RelayResult<()>
    where
        L: LineSource,
        W: Write,
    {
        self.write_banner(out)?;
        while self.turn(input, out).await? != ChatState::Terminated {}
        Ok(())
    }
}
