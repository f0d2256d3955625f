//! Chat response types.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One block of text returned by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ContentBlock {
    text: String,
}

impl ContentBlock {
    /// Creates a text block.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Complete, non-streamed model reply.
///
/// Blocks keep the order the API returned them in.
///
/// # Examples
///
/// ```
/// use relay_core::{ChatResponse, ContentBlock};
///
/// let response = ChatResponse::new(vec![
///     ContentBlock::new("Hi"),
///     ContentBlock::new("there"),
/// ]);
/// let texts: Vec<&str> = response.texts().collect();
/// assert_eq!(texts, ["Hi", "there"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChatResponse {
    blocks: Vec<ContentBlock>,
}

impl ChatResponse {
    /// Creates a response from its content blocks.
    pub fn new(blocks: Vec<ContentBlock>) -> Self {
        Self { blocks }
    }

    /// Creates a response holding a single text block.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(vec![ContentBlock::new(text)])
    }

    /// Iterates over block texts in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.blocks.iter().map(|b| b.text.as_str())
    }

    /// True when the model returned no text at all.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
