//! Role types for chat participants.

use serde::{Deserialize, Serialize};

/// Author of a chat message.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[display("system")]
    System,
    #[display("user")]
    User,
    #[display("assistant")]
    Assistant,
}
