//! Core data types for the relay API clients.
//!
//! This crate holds the chat and exchange-rate data model shared by the
//! client crates, plus logging setup for the binaries.

mod message;
mod observability;
mod rates;
mod response;
mod role;

pub use message::ChatMessage;
pub use observability::init_tracing;
pub use rates::{ExchangeRateResponse, RateSummary};
pub use response::{ChatResponse, ContentBlock};
pub use role::Role;
