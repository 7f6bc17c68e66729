#![forbid(unsafe_code)]
//! Index-aware question answering
//!
//! Builds a conversation context from an index schema and a few sample
//! documents, then answers free-text questions about the index by relaying
//! prompts to a text generation backend. Two workflows are offered:
//!
//! - [`Assistant::ask`]: one prompt, one answer.
//! - [`Assistant::query_and_analyze`]: ask the model to propose a search
//!   query, run it read-only against the index, and have the model summarize
//!   the results.

mod context;
mod error;
pub mod prompt;
mod session;

pub use context::IndexContext;
pub use error::AssistantError;
pub use prompt::DEFAULT_GUIDANCE;
pub use session::Assistant;
