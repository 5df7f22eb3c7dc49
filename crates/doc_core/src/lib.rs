//! Core engine for DocDeck
//!
//! This crate holds the in-memory document store and the prompt templates.
//! It knows nothing about the wire protocol; `doc_mcp` drives it.

pub mod prompt;
pub mod store;

pub use prompt::{format_messages, format_prompt, PromptMessage, Role};
pub use store::{Document, DocumentStore, SEED_DOCUMENTS};
