// src/rewrite/mod.rs

//! The HTML text-rewriting core.
//!
//! `word` matches and replaces the target word in plain strings, `walker`
//! enumerates the text nodes of a parsed document, and `pipeline` ties the
//! two together around parse and re-serialization.

mod pipeline;
pub mod walker;
mod word;

pub use pipeline::DocumentRewriter;
pub use word::WordRewriter;
