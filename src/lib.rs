// src/lib.rs

//! Faleproxy Library
//!
//! Fetches a remote page, rewrites every whole-word occurrence of a target
//! word in its text content (case-preserving, attributes and URLs untouched),
//! and serves the result over a small JSON endpoint.

pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
pub mod rewrite;
pub mod server;
