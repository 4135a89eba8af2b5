// src/models/mod.rs

//! Domain models for the proxy application.

mod page;
mod target;

// Re-export all public types
pub use page::{FetchedPage, RewrittenDocument};
pub use target::{CaseVariant, RewriteTarget};
