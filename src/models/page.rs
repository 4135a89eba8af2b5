// src/models/page.rs

//! Request-scoped page data passed through the rewrite pipeline.

/// A successfully fetched page.
///
/// Owned by the single pipeline invocation that fetched it; never shared
/// across requests.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Raw response body as text
    pub body: String,

    /// Effective URL after redirects
    pub url: String,
}

/// Output of the document rewrite pipeline.
#[derive(Debug, Clone)]
pub struct RewrittenDocument {
    /// Fully re-serialized HTML with all rewrites applied
    pub content: String,

    /// Rewritten page title, also embedded in `content`
    pub title: String,
}
