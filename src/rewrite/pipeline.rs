// src/rewrite/pipeline.rs

//! The document rewrite pipeline: parse, rewrite text nodes, re-serialize.

use ego_tree::NodeId;
use scraper::{Html, Node, Selector};

use crate::error::{AppError, Result};
use crate::models::{RewriteTarget, RewrittenDocument};

use super::walker;
use super::word::WordRewriter;

/// Rewrites a fetched HTML document in place and re-serializes it.
///
/// Selectors and word rules are compiled once at startup and shared across
/// requests; each request parses and mutates its own tree.
#[derive(Debug, Clone)]
pub struct DocumentRewriter {
    words: WordRewriter,
    skip_tags: Vec<String>,
    body_selector: Selector,
    title_selector: Selector,
}

impl DocumentRewriter {
    /// Compile a rewriter for the given target word.
    pub fn new(target: &RewriteTarget, skip_tags: &[String]) -> Result<Self> {
        Ok(Self {
            words: WordRewriter::new(target)?,
            skip_tags: skip_tags.to_vec(),
            body_selector: parse_selector("body")?,
            title_selector: parse_selector("title")?,
        })
    }

    /// Parse `raw_html`, rewrite body text and title, and serialize back.
    ///
    /// HTML parsing is lenient; ordinary malformed markup still produces a
    /// best-effort tree. Only an empty body is rejected outright.
    pub fn rewrite_document(&self, raw_html: &str) -> Result<RewrittenDocument> {
        if raw_html.trim().is_empty() {
            return Err(AppError::parse("document is empty"));
        }

        let mut document = Html::parse_document(raw_html);
        self.rewrite_body(&mut document);
        let title = self.rewrite_title(&mut document);

        Ok(RewrittenDocument {
            content: document.html(),
            title,
        })
    }

    /// Rewrite every text node under the body element.
    fn rewrite_body(&self, document: &mut Html) {
        // Snapshot node ids before mutating the tree
        let ids = {
            let root = match document.select(&self.body_selector).next() {
                Some(body) => *body,
                None => document.tree.root(),
            };
            walker::collect_text_ids(root, &self.skip_tags)
        };

        for id in ids {
            self.rewrite_text_node(document, id);
        }
    }

    /// Rewrite the title element's text and return the rewritten title.
    fn rewrite_title(&self, document: &mut Html) -> String {
        let ids = match document.select(&self.title_selector).next() {
            Some(title) => walker::collect_text_ids(*title, &[]),
            None => return String::new(),
        };

        let mut title = String::new();
        for id in ids {
            if let Some(text) = self.rewrite_text_node(document, id) {
                title.push_str(&text);
            }
        }
        title
    }

    /// Rewrite one text node, skipping the write when nothing changed.
    ///
    /// Returns the node's text after rewriting, or `None` if the id no longer
    /// names a text node.
    fn rewrite_text_node(&self, document: &mut Html, id: NodeId) -> Option<String> {
        let mut node = document.tree.get_mut(id)?;
        if let Node::Text(text) = node.value() {
            let rewritten = self.words.rewrite(&text.text);
            if *rewritten != *text.text {
                text.text = rewritten.as_str().into();
            }
            return Some(rewritten);
        }
        None
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| AppError::selector(selector, format!("{e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "<html><head><title>Yale University Test Page</title></head>\
        <body><h1>Welcome to Yale University</h1>\
        <a href=\"https://yale.edu\">About Yale</a></body></html>";

    fn rewriter() -> DocumentRewriter {
        DocumentRewriter::new(
            &RewriteTarget::new("yale", "fale"),
            &["script".to_string(), "style".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn test_sample_page_rewritten() {
        let doc = rewriter().rewrite_document(SAMPLE).unwrap();
        assert_eq!(doc.title, "Fale University Test Page");
        assert!(doc.content.contains("Welcome to Fale University"));
        assert!(doc.content.contains("About Fale"));
    }

    #[test]
    fn test_urls_left_untouched() {
        let doc = rewriter().rewrite_document(SAMPLE).unwrap();
        assert!(doc.content.contains("href=\"https://yale.edu\""));
        assert!(!doc.content.contains("fale.edu"));
    }

    #[test]
    fn test_title_rewritten_in_both_places() {
        let doc = rewriter().rewrite_document(SAMPLE).unwrap();
        assert!(doc.content.contains("<title>Fale University Test Page</title>"));
        assert_eq!(doc.title, "Fale University Test Page");
    }

    #[test]
    fn test_script_and_style_preserved() {
        let html = "<html><head><title>t</title></head><body>\
            <p>Visit Yale</p>\
            <script>var yale = 'yale';</script>\
            <style>.yale { color: blue; }</style></body></html>";
        let doc = rewriter().rewrite_document(html).unwrap();
        assert!(doc.content.contains("Visit Fale"));
        assert!(doc.content.contains("var yale = 'yale';"));
        assert!(doc.content.contains(".yale { color: blue; }"));
    }

    #[test]
    fn test_missing_title_yields_empty_string() {
        let doc = rewriter()
            .rewrite_document("<html><body><p>Yale</p></body></html>")
            .unwrap();
        assert_eq!(doc.title, "");
        assert!(doc.content.contains("<p>Fale</p>"));
    }

    #[test]
    fn test_empty_document_is_a_parse_error() {
        let err = rewriter().rewrite_document("   ").unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn test_malformed_html_still_rewritten() {
        let doc = rewriter()
            .rewrite_document("<p>Yale<div>yale</p></div><span>YALE")
            .unwrap();
        assert!(doc.content.contains("Fale"));
        assert!(doc.content.contains("fale"));
        assert!(doc.content.contains("FALE"));
    }

    #[test]
    fn test_rewrite_is_idempotent_over_documents() {
        let words = rewriter();
        let once = words.rewrite_document(SAMPLE).unwrap();
        let twice = words.rewrite_document(&once.content).unwrap();
        assert_eq!(once.content, twice.content);
        assert_eq!(once.title, twice.title);
    }
}
