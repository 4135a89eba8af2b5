// src/rewrite/word.rs

//! Case-preserving whole-word replacement.

use regex::{NoExpand, Regex};

use crate::error::Result;
use crate::models::RewriteTarget;

/// Compiled whole-word replacement rules for one target word.
///
/// One rule per case variant, applied in order. Each rule is a single
/// left-to-right, non-overlapping pass, so substituted text is never
/// re-matched within a pass.
#[derive(Debug, Clone)]
pub struct WordRewriter {
    rules: Vec<(Regex, String)>,
}

impl WordRewriter {
    /// Compile the rewrite rules for the given target.
    pub fn new(target: &RewriteTarget) -> Result<Self> {
        let mut rules = Vec::new();
        for variant in target.case_variants() {
            let pattern = format!(r"\b{}\b", regex::escape(&variant.matched));
            rules.push((Regex::new(&pattern)?, variant.replacement));
        }
        Ok(Self { rules })
    }

    /// Replace every whole-word case-variant match in `text`.
    ///
    /// Pure function: returns a new string and leaves the input untouched.
    /// Text with no match comes back equal to the input.
    pub fn rewrite(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (pattern, replacement) in &self.rules {
            if pattern.is_match(&result) {
                // NoExpand keeps the replacement literal even if it contains $
                result = pattern
                    .replace_all(&result, NoExpand(replacement))
                    .into_owned();
            }
        }
        result
    }
}
