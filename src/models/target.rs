// src/models/target.rs

//! The word pair targeted for rewriting and its case-variant table.

use serde::{Deserialize, Serialize};

/// One case variant of the target word: the exact form matched in text and
/// the form written back in its place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseVariant {
    /// Exact word form matched in text (e.g. "Yale")
    pub matched: String,

    /// Word form written back in its place (e.g. "Fale")
    pub replacement: String,
}

/// A word to rewrite and its replacement.
///
/// Matching is whole-word only and limited to three canonical case variants:
/// all-lowercase, all-uppercase, and title-case. Mixed-case forms such as
/// "YaLe" are deliberately left alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteTarget {
    /// Word to replace, in any case (canonicalized per variant)
    pub word: String,

    /// Replacement word, case-shifted to match each variant
    pub replacement: String,
}

impl RewriteTarget {
    /// Create a new rewrite target.
    pub fn new(word: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            replacement: replacement.into(),
        }
    }

    /// Enumerate the case variants matched by this target.
    ///
    /// Variants whose matched form collides with an earlier one (single-letter
    /// words, words without case) are dropped so each form is matched once.
    pub fn case_variants(&self) -> Vec<CaseVariant> {
        let candidates = [
            (self.word.to_lowercase(), self.replacement.to_lowercase()),
            (self.word.to_uppercase(), self.replacement.to_uppercase()),
            (title_case(&self.word), title_case(&self.replacement)),
        ];

        let mut variants: Vec<CaseVariant> = Vec::new();
        for (matched, replacement) in candidates {
            if !variants.iter().any(|v| v.matched == matched) {
                variants.push(CaseVariant {
                    matched,
                    replacement,
                });
            }
        }
        variants
    }
}

/// First character uppercased, the rest lowercased.
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
