//! Business keyword loading and matching.
//!
//! Owner names that read like organizations (banks, trusts, LLCs) are
//! recognized by a whole-word match against a configurable keyword list,
//! one keyword per line in a plain text file.

use std::path::Path;

use regex::Regex;
use tracing::debug;

use claimsift_shared::{ClaimsiftError, Result};

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Read a keyword file: one keyword per line, trimmed and uppercased.
///
/// Blank lines are skipped. A missing or unreadable file is a configuration
/// error, as is a file with no keywords left after trimming.
pub fn load_keywords(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        ClaimsiftError::config(format!("cannot read keywords file {}: {e}", path.display()))
    })?;

    let keywords: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_uppercase)
        .collect();

    if keywords.is_empty() {
        return Err(ClaimsiftError::config(format!(
            "keywords file {} contains no keywords",
            path.display()
        )));
    }

    debug!(path = %path.display(), count = keywords.len(), "loaded keywords");
    Ok(keywords)
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

/// Compiled case-insensitive, whole-word matcher over a keyword list.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    pattern: Regex,
    keyword_count: usize,
}

impl KeywordMatcher {
    /// Compile a matcher from already-loaded keywords.
    ///
    /// Keywords are matched literally, so entries like `INC.` are safe. An
    /// empty list is rejected here rather than compiled into a pattern that
    /// would flag every name.
    pub fn new(keywords: &[String]) -> Result<Self> {
        if keywords.is_empty() {
            return Err(ClaimsiftError::config("keyword list is empty"));
        }

        let alternatives = keywords
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");
        let source = format!(r"(?i)\b(?:{alternatives})\b");
        let pattern = Regex::new(&source)
            .map_err(|e| ClaimsiftError::config(format!("invalid keyword pattern: {e}")))?;

        Ok(Self {
            pattern,
            keyword_count: keywords.len(),
        })
    }

    /// Load and compile a matcher straight from a keyword file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let keywords = load_keywords(path)?;
        Self::new(&keywords)
    }

    /// True when the name contains any keyword as a whole word.
    pub fn is_business_name(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }

    /// Number of keywords the matcher was built from.
    pub fn keyword_count(&self) -> usize {
        self.keyword_count
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
