//! Inline search over glossary terms.
//!
//! Matching is a case-insensitive substring test on term text. Results follow store order
//! and the scan stops as soon as the result cap is reached.

use crate::glossary::Glossary;
use crate::menu::builder::format_detail;
use std::sync::Arc;

/// Search configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Queries shorter than this (in characters) get no response at all
    pub min_query_chars: usize,
    /// Maximum number of hits returned
    pub max_results: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            min_query_chars: 4,
            max_results: 5,
        }
    }
}

/// One inline result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    /// Store index of the entry, as text
    pub id: String,
    pub term: String,
    /// Formatted detail message sent when the result is chosen
    pub detail: String,
}

/// Core trait for inline search
pub trait SearchEngine: Send + Sync {
    /// Search for `query`.
    ///
    /// # Returns
    /// * `None` when the query is too short; the caller must not respond at all
    /// * `Some(hits)` otherwise, possibly empty
    fn search(&self, query: &str) -> Option<Vec<SearchHit>>;
}

/// Substring engine over a shared glossary
pub struct SubstringEngine {
    glossary: Arc<Glossary>,
    options: SearchOptions,
}

impl SubstringEngine {
    pub fn new(glossary: Arc<Glossary>) -> Self {
        Self::with_options(glossary, SearchOptions::default())
    }

    pub fn with_options(glossary: Arc<Glossary>, options: SearchOptions) -> Self {
        Self { glossary, options }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }
}

impl SearchEngine for SubstringEngine {
    fn search(&self, query: &str) -> Option<Vec<SearchHit>> {
        if query.chars().count() < self.options.min_query_chars {
            log::trace!("Query '{}' below minimum length", query);
            return None;
        }

        let hits = self
            .glossary
            .lookup_by_substring(query)
            .take(self.options.max_results)
            .map(|(index, entry)| SearchHit {
                id: index.to_string(),
                term: entry.term.clone(),
                detail: format_detail(&entry.term, &entry.description),
            })
            .collect();

        Some(hits)
    }
}
