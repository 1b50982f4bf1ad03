//! In-memory glossary store
//!
//! Entries keep the order they were loaded in; that order drives both the letter pages and
//! the inline search results. Besides the exact-term index, the store keeps an index from
//! sanitized button token to entry so that a pressed button resolves back to its term even
//! when the token lost spaces or punctuation.

use crate::error::{GlossbotError, Result};
use crate::token;
use std::collections::{HashMap, HashSet};

/// Text shown in place of a description when a term cannot be resolved.
pub const NOT_FOUND_DESCRIPTION: &str = "Описание не найдено.";

/// One glossary entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub term: String,
    pub description: String,
}

/// Immutable glossary with term, token and lowercase indexes
#[derive(Debug, Default)]
pub struct Glossary {
    entries: Vec<Entry>,
    /// Lowercased terms, parallel to `entries`
    folded: Vec<String>,
    by_term: HashMap<String, usize>,
    by_token: HashMap<String, usize>,
    /// Tokens produced by more than one term
    ambiguous_tokens: HashSet<String>,
}

impl Glossary {
    /// Build a glossary from `(term, description)` pairs in store order.
    ///
    /// # Errors
    /// * Empty (or whitespace-only) terms
    /// * The same term appearing twice
    pub fn from_entries<I, T, D>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (T, D)>,
        T: Into<String>,
        D: Into<String>,
    {
        let mut glossary = Self::default();

        for (term, description) in pairs {
            let term = term.into();
            if term.trim().is_empty() {
                return Err(GlossbotError::glossary(format!(
                    "empty term at position {}",
                    glossary.entries.len()
                )));
            }
            if glossary.by_term.contains_key(&term) {
                return Err(GlossbotError::glossary(format!("duplicate term '{}'", term)));
            }

            let index = glossary.entries.len();
            glossary.index_token(&term, index);
            glossary.by_term.insert(term.clone(), index);
            glossary.folded.push(term.to_lowercase());
            glossary.entries.push(Entry {
                term,
                description: description.into(),
            });
        }

        for token in &glossary.ambiguous_tokens {
            log::warn!("Button token '{}' is shared by several terms", token);
        }

        Ok(glossary)
    }

    fn index_token(&mut self, term: &str, index: usize) {
        let token = token::sanitize(term);
        if token.is_empty() || self.ambiguous_tokens.contains(&token) {
            return;
        }
        if self.by_token.remove(&token).is_some() {
            self.ambiguous_tokens.insert(token);
        } else {
            self.by_token.insert(token, index);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in store order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Entry at a store position.
    pub fn entry(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Exact description lookup; callers render [`NOT_FOUND_DESCRIPTION`] on `None`.
    pub fn get(&self, term: &str) -> Option<&str> {
        self.by_term
            .get(term)
            .map(|&index| self.entries[index].description.as_str())
    }

    /// Resolve a term-selection token: exact term first, then the sanitized-token index.
    pub fn resolve(&self, token: &str) -> Option<&Entry> {
        self.by_term
            .get(token)
            .or_else(|| self.by_token.get(token))
            .map(|&index| &self.entries[index])
    }

    /// Whether several terms sanitize to `token`.
    pub fn is_token_ambiguous(&self, token: &str) -> bool {
        self.ambiguous_tokens.contains(token)
    }

    /// Terms whose first character matches `letter` case-insensitively, in store order.
    pub fn lookup_by_prefix(&self, letter: char) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|entry| {
                entry
                    .term
                    .chars()
                    .next()
                    .map_or(false, |first| first.to_uppercase().eq(letter.to_uppercase()))
            })
            .collect()
    }

    /// Lazily yield `(store index, entry)` for terms containing `query`, ignoring case.
    ///
    /// Only term text is matched, never descriptions.
    pub fn lookup_by_substring<'a>(
        &'a self,
        query: &str,
    ) -> impl Iterator<Item = (usize, &'a Entry)> + 'a {
        let needle = query.to_lowercase();
        self.folded
            .iter()
            .enumerate()
            .filter(move |(_, folded)| folded.contains(needle.as_str()))
            .map(move |(index, _)| (index, &self.entries[index]))
    }
}
