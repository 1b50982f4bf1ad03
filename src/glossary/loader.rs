//! Glossary file loading.
//!
//! The glossary ships as a TOML file with one `[[term]]` table per entry. The order of the
//! tables in the file is the store order used by the menus and by search:
//!
//! ```toml
//! [[term]]
//! name = "Айсберг"
//! description = "ледяная гора"
//! ```

use crate::error::{GlossbotError, Result};
use crate::glossary::store::Glossary;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct GlossaryFile {
    #[serde(default, rename = "term")]
    terms: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    name: String,
    description: String,
}

/// Parse glossary TOML text into a store.
pub fn parse_glossary(text: &str) -> Result<Glossary> {
    let file: GlossaryFile = toml::from_str(text)
        .map_err(|e| GlossbotError::glossary(format!("invalid glossary file: {}", e)))?;

    Glossary::from_entries(
        file.terms
            .into_iter()
            .map(|entry| (entry.name, entry.description)),
    )
}

/// Read and parse the glossary file at `path`.
///
/// # Errors
/// * `GlossaryNotFound` when nothing exists at `path`
/// * `Io` when the path is not a readable file
/// * `Glossary` when the content does not parse or fails validation
pub async fn load_glossary(path: &Path) -> Result<Glossary> {
    if !path.exists() {
        return Err(GlossbotError::GlossaryNotFound {
            path: path.to_path_buf(),
        });
    }

    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| GlossbotError::io("Failed to read glossary metadata", e))?;
    if !metadata.is_file() {
        return Err(GlossbotError::io(
            format!("Path is not a file: {}", path.display()),
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "Not a file"),
        ));
    }

    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| GlossbotError::io("Cannot read glossary file", e))?;

    let glossary = parse_glossary(&text)?;
    log::info!(
        "Loaded {} glossary terms from {}",
        glossary.len(),
        path.display()
    );
    Ok(glossary)
}
