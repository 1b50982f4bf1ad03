//! Glossary data source.
//!
//! The glossary is an immutable, ordered mapping from term to description. It is loaded
//! once at startup and shared read-only between all event handlers.

pub mod loader;
pub mod store;

pub use loader::{load_glossary, parse_glossary};
pub use store::{Entry, Glossary, NOT_FOUND_DESCRIPTION};
