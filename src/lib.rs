//! # glossbot - Conversational Glossary Browser
//!
//! A glossary lookup bot: users browse terms through an alphabet menu and paginated term
//! lists, or find them with inline search-as-you-type.
//!
//! ## Features
//!
//! - **Stateless navigation**: the letter, direction and page live in the callback tokens;
//!   nothing is stored between events
//! - **Transport-safe tokens**: every button token fits the 64-byte callback limit and a
//!   safe character set
//! - **Inline search**: case-insensitive substring search, at most 5 results, silent for
//!   queries under 4 characters
//!
//! ## Architecture
//!
//! - [`error`] - Centralized error types and handling
//! - [`config`] - Settings file loading
//! - [`glossary`] - Immutable glossary store and its file loader
//! - [`token`] - Navigation intents and their callback token codec
//! - [`menu`] - Alphabet menu, letter pages and term details
//! - [`search`] - Inline search engine
//! - [`transport`] - Inbound/outbound protocol and transport implementations
//! - [`app`] - Dispatcher and event loop

// Core modules
pub mod config;
pub mod error;
pub mod glossary;

// Navigation state machine
pub mod menu;
pub mod search;
pub mod token;

// Event handling
pub mod app;
pub mod transport;

// Re-export commonly used types for convenience
pub use error::{GlossbotError, Result};

// Public API surface for external usage
pub use app::{Application, Dispatcher};
pub use config::Config;
pub use glossary::Glossary;
pub use search::{SearchEngine, SearchOptions, SubstringEngine};
pub use token::NavigationIntent;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
