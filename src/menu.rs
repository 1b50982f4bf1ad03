//! Screen construction for the alphabet menu, letter pages and term details.
//!
//! Every screen is computed from the glossary and the decoded intent alone; the builder
//! keeps no state between calls.

pub mod builder;
pub mod keyboard;

pub use builder::{
    LetterPage, MenuBuilder, MenuSignal, Screen, ALPHABET_COLUMNS, ITEMS_PER_PAGE, TERM_COLUMNS,
};
pub use keyboard::{Button, Keyboard};
