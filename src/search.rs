pub mod engine;

pub use engine::{SearchEngine, SearchHit, SearchOptions, SubstringEngine};
