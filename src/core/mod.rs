//! Core domain types for word ladders
//!
//! Words, distances and the error type shared by the search engine and the CLI.

mod error;
mod word;

pub use error::{ErrorKind, LadderError};
pub use word::Word;
