//! Command-line argument parsing and lookup

pub mod cursor;
pub mod parser;
pub mod store;
pub mod value;

// Re-export types for convenient access
pub use cursor::TokenCursor;
pub use parser::ArgumentParser;
pub use store::{ArgumentStore, shared};
pub use value::{ArgValue, ArgumentMap, DEFAULT_KEY};
