#![forbid(unsafe_code)]

//! argkit: tolerant argument parsing and ANSI styling for small CLI tools
//!
//! Parse the raw process arguments into an [`ArgumentStore`], look values up
//! by name, alias and default, and style terminal output with [`TextStyle`]
//! when the `--color` flag was given.
//!
//! ```
//! use argkit::{ArgumentStore, Color, TextStyle};
//!
//! let arguments = ArgumentStore::from_tokens(&["tool", "--color", "-p", "8080"]);
//! assert_eq!(arguments.text("port", Some("p")), Some("8080"));
//!
//! let label = TextStyle::new("ready", &arguments).color_foreground(Color::Green);
//! assert_eq!(label.render(), "\x1b[0;32m\x1b[40mready\x1b[0m");
//! ```

pub mod args;
pub mod error;
pub mod output;
pub mod style;

pub use args::{ArgValue, ArgumentMap, ArgumentParser, ArgumentStore, TokenCursor};
pub use error::{Error, Result};
pub use style::{Color, PadDirection, Target, TextStyle};
