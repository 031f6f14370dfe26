#![forbid(unsafe_code)]

//! Token classification for raw command lines
//!
//! The parser walks the token list once with one token of lookahead and
//! records every flag it recognizes. It never rejects input: anything it does
//! not understand degrades to a boolean flag or is ignored.
//!
//! Token shapes, checked in this order:
//! - `--name=value` / `--name="value"`: inline value
//! - `--name value`: the next token is taken as the value unless it starts with `-`
//! - `--name`: boolean flag
//! - `-p value`: a single short flag takes the next token unless it starts with `-`
//! - `-abc`: one boolean flag per letter
//! - `value`: the first such token after index 0 is stored under [`DEFAULT_KEY`]
//!
//! A consumed value is not skipped: it is classified again on its own turn,
//! so `--name value` also records `value` as the positional argument when
//! none was seen before.

use super::cursor::TokenCursor;
use super::value::{ArgValue, ArgumentMap, DEFAULT_KEY};
use log::{debug, trace};
use regex::Regex;
use std::sync::LazyLock;

/// `--name=value`, with one optional pair of surrounding quotes
static INLINE_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)^--([0-9a-z_-]+)="?(.+?)"?$"#).expect("inline value pattern is valid")
});

/// Converts raw command-line tokens into an [`ArgumentMap`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ArgumentParser;

impl ArgumentParser {
    pub fn new() -> Self {
        ArgumentParser
    }

    /// Parse a token list, program path first
    ///
    /// Always starts from an empty map and always succeeds. Running it twice
    /// on the same input yields the same map.
    pub fn parse<S: AsRef<str>>(&self, tokens: &[S]) -> ArgumentMap {
        let mut arguments = ArgumentMap::new();
        let mut cursor = TokenCursor::new(tokens);

        while cursor.is_valid() {
            let current = cursor.current();
            let next = cursor.peek_next();

            if let Some(long) = current.strip_prefix("--") {
                Self::long_flag(&mut arguments, current, long, next);
            } else if let Some(letters) = current.strip_prefix('-') {
                Self::short_flags(&mut arguments, letters, next);
            } else if cursor.key() != 0 && !arguments.contains_key(DEFAULT_KEY) {
                trace!("positional `{}` at index {}", current, cursor.key());
                arguments.insert(DEFAULT_KEY.to_string(), ArgValue::from(current));
            }

            cursor.advance();
        }

        debug!(
            "parsed {} tokens into {} arguments",
            tokens.len(),
            arguments.len()
        );
        arguments
    }

    fn long_flag(arguments: &mut ArgumentMap, token: &str, name: &str, next: &str) {
        if let Some(captures) = INLINE_VALUE.captures(token) {
            let name = &captures[1];
            let value = &captures[2];
            trace!("long flag `{}` with inline value `{}`", name, value);
            arguments.insert(name.to_string(), ArgValue::from(value));
        } else if takes_value(next) {
            trace!("long flag `{}` takes value `{}`", name, next);
            arguments.insert(name.to_string(), ArgValue::from(next));
        } else {
            trace!("long flag `{}`", name);
            arguments.insert(name.to_string(), ArgValue::Flag);
        }
    }

    fn short_flags(arguments: &mut ArgumentMap, letters: &str, next: &str) {
        let mut chars = letters.chars();
        if let (Some(letter), None) = (chars.next(), chars.next()) {
            if takes_value(next) {
                trace!("short flag `{}` takes value `{}`", letter, next);
                arguments.insert(letter.to_string(), ArgValue::from(next));
                return;
            }
        }

        // A bare `-` has no letters and records nothing
        for letter in letters.chars() {
            trace!("short flag `{}`", letter);
            arguments.insert(letter.to_string(), ArgValue::Flag);
        }
    }
}

/// Whether a lookahead token can serve as a flag value
fn takes_value(next: &str) -> bool {
    !next.is_empty() && !next.starts_with('-')
}
