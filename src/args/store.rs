#![forbid(unsafe_code)]

//! Argument store with alias and default lookups
//!
//! [`ArgumentStore`] is a plain value: build one from the process arguments
//! at startup and hand it to whatever needs lookups. For code that cannot be
//! given a store explicitly, [`shared`] exposes one lazily created instance
//! per process behind a lock.

use super::parser::ArgumentParser;
use super::value::{ArgValue, ArgumentMap, DEFAULT_KEY};
use crate::error::{Error, Result};
use log::debug;
use std::str::FromStr;
use std::sync::{OnceLock, RwLock};

static SHARED: OnceLock<RwLock<ArgumentStore>> = OnceLock::new();

/// Process-wide store, created empty on first access
///
/// Re-parsing takes the write lock, so concurrent readers always observe a
/// complete map.
pub fn shared() -> &'static RwLock<ArgumentStore> {
    SHARED.get_or_init(|| RwLock::new(ArgumentStore::new()))
}

/// Holds the result of the most recent parse
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentStore {
    arguments: ArgumentMap,
}

impl ArgumentStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the parse of `tokens`
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut store = Self::new();
        store.parse(tokens);
        store
    }

    /// Creates a store from the arguments of the current process
    pub fn from_env() -> Self {
        let tokens: Vec<String> = std::env::args().collect();
        Self::from_tokens(&tokens)
    }

    /// Parse `tokens` and replace the stored arguments wholesale
    pub fn parse<S: AsRef<str>>(&mut self, tokens: &[S]) -> &mut Self {
        self.arguments = ArgumentParser::new().parse(tokens);
        self
    }

    /// Set a single argument, overwriting any previous value
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        debug!("adding argument `{}` = `{}`", name, value);
        self.arguments.insert(name, value);
        self
    }

    /// Value for `name`, falling back to `alias` when given and non-empty
    pub fn get(&self, name: &str, alias: Option<&str>) -> Option<&ArgValue> {
        self.arguments.get(name).or_else(|| {
            alias
                .filter(|alias| !alias.is_empty())
                .and_then(|alias| self.arguments.get(alias))
        })
    }

    /// Like [`ArgumentStore::get`], with a default when neither key is present
    pub fn get_or(&self, name: &str, alias: Option<&str>, default: impl Into<ArgValue>) -> ArgValue {
        match self.get(name, alias) {
            Some(value) => value.clone(),
            None => default.into(),
        }
    }

    pub fn has(&self, name: &str, alias: Option<&str>) -> bool {
        self.get(name, alias).is_some()
    }

    /// Explicit string value; `None` for bare flags and missing arguments
    pub fn text(&self, name: &str, alias: Option<&str>) -> Option<&str> {
        self.get(name, alias).and_then(ArgValue::as_text)
    }

    /// Typed lookup
    ///
    /// Returns `Ok(None)` when the argument is absent.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingValue`] when the argument was given as a bare flag
    /// - [`Error::InvalidValue`] when the value does not parse as `T`
    pub fn value<T>(&self, name: &str, alias: Option<&str>) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(name, alias) {
            None => Ok(None),
            Some(ArgValue::Flag) => Err(Error::MissingValue {
                name: name.to_string(),
            }),
            Some(ArgValue::Text(text)) => {
                text.parse::<T>()
                    .map(Some)
                    .map_err(|e| Error::InvalidValue {
                        name: name.to_string(),
                        value: text.clone(),
                        reason: e.to_string(),
                    })
            }
        }
    }

    /// First positional argument of the last parse
    pub fn default_argument(&self) -> Option<&str> {
        self.text(DEFAULT_KEY, None)
    }

    pub fn all(&self) -> &ArgumentMap {
        &self.arguments
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }
}
