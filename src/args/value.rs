//! Parsed argument values

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Key holding the first positional (non-flag) token of a parse
pub const DEFAULT_KEY: &str = "__default__";

/// Mapping from argument name to value, sorted by name
pub type ArgumentMap = BTreeMap<String, ArgValue>;

/// Value recorded for an argument
///
/// A flag given without a value is recorded as [`ArgValue::Flag`] (boolean
/// `true`); anything else carries the explicit string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArgValue {
    Flag,
    Text(String),
}

impl ArgValue {
    /// The explicit value, `None` for a bare flag
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ArgValue::Flag => None,
            ArgValue::Text(text) => Some(text),
        }
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, ArgValue::Flag)
    }
}

impl From<&str> for ArgValue {
    fn from(text: &str) -> Self {
        ArgValue::Text(text.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(text: String) -> Self {
        ArgValue::Text(text)
    }
}

impl From<bool> for ArgValue {
    /// `true` becomes a flag, `false` the literal text `"false"`
    fn from(flag: bool) -> Self {
        if flag {
            ArgValue::Flag
        } else {
            ArgValue::Text("false".to_string())
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Flag => f.write_str("true"),
            ArgValue::Text(text) => f.write_str(text),
        }
    }
}

impl Serialize for ArgValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ArgValue::Flag => serializer.serialize_bool(true),
            ArgValue::Text(text) => serializer.serialize_str(text),
        }
    }
}
