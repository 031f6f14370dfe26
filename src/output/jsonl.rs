#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line in a deterministic order:
//! 1. One argument record per parsed argument (sorted by name)
//! 2. One summary record

use crate::args::{ArgValue, ArgumentMap, DEFAULT_KEY};
use serde::Serialize;

/// JSONL output formatter
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format the parsed arguments as JSONL
    ///
    /// # Errors
    ///
    /// Returns the serializer error if a record cannot be encoded.
    pub fn format(&self, arguments: &ArgumentMap) -> serde_json::Result<String> {
        let mut output = String::new();

        // The map is already sorted by name
        for (name, value) in arguments {
            let record = ArgumentRecord {
                record_type: "argument",
                name,
                value,
            };
            output.push_str(&serde_json::to_string(&record)?);
            output.push('\n');
        }

        let summary = SummaryRecord {
            record_type: "summary",
            arguments: arguments.len() as u64,
            flags: arguments.values().filter(|v| v.is_flag()).count() as u64,
            positional: arguments.get(DEFAULT_KEY).and_then(ArgValue::as_text),
        };
        output.push_str(&serde_json::to_string(&summary)?);
        output.push('\n');

        Ok(output)
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Argument record for JSONL output
#[derive(Debug, Serialize)]
struct ArgumentRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    name: &'a str,
    value: &'a ArgValue,
}

/// Summary record for JSONL output
#[derive(Debug, Serialize)]
struct SummaryRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    arguments: u64,
    flags: u64,
    positional: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::ArgumentParser;
    use serde_json::Value;

    fn format(tokens: &[&str]) -> Vec<Value> {
        let arguments = ArgumentParser::new().parse(tokens);
        JsonlFormatter::new()
            .format(&arguments)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_format_empty_arguments() {
        let records = format(&["tool"]);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["type"], "summary");
        assert_eq!(records[0]["arguments"], 0);
        assert_eq!(records[0]["flags"], 0);
        assert!(records[0]["positional"].is_null());
    }

    #[test]
    fn test_format_flags_and_values() {
        let records = format(&["tool", "--verbose", "--out=dir"]);

        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["type"], "argument");
        assert_eq!(records[0]["name"], "out");
        assert_eq!(records[0]["value"], "dir");
        assert_eq!(records[1]["name"], "verbose");
        assert_eq!(records[1]["value"], true);
        assert_eq!(records[2]["arguments"], 2);
        assert_eq!(records[2]["flags"], 1);
    }

    #[test]
    fn test_format_positional() {
        let records = format(&["tool", "build", "-v"]);
        let summary = records.last().unwrap();
        assert_eq!(summary["positional"], "build");
    }

    #[test]
    fn test_special_characters_in_values() {
        let records = format(&["tool", "--msg=a \"quoted\" line\nnext"]);
        assert_eq!(records[0]["value"], "a \"quoted\" line\nnext");
    }

    #[test]
    fn test_default_implementation() {
        let formatter = JsonlFormatter::default();
        let output = formatter.format(&ArgumentMap::new()).unwrap();
        assert!(output.ends_with('\n'));
        assert_eq!(output.lines().count(), 1);
    }
}
