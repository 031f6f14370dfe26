#![forbid(unsafe_code)]

//! Human-readable output formatter with colorization support

use crate::args::{ArgValue, ArgumentMap, ArgumentStore};
use crate::style::{COLOR_FLAG, Color, PadDirection, TextStyle};

/// Human-readable output formatter
///
/// Prints one `name  value` line per argument, names aligned on the longest
/// one. Names are bold cyan and boolean flags green when styling is enabled.
pub struct HumanFormatter {
    color: bool,
}

impl HumanFormatter {
    /// Creates a new HumanFormatter with styling taken from the `color` flag
    pub fn new(arguments: &ArgumentStore) -> Self {
        Self::with_color(arguments.has(COLOR_FLAG, None))
    }

    pub fn with_color(color: bool) -> Self {
        HumanFormatter { color }
    }

    /// Format the parsed arguments for human consumption
    pub fn format(&self, arguments: &ArgumentMap) -> String {
        let mut output = String::new();

        let width = arguments
            .keys()
            .map(|name| name.chars().count())
            .max()
            .unwrap_or(0);

        for (name, value) in arguments {
            let name = TextStyle::with_enabled(name.as_str(), self.color)
                .bold(true)
                .color_foreground(Color::Cyan)
                .color_background(None)
                .pad(width, ' ', PadDirection::Right);

            let value = match value {
                ArgValue::Flag => TextStyle::with_enabled("true", self.color)
                    .color_foreground(Color::Green)
                    .color_background(None)
                    .render(),
                ArgValue::Text(text) => text.clone(),
            };

            output.push_str(&format!("{}  {}\n", name, value));
        }

        output
    }
}
