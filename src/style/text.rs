#![forbid(unsafe_code)]

//! ANSI styling for a single piece of text
//!
//! A [`TextStyle`] collects color, highlight, decoration and padding options
//! and renders them as escape sequences:
//!
//! ```text
//! ESC[<decoration><intensity><color>m ESC[<intensity><color>m <text> ESC[0m
//! ```
//!
//! Styling is switched on by the `color` flag of the [`ArgumentStore`] the
//! style is created from. Without it, rendering only applies padding.

use super::color::{Color, Target};
use crate::args::ArgumentStore;
use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};
use termcolor::{ColorSpec, WriteColor};

/// Flag that enables styled output
pub const COLOR_FLAG: &str = "color";

/// Control sequence introducer
pub const BEGIN: &str = "\x1b[";
/// Terminates a graphic rendition sequence
pub const END: &str = "m";
/// Resets every attribute
pub const RESET: &str = "\x1b[0m";

pub const DECORATION_NONE: &str = "0;";
pub const DECORATION_BOLD: &str = "1;";
pub const DECORATION_UNDERLINE: &str = "4;";

pub const REGULAR_FOREGROUND: &str = "3";
pub const REGULAR_BACKGROUND: &str = "4";
pub const HIGH_FOREGROUND: &str = "9";
pub const HIGH_BACKGROUND: &str = "10";

/// Side(s) on which padding is added
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PadDirection {
    /// Text aligned left, padding after it
    #[default]
    Right,
    /// Text aligned right, padding before it
    Left,
    /// Text centered; an odd remainder goes to the right
    Both,
}

/// Styled text builder
///
/// Every option consumes and returns the builder. Rendering borrows it, so
/// the same style can be rendered any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextStyle {
    text: String,
    foreground: Option<Color>,
    background: Option<Color>,
    bold: bool,
    underline: bool,
    highlight_background: bool,
    highlight_foreground: bool,
    pad_width: usize,
    pad_char: char,
    pad_direction: PadDirection,
    enabled: bool,
}

impl TextStyle {
    /// Creates a style for `text`
    ///
    /// Styling is enabled when `arguments` holds the `color` flag. The check
    /// happens once, here.
    pub fn new(text: impl Into<String>, arguments: &ArgumentStore) -> Self {
        Self::with_enabled(text, arguments.has(COLOR_FLAG, None))
    }

    /// Creates a style with styling explicitly switched on or off
    pub fn with_enabled(text: impl Into<String>, enabled: bool) -> Self {
        TextStyle {
            text: text.into(),
            foreground: Some(Color::White),
            background: Some(Color::Black),
            bold: false,
            underline: false,
            highlight_background: false,
            highlight_foreground: false,
            pad_width: 0,
            pad_char: ' ',
            pad_direction: PadDirection::Right,
            enabled,
        }
    }

    #[must_use]
    pub fn underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }

    #[must_use]
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    #[must_use]
    pub fn highlight(self, target: Target, highlight: bool) -> Self {
        match target {
            Target::Background => self.highlight_background(highlight),
            Target::Foreground => self.highlight_foreground(highlight),
        }
    }

    #[must_use]
    pub fn highlight_background(mut self, highlight: bool) -> Self {
        self.highlight_background = highlight;
        self
    }

    #[must_use]
    pub fn highlight_foreground(mut self, highlight: bool) -> Self {
        self.highlight_foreground = highlight;
        self
    }

    /// Set or clear (`None`) the color of one target
    #[must_use]
    pub fn color(self, target: Target, color: impl Into<Option<Color>>) -> Self {
        match target {
            Target::Background => self.color_background(color),
            Target::Foreground => self.color_foreground(color),
        }
    }

    #[must_use]
    pub fn color_background(mut self, color: impl Into<Option<Color>>) -> Self {
        self.background = color.into();
        self
    }

    #[must_use]
    pub fn color_foreground(mut self, color: impl Into<Option<Color>>) -> Self {
        self.foreground = color.into();
        self
    }

    /// Pad the text to `width` characters with `pad_char`
    #[must_use]
    pub fn pad(mut self, width: usize, pad_char: char, direction: PadDirection) -> Self {
        self.pad_width = width;
        self.pad_char = pad_char;
        self.pad_direction = direction;
        self
    }

    #[must_use]
    pub fn set_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Restore every option to its default; text and the enabled flag are kept
    #[must_use]
    pub fn reset(self) -> Self {
        Self::with_enabled(self.text, self.enabled)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Render the text with its escape sequences
    pub fn render(&self) -> String {
        let padded = self.padded();

        if !self.enabled {
            return padded.into_owned();
        }

        let mut output = String::new();

        if let Some(foreground) = self.foreground {
            let intensity = if self.highlight_foreground {
                HIGH_FOREGROUND
            } else {
                REGULAR_FOREGROUND
            };
            output.push_str(BEGIN);
            output.push_str(self.decoration());
            output.push_str(intensity);
            output.push_str(foreground.code());
            output.push_str(END);
        }

        if let Some(background) = self.background {
            let intensity = if self.highlight_background {
                HIGH_BACKGROUND
            } else {
                REGULAR_BACKGROUND
            };
            output.push_str(BEGIN);
            output.push_str(intensity);
            output.push_str(background.code());
            output.push_str(END);
        }

        output.push_str(&padded);
        output.push_str(RESET);
        output
    }

    /// Equivalent `termcolor` spec
    ///
    /// `termcolor` has a single intensity switch for both halves; it follows
    /// the foreground highlight.
    pub fn to_color_spec(&self) -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(self.foreground.and_then(Color::to_termcolor))
            .set_bg(self.background.and_then(Color::to_termcolor))
            .set_bold(self.bold)
            .set_underline(self.underline)
            .set_intense(self.highlight_foreground);
        spec
    }

    /// Write the padded text through a `termcolor` writer
    ///
    /// Colors are only requested when styling is enabled; the writer still
    /// decides whether to emit them.
    pub fn write_to<W: WriteColor>(&self, writer: &mut W) -> io::Result<()> {
        let padded = self.padded();

        if !self.enabled {
            return write!(writer, "{}", padded);
        }

        writer.set_color(&self.to_color_spec())?;
        write!(writer, "{}", padded)?;
        writer.reset()
    }

    fn decoration(&self) -> &'static str {
        match (self.bold, self.underline) {
            (true, true) => "1;4;",
            (true, false) => DECORATION_BOLD,
            (false, true) => DECORATION_UNDERLINE,
            (false, false) => DECORATION_NONE,
        }
    }

    fn padded(&self) -> Cow<'_, str> {
        let length = self.text.chars().count();
        if self.pad_width <= length {
            return Cow::Borrowed(&self.text);
        }

        let missing = self.pad_width - length;
        let (left, right) = match self.pad_direction {
            PadDirection::Right => (0, missing),
            PadDirection::Left => (missing, 0),
            PadDirection::Both => (missing / 2, missing - missing / 2),
        };

        let mut padded = String::with_capacity(self.text.len() + missing * self.pad_char.len_utf8());
        padded.extend(std::iter::repeat_n(self.pad_char, left));
        padded.push_str(&self.text);
        padded.extend(std::iter::repeat_n(self.pad_char, right));
        Cow::Owned(padded)
    }
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
