//! Terminal color palette and style targets

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Eight-color ANSI palette
///
/// Each color renders as a single digit that is appended to an intensity
/// selector (`3`/`9` for foreground, `4`/`10` for background).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    /// The terminal's own default color
    Default,
}

impl Color {
    /// All palette entries, in code order
    pub const ALL: [Color; 9] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::Default,
    ];

    /// ANSI color digit
    pub fn code(self) -> &'static str {
        match self {
            Color::Black => "0",
            Color::Red => "1",
            Color::Green => "2",
            Color::Yellow => "3",
            Color::Blue => "4",
            Color::Magenta => "5",
            Color::Cyan => "6",
            Color::White => "7",
            Color::Default => "9",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::Default => "default",
        }
    }

    /// Equivalent `termcolor` color; the terminal default has none
    pub fn to_termcolor(self) -> Option<termcolor::Color> {
        match self {
            Color::Black => Some(termcolor::Color::Black),
            Color::Red => Some(termcolor::Color::Red),
            Color::Green => Some(termcolor::Color::Green),
            Color::Yellow => Some(termcolor::Color::Yellow),
            Color::Blue => Some(termcolor::Color::Blue),
            Color::Magenta => Some(termcolor::Color::Magenta),
            Color::Cyan => Some(termcolor::Color::Cyan),
            Color::White => Some(termcolor::Color::White),
            Color::Default => None,
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "black" => Ok(Color::Black),
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "yellow" => Ok(Color::Yellow),
            "blue" => Ok(Color::Blue),
            "magenta" | "purple" => Ok(Color::Magenta),
            "cyan" => Ok(Color::Cyan),
            "white" | "grey" | "gray" => Ok(Color::White),
            "default" => Ok(Color::Default),
            _ => Err(Error::UnknownColor(s.to_string())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which half of a styled string an option applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Background,
    Foreground,
}

impl FromStr for Target {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bg" | "background" => Ok(Target::Background),
            "fg" | "foreground" => Ok(Target::Foreground),
            _ => Err(Error::UnknownTarget(s.to_string())),
        }
    }
}
