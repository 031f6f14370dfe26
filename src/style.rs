//! Terminal text styling

pub mod color;
pub mod text;

pub use color::{Color, Target};
pub use text::{COLOR_FLAG, PadDirection, TextStyle};
