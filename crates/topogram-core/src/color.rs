//! Color validation built on the `color` crate.

use std::{fmt, str::FromStr};

use color::DynamicColor;
use thiserror::Error;

/// Error returned when a color string cannot be parsed.
#[derive(Debug, Error)]
#[error("invalid color '{value}': {reason}")]
pub struct ColorError {
    value: String,
    reason: String,
}

/// A validated CSS color.
///
/// Parsing accepts CSS color strings such as `"#ff0000"`, `"rgb(255, 0, 0)"`,
/// or `"red"`. The original source text is preserved and used for display,
/// because the Graphviz attribute grammar consumes the source form directly
/// (Graphviz does not understand the `rgb(...)` serialization).
#[derive(Clone, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
    source: String,
}

impl Color {
    /// Parses a CSS color string into a validated `Color`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError`] if the string is not a recognized CSS color.
    pub fn new(color_str: &str) -> Result<Self, ColorError> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Color {
                color,
                source: color_str.to_owned(),
            }),
            Err(err) => Err(ColorError {
                value: color_str.to_owned(),
                reason: err.to_string(),
            }),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}
