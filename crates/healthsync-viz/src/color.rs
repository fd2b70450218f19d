//! Color handling with CSS color support.

use std::str::FromStr;

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate.
///
/// Palette entries and style options are authored as CSS color strings
/// ("#1565C0", "rgba(211, 47, 47, 0.05)", "white", ...) and parsed once
/// when the dataset is built.
#[derive(Clone, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a CSS color string.
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Color { color }),
            Err(err) => Err(format!("Invalid color '{color_str}': {err}")),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").unwrap()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        svg::node::Value::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_hex_colors() {
        assert!(Color::new("#1565C0").is_ok());
        assert!(Color::new("#2E7D32").is_ok());
    }

    #[test]
    fn test_parses_named_and_rgba_colors() {
        assert!(Color::new("white").is_ok());
        assert!(Color::new("rgba(211, 47, 47, 0.05)").is_ok());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(Color::new("not-a-color").is_err());
    }

    #[test]
    fn test_default_is_black() {
        let color = Color::default();
        assert_eq!(color, Color::new("black").unwrap());
    }
}
