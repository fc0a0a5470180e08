//! Configuration enum types.

use crate::draw::Color;
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification: a name, a `#RRGGBB` string, or RGB values.
///
/// # Examples
/// ```toml
/// initial_foreground = "white"
/// initial_background = "#202020"
/// initial_background = [32, 32, 32]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (white, black, red, green, blue, gray) or `#RRGGBB`
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Resolves the specification, or `None` for an unknown name.
    pub fn resolve(&self) -> Option<Color> {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name),
            ColorSpec::Rgb([r, g, b]) => Some(Color::from_rgba8(*r, *g, *b, 255)),
        }
    }

    /// Resolves the specification, warning and using `fallback` when it is unknown.
    pub fn to_color_or(&self, fallback: Color) -> Color {
        self.resolve().unwrap_or_else(|| {
            warn!("Unknown color {:?}, using {}", self, fallback.to_hex());
            fallback
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, WHITE};

    #[test]
    fn resolves_each_form() {
        assert_eq!(ColorSpec::Name("white".into()).resolve(), Some(WHITE));
        assert_eq!(
            ColorSpec::Name("#102030".into()).resolve().unwrap().to_rgba8(),
            [0x10, 0x20, 0x30, 255]
        );
        assert_eq!(
            ColorSpec::Rgb([1, 2, 3]).resolve().unwrap().to_rgba8(),
            [1, 2, 3, 255]
        );
    }

    #[test]
    fn unknown_name_falls_back() {
        assert_eq!(ColorSpec::Name("mauve-ish".into()).to_color_or(BLACK), BLACK);
    }
}
