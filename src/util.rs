//! Utility types and helpers for geometry and color names.
//!
//! This module provides:
//! - [`Point`] and [`Rect`] integer geometry used for layout and hit testing
//! - Color name and `#RRGGBB` parsing for the configuration file

use crate::draw::{Color, color::*};

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Integer point in either widget-local or global screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Axis-aligned rectangle used for layout slots and hit regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Const constructor for the fixed layout table; callers guarantee a positive size.
    pub const fn fixed(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns true if the point lies inside (inclusive min, exclusive max).
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x < self.x + self.width
            && point.y < self.y + self.height
    }

    /// Returns the rectangle shrunk by `amount` on every side, if anything remains.
    pub fn inset(&self, amount: i32) -> Option<Rect> {
        Rect::new(
            self.x + amount,
            self.y + amount,
            self.width - amount * 2,
            self.height - amount * 2,
        )
    }

    /// Center pixel of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Returns true if rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

// ============================================================================
// Color Names
// ============================================================================

/// Maps color names or `#RRGGBB` strings to Color values.
///
/// # Supported Names (case-insensitive)
/// - "white", "black", "red", "green", "blue", "gray"
/// - any `#RRGGBB` hex string
pub fn name_to_color(name: &str) -> Option<Color> {
    let trimmed = name.trim();
    if trimmed.starts_with('#') {
        return parse_hex_color(trimmed);
    }
    match trimmed.to_lowercase().as_str() {
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "red" => Some(Color::from_rgba8(255, 0, 0, 255)),
        "green" => Some(Color::from_rgba8(0, 255, 0, 255)),
        "blue" => Some(Color::from_rgba8(0, 0, 255, 255)),
        "gray" | "grey" => Some(Color::from_rgba8(128, 128, 128, 255)),
        _ => None,
    }
}

/// Parses a `#RRGGBB` string into an opaque color.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Color::from_rgba8(channel(0)?, channel(2)?, channel(4)?, 255))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_is_half_open() {
        let rect = Rect::fixed(10, 20, 5, 5);
        assert!(rect.contains(Point::new(10, 20)));
        assert!(rect.contains(Point::new(14, 24)));
        assert!(!rect.contains(Point::new(15, 24)));
        assert!(!rect.contains(Point::new(14, 25)));
        assert!(!rect.contains(Point::new(9, 20)));
    }

    #[test]
    fn rect_new_rejects_empty_area() {
        assert!(Rect::new(0, 0, 0, 10).is_none());
        assert!(Rect::new(0, 0, 10, -1).is_none());
        assert!(Rect::new(0, 0, 1, 1).is_some());
    }

    #[test]
    fn inset_shrinks_every_side() {
        let inner = Rect::fixed(497, 1, 14, 510).inset(1).unwrap();
        assert_eq!(inner, Rect::fixed(498, 2, 12, 508));
        assert!(Rect::fixed(0, 0, 2, 2).inset(1).is_none());
    }

    #[test]
    fn point_arithmetic() {
        let delta = Point::new(300, 400) - Point::new(100, 50);
        assert_eq!(delta, Point::new(200, 350));
        assert_eq!(delta + Point::new(1, 1), Point::new(201, 351));
    }

    #[test]
    fn names_and_hex_parse() {
        assert_eq!(name_to_color("White").unwrap(), WHITE);
        assert_eq!(name_to_color(" black ").unwrap(), BLACK);
        assert_eq!(
            name_to_color("#FF8000").unwrap().to_rgba8(),
            [255, 128, 0, 255]
        );
        assert!(name_to_color("chartreuse").is_none());
        assert!(parse_hex_color("#12345").is_none());
        assert!(parse_hex_color("123456").is_none());
        assert!(parse_hex_color("#GG0000").is_none());
    }
}
