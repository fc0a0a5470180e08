//! Fixed geometry of the 512x512 palette canvas.
//!
//! There is no dynamic layout; every element sits at a constant position.

use crate::util::{Point, Rect};

/// Width and height of the palette canvas.
pub const CANVAS_SIZE: i32 = 512;

/// Gradient strip including its 1px black outline.
pub const GRADIENT_STRIP: Rect = Rect::fixed(497, 1, 14, 510);
/// Gradient pixels inside the outline.
pub const GRADIENT_FILL: Rect = Rect::fixed(498, 2, 12, 508);

pub const FOREGROUND_SWATCH: Rect = Rect::fixed(436, 452, 28, 28);
pub const BACKGROUND_SWATCH: Rect = Rect::fixed(452, 468, 28, 28);

pub const READOUT_BOX: Rect = Rect::fixed(192, 160, 128, 32);

/// Clickable elements drawn above the composed frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteButton {
    /// Center button: beeps on release, right click opens the texture menu
    Large,
    /// Shows the about message
    Info,
    RotateLeft,
    RotateRight,
    /// Shows the painter quote
    Quote,
    /// Swap-arrows icon: swaps colors on press
    Swap,
    /// Default-colors icon: resets colors on press
    Reset,
}

impl PaletteButton {
    pub const ALL: [PaletteButton; 7] = [
        PaletteButton::Large,
        PaletteButton::Info,
        PaletteButton::RotateLeft,
        PaletteButton::RotateRight,
        PaletteButton::Quote,
        PaletteButton::Swap,
        PaletteButton::Reset,
    ];

    /// The four small buttons below the large one, left to right.
    pub const SMALL: [PaletteButton; 4] = [
        PaletteButton::Info,
        PaletteButton::RotateLeft,
        PaletteButton::RotateRight,
        PaletteButton::Quote,
    ];

    pub fn rect(self) -> Rect {
        match self {
            PaletteButton::Large => Rect::fixed(192, 192, 128, 128),
            PaletteButton::Info => Rect::fixed(192, 320, 32, 32),
            PaletteButton::RotateLeft => Rect::fixed(224, 320, 32, 32),
            PaletteButton::RotateRight => Rect::fixed(256, 320, 32, 32),
            PaletteButton::Quote => Rect::fixed(288, 320, 32, 32),
            PaletteButton::Swap => Rect::fixed(464, 453, 16, 16),
            PaletteButton::Reset => Rect::fixed(436, 486, 10, 10),
        }
    }

    pub fn origin(self) -> Point {
        let rect = self.rect();
        Point::new(rect.x, rect.y)
    }

    /// Whether the button acts on press rather than on release.
    pub fn acts_on_press(self) -> bool {
        matches!(self, PaletteButton::Swap | PaletteButton::Reset)
    }
}

/// Topmost button under `point`, if any.
pub fn button_at(point: Point) -> Option<PaletteButton> {
    PaletteButton::ALL
        .into_iter()
        .find(|button| button.rect().contains(point))
}
