//! Texture context menu opened by right-clicking the large button.

use crate::draw::{Color, ReadoutFont, render_label, stroke_outline};
use crate::util::{Point, Rect};

use super::layout::PaletteButton;

/// In-place texture transforms offered by the context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureAction {
    Invert,
    MirrorHorizontal,
    MirrorVertical,
}

impl TextureAction {
    pub const ALL: [TextureAction; 3] = [
        TextureAction::Invert,
        TextureAction::MirrorHorizontal,
        TextureAction::MirrorVertical,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TextureAction::Invert => "Invert",
            TextureAction::MirrorHorizontal => "Mirror Horizontal",
            TextureAction::MirrorVertical => "Mirror Vertical",
        }
    }
}

/// Matches the large button so the menu always fits on it.
const ITEM_WIDTH: i32 = 128;
const ITEM_HEIGHT: i32 = 22;

/// An open context menu, anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextMenu {
    origin: Point,
}

impl ContextMenu {
    /// Opens the menu at `point`, shifted as needed to lie within the large
    /// button, which is always inside the window mask.
    pub fn open_at(point: Point) -> Self {
        let anchor = PaletteButton::Large.rect();
        let height = ITEM_HEIGHT * TextureAction::ALL.len() as i32;
        let x = point.x.clamp(anchor.x, anchor.x + anchor.width - ITEM_WIDTH);
        let y = point.y.clamp(anchor.y, anchor.y + anchor.height - height);
        Self {
            origin: Point::new(x, y),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::fixed(
            self.origin.x,
            self.origin.y,
            ITEM_WIDTH,
            ITEM_HEIGHT * TextureAction::ALL.len() as i32,
        )
    }

    fn item_rect(&self, index: usize) -> Rect {
        Rect::fixed(
            self.origin.x,
            self.origin.y + ITEM_HEIGHT * index as i32,
            ITEM_WIDTH,
            ITEM_HEIGHT,
        )
    }

    /// Menu entry under `point`, if any.
    pub fn item_at(&self, point: Point) -> Option<TextureAction> {
        TextureAction::ALL
            .into_iter()
            .enumerate()
            .find(|(index, _)| self.item_rect(*index).contains(point))
            .map(|(_, action)| action)
    }

    pub fn paint(&self, ctx: &cairo::Context, font: &ReadoutFont) -> Result<(), cairo::Error> {
        let background = Color::from_rgba8(240, 240, 240, 255);
        let text = Color::from_rgba8(20, 20, 20, 255);
        for (index, action) in TextureAction::ALL.into_iter().enumerate() {
            render_label(ctx, self.item_rect(index), action.label(), font, text, background)?;
        }
        stroke_outline(ctx, self.rect(), Color::from_rgba8(90, 90, 90, 255))
    }
}
