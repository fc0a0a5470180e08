//! In-memory assets for palette tests.

use super::{CANVAS_SIZE, PaletteAssets};
use crate::draw::{Color, Mask, Raster, fill_rect};
use crate::util::Rect;

pub const RED: [u8; 4] = [200, 30, 30, 255];
pub const BLUE: [u8; 4] = [20, 40, 220, 255];

pub fn solid(width: i32, height: i32, rgba: [u8; 4]) -> Raster {
    let raster = Raster::new(width, height).unwrap();
    {
        let ctx = raster.context().unwrap();
        let [r, g, b, a] = rgba;
        fill_rect(
            &ctx,
            Rect::fixed(0, 0, width, height),
            Color::from_rgba8(r, g, b, a),
        )
        .unwrap();
    }
    raster
}

/// Red left half, blue right half.
fn split_texture() -> Raster {
    let raster = solid(CANVAS_SIZE, CANVAS_SIZE, RED);
    {
        let ctx = raster.context().unwrap();
        let [r, g, b, a] = BLUE;
        fill_rect(
            &ctx,
            Rect::fixed(CANVAS_SIZE / 2, 0, CANVAS_SIZE / 2, CANVAS_SIZE),
            Color::from_rgba8(r, g, b, a),
        )
        .unwrap();
    }
    raster
}

pub fn assets_with_mask(mask: Mask) -> PaletteAssets {
    PaletteAssets {
        texture: split_texture(),
        mask,
        swap_icon: solid(16, 16, [90, 90, 90, 255]),
        reset_icon: solid(10, 10, [120, 120, 120, 255]),
        color_box: Raster::new(28, 28).unwrap(),
        cursor: solid(24, 24, [255, 255, 255, 255]),
        large_button: Raster::new(128, 128).unwrap(),
        small_button: Raster::new(32, 32).unwrap(),
    }
}

/// Assets with a fully visible mask.
pub fn assets() -> PaletteAssets {
    assets_with_mask(Mask::full(CANVAS_SIZE, CANVAS_SIZE))
}
