//! Window shape mask derived from a monochrome raster.

use super::color::Color;
use super::raster::{Raster, RasterError};
use crate::util::{Point, Rect};

/// Per-pixel visibility map for the popup window.
///
/// A pixel is inside the mask when the source pixel is opaque (alpha at least
/// 128) and dark (luma below 128), i.e. the black part of a black/white
/// bitmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: i32,
    height: i32,
    bits: Vec<bool>,
}

impl Mask {
    /// Builds a mask from the dark, opaque pixels of `raster`.
    pub fn from_raster(raster: &Raster) -> Result<Self, RasterError> {
        let bits = raster
            .pixels()?
            .into_iter()
            .map(|pixel| {
                let color = Color::from_argb32_premultiplied(pixel);
                color.a >= 128.0 / 255.0 && color.luma() < 128.0 / 255.0
            })
            .collect();
        Ok(Self {
            width: raster.width(),
            height: raster.height(),
            bits,
        })
    }

    /// A mask that shows every pixel.
    pub fn full(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            bits: vec![true; (width.max(0) * height.max(0)) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `point` is shown (and may receive pointer input).
    pub fn contains(&self, point: Point) -> bool {
        if point.x < 0 || point.y < 0 || point.x >= self.width || point.y >= self.height {
            return false;
        }
        self.bits[(point.y * self.width + point.x) as usize]
    }

    /// Number of visible pixels.
    pub fn visible_count(&self) -> usize {
        self.bits.iter().filter(|bit| **bit).count()
    }

    /// Decomposes the visible area into rectangles.
    ///
    /// Each row is split into runs; runs repeated unchanged on consecutive
    /// rows are merged into one taller rectangle. Suitable for building a
    /// compositor input region.
    pub fn rects(&self) -> Vec<Rect> {
        let mut done = Vec::new();
        let mut open: Vec<Rect> = Vec::new();

        for y in 0..self.height {
            let runs = self.row_runs(y);
            let mut next_open = Vec::with_capacity(runs.len());
            for (x, width) in runs {
                match open
                    .iter()
                    .position(|r| r.x == x && r.width == width && r.y + r.height == y)
                {
                    Some(idx) => {
                        let mut rect = open.swap_remove(idx);
                        rect.height += 1;
                        next_open.push(rect);
                    }
                    None => next_open.push(Rect::fixed(x, y, width, 1)),
                }
            }
            done.append(&mut open);
            open = next_open;
        }
        done.append(&mut open);
        done
    }

    fn row_runs(&self, y: i32) -> Vec<(i32, i32)> {
        let row = &self.bits[(y * self.width) as usize..((y + 1) * self.width) as usize];
        let mut runs = Vec::new();
        let mut start = None;
        for (x, visible) in row.iter().enumerate() {
            match (start, *visible) {
                (None, true) => start = Some(x as i32),
                (Some(s), false) => {
                    runs.push((s, x as i32 - s));
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push((s, self.width - s));
        }
        runs
    }

}
