//! Owned Cairo `ARGB32` rasters with pixel read-back and in-place transforms.
//!
//! Every raster the palette touches (texture, icons, mask source, composed
//! frame) is normalized to premultiplied `ARGB32` so pixel access has exactly
//! one layout to deal with.

use std::fs::File;
use std::path::{Path, PathBuf};

use cairo::{Format, ImageSurface};
use thiserror::Error;

use super::color::Color;

/// Errors raised while creating, loading, or touching a raster.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("failed to open image {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode PNG {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: cairo::IoError,
    },

    #[error("failed to encode PNG {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: cairo::IoError,
    },

    #[error("cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("raster pixels are in use elsewhere: {0}")]
    Borrow(#[from] cairo::BorrowError),
}

/// A premultiplied `ARGB32` image surface owned by exactly one component.
#[derive(Debug)]
pub struct Raster {
    surface: ImageSurface,
}

impl Raster {
    /// Creates a fully transparent raster.
    pub fn new(width: i32, height: i32) -> Result<Self, RasterError> {
        let surface = ImageSurface::create(Format::ARgb32, width, height)?;
        Ok(Self { surface })
    }

    /// Loads a PNG file and converts it to `ARGB32`.
    pub fn load_png(path: &Path) -> Result<Self, RasterError> {
        let mut file = File::open(path).map_err(|source| RasterError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let decoded =
            ImageSurface::create_from_png(&mut file).map_err(|source| RasterError::Decode {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_surface(&decoded)
    }

    /// Copies any image surface into a fresh `ARGB32` raster.
    ///
    /// PNGs without an alpha channel decode as `RGB24`; copying with the
    /// `Source` operator gives them an explicit opaque alpha byte.
    pub fn from_surface(source: &ImageSurface) -> Result<Self, RasterError> {
        let raster = Self::new(source.width(), source.height())?;
        {
            let ctx = raster.context()?;
            ctx.set_operator(cairo::Operator::Source);
            ctx.set_source_surface(source, 0.0, 0.0)?;
            ctx.paint()?;
        }
        raster.surface.flush();
        Ok(raster)
    }

    /// Writes the raster as a PNG file.
    pub fn write_png(&self, path: &Path) -> Result<(), RasterError> {
        let mut file = File::create(path).map_err(|source| RasterError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|source| RasterError::Encode {
                path: path.to_path_buf(),
                source,
            })
    }

    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    /// Underlying surface, for use as a Cairo paint source.
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    /// Opens a drawing context on this raster.
    ///
    /// The context must be dropped before any mutable pixel access.
    pub fn context(&self) -> Result<cairo::Context, RasterError> {
        Ok(cairo::Context::new(&self.surface)?)
    }

    /// Resets every pixel to transparent black.
    pub fn clear(&mut self) -> Result<(), RasterError> {
        let mut data = self.surface.data()?;
        data.fill(0);
        Ok(())
    }

    /// Raw premultiplied pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Result<Option<u32>, RasterError> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return Ok(None);
        }
        let stride = self.surface.stride() as usize;
        let offset = y as usize * stride + x as usize * 4;
        let mut value = None;
        self.surface.with_data(|data| {
            value = data
                .get(offset..offset + 4)
                .map(|bytes| u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]));
        })?;
        Ok(value)
    }

    /// Un-premultiplied color at `(x, y)`, or `None` when out of bounds.
    pub fn color_at(&self, x: i32, y: i32) -> Result<Option<Color>, RasterError> {
        Ok(self.pixel(x, y)?.map(Color::from_argb32_premultiplied))
    }

    /// All pixels in row-major order with the stride padding removed.
    pub fn pixels(&self) -> Result<Vec<u32>, RasterError> {
        let width = self.width().max(0) as usize;
        let height = self.height().max(0) as usize;
        let stride = self.surface.stride() as usize;
        let mut out = Vec::with_capacity(width * height);
        self.surface.with_data(|data| {
            for row in data.chunks(stride).take(height) {
                out.extend(
                    row[..width * 4]
                        .chunks_exact(4)
                        .map(|px| u32::from_ne_bytes([px[0], px[1], px[2], px[3]])),
                );
            }
        })?;
        Ok(out)
    }

    /// Inverts the color channels of every pixel in place.
    ///
    /// Works in premultiplied space: `c' = a - c` is `255 - c` on the
    /// un-premultiplied value, so the operation is its own inverse and alpha
    /// is left untouched.
    pub fn invert_colors(&mut self) -> Result<(), RasterError> {
        self.map_pixels(|pixel| {
            let a = pixel >> 24;
            let r = a.saturating_sub((pixel >> 16) & 0xFF);
            let g = a.saturating_sub((pixel >> 8) & 0xFF);
            let b = a.saturating_sub(pixel & 0xFF);
            (a << 24) | (r << 16) | (g << 8) | b
        })
    }

    /// Mirrors the raster left-to-right in place.
    pub fn mirror_horizontal(&mut self) -> Result<(), RasterError> {
        let width = self.width().max(0) as usize;
        let stride = self.surface.stride() as usize;
        let mut data = self.surface.data()?;
        for row in data.chunks_mut(stride) {
            for left in 0..width / 2 {
                let right = width - 1 - left;
                for byte in 0..4 {
                    row.swap(left * 4 + byte, right * 4 + byte);
                }
            }
        }
        Ok(())
    }

    /// Mirrors the raster top-to-bottom in place.
    pub fn mirror_vertical(&mut self) -> Result<(), RasterError> {
        let height = self.height().max(0) as usize;
        let stride = self.surface.stride() as usize;
        let mut data = self.surface.data()?;
        for top in 0..height / 2 {
            let bottom = height - 1 - top;
            let (upper, lower) = data.split_at_mut(bottom * stride);
            upper[top * stride..(top + 1) * stride].swap_with_slice(&mut lower[..stride]);
        }
        Ok(())
    }

    /// Applies `f` to every pixel value in place.
    pub fn map_pixels(&mut self, mut f: impl FnMut(u32) -> u32) -> Result<(), RasterError> {
        let width = self.width().max(0) as usize;
        let stride = self.surface.stride() as usize;
        let mut data = self.surface.data()?;
        for row in data.chunks_mut(stride) {
            for px in row[..width * 4].chunks_exact_mut(4) {
                let value = f(u32::from_ne_bytes([px[0], px[1], px[2], px[3]]));
                px.copy_from_slice(&value.to_ne_bytes());
            }
        }
        Ok(())
    }
}
