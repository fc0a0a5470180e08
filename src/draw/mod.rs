//! Raster and drawing primitives (Cairo-based).
//!
//! This module defines the pixel-level building blocks of the palette:
//! - [`Color`]: RGBA color on the 8-bit grid with the default constants
//! - [`Raster`]: owned `ARGB32` image with read-back, invert and mirror
//! - [`Mask`]: visibility bitmap that shapes the popup window
//! - Rendering functions for composing the frame and the readout text

pub mod color;
pub mod mask;
pub mod raster;
pub mod render;
pub mod text;

pub use color::Color;
pub use mask::Mask;
pub use raster::{Raster, RasterError};
pub use render::{fill_rect, paint_raster, render_vertical_gradient, stroke_outline};
pub use text::{ReadoutFont, render_label};

#[allow(unused_imports)]
pub use color::{BLACK, TRANSPARENT, WHITE};
