//! Cairo drawing primitives used to compose the palette frame.
//!
//! Everything here draws on whole-pixel boundaries with antialiasing off, so
//! the colors written are exactly the 8-bit colors requested. Picking reads
//! those pixels back and relies on that.

use super::color::Color;
use super::raster::Raster;
use crate::util::{Point, Rect};

fn set_source(ctx: &cairo::Context, color: Color) {
    let c = color.quantized();
    ctx.set_source_rgba(c.r, c.g, c.b, c.a);
}

/// Paints `raster` with its top-left corner at `origin`, blending over
/// whatever is already on the target.
pub fn paint_raster(
    ctx: &cairo::Context,
    raster: &Raster,
    origin: Point,
) -> Result<(), cairo::Error> {
    ctx.save()?;
    ctx.set_source_surface(raster.surface(), origin.x as f64, origin.y as f64)?;
    ctx.paint()?;
    ctx.restore()
}

/// Fills `rect` with a solid color, replacing the pixels underneath.
pub fn fill_rect(ctx: &cairo::Context, rect: Rect, color: Color) -> Result<(), cairo::Error> {
    ctx.save()?;
    ctx.set_antialias(cairo::Antialias::None);
    ctx.set_operator(cairo::Operator::Source);
    set_source(ctx, color);
    ctx.rectangle(
        rect.x as f64,
        rect.y as f64,
        rect.width as f64,
        rect.height as f64,
    );
    ctx.fill()?;
    ctx.restore()
}

/// Draws a one pixel outline along the inside edge of `rect`.
pub fn stroke_outline(ctx: &cairo::Context, rect: Rect, color: Color) -> Result<(), cairo::Error> {
    ctx.save()?;
    ctx.set_antialias(cairo::Antialias::None);
    ctx.set_operator(cairo::Operator::Source);
    set_source(ctx, color);
    ctx.set_line_width(1.0);
    // Half-pixel offset centers the 1px line on the pixel row/column.
    ctx.rectangle(
        rect.x as f64 + 0.5,
        rect.y as f64 + 0.5,
        rect.width as f64 - 1.0,
        rect.height as f64 - 1.0,
    );
    ctx.stroke()?;
    ctx.restore()
}

/// Fills `rect` with a vertical gradient from `top` to `bottom`.
///
/// Rasterised one scanline at a time on the 8-bit grid: the first row is
/// exactly `top` and the last row exactly `bottom`.
pub fn render_vertical_gradient(
    ctx: &cairo::Context,
    rect: Rect,
    top: Color,
    bottom: Color,
) -> Result<(), cairo::Error> {
    let span = (rect.height - 1).max(1) as f64;
    for row in 0..rect.height {
        let color = top.lerp_rgba8(bottom, row as f64 / span);
        fill_rect(ctx, Rect::fixed(rect.x, rect.y + row, rect.width, 1), color)?;
    }
    Ok(())
}
