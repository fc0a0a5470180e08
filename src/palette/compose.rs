//! Frame composition, painting and color picking.

use log::debug;

use crate::draw::{
    BLACK, Color, Raster, RasterError, fill_rect, paint_raster, render_label,
    render_vertical_gradient, stroke_outline,
};
use crate::util::Point;

use super::PaletteWidget;
use super::layout::{
    BACKGROUND_SWATCH, FOREGROUND_SWATCH, GRADIENT_FILL, GRADIENT_STRIP, PaletteButton, READOUT_BOX,
};

const READOUT_TEXT: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};
const READOUT_BACKGROUND: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.6,
};

impl PaletteWidget {
    /// Rebuilds the composed frame from the texture and the current colors.
    ///
    /// The frame is replaced wholesale; nothing from the previous frame
    /// survives.
    pub fn recompose(&mut self) -> Result<(), RasterError> {
        self.frame.clear()?;
        {
            let ctx = self.frame.context()?;
            self.compose_onto(&ctx)?;
        }
        self.frame.surface().flush();
        debug!(
            "Recomposed palette frame (fg {}, bg {})",
            self.foreground.to_hex(),
            self.background.to_hex()
        );
        Ok(())
    }

    fn compose_onto(&self, ctx: &cairo::Context) -> Result<(), cairo::Error> {
        let assets = &self.assets;

        paint_raster(ctx, &assets.texture, Point::new(0, 0))?;

        render_vertical_gradient(ctx, GRADIENT_FILL, self.foreground, self.background)?;
        stroke_outline(ctx, GRADIENT_STRIP, BLACK)?;

        paint_raster(ctx, &assets.swap_icon, PaletteButton::Swap.origin())?;
        paint_raster(ctx, &assets.reset_icon, PaletteButton::Reset.origin())?;

        // Background first so the foreground swatch overlaps it.
        for (rect, color) in [
            (BACKGROUND_SWATCH, self.background),
            (FOREGROUND_SWATCH, self.foreground),
        ] {
            fill_rect(ctx, rect, color)?;
            paint_raster(ctx, &assets.color_box, Point::new(rect.x, rect.y))?;
        }
        Ok(())
    }

    /// Paints the window contents: the composed frame, then the buttons,
    /// the coordinate readout and an open context menu on top.
    pub fn paint(&self, ctx: &cairo::Context) -> Result<(), cairo::Error> {
        ctx.save()?;
        ctx.set_operator(cairo::Operator::Source);
        ctx.set_source_surface(self.frame.surface(), 0.0, 0.0)?;
        ctx.paint()?;
        ctx.restore()?;

        paint_raster(ctx, &self.assets.large_button, PaletteButton::Large.origin())?;
        for button in PaletteButton::SMALL {
            paint_raster(ctx, &self.assets.small_button, button.origin())?;
        }

        render_label(
            ctx,
            READOUT_BOX,
            &self.readout,
            &self.readout_font,
            READOUT_TEXT,
            READOUT_BACKGROUND,
        )?;

        if let Some(menu) = &self.menu {
            menu.paint(ctx, &self.readout_font)?;
        }
        Ok(())
    }

    /// Paints the window contents into a fresh raster of the canvas size.
    pub fn render_to_raster(&self) -> Result<Raster, RasterError> {
        let raster = Raster::new(self.frame.width(), self.frame.height())?;
        {
            let ctx = raster.context()?;
            self.paint(&ctx)?;
        }
        raster.surface().flush();
        Ok(raster)
    }

    /// Color of the composed frame at `point`, or `None` off the canvas.
    ///
    /// Samples the frame rather than the texture, so anything drawn during
    /// composition can be picked. The result is always opaque.
    pub fn pick_color_at(&self, point: Point) -> Result<Option<Color>, RasterError> {
        Ok(self
            .frame
            .color_at(point.x, point.y)?
            .map(|color| color.opaque()))
    }
}
