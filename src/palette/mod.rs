//! The popup palette widget.
//!
//! [`PaletteWidget`] owns the texture, the foreground/background colors and
//! the composed frame. The frame is recomposed eagerly after every change
//! that affects it, so painting and color picking always see the same
//! pixels. Input handlers live in the `mouse` and `keyboard` submodules;
//! side effects are queued as [`PaletteRequest`]s for the driver.

mod actions;
mod assets;
mod compose;
mod keyboard;
pub mod layout;
mod menu;
mod mouse;
mod requests;

pub use assets::{AssetError, PaletteAssets};
pub use layout::{CANVAS_SIZE, PaletteButton};
pub use menu::{ContextMenu, TextureAction};
pub use requests::{PaletteMessage, PaletteRequest};

use anyhow::{Context, Result};
use log::info;

use crate::config::{ActionMap, Config, KeybindingsConfig};
use crate::draw::{Color, Mask, Raster, RasterError, ReadoutFont, color::*};
use crate::session::SessionOptions;
use crate::util::Point;

/// Construction-time settings that do not come from image files.
#[derive(Debug, Clone)]
pub struct PaletteOptions {
    pub foreground: Color,
    pub background: Color,
    pub readout_font: ReadoutFont,
    pub actions: ActionMap,
    pub session: SessionOptions,
}

impl PaletteOptions {
    /// Defaults (white on black, default keybindings) with the given session options.
    pub fn new(session: SessionOptions) -> Self {
        Self {
            foreground: WHITE,
            background: BLACK,
            readout_font: ReadoutFont::default(),
            actions: KeybindingsConfig::default()
                .build_action_map()
                .expect("default keybindings are free of duplicates"),
            session,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let actions = config
            .keybindings
            .build_action_map()
            .map_err(anyhow::Error::msg)
            .context("Invalid keybindings")?;
        Ok(Self {
            foreground: config.initial_foreground(),
            background: config.initial_background(),
            readout_font: config.readout_font(),
            actions,
            session: SessionOptions::from_config(&config.session),
        })
    }
}

/// Popup color palette: state, composition and input handling.
pub struct PaletteWidget {
    assets: PaletteAssets,
    foreground: Color,
    background: Color,
    frame: Raster,
    /// Pointer offset from the window origin while middle-dragging
    drag_offset: Option<Point>,
    pressed_button: Option<PaletteButton>,
    hovered: bool,
    readout: String,
    menu: Option<ContextMenu>,
    readout_font: ReadoutFont,
    actions: ActionMap,
    session: SessionOptions,
    requests: Vec<PaletteRequest>,
}

impl PaletteWidget {
    /// Builds the widget and composes its first frame.
    pub fn new(assets: PaletteAssets, options: PaletteOptions) -> Result<Self, RasterError> {
        let frame = Raster::new(CANVAS_SIZE, CANVAS_SIZE)?;
        let mut widget = Self {
            assets,
            foreground: options.foreground.quantized(),
            background: options.background.quantized(),
            frame,
            drag_offset: None,
            pressed_button: None,
            hovered: false,
            readout: "x = 0, y = 0".to_string(),
            menu: None,
            readout_font: options.readout_font,
            actions: options.actions,
            session: options.session,
            requests: Vec::new(),
        };
        widget.recompose()?;
        info!(
            "Palette widget created ({} visible mask pixels, fg {}, bg {})",
            widget.assets.mask.visible_count(),
            widget.foreground.to_hex(),
            widget.background.to_hex()
        );
        Ok(widget)
    }

    /// Loads assets and options from `config` and builds the widget.
    pub fn from_config(config: &Config) -> Result<Self> {
        let assets = PaletteAssets::load(&config.assets).context("Failed to load palette assets")?;
        let options = PaletteOptions::from_config(config)?;
        Self::new(assets, options).context("Failed to compose palette frame")
    }

    pub fn foreground(&self) -> Color {
        self.foreground
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn texture(&self) -> &Raster {
        &self.assets.texture
    }

    /// Composed frame: texture, gradient, icons and swatches.
    pub fn frame(&self) -> &Raster {
        &self.frame
    }

    pub fn mask(&self) -> &Mask {
        &self.assets.mask
    }

    /// Pointer glyph shown while hovering.
    pub fn cursor_image(&self) -> &Raster {
        &self.assets.cursor
    }

    /// Text of the coordinate readout.
    pub fn readout(&self) -> &str {
        &self.readout
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_offset.is_some()
    }

    pub fn context_menu(&self) -> Option<&ContextMenu> {
        self.menu.as_ref()
    }

    /// Drains the queued side effects in the order they were requested.
    pub fn take_requests(&mut self) -> Vec<PaletteRequest> {
        std::mem::take(&mut self.requests)
    }

    fn request(&mut self, request: PaletteRequest) {
        if request == PaletteRequest::Redraw && self.requests.contains(&request) {
            return;
        }
        self.requests.push(request);
    }

    /// Recomposes the frame and queues a repaint.
    fn refresh(&mut self) -> Result<(), RasterError> {
        self.recompose()?;
        self.request(PaletteRequest::Redraw);
        Ok(())
    }
}

impl Drop for PaletteWidget {
    fn drop(&mut self) {
        info!("Palette widget dropped");
    }
}

#[cfg(test)]
pub(crate) mod testing;
#[cfg(test)]
mod tests;
