//! Image assets loaded once when the palette is built.

use std::path::PathBuf;

use log::{debug, info};
use thiserror::Error;

use crate::config::AssetsConfig;
use crate::draw::{Mask, Raster, RasterError};

use super::layout::CANVAS_SIZE;

/// Failure to load one of the palette images.
///
/// There is no placeholder rendering; any of these aborts construction.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("palette asset '{name}' not found at {path}")]
    Missing { name: &'static str, path: PathBuf },

    #[error("failed to load palette asset '{name}': {source}")]
    Load {
        name: &'static str,
        #[source]
        source: RasterError,
    },

    #[error("palette asset '{name}' is {width}x{height}, expected {expected}x{expected}")]
    WrongSize {
        name: &'static str,
        width: i32,
        height: i32,
        expected: i32,
    },
}

/// Every raster the palette draws with.
///
/// The texture is the only asset mutated after loading (invert/mirror).
#[derive(Debug)]
pub struct PaletteAssets {
    /// Color wheel picked from, `CANVAS_SIZE` square
    pub texture: Raster,
    /// Window silhouette, `CANVAS_SIZE` square
    pub mask: Mask,
    pub swap_icon: Raster,
    pub reset_icon: Raster,
    /// Frame drawn over each swatch
    pub color_box: Raster,
    /// Pointer glyph for hovering, hotspot at its top-left pixel
    pub cursor: Raster,
    pub large_button: Raster,
    pub small_button: Raster,
}

impl PaletteAssets {
    /// Loads all assets named in `config` from its directory.
    pub fn load(config: &AssetsConfig) -> Result<Self, AssetError> {
        info!("Loading palette assets from {}", config.directory.display());

        let load = |name: &'static str, file: &str| -> Result<Raster, AssetError> {
            let path = config.directory.join(file);
            if !path.is_file() {
                return Err(AssetError::Missing { name, path });
            }
            let raster =
                Raster::load_png(&path).map_err(|source| AssetError::Load { name, source })?;
            debug!(
                "Loaded {} ({}x{}) from {}",
                name,
                raster.width(),
                raster.height(),
                path.display()
            );
            Ok(raster)
        };

        let texture = require_canvas_size("texture", load("texture", &config.texture)?)?;
        let mask_source = require_canvas_size("mask", load("mask", &config.mask)?)?;
        let mask = Mask::from_raster(&mask_source)
            .map_err(|source| AssetError::Load { name: "mask", source })?;

        Ok(Self {
            texture,
            mask,
            swap_icon: load("swap_icon", &config.swap_icon)?,
            reset_icon: load("reset_icon", &config.reset_icon)?,
            color_box: load("color_box", &config.color_box)?,
            cursor: load("cursor", &config.cursor)?,
            large_button: load("large_button", &config.large_button)?,
            small_button: load("small_button", &config.small_button)?,
        })
    }
}

fn require_canvas_size(name: &'static str, raster: Raster) -> Result<Raster, AssetError> {
    if raster.width() != CANVAS_SIZE || raster.height() != CANVAS_SIZE {
        return Err(AssetError::WrongSize {
            name,
            width: raster.width(),
            height: raster.height(),
            expected: CANVAS_SIZE,
        });
    }
    Ok(raster)
}
