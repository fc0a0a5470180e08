//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Image asset locations.
///
/// File names are resolved relative to `directory`. Every asset must exist;
/// the palette refuses to start when one is missing.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AssetsConfig {
    /// Directory holding the palette images
    /// (default: `$XDG_DATA_HOME/popuppalette/images`)
    #[serde(default = "default_asset_directory")]
    pub directory: PathBuf,

    /// 512x512 color wheel texture that colors are picked from
    #[serde(default = "default_texture")]
    pub texture: String,

    /// 512x512 black/white bitmap shaping the window (black = visible)
    #[serde(default = "default_mask")]
    pub mask: String,

    /// 16x16 swap-colors icon
    #[serde(default = "default_swap_icon")]
    pub swap_icon: String,

    /// 10x10 default-colors icon
    #[serde(default = "default_reset_icon")]
    pub reset_icon: String,

    /// 28x28 frame drawn over each color swatch
    #[serde(default = "default_color_box")]
    pub color_box: String,

    /// Pointer glyph shown while hovering the palette
    #[serde(default = "default_cursor")]
    pub cursor: String,

    /// 128x128 icon for the large center button
    #[serde(default = "default_large_button")]
    pub large_button: String,

    /// 32x32 icon for the four small buttons
    #[serde(default = "default_small_button")]
    pub small_button: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            directory: default_asset_directory(),
            texture: default_texture(),
            mask: default_mask(),
            swap_icon: default_swap_icon(),
            reset_icon: default_reset_icon(),
            color_box: default_color_box(),
            cursor: default_cursor(),
            large_button: default_large_button(),
            small_button: default_small_button(),
        }
    }
}

/// Initial color state of the palette.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PaletteConfig {
    /// Foreground color when the palette is created
    #[serde(default = "default_foreground")]
    pub initial_foreground: ColorSpec,

    /// Background color when the palette is created
    #[serde(default = "default_background")]
    pub initial_background: ColorSpec,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            initial_foreground: default_foreground(),
            initial_background: default_background(),
        }
    }
}

/// Popup placement and host registration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PopupConfig {
    /// Extra upward shift when centering on the pointer, so the pointer
    /// glyph does not cover the palette center (valid range: 0 - 128)
    #[serde(default = "default_cursor_hotspot_offset")]
    pub cursor_hotspot_offset: i32,

    /// Shortcut registered with the host's toggle action. Unset leaves the
    /// choice to the host's own shortcut settings.
    #[serde(default)]
    pub toggle_shortcut: Option<String>,

    /// Internal name of the toggle action registered with the host
    #[serde(default = "default_action_name")]
    pub action_name: String,

    /// Human-readable label of the toggle action
    #[serde(default = "default_action_label")]
    pub action_label: String,

    /// Screen position of the standalone window's top-left corner
    #[serde(default)]
    pub standalone_position: [i32; 2],
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            cursor_hotspot_offset: default_cursor_hotspot_offset(),
            toggle_shortcut: None,
            action_name: default_action_name(),
            action_label: default_action_label(),
            standalone_position: [0, 0],
        }
    }
}

/// Coordinate readout text styling.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReadoutConfig {
    /// Font family name (e.g., "Sans", "Monospace")
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold", or 100-900)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style ("normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,

    /// Font size in points (valid range: 8.0 - 32.0)
    #[serde(default = "default_font_size")]
    pub font_size: f64,
}

impl Default for ReadoutConfig {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
            font_size: default_font_size(),
        }
    }
}

/// Shutdown persistence.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SessionConfig {
    /// File overwritten with the clean-shutdown marker
    /// (default: `$XDG_DATA_HOME/popuppalette/test.txt`)
    #[serde(default = "default_marker_file")]
    pub marker_file: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            marker_file: default_marker_file(),
        }
    }
}

fn data_home() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("popuppalette")
}

fn default_asset_directory() -> PathBuf {
    data_home().join("images")
}

fn default_texture() -> String {
    "colorwheel_pixel_palette.png".to_string()
}

fn default_mask() -> String {
    "pixel_palette_mask512.png".to_string()
}

fn default_swap_icon() -> String {
    "switcharrows16.png".to_string()
}

fn default_reset_icon() -> String {
    "defaultblackwhite10.png".to_string()
}

fn default_color_box() -> String {
    "colorbox28.png".to_string()
}

fn default_cursor() -> String {
    "paperairplane_arrow_white24.png".to_string()
}

fn default_large_button() -> String {
    "button128.png".to_string()
}

fn default_small_button() -> String {
    "button32.png".to_string()
}

fn default_foreground() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_cursor_hotspot_offset() -> i32 {
    24
}

fn default_action_name() -> String {
    "showpopuppalette".to_string()
}

fn default_action_label() -> String {
    "Popup Palette".to_string()
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_weight() -> String {
    "normal".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}

fn default_font_size() -> f64 {
    11.0
}

fn default_marker_file() -> PathBuf {
    data_home().join("test.txt")
}
