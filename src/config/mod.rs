//! Configuration file support for popuppalette.
//!
//! Settings are loaded from `~/.config/popuppalette/config.toml`. A missing
//! file means defaults; out-of-range values are clamped with a warning.

pub mod enums;
pub mod keybindings;
pub mod types;

pub use enums::ColorSpec;
pub use keybindings::{Action, ActionMap, KeyBinding, KeybindingsConfig};
pub use types::{AssetsConfig, PaletteConfig, PopupConfig, ReadoutConfig, SessionConfig};

use crate::draw::{Color, ReadoutFont, color::*};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure.
///
/// # Example TOML
/// ```toml
/// [assets]
/// directory = "/usr/share/popuppalette/images"
///
/// [palette]
/// initial_foreground = "white"
/// initial_background = [0, 0, 0]
///
/// [popup]
/// cursor_hotspot_offset = 24
///
/// [keybindings]
/// toggle_canvas_only = ["Tab"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Image asset locations
    #[serde(default)]
    pub assets: AssetsConfig,

    /// Initial foreground/background colors
    #[serde(default)]
    pub palette: PaletteConfig,

    /// Placement and host action registration
    #[serde(default)]
    pub popup: PopupConfig,

    /// Coordinate readout font
    #[serde(default)]
    pub readout: ReadoutConfig,

    /// Shutdown marker file
    #[serde(default)]
    pub session: SessionConfig,

    /// Keyboard shortcuts
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps values to acceptable ranges.
    ///
    /// Validated ranges:
    /// - `popup.cursor_hotspot_offset`: 0 - 128
    /// - `readout.font_size`: 8.0 - 32.0
    /// - `readout.font_style`: normal, italic, oblique
    fn validate_and_clamp(&mut self) {
        if !(0..=128).contains(&self.popup.cursor_hotspot_offset) {
            log::warn!(
                "Invalid cursor_hotspot_offset {}, clamping to 0-128 range",
                self.popup.cursor_hotspot_offset
            );
            self.popup.cursor_hotspot_offset = self.popup.cursor_hotspot_offset.clamp(0, 128);
        }

        if !(8.0..=32.0).contains(&self.readout.font_size) {
            log::warn!(
                "Invalid readout font_size {:.1}, clamping to 8.0-32.0 range",
                self.readout.font_size
            );
            self.readout.font_size = if self.readout.font_size.is_nan() {
                11.0
            } else {
                self.readout.font_size.clamp(8.0, 32.0)
            };
        }

        if !matches!(
            self.readout.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            log::warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.readout.font_style
            );
            self.readout.font_style = "normal".to_string();
        }

        if self.popup.action_name.trim().is_empty() {
            log::warn!("Empty popup action_name, falling back to 'showpopuppalette'");
            self.popup.action_name = "showpopuppalette".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("popuppalette");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or defaults if absent.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Loads configuration from `config_path`, or defaults if the file does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from_path(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Writes the configuration as TOML to `config_path`, creating parent directories.
    pub fn save_to_path(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Initial foreground color, white when the configured value is unknown.
    pub fn initial_foreground(&self) -> Color {
        self.palette.initial_foreground.to_color_or(WHITE)
    }

    /// Initial background color, black when the configured value is unknown.
    pub fn initial_background(&self) -> Color {
        self.palette.initial_background.to_color_or(BLACK)
    }

    /// Font for the coordinate readout.
    pub fn readout_font(&self) -> ReadoutFont {
        ReadoutFont {
            family: self.readout.font_family.clone(),
            weight: self.readout.font_weight.clone(),
            style: self.readout.font_style.clone(),
            size: self.readout.font_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from_path(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.popup.cursor_hotspot_offset, 24);
        assert_eq!(config.popup.action_name, "showpopuppalette");
        assert_eq!(config.assets.texture, "colorwheel_pixel_palette.png");
        assert_eq!(config.initial_foreground(), WHITE);
        assert_eq!(config.initial_background(), BLACK);
    }

    #[test]
    fn partial_file_keeps_other_defaults_and_clamps() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r##"
[palette]
initial_foreground = "#FF8000"

[popup]
cursor_hotspot_offset = 500

[readout]
font_size = 2.0
font_style = "wavy"

[keybindings]
exit = ["Escape"]
"##,
        )
        .unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.initial_foreground().to_rgba8(), [255, 128, 0, 255]);
        assert_eq!(config.initial_background(), BLACK);
        assert_eq!(config.popup.cursor_hotspot_offset, 128);
        assert_eq!(config.readout.font_size, 8.0);
        assert_eq!(config.readout.font_style, "normal");
        assert_eq!(config.keybindings.exit, vec!["Escape".to_string()]);
        assert_eq!(config.keybindings.toggle_canvas_only, vec!["Tab".to_string()]);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[palette\n").unwrap();
        let err = Config::load_from_path(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.popup.toggle_shortcut = Some("Ctrl+Shift+P".to_string());
        config.palette.initial_background = ColorSpec::Rgb([10, 20, 30]);
        config.save_to_path(&path).unwrap();

        let loaded = Config::load_from_path(&path).unwrap();
        assert_eq!(loaded.popup.toggle_shortcut.as_deref(), Some("Ctrl+Shift+P"));
        assert_eq!(loaded.initial_background().to_rgba8(), [10, 20, 30, 255]);
    }

    #[test]
    fn schema_lists_top_level_sections() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        for section in ["assets", "palette", "popup", "readout", "session", "keybindings"] {
            assert!(properties.contains_key(section), "missing {section}");
        }
    }
}
