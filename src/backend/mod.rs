use anyhow::Result;
use popuppalette::{Config, palette::PaletteWidget};

pub mod wayland;

/// Runs the standalone palette until it is closed.
///
/// # Arguments
/// * `config` - Loaded configuration (placement, keybindings, session)
/// * `widget` - Palette built from the same configuration
pub fn run_wayland(config: Config, widget: PaletteWidget) -> Result<()> {
    let mut backend = wayland::WaylandBackend::new(config)?;
    backend.run(widget)
}
