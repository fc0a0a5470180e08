use anyhow::Context;
use clap::Parser;
use popuppalette::{Config, palette::PaletteWidget};

mod backend;
mod notification;

#[derive(Parser, Debug)]
#[command(name = "popuppalette")]
#[command(
    version,
    about = "Popup colour palette for painting on Wayland compositors",
    long_about = "Shows a 512x512 colour palette overlay. Left click picks the foreground \
                  colour, right click the background colour, middle drag moves the palette."
)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let _cli = Cli::parse();

    if std::env::var("WAYLAND_DISPLAY").is_err() {
        log::error!("WAYLAND_DISPLAY not set - this application requires Wayland.");
        log::error!("Please run on a Wayland compositor (Hyprland, Sway, etc.).");
        return Err(anyhow::anyhow!("Wayland environment required"));
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Failed to load config: {:#}. Using defaults.", e);
            Config::default()
        }
    };

    let widget = PaletteWidget::from_config(&config).context("Failed to create palette")?;

    log::info!("Starting popup palette...");
    log::info!("Controls:");
    log::info!("  - Left click: pick foreground colour");
    log::info!("  - Right click: pick background colour");
    log::info!("  - Middle drag: move the palette");
    log::info!("  - Right click on the texture button: texture menu");
    log::info!("");

    backend::run_wayland(config, widget)?;

    log::info!("Palette closed.");
    Ok(())
}
