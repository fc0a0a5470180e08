//! Library exports for the popup palette.
//!
//! The palette widget, its configuration and the host/window seams are
//! shared between the standalone binary and host integrations, which drive
//! the widget through [`extension::PopupPaletteExtension`].

pub mod config;
pub mod draw;
pub mod extension;
pub mod host;
pub mod input;
pub mod palette;
pub mod session;
pub mod util;
pub mod window;

pub use config::Config;
