// Standalone Wayland window for the palette: a 512x512 wlr-layer-shell overlay
// whose input region follows the palette mask.
mod backend;
mod handlers;
mod state;
mod surface;
mod window;

pub use backend::WaylandBackend;
