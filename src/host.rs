//! Interface to the painting application hosting the palette.
//!
//! The host is opaque: the palette registers one toggle action, looks up a
//! few of the host's own actions, and pushes colors. It never reads color
//! state back, so host and palette colors can drift when changed elsewhere.

use crate::draw::Color;

/// Handle to an action registered with (or owned by) the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionId(pub u64);

/// Handle to a host top-level window, used only as a parent for the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub u64);

/// Host actions the palette triggers by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostAction {
    /// Toggle the distraction-free canvas-only view
    ShowCanvasOnly,
    RotateCanvasLeft,
    RotateCanvasRight,
}

impl HostAction {
    /// Name of the action in the host's action registry.
    pub fn name(self) -> &'static str {
        match self {
            HostAction::ShowCanvasOnly => "view_show_canvas_only",
            HostAction::RotateCanvasLeft => "rotate_canvas_left",
            HostAction::RotateCanvasRight => "rotate_canvas_right",
        }
    }
}

/// Events the host delivers to the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// A registered or subscribed action fired
    ActionTriggered(ActionId),
    /// The host is about to tear down; nothing may be deferred past this
    AboutToQuit,
}

/// Name and version of whatever application is showing the palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
}

impl AppInfo {
    /// Identity of this crate, used when no host is present.
    pub fn standalone() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: format!(
                "{} ({})",
                env!("CARGO_PKG_VERSION"),
                env!("POPUPPALETTE_GIT_HASH")
            ),
        }
    }
}

/// Services the host application provides to the palette.
///
/// Color setters are fire-and-forget. Action registration is idempotent on
/// the host side: registering a name twice returns the existing action.
pub trait Host {
    /// Registers a named action with an optional keyboard shortcut.
    fn create_action(&mut self, name: &str, label: &str, shortcut: Option<&str>) -> ActionId;

    /// Looks up an existing action by name.
    fn find_action(&self, name: &str) -> Option<ActionId>;

    /// Triggers an existing host action by name. Unknown names are ignored.
    fn trigger_action(&mut self, name: &str);

    /// Currently active main window, if any.
    fn active_window(&self) -> Option<WindowHandle>;

    fn set_foreground_color(&mut self, color: Color);

    fn set_background_color(&mut self, color: Color);

    /// Name and version of the host application.
    fn app_info(&self) -> AppInfo;
}
