//! Windowing abstraction for the popup.
//!
//! The palette only needs a handful of window capabilities; each driver
//! (the host plugin, the standalone Wayland backend, test doubles)
//! implements [`PopupWindow`] over its own toolkit.

use log::debug;

use crate::draw::Mask;
use crate::host::{AppInfo, Host, WindowHandle};
use crate::palette::PaletteRequest;
use crate::util::Point;

/// Pointer cursor shown over the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    /// System default arrow
    #[default]
    Default,
    /// The palette's own cursor image
    Palette,
}

/// A frameless, always-on-top, translucent top-level window.
pub trait PopupWindow {
    fn is_visible(&self) -> bool;
    fn show(&mut self);
    fn hide(&mut self);

    /// Moves the window's top-left corner to `position` in global coordinates.
    fn move_to(&mut self, position: Point);
    fn position(&self) -> Point;

    /// Attaches the window to a host window, or detaches it with `None`.
    fn set_parent(&mut self, parent: Option<WindowHandle>);
    fn parent(&self) -> Option<WindowHandle>;

    /// Restricts the visible and clickable area to the mask.
    fn set_mask(&mut self, mask: &Mask);

    /// Raises the window above its siblings.
    fn activate(&mut self);
    fn set_focus(&mut self);

    /// Global pointer position.
    fn cursor_position(&self) -> Point;
    fn set_cursor(&mut self, cursor: CursorStyle);
    fn beep(&mut self);
    fn show_message(&mut self, title: &str, body: &str);
    fn request_redraw(&mut self);
}

/// What the driver must still do after dispatching requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub close_requested: bool,
}

/// Delivers queued palette requests to the window and, when present, the host.
///
/// Requests that need a host are skipped when `host` is `None`, and
/// standalone-only requests are skipped when it is `Some`. `Close` is
/// not acted on here; it is reported in the outcome since hiding and exiting
/// are the driver's decision.
pub fn dispatch_requests<W: PopupWindow + ?Sized>(
    requests: Vec<PaletteRequest>,
    window: &mut W,
    mut host: Option<&mut dyn Host>,
    app: &AppInfo,
) -> DispatchOutcome {
    let mut outcome = DispatchOutcome::default();

    for request in requests {
        if request.needs_host() && host.is_none() {
            debug!("No host present, dropping {:?}", request);
            continue;
        }
        if request.standalone_only() && host.is_some() {
            debug!("Hosted popup, dropping {:?}", request);
            continue;
        }

        match request {
            PaletteRequest::PushForeground(color) => {
                if let Some(host) = host.as_deref_mut() {
                    host.set_foreground_color(color);
                }
            }
            PaletteRequest::PushBackground(color) => {
                if let Some(host) = host.as_deref_mut() {
                    host.set_background_color(color);
                }
            }
            PaletteRequest::TriggerHostAction(action) => {
                if let Some(host) = host.as_deref_mut() {
                    debug!("Triggering host action {}", action.name());
                    host.trigger_action(action.name());
                }
            }
            PaletteRequest::Beep => window.beep(),
            PaletteRequest::ShowMessage(message) => {
                window.show_message(message.title(), &message.body(app));
            }
            PaletteRequest::SetCursor(cursor) => window.set_cursor(cursor),
            PaletteRequest::MoveWindow(position) => window.move_to(position),
            PaletteRequest::Redraw => window.request_redraw(),
            PaletteRequest::Close => outcome.close_requested = true,
        }
    }

    outcome
}
