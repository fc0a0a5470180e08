// Window operations the palette requests, expressed on the layer surface:
// placement through margins, shaping through the input region.
use std::io::Write;

use log::{debug, info, warn};
use popuppalette::{
    draw::Mask,
    host::WindowHandle,
    util::Point,
    window::{CursorStyle, PopupWindow},
};
use smithay_client_toolkit::{compositor::Region, shell::WaylandSurface};

use super::state::WaylandState;
use crate::notification;

impl PopupWindow for WaylandState {
    fn is_visible(&self) -> bool {
        self.visible
    }

    fn show(&mut self) {
        self.visible = true;
        self.needs_redraw = true;
    }

    fn hide(&mut self) {
        self.visible = false;
        if let Some(layer_surface) = self.surface.layer_surface() {
            let wl_surface = layer_surface.wl_surface();
            wl_surface.attach(None, 0, 0);
            wl_surface.commit();
        }
    }

    fn move_to(&mut self, position: Point) {
        self.origin = position;
        if let Some(layer_surface) = self.surface.layer_surface() {
            layer_surface.set_margin(position.y, 0, 0, position.x);
            layer_surface.commit();
        }
    }

    fn position(&self) -> Point {
        self.origin
    }

    fn set_parent(&mut self, parent: Option<WindowHandle>) {
        debug!("Layer surfaces have no parent window, ignoring {:?}", parent);
    }

    fn parent(&self) -> Option<WindowHandle> {
        None
    }

    fn set_mask(&mut self, mask: &Mask) {
        self.mask_rects = mask.rects();
        let Some(layer_surface) = self.surface.layer_surface() else {
            return;
        };
        let region = match Region::new(&self.compositor_state) {
            Ok(region) => region,
            Err(err) => {
                warn!("Failed to create input region: {}", err);
                return;
            }
        };
        for rect in &self.mask_rects {
            region.add(rect.x, rect.y, rect.width, rect.height);
        }
        let wl_surface = layer_surface.wl_surface();
        wl_surface.set_input_region(Some(region.wl_region()));
        wl_surface.commit();
        debug!("Input region set from {} mask rectangles", self.mask_rects.len());
    }

    fn activate(&mut self) {
        // Overlay layer surfaces are always on top.
    }

    fn set_focus(&mut self) {
        // Keyboard focus follows the pointer with on-demand interactivity.
    }

    fn cursor_position(&self) -> Point {
        self.origin + self.pointer_local
    }

    fn set_cursor(&mut self, cursor: CursorStyle) {
        match cursor {
            CursorStyle::Palette => {
                let (Some(pointer), Some(serial), Some(image)) = (
                    self.pointer.as_ref(),
                    self.pointer_enter_serial,
                    self.cursor_surface.as_ref(),
                ) else {
                    debug!("Palette cursor unavailable");
                    return;
                };
                pointer.set_cursor(serial, Some(image.wl_surface()), 0, 0);
            }
            CursorStyle::Default => {
                // The compositor restores its own cursor once the pointer leaves.
                debug!("Pointer left palette, default cursor");
            }
        }
    }

    fn beep(&mut self) {
        let mut stdout = std::io::stdout();
        if let Err(err) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
            debug!("Failed to ring terminal bell: {}", err);
        }
    }

    fn show_message(&mut self, title: &str, body: &str) {
        info!("{}: {}", title, body);
        notification::send_notification_async(
            &self.tokio_handle,
            title.to_string(),
            body.to_string(),
            Some("dialog-information".to_string()),
        );
    }

    fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }
}
