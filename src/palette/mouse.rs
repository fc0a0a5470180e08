use log::debug;

use crate::input::{MouseButton, PointerPosition};
use crate::window::CursorStyle;

use super::actions::log_failure;
use super::layout::{self, PaletteButton, READOUT_BOX};
use super::menu::ContextMenu;
use super::{PaletteRequest, PaletteWidget};

impl PaletteWidget {
    /// Handles a mouse button press.
    ///
    /// Left picks the foreground color and right the background color from
    /// the composed frame. Middle starts dragging the window. Buttons drawn
    /// over the frame take precedence over picking.
    pub fn on_pointer_press(&mut self, button: MouseButton, position: PointerPosition) {
        let local = position.local;

        if let Some(menu) = self.menu.take() {
            let chosen = menu.item_at(local).filter(|_| button == MouseButton::Left);
            if let Some(action) = chosen {
                let result = self.apply_texture_action(action);
                log_failure(result, "texture action");
            }
            self.request(PaletteRequest::Redraw);
            return;
        }

        match button {
            MouseButton::Back | MouseButton::Forward => {
                debug!("Side button {:?} pressed", button);
                self.request(PaletteRequest::Beep);
                return;
            }
            MouseButton::Middle => {
                self.drag_offset = Some(local);
                debug!("Drag started at offset ({}, {})", local.x, local.y);
                return;
            }
            MouseButton::Left | MouseButton::Right => {}
        }

        if !self.assets.mask.contains(local) {
            debug!("Ignoring press outside palette mask at ({}, {})", local.x, local.y);
            return;
        }

        match (layout::button_at(local), button) {
            (Some(pressed), MouseButton::Left) if pressed.acts_on_press() => {
                self.activate_button(pressed);
                return;
            }
            (Some(pressed), MouseButton::Left) => {
                self.pressed_button = Some(pressed);
                return;
            }
            (Some(PaletteButton::Large), MouseButton::Right) => {
                self.menu = Some(ContextMenu::open_at(local));
                self.request(PaletteRequest::Redraw);
                return;
            }
            _ => {}
        }

        if READOUT_BOX.contains(local) {
            return;
        }

        let color = match self.pick_color_at(local) {
            Ok(Some(color)) => color,
            Ok(None) => return,
            Err(err) => {
                log::warn!("Failed to sample palette at ({}, {}): {}", local.x, local.y, err);
                return;
            }
        };

        debug!(
            "Picked {} at ({}, {}) with {:?}",
            color.to_hex(),
            local.x,
            local.y,
            button
        );
        if button == MouseButton::Left {
            self.foreground = color;
            self.request(PaletteRequest::PushForeground(color));
        } else {
            self.background = color;
            self.request(PaletteRequest::PushBackground(color));
        }
        let result = self.refresh();
        log_failure(result, "color pick");
    }

    /// Updates the coordinate readout and moves the window while dragging.
    pub fn on_pointer_motion(&mut self, position: PointerPosition) {
        let local = position.local;
        self.readout = format!("x = {}, y = {}", local.x, local.y);
        self.request(PaletteRequest::Redraw);

        if let Some(offset) = self.drag_offset {
            self.request(PaletteRequest::MoveWindow(position.global - offset));
        }
    }

    /// Ends a drag or completes a button click.
    pub fn on_pointer_release(&mut self, button: MouseButton, position: PointerPosition) {
        match button {
            MouseButton::Middle => {
                if self.drag_offset.take().is_some() {
                    debug!("Drag ended");
                }
            }
            MouseButton::Left => {
                let Some(pressed) = self.pressed_button.take() else {
                    return;
                };
                if layout::button_at(position.local) == Some(pressed) {
                    self.activate_button(pressed);
                }
            }
            _ => {}
        }
    }

    pub fn on_pointer_enter(&mut self) {
        self.hovered = true;
        self.request(PaletteRequest::SetCursor(CursorStyle::Palette));
        self.request(PaletteRequest::Redraw);
    }

    pub fn on_pointer_leave(&mut self) {
        self.hovered = false;
        self.pressed_button = None;
        self.request(PaletteRequest::SetCursor(CursorStyle::Default));
        self.request(PaletteRequest::Redraw);
    }
}
