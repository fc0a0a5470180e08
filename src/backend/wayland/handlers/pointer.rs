// Feeds pointer events (enter/leave/motion/buttons) into the palette widget.
use log::debug;
use popuppalette::input::MouseButton;
use smithay_client_toolkit::seat::pointer::{
    BTN_LEFT, BTN_MIDDLE, BTN_RIGHT, PointerEvent, PointerEventKind, PointerHandler,
};
use wayland_client::{Connection, QueueHandle, protocol::wl_pointer};

use super::super::state::WaylandState;

// linux/input-event-codes.h
const BTN_SIDE: u32 = 0x113;
const BTN_EXTRA: u32 = 0x114;

fn map_button(button: u32) -> Option<MouseButton> {
    match button {
        BTN_LEFT => Some(MouseButton::Left),
        BTN_RIGHT => Some(MouseButton::Right),
        BTN_MIDDLE => Some(MouseButton::Middle),
        BTN_SIDE => Some(MouseButton::Back),
        BTN_EXTRA => Some(MouseButton::Forward),
        _ => None,
    }
}

impl PointerHandler for WaylandState {
    fn pointer_frame(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        pointer: &wl_pointer::WlPointer,
        events: &[PointerEvent],
    ) {
        for event in events {
            let position = self.pointer_position(event.position);
            match event.kind {
                PointerEventKind::Enter { serial } => {
                    debug!(
                        "Pointer entered at ({}, {})",
                        event.position.0, event.position.1
                    );
                    self.pointer = Some(pointer.clone());
                    self.pointer_enter_serial = Some(serial);
                    self.widget.on_pointer_enter();
                }
                PointerEventKind::Leave { .. } => {
                    debug!("Pointer left surface");
                    self.pointer_enter_serial = None;
                    self.widget.on_pointer_leave();
                }
                PointerEventKind::Motion { .. } => {
                    self.widget.on_pointer_motion(position);
                }
                PointerEventKind::Press { button, .. } => {
                    debug!(
                        "Button {} pressed at ({}, {})",
                        button, event.position.0, event.position.1
                    );
                    let Some(mb) = map_button(button) else {
                        continue;
                    };
                    self.widget.on_pointer_press(mb, position);
                }
                PointerEventKind::Release { button, .. } => {
                    debug!("Button {} released", button);
                    let Some(mb) = map_button(button) else {
                        continue;
                    };
                    self.widget.on_pointer_release(mb, position);
                }
                PointerEventKind::Axis { .. } => {}
            }
            self.flush_requests();
        }
    }
}
