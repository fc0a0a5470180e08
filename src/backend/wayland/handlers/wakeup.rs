// Receives the `wl_display.sync` reply the signal thread requests, which wakes
// a blocked dispatch so the main loop can notice a pending exit.
use log::debug;
use wayland_client::{Connection, Dispatch, QueueHandle, protocol::wl_callback};

use super::super::state::WaylandState;

impl Dispatch<wl_callback::WlCallback, ()> for WaylandState {
    fn event(
        _state: &mut Self,
        _proxy: &wl_callback::WlCallback,
        event: wl_callback::Event,
        _data: &(),
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
    ) {
        if let wl_callback::Event::Done { .. } = event {
            debug!("Wakeup callback received");
        }
    }
}
