// Coordinates backend startup/shutdown and drives the event loop while delegating
// rendering & protocol state to `WaylandState` and its handler modules.
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::thread;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use popuppalette::{
    Config,
    palette::{CANVAS_SIZE, PaletteWidget},
    util::Point,
    window::PopupWindow,
};
use signal_hook::{
    consts::signal::{SIGINT, SIGTERM},
    iterator::Signals,
};
use smithay_client_toolkit::{
    compositor::CompositorState,
    output::OutputState,
    registry::RegistryState,
    seat::SeatState,
    shell::{
        WaylandSurface,
        wlr_layer::{Anchor, KeyboardInteractivity, Layer, LayerShell},
    },
    shm::Shm,
};
use wayland_client::{Connection, globals::registry_queue_init};

use super::{state::WaylandState, surface::CursorSurface};

const MAX_RENDER_FAILURES: u32 = 10;

/// Wayland backend state
pub struct WaylandBackend {
    config: Config,
    /// Tokio runtime for desktop notifications
    tokio_runtime: tokio::runtime::Runtime,
}

impl WaylandBackend {
    pub fn new(config: Config) -> Result<Self> {
        let tokio_runtime = tokio::runtime::Runtime::new()
            .context("Failed to create Tokio runtime for notifications")?;
        Ok(Self {
            config,
            tokio_runtime,
        })
    }

    pub fn run(&mut self, widget: PaletteWidget) -> Result<()> {
        info!("Starting Wayland backend");

        let conn =
            Connection::connect_to_env().context("Failed to connect to Wayland compositor")?;
        debug!("Connected to Wayland display");

        let (globals, mut event_queue) =
            registry_queue_init(&conn).context("Failed to initialize Wayland registry")?;
        let qh = event_queue.handle();

        let compositor_state =
            CompositorState::bind(&globals, &qh).context("wl_compositor not available")?;
        debug!("Bound compositor");

        let layer_shell =
            LayerShell::bind(&globals, &qh).context("zwlr_layer_shell_v1 not available")?;
        debug!("Bound layer shell");

        let shm = Shm::bind(&globals, &qh).context("wl_shm not available")?;
        debug!("Bound shared memory");

        let output_state = OutputState::new(&globals, &qh);
        let seat_state = SeatState::new(&globals, &qh);
        let registry_state = RegistryState::new(&globals);

        let [x, y] = self.config.popup.standalone_position;
        let origin = Point::new(x, y);

        let mut state = WaylandState::new(
            registry_state,
            compositor_state,
            layer_shell,
            shm,
            output_state,
            seat_state,
            widget,
            origin,
            self.tokio_runtime.handle().clone(),
        );

        info!("Creating layer shell surface at ({}, {})", origin.x, origin.y);
        let wl_surface = state.compositor_state.create_surface(&qh);
        let layer_surface = state.layer_shell.create_layer_surface(
            &qh,
            wl_surface,
            Layer::Overlay,
            Some("popuppalette"),
            None, // Default output
        );

        // Placement is expressed as margins from the top-left corner.
        layer_surface.set_anchor(Anchor::TOP | Anchor::LEFT);
        layer_surface.set_margin(origin.y, 0, 0, origin.x);
        layer_surface.set_keyboard_interactivity(KeyboardInteractivity::OnDemand);
        layer_surface.set_size(CANVAS_SIZE as u32, CANVAS_SIZE as u32);
        layer_surface.set_exclusive_zone(-1);
        layer_surface.commit();

        state.surface.set_layer_surface(layer_surface);
        let mask = state.widget.mask().clone();
        state.set_mask(&mask);
        info!("Layer shell surface created");

        match CursorSurface::create(
            &state.compositor_state,
            &state.shm,
            &qh,
            state.widget.cursor_image(),
        ) {
            Ok(cursor) => state.cursor_surface = Some(cursor),
            Err(err) => warn!("Palette cursor unavailable: {:#}", err),
        }

        let quit_flag = Arc::new(AtomicBool::new(false));
        spawn_signal_thread(conn.clone(), qh.clone(), quit_flag.clone())?;

        let mut consecutive_render_failures = 0u32;
        let mut loop_error: Option<anyhow::Error> = None;
        loop {
            if state.should_exit || quit_flag.load(Ordering::Acquire) {
                info!("Exit requested, breaking event loop");
                break;
            }

            if let Err(e) = event_queue.blocking_dispatch(&mut state) {
                warn!("Event queue error: {}", e);
                loop_error = Some(anyhow::anyhow!("Wayland event queue error: {}", e));
                break;
            }

            state.flush_requests();
            if state.should_exit || quit_flag.load(Ordering::Acquire) {
                info!("Exit requested after dispatch, breaking event loop");
                break;
            }

            // Throttled to the compositor's frame callbacks.
            let can_render = state.surface.is_configured()
                && state.visible
                && state.needs_redraw
                && !state.surface.frame_callback_pending();

            if can_render {
                match state.render(&qh) {
                    Ok(()) => {
                        consecutive_render_failures = 0;
                        state.needs_redraw = false;
                        state.surface.set_frame_callback_pending(true);
                    }
                    Err(e) => {
                        consecutive_render_failures += 1;
                        warn!(
                            "Rendering error (attempt {}/{}): {}",
                            consecutive_render_failures, MAX_RENDER_FAILURES, e
                        );

                        if consecutive_render_failures >= MAX_RENDER_FAILURES {
                            return Err(anyhow::anyhow!(
                                "Too many consecutive render failures ({}), exiting: {}",
                                consecutive_render_failures,
                                e
                            ));
                        }

                        // Clear redraw flag to avoid infinite error loop
                        state.needs_redraw = false;
                    }
                }
            } else if state.needs_redraw && state.surface.frame_callback_pending() {
                debug!("Main loop: Skipping render - frame callback already pending");
            }
        }

        info!("Wayland backend exiting");
        state.widget.persist_session_data_logged();

        match loop_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Watches SIGINT/SIGTERM and wakes the blocked event queue with a display sync.
fn spawn_signal_thread(
    conn: Connection,
    qh: wayland_client::QueueHandle<WaylandState>,
    quit_flag: Arc<AtomicBool>,
) -> Result<()> {
    let mut signals =
        Signals::new([SIGINT, SIGTERM]).context("Failed to register signal handler")?;

    // Runs until process termination; the iterator has no shutdown hook.
    thread::spawn(move || {
        if let Some(sig) = signals.forever().next() {
            info!("Received signal {} - closing palette", sig);
            quit_flag.store(true, Ordering::Release);
            conn.display().sync(&qh, ());
            if let Err(err) = conn.flush() {
                warn!("Failed to wake event loop: {}", err);
            }
        }
    });
    Ok(())
}
