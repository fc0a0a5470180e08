// Holds the live Wayland protocol state shared by the backend loop and the handler
// submodules; owns the palette widget and renders it into the layer surface.
use anyhow::{Context, Result};
use log::{debug, info};
use popuppalette::{
    host::AppInfo,
    input::{Modifiers, PointerPosition},
    palette::PaletteWidget,
    util::{Point, Rect},
    window::dispatch_requests,
};
use smithay_client_toolkit::{
    compositor::CompositorState, output::OutputState, registry::RegistryState, seat::SeatState,
    shell::{WaylandSurface, wlr_layer::LayerShell}, shm::Shm,
};
use wayland_client::{
    QueueHandle,
    protocol::{wl_pointer, wl_shm},
};

use super::surface::{CursorSurface, SurfaceState};

/// Internal Wayland state shared across modules.
pub(super) struct WaylandState {
    // Wayland protocol objects
    pub(super) registry_state: RegistryState,
    pub(super) compositor_state: CompositorState,
    pub(super) layer_shell: LayerShell,
    pub(super) shm: Shm,
    pub(super) output_state: OutputState,
    pub(super) seat_state: SeatState,

    // Surface and buffer management
    pub(super) surface: SurfaceState,
    pub(super) cursor_surface: Option<CursorSurface>,
    /// Visible region of the palette, also used as the input region
    pub(super) mask_rects: Vec<Rect>,

    // Palette
    pub(super) widget: PaletteWidget,
    pub(super) app_info: AppInfo,

    // Window placement: top-left corner in output coordinates
    pub(super) origin: Point,
    pub(super) visible: bool,

    // Input state
    pub(super) pointer: Option<wl_pointer::WlPointer>,
    pub(super) pointer_enter_serial: Option<u32>,
    pub(super) pointer_local: Point,
    pub(super) modifiers: Modifiers,

    pub(super) needs_redraw: bool,
    pub(super) should_exit: bool,

    // Tokio runtime handle for async operations
    pub(super) tokio_handle: tokio::runtime::Handle,
}

impl WaylandState {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        registry_state: RegistryState,
        compositor_state: CompositorState,
        layer_shell: LayerShell,
        shm: Shm,
        output_state: OutputState,
        seat_state: SeatState,
        widget: PaletteWidget,
        origin: Point,
        tokio_handle: tokio::runtime::Handle,
    ) -> Self {
        let mask_rects = widget.mask().rects();
        Self {
            registry_state,
            compositor_state,
            layer_shell,
            shm,
            output_state,
            seat_state,
            surface: SurfaceState::new(),
            cursor_surface: None,
            mask_rects,
            widget,
            app_info: AppInfo::standalone(),
            origin,
            visible: true,
            pointer: None,
            pointer_enter_serial: None,
            pointer_local: Point::default(),
            modifiers: Modifiers::default(),
            needs_redraw: true,
            should_exit: false,
            tokio_handle,
        }
    }

    /// Pointer position for widget input, from a surface-local position.
    pub(super) fn pointer_position(&mut self, local: (f64, f64)) -> PointerPosition {
        self.pointer_local = Point::new(local.0 as i32, local.1 as i32);
        PointerPosition::in_window(self.pointer_local, self.origin)
    }

    /// Delivers whatever the widget queued while handling the last event.
    ///
    /// There is no host in standalone mode, so host-bound requests are
    /// dropped. A close request ends the event loop.
    pub(super) fn flush_requests(&mut self) {
        let requests = self.widget.take_requests();
        if requests.is_empty() {
            return;
        }
        let app = self.app_info.clone();
        let outcome = dispatch_requests(requests, self, None, &app);
        if outcome.close_requested {
            info!("Close requested");
            self.should_exit = true;
        }
    }

    pub(super) fn render(&mut self, qh: &QueueHandle<Self>) -> Result<()> {
        debug!("=== RENDER START ===");
        let width = self.surface.width();
        let height = self.surface.height();

        let (buffer, canvas) = {
            let pool = self.surface.ensure_pool(&self.shm)?;
            pool.create_buffer(
                width as i32,
                height as i32,
                (width * 4) as i32,
                wl_shm::Format::Argb8888,
            )
            .context("Failed to create buffer")?
        };

        // SAFETY: `canvas` is a live SlotPool slice of exactly width * height * 4
        // bytes with stride width * 4, matching ARgb32. The Cairo surface and
        // context are dropped below, before the buffer is handed to the
        // compositor, and nothing else touches the slice meanwhile.
        let cairo_surface = unsafe {
            cairo::ImageSurface::create_for_data_unsafe(
                canvas.as_mut_ptr(),
                cairo::Format::ARgb32,
                width as i32,
                height as i32,
                (width * 4) as i32,
            )
            .context("Failed to create Cairo surface")?
        };

        let ctx = cairo::Context::new(&cairo_surface).context("Failed to create Cairo context")?;

        ctx.set_operator(cairo::Operator::Clear);
        ctx.paint().context("Failed to clear background")?;
        ctx.set_operator(cairo::Operator::Over);

        // Only pixels inside the mask are shown.
        for rect in &self.mask_rects {
            ctx.rectangle(
                rect.x as f64,
                rect.y as f64,
                rect.width as f64,
                rect.height as f64,
            );
        }
        ctx.clip();

        self.widget
            .paint(&ctx)
            .context("Failed to paint palette")?;

        cairo_surface.flush();
        drop(ctx);
        drop(cairo_surface);

        let wl_surface = self
            .surface
            .layer_surface()
            .context("Layer surface not created")?
            .wl_surface();
        wl_surface.attach(Some(buffer.wl_buffer()), 0, 0);
        wl_surface.damage_buffer(0, 0, width as i32, height as i32);
        wl_surface.frame(qh, wl_surface.clone());
        wl_surface.commit();
        debug!("=== RENDER COMPLETE ===");

        Ok(())
    }
}
