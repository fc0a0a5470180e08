//! Manages layer-surface state and shared memory buffers for the Wayland backend.

use anyhow::{Context, Result};
use log::{debug, info};
use popuppalette::draw::Raster;
use smithay_client_toolkit::{
    compositor::CompositorState,
    shell::wlr_layer::LayerSurface,
    shm::{
        Shm,
        slot::{Buffer, SlotPool},
    },
};
use wayland_client::{
    QueueHandle,
    protocol::{wl_shm, wl_surface},
};

use super::state::WaylandState;

/// Number of buffers the palette surface cycles through.
const BUFFER_COUNT: usize = 2;

/// Tracks the active layer surface, buffer pool, and associated sizing state.
pub struct SurfaceState {
    layer_surface: Option<LayerSurface>,
    pool: Option<SlotPool>,
    width: u32,
    height: u32,
    configured: bool,
    frame_callback_pending: bool,
}

impl SurfaceState {
    /// Creates a new, unconfigured surface state.
    pub fn new() -> Self {
        Self {
            layer_surface: None,
            pool: None,
            width: 0,
            height: 0,
            configured: false,
            frame_callback_pending: false,
        }
    }

    /// Assigns the layer surface produced during startup.
    pub fn set_layer_surface(&mut self, surface: LayerSurface) {
        self.layer_surface = Some(surface);
    }

    /// Returns the current layer surface, if initialized.
    pub fn layer_surface(&self) -> Option<&LayerSurface> {
        self.layer_surface.as_ref()
    }

    /// Updates the surface dimensions, returning `true` if the size changed.
    ///
    /// When the size changes, any existing buffer pool becomes invalid and is dropped.
    pub fn update_dimensions(&mut self, width: u32, height: u32) -> bool {
        let changed = self.width != width || self.height != height;
        self.width = width;
        self.height = height;
        if changed {
            self.pool = None;
        }
        changed
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_configured(&mut self, configured: bool) {
        self.configured = configured;
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    pub fn set_frame_callback_pending(&mut self, pending: bool) {
        self.frame_callback_pending = pending;
    }

    pub fn frame_callback_pending(&self) -> bool {
        self.frame_callback_pending
    }

    /// Ensures a shared memory pool of the appropriate size exists.
    pub fn ensure_pool(&mut self, shm: &Shm) -> Result<&mut SlotPool> {
        if self.pool.is_none() {
            let buffer_size = (self.width * self.height * 4) as usize;
            let pool_size = buffer_size * BUFFER_COUNT;
            info!(
                "Creating new SlotPool ({}x{}, {} bytes, {} buffers)",
                self.width, self.height, pool_size, BUFFER_COUNT
            );
            let pool = SlotPool::new(pool_size, shm).context("Failed to create slot pool")?;
            self.pool = Some(pool);
        }

        self.pool
            .as_mut()
            .context("Buffer pool not initialized despite previous check")
    }
}

/// The palette's pointer glyph, uploaded once into its own surface.
pub struct CursorSurface {
    surface: wl_surface::WlSurface,
    // Buffer and pool stay alive for as long as the surface shows them.
    _buffer: Buffer,
    _pool: SlotPool,
}

impl CursorSurface {
    /// Copies `image` into a shared memory buffer attached to a new surface.
    pub fn create(
        compositor: &CompositorState,
        shm: &Shm,
        qh: &QueueHandle<WaylandState>,
        image: &Raster,
    ) -> Result<Self> {
        let width = image.width();
        let height = image.height();
        let stride = width * 4;
        let pixels = image.pixels().context("Failed to read cursor image")?;

        let mut pool =
            SlotPool::new((stride * height) as usize, shm).context("Failed to create cursor pool")?;
        let (buffer, canvas) = pool
            .create_buffer(width, height, stride, wl_shm::Format::Argb8888)
            .context("Failed to create cursor buffer")?;

        // wl_shm ARGB8888 is a little-endian u32 per pixel.
        for (dst, pixel) in canvas.chunks_exact_mut(4).zip(pixels) {
            dst.copy_from_slice(&pixel.to_le_bytes());
        }

        let surface = compositor.create_surface(qh);
        surface.attach(Some(buffer.wl_buffer()), 0, 0);
        surface.damage_buffer(0, 0, width, height);
        surface.commit();
        debug!("Cursor surface created ({}x{})", width, height);

        Ok(Self {
            surface,
            _buffer: buffer,
            _pool: pool,
        })
    }

    pub fn wl_surface(&self) -> &wl_surface::WlSurface {
        &self.surface
    }
}
