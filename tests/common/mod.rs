//! Generated palette assets for integration tests.

#![allow(dead_code)]

use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface};
use popuppalette::Config;
use tempfile::TempDir;

pub const RED: [u8; 3] = [200, 30, 30];
pub const BLUE: [u8; 3] = [20, 40, 220];
/// Side of the hidden square in the top-left corner of the generated mask.
pub const HIDDEN_CORNER: i32 = 64;

fn rgb(c: [u8; 3]) -> (f64, f64, f64) {
    (
        c[0] as f64 / 255.0,
        c[1] as f64 / 255.0,
        c[2] as f64 / 255.0,
    )
}

pub fn write_png(path: &Path, width: i32, height: i32, draw: impl FnOnce(&Context)) {
    let surface = ImageSurface::create(Format::ARgb32, width, height).unwrap();
    {
        let ctx = Context::new(&surface).unwrap();
        ctx.set_antialias(cairo::Antialias::None);
        draw(&ctx);
    }
    surface.flush();
    let mut file = File::create(path).unwrap();
    surface.write_to_png(&mut file).unwrap();
}

fn fill(ctx: &Context, x: f64, y: f64, w: f64, h: f64, color: [u8; 3]) {
    let (r, g, b) = rgb(color);
    ctx.set_source_rgb(r, g, b);
    ctx.rectangle(x, y, w, h);
    ctx.fill().unwrap();
}

fn transparent(_ctx: &Context) {}

/// A directory holding every palette asset under its default file name, and a
/// config pointing at it with the marker file inside the same directory.
pub struct AssetDir {
    pub dir: TempDir,
    pub config: Config,
}

impl AssetDir {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.assets.directory = dir.path().to_path_buf();
        config.session.marker_file = dir.path().join("state").join("test.txt");

        let assets = AssetDir { dir, config };
        assets.write_texture(512, 512);
        assets.write(&assets.config.assets.mask, 512, 512, |ctx| {
            ctx.set_source_rgb(0.0, 0.0, 0.0);
            ctx.paint().unwrap();
            fill(
                ctx,
                0.0,
                0.0,
                HIDDEN_CORNER as f64,
                HIDDEN_CORNER as f64,
                [255, 255, 255],
            );
        });
        assets.write(&assets.config.assets.swap_icon, 16, 16, |ctx| {
            fill(ctx, 0.0, 0.0, 16.0, 16.0, [128, 128, 128])
        });
        assets.write(&assets.config.assets.reset_icon, 10, 10, |ctx| {
            fill(ctx, 0.0, 0.0, 10.0, 10.0, [128, 128, 128])
        });
        assets.write(&assets.config.assets.color_box, 28, 28, transparent);
        assets.write(&assets.config.assets.cursor, 24, 24, |ctx| {
            fill(ctx, 0.0, 0.0, 24.0, 24.0, [255, 255, 255])
        });
        assets.write(&assets.config.assets.large_button, 128, 128, transparent);
        assets.write(&assets.config.assets.small_button, 32, 32, transparent);
        assets
    }

    pub fn path(&self, file: &str) -> std::path::PathBuf {
        self.dir.path().join(file)
    }

    pub fn write(&self, file: &str, width: i32, height: i32, draw: impl FnOnce(&Context)) {
        write_png(&self.path(file), width, height, draw);
    }

    /// Left half red, right half blue.
    pub fn write_texture(&self, width: i32, height: i32) {
        self.write(&self.config.assets.texture, width, height, |ctx| {
            let half = width as f64 / 2.0;
            fill(ctx, 0.0, 0.0, half, height as f64, RED);
            fill(ctx, half, 0.0, half, height as f64, BLUE);
        });
    }
}
