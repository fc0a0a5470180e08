//! Pango text for the coordinate readout box.

use super::color::Color;
use crate::util::Rect;

/// Font used by the readout label.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadoutFont {
    /// Font family name (e.g., "Sans", "Monospace")
    pub family: String,
    /// Weight keyword: "light", "normal", "medium", "bold", or numeric 100-900
    pub weight: String,
    /// Style keyword: "normal", "italic", "oblique"
    pub style: String,
    /// Size in points
    pub size: f64,
}

impl Default for ReadoutFont {
    fn default() -> Self {
        Self {
            family: "Sans".to_string(),
            weight: "normal".to_string(),
            style: "normal".to_string(),
            size: 11.0,
        }
    }
}

impl ReadoutFont {
    /// Builds the Pango description for this font.
    pub fn description(&self) -> pango::FontDescription {
        let mut desc = pango::FontDescription::new();
        desc.set_family(&self.family);
        desc.set_weight(parse_weight(&self.weight));
        desc.set_style(parse_style(&self.style));
        desc.set_size((self.size * pango::SCALE as f64).round() as i32);
        desc
    }
}

fn parse_weight(weight: &str) -> pango::Weight {
    match weight.trim().to_ascii_lowercase().as_str() {
        "thin" => pango::Weight::Thin,
        "light" => pango::Weight::Light,
        "medium" => pango::Weight::Medium,
        "semibold" => pango::Weight::Semibold,
        "bold" => pango::Weight::Bold,
        "heavy" => pango::Weight::Heavy,
        other => match other.parse::<u16>() {
            Ok(n) if n <= 150 => pango::Weight::Thin,
            Ok(n) if n <= 350 => pango::Weight::Light,
            Ok(n) if n <= 450 => pango::Weight::Normal,
            Ok(n) if n <= 550 => pango::Weight::Medium,
            Ok(n) if n <= 650 => pango::Weight::Semibold,
            Ok(n) if n <= 750 => pango::Weight::Bold,
            Ok(_) => pango::Weight::Heavy,
            Err(_) => pango::Weight::Normal,
        },
    }
}

fn parse_style(style: &str) -> pango::Style {
    match style.trim().to_ascii_lowercase().as_str() {
        "italic" => pango::Style::Italic,
        "oblique" => pango::Style::Oblique,
        _ => pango::Style::Normal,
    }
}

/// Draws `text` inside `rect` on a solid `background`, vertically centered
/// and left aligned with a small inner margin. Text is clipped to the box.
pub fn render_label(
    ctx: &cairo::Context,
    rect: Rect,
    text: &str,
    font: &ReadoutFont,
    foreground: Color,
    background: Color,
) -> Result<(), cairo::Error> {
    const MARGIN: f64 = 4.0;

    ctx.save()?;
    ctx.rectangle(
        rect.x as f64,
        rect.y as f64,
        rect.width as f64,
        rect.height as f64,
    );
    ctx.clip();
    ctx.set_source_rgba(background.r, background.g, background.b, background.a);
    ctx.paint()?;

    let layout = pangocairo::functions::create_layout(ctx);
    layout.set_font_description(Some(&font.description()));
    layout.set_text(text);
    let (_, logical) = layout.pixel_extents();
    let y = rect.y as f64 + (rect.height as f64 - logical.height() as f64) / 2.0;

    // Grayscale antialiasing; subpixel fringes on a translucent surface.
    ctx.set_antialias(cairo::Antialias::Gray);
    ctx.set_source_rgba(foreground.r, foreground.g, foreground.b, foreground.a);
    ctx.move_to(rect.x as f64 + MARGIN, y);
    pangocairo::functions::show_layout(ctx, &layout);
    ctx.restore()?;
    Ok(())
}
