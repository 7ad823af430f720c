//! Rasterizes the placeholder label onto square icon canvases.
//!
//! One `Renderer` resolves its label font at construction and is reused
//! for a whole batch. The label is laid out with the resolved font when
//! one exists, otherwise with the built-in glyphs, then centered on a
//! white canvas and encoded as an opaque RGB PNG.

use std::path::Path;

use resvg::tiny_skia::{
    Color, FillRule, Mask, Paint, PathBuilder, Pixmap, PixmapPaint, Rect, Transform,
};
use resvg::usvg;
use thiserror::Error;

use crate::font::{self, SystemFont};
use crate::glyphs;

/// Literal drawn on every icon.
pub const LABEL: &str = "360";

/// Label height relative to the icon edge, truncated to whole pixels.
pub const FONT_SCALE: f32 = 0.35;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot allocate a {0}x{0} canvas")]
    Canvas(u32),
    #[error("failed to lay out the icon label: {0}")]
    Label(#[from] usvg::Error),
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] png::EncodingError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

enum LabelFont {
    System(&'static SystemFont),
    Builtin,
}

pub struct Renderer {
    font: LabelFont,
}

impl Renderer {
    /// Resolves the label font once; falls back to the built-in glyphs
    /// when no candidate font file is present.
    pub fn new() -> Self {
        let font = match font::system_font() {
            Some(f) => LabelFont::System(f),
            None => LabelFont::Builtin,
        };
        Self { font }
    }

    /// Renders with the built-in glyphs regardless of installed fonts,
    /// so output bytes do not depend on the machine.
    pub fn with_builtin_glyphs() -> Self {
        Self {
            font: LabelFont::Builtin,
        }
    }

    /// Renders one icon: white canvas, centered label, and for `round`
    /// the circular matte described on [`apply_round_mask`].
    pub fn render(&self, size: u32, round: bool) -> Result<Pixmap, RenderError> {
        let mut canvas = Pixmap::new(size, size).ok_or(RenderError::Canvas(size))?;
        canvas.fill(Color::WHITE);

        let font_px = (size as f32 * FONT_SCALE).floor();
        let drawn = match &self.font {
            LabelFont::System(f) => draw_label_text(&mut canvas, size, font_px, f)?,
            LabelFont::Builtin => false,
        };
        if !drawn {
            draw_label_builtin(&mut canvas, size, font_px);
        }

        if round {
            return apply_round_mask(&canvas, size);
        }
        Ok(canvas)
    }

    /// Renders one icon and writes it as a PNG file, overwriting any
    /// previous output.
    pub fn write_png(&self, size: u32, round: bool, path: &Path) -> Result<(), RenderError> {
        let pixmap = self.render(size, round)?;
        let bytes = encode_png(&pixmap)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Lays out the label with the resolved font and rasterizes it centered
/// on the canvas. Returns `Ok(false)` when layout produced no glyphs so
/// the caller can fall back to the built-in ones.
fn draw_label_text(
    canvas: &mut Pixmap,
    size: u32,
    font_px: f32,
    font: &SystemFont,
) -> Result<bool, RenderError> {
    let markup = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}"><text x="0" y="{font_px}" font-family="{}" font-weight="bold" font-size="{font_px}" fill="black">{LABEL}</text></svg>"#,
        font.family,
    );

    let mut opt = usvg::Options::default();
    opt.fontdb = font.db.clone();
    let tree = usvg::Tree::from_str(&markup, &opt)?;

    let bbox = tree.root().abs_bounding_box();
    if bbox.width() < 1.0 || bbox.height() < 1.0 {
        log::warn!("Font '{}' produced no glyphs for {LABEL:?}", font.family);
        return Ok(false);
    }

    let (dx, dy) = centered_offset(size, bbox.x(), bbox.y(), bbox.width(), bbox.height());
    resvg::render(&tree, Transform::from_translate(dx, dy), &mut canvas.as_mut());
    Ok(true)
}

/// Draws the label with the built-in seven-segment glyphs.
fn draw_label_builtin(canvas: &mut Pixmap, size: u32, font_px: f32) {
    let Some(label) = glyphs::label_path(LABEL, font_px) else {
        return;
    };

    // Path bounds ignore the stroke; widen by half the stroke per side
    // so the ink is what gets centered.
    let pad = label.stroke.width;
    let bounds = label.path.bounds();
    let (dx, dy) = centered_offset(
        size,
        bounds.x() - pad / 2.0,
        bounds.y() - pad / 2.0,
        bounds.width() + pad,
        bounds.height() + pad,
    );

    let mut paint = Paint::default();
    paint.set_color(Color::BLACK);
    paint.anti_alias = true;
    canvas.stroke_path(
        &label.path,
        &paint,
        &label.stroke,
        Transform::from_translate(dx, dy),
        None,
    );
}

/// Offset that puts a bounding box in the middle of a `size` canvas.
/// Truncating division: an odd leftover pixel lands on the right and
/// bottom edges.
fn centered_offset(size: u32, bbox_x: f32, bbox_y: f32, bbox_w: f32, bbox_h: f32) -> (f32, f32) {
    let x = (size as i32 - bbox_w as i32) / 2;
    let y = (size as i32 - bbox_h as i32) / 2;
    (x as f32 - bbox_x, y as f32 - bbox_y)
}

/// Composites the canvas through a full-canvas circular mask onto a new
/// opaque white background of the same size. The matte color matches
/// the canvas background, so the round variant stays visually identical
/// to the square one; the output is opaque RGB either way.
fn apply_round_mask(canvas: &Pixmap, size: u32) -> Result<Pixmap, RenderError> {
    let oval = Rect::from_xywh(0.0, 0.0, size as f32, size as f32)
        .and_then(PathBuilder::from_oval)
        .ok_or(RenderError::Canvas(size))?;

    let mut mask = Mask::new(size, size).ok_or(RenderError::Canvas(size))?;
    mask.fill_path(&oval, FillRule::Winding, true, Transform::identity());

    let mut matte = Pixmap::new(size, size).ok_or(RenderError::Canvas(size))?;
    matte.fill(Color::WHITE);
    matte.draw_pixmap(
        0,
        0,
        canvas.as_ref(),
        &PixmapPaint::default(),
        Transform::identity(),
        Some(&mask),
    );
    Ok(matte)
}

/// Encodes a pixmap as an opaque 8-bit RGB PNG. The canvas is fully
/// opaque by construction, so dropping alpha loses nothing.
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, RenderError> {
    let mut rgb = Vec::with_capacity(pixmap.pixels().len() * 3);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgb.extend_from_slice(&[c.red(), c.green(), c.blue()]);
    }

    let mut bytes = Vec::new();
    let mut encoder = png::Encoder::new(&mut bytes, pixmap.width(), pixmap.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&rgb)?;
    writer.finish()?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_header(bytes: &[u8]) -> (u32, u32, png::ColorType) {
        let decoder = png::Decoder::new(std::io::Cursor::new(bytes));
        let reader = decoder.read_info().unwrap();
        let info = reader.info();
        (info.width, info.height, info.color_type)
    }

    #[test]
    fn test_dimensions_match_request() {
        let renderer = Renderer::with_builtin_glyphs();
        for size in [48, 87, 192, 1024] {
            let pixmap = renderer.render(size, false).unwrap();
            assert_eq!((pixmap.width(), pixmap.height()), (size, size));
        }
    }

    #[test]
    fn test_label_is_drawn_on_white() {
        let pixmap = Renderer::with_builtin_glyphs().render(96, false).unwrap();
        let pixels = pixmap.pixels();

        let corner = pixels[0].demultiply();
        assert_eq!((corner.red(), corner.green(), corner.blue()), (255, 255, 255));

        assert!(
            pixels.iter().any(|p| p.demultiply().red() < 128),
            "no label ink on the canvas"
        );
    }

    #[test]
    fn test_round_variant_keeps_dimensions() {
        let renderer = Renderer::with_builtin_glyphs();
        let square = renderer.render(144, false).unwrap();
        let round = renderer.render(144, true).unwrap();
        assert_eq!(square.width(), round.width());
        assert_eq!(square.height(), round.height());
    }

    #[test]
    fn test_round_variant_is_opaque() {
        let pixmap = Renderer::with_builtin_glyphs().render(72, true).unwrap();
        assert!(pixmap.pixels().iter().all(|p| p.alpha() == 255));
    }

    #[test]
    fn test_builtin_rendering_is_deterministic() {
        let renderer = Renderer::with_builtin_glyphs();
        let a = encode_png(&renderer.render(96, true).unwrap()).unwrap();
        let b = encode_png(&renderer.render(96, true).unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_encoded_png_is_rgb() {
        let pixmap = Renderer::with_builtin_glyphs().render(48, false).unwrap();
        let bytes = encode_png(&pixmap).unwrap();
        assert_eq!(decode_header(&bytes), (48, 48, png::ColorType::Rgb));
    }

    #[test]
    fn test_resolved_renderer_still_sizes_correctly() {
        // Whatever the machine's fonts, dimensions are contractual.
        let pixmap = Renderer::new().render(58, false).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (58, 58));
    }

    #[test]
    fn test_centered_offset_truncates() {
        // 48 - 21 = 27, halved and truncated leaves 13 on the left.
        assert_eq!(centered_offset(48, 0.0, 0.0, 21.0, 11.0), (13.0, 18.0));
        // A bounding box offset is subtracted back out.
        assert_eq!(centered_offset(48, 2.0, -3.0, 21.0, 11.0), (11.0, 21.0));
    }

    #[test]
    fn test_write_png_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        let renderer = Renderer::with_builtin_glyphs();
        renderer.write_png(48, false, &path).unwrap();
        let first = std::fs::read(&path).unwrap();
        renderer.write_png(48, false, &path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), first);
    }
}
