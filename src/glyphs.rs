//! Built-in digit glyphs.
//!
//! Used when no candidate font file resolves. Digits are drawn as
//! stroked seven-segment figures, so the fallback needs no font assets
//! and renders identically on every machine.

use resvg::tiny_skia::{LineCap, Path, PathBuilder, Stroke};

// Segment endpoints in a unit cell, in the order
// top, top-right, bottom-right, bottom, bottom-left, top-left, middle.
const SEGMENTS: [(f32, f32, f32, f32); 7] = [
    (0.0, 0.0, 1.0, 0.0),
    (1.0, 0.0, 1.0, 0.5),
    (1.0, 0.5, 1.0, 1.0),
    (0.0, 1.0, 1.0, 1.0),
    (0.0, 0.5, 0.0, 1.0),
    (0.0, 0.0, 0.0, 0.5),
    (0.0, 0.5, 1.0, 0.5),
];

/// Bit `i` lights `SEGMENTS[i]`.
const fn digit_segments(c: char) -> Option<u8> {
    match c {
        '0' => Some(0b011_1111),
        '1' => Some(0b000_0110),
        '2' => Some(0b101_1011),
        '3' => Some(0b100_1111),
        '4' => Some(0b110_0110),
        '5' => Some(0b110_1101),
        '6' => Some(0b111_1101),
        '7' => Some(0b000_0111),
        '8' => Some(0b111_1111),
        '9' => Some(0b110_1111),
        _ => None,
    }
}

/// A glyph path plus the stroke it must be drawn with.
pub struct StrokedLabel {
    pub path: Path,
    pub stroke: Stroke,
}

/// Builds the stroked path for `text` at the given glyph height in
/// pixels. Characters without a glyph are skipped; returns `None` when
/// nothing can be drawn.
pub fn label_path(text: &str, height: f32) -> Option<StrokedLabel> {
    let width = height * 0.55;
    let advance = height * 0.85;
    let stroke_width = (height * 0.12).max(1.0);

    let mut pb = PathBuilder::new();
    let mut origin = 0.0;
    for c in text.chars() {
        let Some(mask) = digit_segments(c) else {
            log::warn!("No built-in glyph for {c:?}, skipping");
            continue;
        };
        for (i, &(x0, y0, x1, y1)) in SEGMENTS.iter().enumerate() {
            if mask & (1 << i) != 0 {
                pb.move_to(origin + x0 * width, y0 * height);
                pb.line_to(origin + x1 * width, y1 * height);
            }
        }
        origin += advance;
    }

    let path = pb.finish()?;
    Some(StrokedLabel {
        path,
        stroke: Stroke {
            width: stroke_width,
            line_cap: LineCap::Round,
            ..Stroke::default()
        },
    })
}
