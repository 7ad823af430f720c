//! Label font resolution.
//!
//! Tries a fixed list of well-known font files in order and caches the
//! first one that loads. When nothing resolves the renderer falls back
//! to the built-in glyphs, so a missing font is never an error.

use std::path::Path;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use resvg::usvg::fontdb;

/// Candidate font files, probed in order. Bold faces are preferred for
/// legibility at the smallest densities.
pub const FONT_CANDIDATES: [&str; 4] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
    "/usr/share/fonts/truetype/fonts-liberation/LiberationSans-Bold.ttf",
];

/// A font database seeded with exactly one resolved candidate file.
pub struct SystemFont {
    pub db: Arc<fontdb::Database>,
    pub family: String,
}

static SYSTEM_FONT: OnceCell<Option<SystemFont>> = OnceCell::new();

/// Returns the first candidate font that loads, resolving at most once
/// per process.
pub fn system_font() -> Option<&'static SystemFont> {
    SYSTEM_FONT.get_or_init(load_first_candidate).as_ref()
}

fn load_first_candidate() -> Option<SystemFont> {
    for candidate in FONT_CANDIDATES {
        let path = Path::new(candidate);
        if !path.is_file() {
            continue;
        }

        let mut db = fontdb::Database::new();
        if let Err(e) = db.load_font_file(path) {
            log::warn!("Failed to load font {}: {}", path.display(), e);
            continue;
        }

        // A collection file loads several faces; the first one names the
        // family we ask the layout engine for.
        let Some(family) = db
            .faces()
            .next()
            .and_then(|face| face.families.first().map(|(name, _)| name.clone()))
        else {
            log::warn!("Font {} contains no usable face", path.display());
            continue;
        };

        log::debug!("Label font: '{}' from {}", family, path.display());
        return Some(SystemFont {
            db: Arc::new(db),
            family,
        });
    }

    log::debug!("No candidate font resolved, using built-in glyphs");
    None
}
