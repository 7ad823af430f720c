//! Android launcher icon batch.
//!
//! Writes a regular and a round launcher icon for every supported
//! density under `<base>/app/src/main/res/`. Output directories are
//! created on demand.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::render::Renderer;

/// Density buckets and their launcher icon pixel sizes.
pub const LAUNCHER_DENSITIES: [(&str, u32); 5] = [
    ("mipmap-mdpi", 48),
    ("mipmap-hdpi", 72),
    ("mipmap-xhdpi", 96),
    ("mipmap-xxhdpi", 144),
    ("mipmap-xxxhdpi", 192),
];

/// Generates all launcher icons under `base_dir` and returns how many
/// files were written.
///
/// There is no per-icon recovery here: the first failed icon aborts the
/// rest of the batch.
pub fn run(base_dir: &Path) -> Result<usize> {
    let renderer = Renderer::new();
    let res_dir = base_dir.join("app").join("src").join("main").join("res");

    let mut generated = 0;
    for (density, size) in LAUNCHER_DENSITIES {
        let out_dir = res_dir.join(density);
        fs::create_dir_all(&out_dir)
            .with_context(|| format!("failed to create {}", out_dir.display()))?;

        for (file_name, round) in [("ic_launcher.png", false), ("ic_launcher_round.png", true)] {
            let path = out_dir.join(file_name);
            renderer
                .write_png(size, round, &path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            println!("✓ Generated: {} ({size}x{size})", path.display());
            generated += 1;
        }
    }

    println!();
    println!("✅ All Android icons generated successfully!");
    println!("Generated {generated} icons (regular + round) for all densities");
    Ok(generated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoded_size(path: &Path) -> (u32, u32) {
        let decoder = png::Decoder::new(std::fs::File::open(path).unwrap());
        let reader = decoder.read_info().unwrap();
        (reader.info().width, reader.info().height)
    }

    #[test]
    fn test_run_creates_all_densities() {
        let tmp = tempfile::tempdir().unwrap();
        let count = run(tmp.path()).unwrap();
        assert_eq!(count, 10);

        for (density, size) in LAUNCHER_DENSITIES {
            let dir = tmp.path().join("app").join("src").join("main").join("res").join(density);
            for file_name in ["ic_launcher.png", "ic_launcher_round.png"] {
                let path = dir.join(file_name);
                assert!(path.is_file(), "missing {}", path.display());
                assert_eq!(decoded_size(&path), (size, size));
            }
        }
    }

    #[test]
    fn test_run_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(run(tmp.path()).unwrap(), 10);
        assert_eq!(run(tmp.path()).unwrap(), 10);
    }

    #[test]
    fn test_round_icons_match_regular_dimensions() {
        let tmp = tempfile::tempdir().unwrap();
        run(tmp.path()).unwrap();

        for (density, _) in LAUNCHER_DENSITIES {
            let dir = tmp.path().join("app").join("src").join("main").join("res").join(density);
            assert_eq!(
                decoded_size(&dir.join("ic_launcher.png")),
                decoded_size(&dir.join("ic_launcher_round.png")),
            );
        }
    }
}
