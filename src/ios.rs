//! iOS app icon batch.
//!
//! Fills the `AppIcon.appiconset` asset catalog with every icon size
//! the Xcode build expects. The catalog directory must already exist;
//! individual icon failures are reported and skipped.

use std::path::Path;

use anyhow::Result;

use crate::render::Renderer;

/// Required icon sizes and their asset-catalog file names.
pub const APP_ICONS: [(u32, &str); 9] = [
    (40, "Icon-20@2x.png"),
    (60, "Icon-20@3x.png"),
    (58, "Icon-29@2x.png"),
    (87, "Icon-29@3x.png"),
    (80, "Icon-40@2x.png"),
    (120, "Icon-40@3x.png"),
    (120, "Icon-60@2x.png"),
    (180, "Icon-60@3x.png"),
    (1024, "Icon-1024.png"),
];

/// Asset catalog directory, relative to the iOS project root.
pub const ASSET_CATALOG_DIR: &str = "360Rabota/Images.xcassets/AppIcon.appiconset";

/// Generates every app icon into the asset catalog under `base_dir`
/// and returns how many files were written.
///
/// A missing catalog directory is reported on stdout and yields
/// `Ok(0)` without touching the filesystem; it is a setup problem for
/// the operator, not a process failure.
pub fn run(base_dir: &Path) -> Result<usize> {
    println!("🎨 Generating iOS App Icons for 360 Rabota");
    println!("{}", "=".repeat(50));

    let out_dir = base_dir.join(ASSET_CATALOG_DIR);
    if !out_dir.is_dir() {
        println!("❌ Error: Directory not found: {}", out_dir.display());
        return Ok(0);
    }

    let renderer = Renderer::new();
    let mut generated = 0;
    for (size, file_name) in APP_ICONS {
        match renderer.write_png(size, false, &out_dir.join(file_name)) {
            Ok(()) => {
                println!("✅ Created: {file_name} ({size}x{size})");
                generated += 1;
            }
            Err(e) => {
                log::warn!("Skipping {file_name}: {e}");
                println!("❌ Error creating {file_name}: {e}");
            }
        }
    }

    println!("{}", "=".repeat(50));
    println!("✅ All icons generated successfully!");
    println!("📁 Location: {}", out_dir.display());
    println!();
    println!("📝 Next steps:");
    println!("1. Open Xcode and verify icons in Images.xcassets");
    println!("2. Run: cd ios && pod install");
    println!("3. Build: npm run ios");
    Ok(generated)
}
