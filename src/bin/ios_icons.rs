//! iOS app icon generator for 360 Rabota.
//!
//! Fills `360Rabota/Images.xcassets/AppIcon.appiconset`, relative to
//! the current working directory, with every icon size the Xcode build
//! expects. Run it from the iOS project root; the asset catalog
//! directory must already exist.

use anyhow::Result;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let base_dir = std::env::current_dir()?;
    rabota_icons::ios::run(&base_dir)?;
    Ok(())
}
