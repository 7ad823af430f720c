//! Android launcher icon generator for 360 Rabota.
//!
//! Writes `ic_launcher.png` and `ic_launcher_round.png` for every
//! supported density under `app/src/main/res/`, relative to the
//! current working directory. Run it from the Android project root.

use anyhow::Result;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let base_dir = std::env::current_dir()?;
    rabota_icons::android::run(&base_dir)?;
    Ok(())
}
