//! Placeholder launcher icons for the 360 Rabota mobile builds.
//!
//! Renders the "360" label onto square white canvases and writes the
//! PNG files the Android and iOS packaging steps expect. See the
//! `android-icons` and `ios-icons` binaries.

pub mod android;
mod font;
mod glyphs;
pub mod ios;
pub mod render;
