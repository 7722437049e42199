//! Text-frame rendering: line classification, layout, fonts and rasterization.

/// Font loading with system fallback.
pub mod font;
/// Transcript frame layout.
pub mod frame;
pub(crate) mod raster;
/// Flat text scenes and their SVG form.
pub mod scene;
/// Line categories, colors and fixed layout constants.
pub mod style;
