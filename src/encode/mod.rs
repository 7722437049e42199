//! Animated GIF output.

/// Frame sequence to GIF assembly.
pub mod gif;
