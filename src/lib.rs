//! Animated GIF demos of a command-line workflow.
//!
//! The demo pipeline is linear and runs once per invocation:
//!
//! 1. **Sequence**: a fixed transcript becomes accumulating [`FrameState`]s, each held for a few
//!    frames ([`build_sequence`])
//! 2. **Render**: every state becomes an 800x400 color-coded terminal frame ([`FrameRenderer`])
//! 3. **Assemble**: the frames are written as one looping GIF ([`GifAssembler`])
//!
//! [`CastConversion`] turns an asciicast recording into a placeholder GIF, using ImageMagick and
//! `gifsicle` when available and the built-in renderer otherwise.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Asciicast header reading and placeholder conversion.
pub mod cast;
/// GIF output.
pub mod encode;
/// One-shot demo pipeline.
pub mod pipeline;
/// Frame layout and rasterization.
pub mod render;
/// Transcripts and frame sequencing.
pub mod script;

pub use crate::cast::convert::{CastConversion, CastToGifOpts, PLACEHOLDER_LABEL, Strategy};
pub use crate::cast::header::{CastHeader, TermInfo};
pub use crate::encode::gif::{GifAssembler, GifOpts};
pub use crate::foundation::core::{Canvas, Rgb8};
pub use crate::foundation::error::{DemoError, DemoResult};
pub use crate::pipeline::{
    DEFAULT_OUTPUT, RenderStats, create_demo_gif, create_demo_gif_with, render_frames,
};
pub use crate::render::font::{FontSet, FontSource, PREFERRED_FONT_PATH};
pub use crate::render::frame::FrameRenderer;
pub use crate::render::scene::{Anchor, Scene, TextItem};
pub use crate::render::style::{FrameStyle, LineKind, Palette, classify};
pub use crate::script::sequence::{FrameState, build_sequence, expected_frame_count};
pub use crate::script::transcript::DEMO_SCRIPT;
