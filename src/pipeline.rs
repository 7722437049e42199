use std::path::Path;

use image::RgbaImage;

use crate::encode::gif::{GifAssembler, GifOpts};
use crate::foundation::error::DemoResult;
use crate::render::frame::FrameRenderer;
use crate::script::sequence::{FrameState, build_sequence};

/// Output file written by the demo, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "keploy-demo.gif";

/// Counters reported by [`render_frames_with_stats`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames produced.
    pub frames_total: u64,
    /// Frames rasterized.
    pub frames_rendered: u64,
    /// Frames reused from an identical preceding state.
    pub frames_elided: u64,
}

/// Render every state in order.
pub fn render_frames(
    renderer: &FrameRenderer,
    states: &[FrameState],
) -> DemoResult<Vec<RgbaImage>> {
    render_frames_with_stats(renderer, states).map(|(frames, _)| frames)
}

/// Render every state in order, rasterizing each run of identical states only once.
#[tracing::instrument(skip(renderer, states), fields(states = states.len()))]
pub fn render_frames_with_stats(
    renderer: &FrameRenderer,
    states: &[FrameState],
) -> DemoResult<(Vec<RgbaImage>, RenderStats)> {
    let mut frames: Vec<RgbaImage> = Vec::with_capacity(states.len());
    let mut stats = RenderStats::default();
    let mut prev: Option<&FrameState> = None;

    for state in states {
        let frame = match (prev, frames.last()) {
            (Some(p), Some(last)) if p == state => {
                stats.frames_elided += 1;
                last.clone()
            }
            _ => {
                stats.frames_rendered += 1;
                renderer.render(state)?
            }
        };
        frames.push(frame);
        prev = Some(state);
    }

    stats.frames_total = frames.len() as u64;
    tracing::debug!(?stats, "frames rendered");
    Ok((frames, stats))
}

/// Build, render and assemble the demo GIF for `script` at `out`.
///
/// Returns `Ok(false)` when the script yields no frames; no file is written then.
pub fn create_demo_gif<S: AsRef<str>>(script: &[S], out: &Path) -> DemoResult<bool> {
    if script.is_empty() {
        return GifAssembler::new(GifOpts::new(out)).assemble(Vec::new());
    }
    create_demo_gif_with(&FrameRenderer::with_default_font(), script, out)
}

/// [`create_demo_gif`] with an explicit renderer.
///
/// Fails with a render error, before anything is written, when the renderer has no font to
/// draw text with.
pub fn create_demo_gif_with<S: AsRef<str>>(
    renderer: &FrameRenderer,
    script: &[S],
    out: &Path,
) -> DemoResult<bool> {
    let states = build_sequence(script);
    let assembler = GifAssembler::new(GifOpts::new(out));
    if states.is_empty() {
        return assembler.assemble(Vec::new());
    }

    renderer.fonts().require_family()?;
    let frames = render_frames(renderer, &states)?;
    assembler.assemble(frames)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
