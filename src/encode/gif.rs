use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};

use crate::foundation::error::{DemoError, DemoResult};

/// Options for [`GifAssembler`].
#[derive(Clone, Debug)]
pub struct GifOpts {
    /// Output GIF path.
    pub out_path: PathBuf,
    /// Display time of every frame, in milliseconds.
    pub frame_delay_ms: u32,
    /// Loop behaviour; [`Repeat::Infinite`] is NETSCAPE loop count 0.
    pub repeat: Repeat,
    /// Palette quantizer speed, 1 (best) to 30 (fastest).
    pub quantizer_speed: i32,
}

impl GifOpts {
    /// 300ms per frame, looping forever.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            frame_delay_ms: 300,
            repeat: Repeat::Infinite,
            quantizer_speed: 10,
        }
    }

    /// Same options with a different per-frame delay.
    pub fn with_frame_delay_ms(mut self, ms: u32) -> Self {
        self.frame_delay_ms = ms;
        self
    }
}

/// Writes an ordered frame sequence as one animated GIF.
#[derive(Clone, Debug)]
pub struct GifAssembler {
    opts: GifOpts,
}

impl GifAssembler {
    /// Create an assembler writing to `opts.out_path`.
    pub fn new(opts: GifOpts) -> Self {
        Self { opts }
    }

    /// Output options.
    pub fn opts(&self) -> &GifOpts {
        &self.opts
    }

    /// Encode `frames` in order, the first one being the base image.
    ///
    /// Returns `Ok(false)` without touching the filesystem when `frames` is empty. Every
    /// frame must have the dimensions of the first one. IO and encoding failures are
    /// errors, and the output path may then hold a partial file.
    #[tracing::instrument(skip(self, frames), fields(out = %self.opts.out_path.display(), frames = frames.len()))]
    pub fn assemble(&self, frames: Vec<RgbaImage>) -> DemoResult<bool> {
        let Some(first) = frames.first() else {
            tracing::warn!("no frames to encode, output not written");
            return Ok(false);
        };
        let (width, height) = first.dimensions();
        if let Some((i, f)) = frames
            .iter()
            .enumerate()
            .find(|(_, f)| f.dimensions() != (width, height))
        {
            return Err(DemoError::validation(format!(
                "frame {i} is {}x{}, expected {width}x{height}",
                f.width(),
                f.height()
            )));
        }
        if !(1..=30).contains(&self.opts.quantizer_speed) {
            return Err(DemoError::validation("gif quantizer speed must be in 1..=30"));
        }

        let path = self.opts.out_path.as_path();
        ensure_parent_dir(path)?;
        let file =
            File::create(path).with_context(|| format!("create gif '{}'", path.display()))?;
        let mut writer = BufWriter::new(file);

        let delay = Delay::from_numer_denom_ms(self.opts.frame_delay_ms, 1);
        {
            let mut encoder = GifEncoder::new_with_speed(&mut writer, self.opts.quantizer_speed);
            encoder
                .set_repeat(self.opts.repeat)
                .map_err(|e| DemoError::encode(format!("set gif loop count: {e}")))?;
            encoder
                .encode_frames(
                    frames
                        .into_iter()
                        .map(|buf| Frame::from_parts(buf, 0, 0, delay)),
                )
                .map_err(|e| DemoError::encode(format!("encode gif frames: {e}")))?;
        }
        writer
            .flush()
            .with_context(|| format!("flush gif '{}'", path.display()))?;

        tracing::info!(width, height, "gif written");
        Ok(true)
    }
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> DemoResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
