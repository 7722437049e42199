use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::Context as _;

use crate::cast::header::CastHeader;
use crate::encode::gif::{GifAssembler, GifOpts, ensure_parent_dir};
use crate::foundation::core::{Canvas, Rgb8};
use crate::foundation::error::{DemoError, DemoResult};
use crate::render::font::FontSet;
use crate::render::raster::rasterize;
use crate::render::scene::{Anchor, Scene, TextItem};

/// Label drawn on the placeholder card.
pub const PLACEHOLDER_LABEL: &str = "Keploy Demo Recording";

/// Fixed settings of the cast conversion.
#[derive(Clone, Debug, PartialEq)]
pub struct CastToGifOpts {
    /// Nominal frame rate, reported only.
    pub fps: u32,
    /// Terminal columns when the header has none.
    pub cols: u32,
    /// Terminal rows when the header has none.
    pub rows: u32,
    /// Placeholder card size.
    pub canvas: Canvas,
    /// Number of identical card frames.
    pub frame_count: usize,
    /// Display time per card frame, in milliseconds.
    pub frame_delay_ms: u32,
    /// Card font size.
    pub font_size: f32,
}

impl Default for CastToGifOpts {
    fn default() -> Self {
        Self {
            fps: 10,
            cols: 80,
            rows: 24,
            canvas: Canvas::new(800, 400),
            frame_count: 5,
            frame_delay_ms: 500,
            font_size: 14.0,
        }
    }
}

/// Which strategy produced the GIF.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// ImageMagick `convert` followed by `gifsicle`.
    ExternalTools,
    /// Built-in rasterizer and GIF encoder.
    InProcess,
}

/// One conversion of a recording into a GIF.
#[derive(Clone, Debug)]
pub struct CastConversion {
    cast_path: PathBuf,
    out_path: PathBuf,
    header: CastHeader,
    cols: u32,
    rows: u32,
    opts: CastToGifOpts,
}

impl CastConversion {
    /// Read the recording's header and resolve the terminal size.
    pub fn prepare(
        cast_path: impl Into<PathBuf>,
        out_path: impl Into<PathBuf>,
        opts: CastToGifOpts,
    ) -> DemoResult<Self> {
        let cast_path = cast_path.into();
        let header = CastHeader::read_from(&cast_path)?;
        let (cols, rows) = header.terminal_size().unwrap_or((opts.cols, opts.rows));
        if opts.frame_count == 0 {
            return Err(DemoError::validation("placeholder frame count must be non-zero"));
        }
        Ok(Self {
            cast_path,
            out_path: out_path.into(),
            header,
            cols,
            rows,
            opts,
        })
    }

    /// Parsed header.
    pub fn header(&self) -> &CastHeader {
        &self.header
    }

    /// Terminal `(cols, rows)` used for reporting.
    pub fn resolution(&self) -> (u32, u32) {
        (self.cols, self.rows)
    }

    /// Nominal frame rate.
    pub fn fps(&self) -> u32 {
        self.opts.fps
    }

    /// Output GIF path.
    pub fn out_path(&self) -> &Path {
        &self.out_path
    }

    /// Produce the GIF, preferring the external tools and falling back to in-process rendering.
    #[tracing::instrument(skip(self), fields(cast = %self.cast_path.display(), out = %self.out_path.display()))]
    pub fn run(&self) -> DemoResult<Strategy> {
        tracing::warn!("recording content is not replayed; writing a placeholder card");
        ensure_parent_dir(&self.out_path)?;

        if external_tools_available() {
            match self.run_external() {
                Ok(()) => return Ok(Strategy::ExternalTools),
                Err(err) => {
                    tracing::warn!(%err, "external conversion failed, rendering in-process");
                }
            }
        } else {
            tracing::info!("convert/gifsicle not on PATH, rendering in-process");
        }

        self.run_in_process()?;
        Ok(Strategy::InProcess)
    }

    /// Placeholder card scene: the label in white on black, baseline at (20, 40).
    pub fn placeholder_scene(&self) -> Scene {
        let size = self.opts.font_size;
        Scene {
            canvas: self.opts.canvas,
            background: Rgb8::new(0, 0, 0),
            font_size: size,
            items: vec![TextItem {
                text: PLACEHOLDER_LABEL.to_owned(),
                x: 20.0,
                top: 40.0 - size,
                color: Rgb8::new(255, 255, 255),
                anchor: Anchor::Start,
            }],
        }
    }

    fn run_external(&self) -> DemoResult<()> {
        let tmp = tempfile::TempDir::new().with_context(|| "create temporary directory")?;
        let card = tmp.path().join("frame.png");
        let frames = tmp.path().join("frames.gif");
        let Canvas { width, height } = self.opts.canvas;

        run_tool(
            Command::new("convert")
                .args(["-size", &format!("{width}x{height}"), "xc:black"])
                .args(["-font", "DejaVu-Sans-Mono", "-pointsize"])
                .arg(self.opts.font_size.to_string())
                .args(["-fill", "white", "-annotate", "+20+40", PLACEHOLDER_LABEL])
                .arg(&card),
        )?;
        run_tool(
            Command::new("convert")
                .arg(&card)
                .args(["-duplicate", &(self.opts.frame_count - 1).to_string()])
                .args(["-delay", &(self.opts.frame_delay_ms / 10).to_string()])
                .args(["-loop", "0"])
                .arg(&frames),
        )?;
        run_tool(
            Command::new("gifsicle")
                .arg("-i")
                .arg(&frames)
                .arg("--optimize=3")
                .arg("-o")
                .arg(&self.out_path),
        )?;
        Ok(())
    }

    fn run_in_process(&self) -> DemoResult<()> {
        let fonts = FontSet::load_default();
        let card = rasterize(&self.placeholder_scene(), &fonts)?;
        let frames = vec![card; self.opts.frame_count];

        let opts = GifOpts::new(&self.out_path).with_frame_delay_ms(self.opts.frame_delay_ms);
        if GifAssembler::new(opts).assemble(frames)? {
            Ok(())
        } else {
            Err(DemoError::encode("placeholder card produced no frames"))
        }
    }
}

fn external_tools_available() -> bool {
    is_tool_on_path("convert", "-version") && is_tool_on_path("gifsicle", "--version")
}

/// Return `true` when `tool` can be invoked from `PATH`.
pub fn is_tool_on_path(tool: &str, version_flag: &str) -> bool {
    Command::new(tool)
        .arg(version_flag)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

fn run_tool(cmd: &mut Command) -> DemoResult<()> {
    let program = cmd.get_program().to_string_lossy().into_owned();
    tracing::debug!(?cmd, "running external tool");
    let out = cmd
        .stdin(Stdio::null())
        .output()
        .map_err(|e| DemoError::encode(format!("failed to spawn {program}: {e}")))?;
    if !out.status.success() {
        let stderr = String::from_utf8_lossy(&out.stderr);
        return Err(DemoError::encode(format!(
            "{program} exited with status {}: {}",
            out.status,
            stderr.trim()
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/cast/convert.rs"]
mod tests;
