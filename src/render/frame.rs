use image::RgbaImage;

use crate::foundation::error::DemoResult;
use crate::render::font::FontSet;
use crate::render::raster::rasterize;
use crate::render::scene::{Anchor, Scene, TextItem};
use crate::render::style::FrameStyle;
use crate::script::sequence::FrameState;

/// Turns transcript frame states into fixed-size color-coded terminal frames.
#[derive(Clone, Debug)]
pub struct FrameRenderer {
    style: FrameStyle,
    fonts: FontSet,
}

impl FrameRenderer {
    /// Create a renderer with an explicit style and font set.
    pub fn new(style: FrameStyle, fonts: FontSet) -> Self {
        Self { style, fonts }
    }

    /// Default 800x400 style with the preferred monospace font (or its fallback).
    pub fn with_default_font() -> Self {
        Self::new(FrameStyle::default(), FontSet::load_default())
    }

    /// Layout settings in use.
    pub fn style(&self) -> &FrameStyle {
        &self.style
    }

    /// Fonts in use.
    pub fn fonts(&self) -> &FontSet {
        &self.fonts
    }

    /// Lay out one frame without rasterizing it.
    ///
    /// Blank lines are skipped and do not advance the vertical position. The last item is
    /// always the `[step/total]` counter, right-aligned near the bottom.
    pub fn scene(&self, state: &FrameState) -> Scene {
        let style = &self.style;
        let mut items = Vec::new();

        let mut top = style.top_offset;
        for line in state.text.split('\n') {
            if line.trim().is_empty() {
                continue;
            }
            items.push(TextItem {
                text: line.to_owned(),
                x: style.left_margin,
                top,
                color: style.palette.color_for_line(line),
                anchor: Anchor::Start,
            });
            top += style.line_height;
        }

        items.push(TextItem {
            text: state.counter_label(),
            x: style.canvas.width as f32 - style.counter_right_inset,
            top: style.canvas.height as f32 - style.counter_bottom_inset,
            color: style.palette.counter,
            anchor: Anchor::End,
        });

        Scene {
            canvas: style.canvas,
            background: style.palette.background,
            font_size: style.font_size,
            items,
        }
    }

    /// Render one frame.
    pub fn render(&self, state: &FrameState) -> DemoResult<RgbaImage> {
        rasterize(&self.scene(state), &self.fonts)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
