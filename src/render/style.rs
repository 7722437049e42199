use crate::foundation::core::{Canvas, Rgb8};

/// Display category of one transcript line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Mentions the recorded tool by name.
    Tool,
    /// Reports a success.
    Success,
    /// Talks about recording traffic.
    Recording,
    /// Talks about running tests.
    Testing,
    /// Anything else.
    Output,
}

// First match wins. Markers are lowercase and matched against the lowercased line.
const RULES: [(LineKind, &[&str]); 4] = [
    (LineKind::Tool, &["keploy"]),
    (LineKind::Success, &["✅", "success"]),
    (LineKind::Recording, &["record"]),
    (LineKind::Testing, &["test"]),
];

/// Categorize a line by the first rule whose marker it contains (case-insensitive).
pub fn classify(line: &str) -> LineKind {
    let lower = line.to_lowercase();
    RULES
        .iter()
        .find(|(_, markers)| markers.iter().any(|m| lower.contains(m)))
        .map_or(LineKind::Output, |(kind, _)| *kind)
}

/// Colors used by the frame renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Canvas fill.
    pub background: Rgb8,
    /// [`LineKind::Tool`] lines.
    pub tool: Rgb8,
    /// [`LineKind::Success`] lines.
    pub success: Rgb8,
    /// [`LineKind::Recording`] lines.
    pub recording: Rgb8,
    /// [`LineKind::Testing`] lines.
    pub testing: Rgb8,
    /// [`LineKind::Output`] lines.
    pub output: Rgb8,
    /// Frame counter label.
    pub counter: Rgb8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb8::from_u32(0x0D1117),
            tool: Rgb8::from_u32(0x58A6FF),
            success: Rgb8::from_u32(0x3FB950),
            recording: Rgb8::from_u32(0xD29922),
            testing: Rgb8::from_u32(0xA371F7),
            output: Rgb8::from_u32(0xC9D1D9),
            counter: Rgb8::from_u32(0x6E7681),
        }
    }
}

impl Palette {
    /// Color for a line category.
    pub fn color_for(&self, kind: LineKind) -> Rgb8 {
        match kind {
            LineKind::Tool => self.tool,
            LineKind::Success => self.success,
            LineKind::Recording => self.recording,
            LineKind::Testing => self.testing,
            LineKind::Output => self.output,
        }
    }

    /// Color for a line of text; a pure function of the line content.
    pub fn color_for_line(&self, line: &str) -> Rgb8 {
        self.color_for(classify(line))
    }
}

/// Fixed layout of a transcript frame. All positions are in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStyle {
    /// Output size (800x400).
    pub canvas: Canvas,
    /// Colors.
    pub palette: Palette,
    /// Font size of every text item.
    pub font_size: f32,
    /// X of the left edge of transcript lines.
    pub left_margin: f32,
    /// Top of the first drawn transcript line.
    pub top_offset: f32,
    /// Vertical advance between drawn transcript lines.
    pub line_height: f32,
    /// Distance from the right edge to the end of the counter label.
    pub counter_right_inset: f32,
    /// Distance from the bottom edge to the top of the counter label.
    pub counter_bottom_inset: f32,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            canvas: Canvas::new(800, 400),
            palette: Palette::default(),
            font_size: 12.0,
            left_margin: 20.0,
            top_offset: 20.0,
            line_height: 20.0,
            counter_right_inset: 20.0,
            counter_bottom_inset: 30.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/style.rs"]
mod tests;
