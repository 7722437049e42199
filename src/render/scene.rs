use crate::foundation::core::{Canvas, Rgb8};

/// Horizontal anchoring of a [`TextItem`] relative to its `x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// `x` is the left edge.
    Start,
    /// `x` is the right edge.
    End,
}

/// One line of text at a fixed pixel position.
#[derive(Clone, Debug, PartialEq)]
pub struct TextItem {
    /// Text to draw; whitespace is preserved.
    pub text: String,
    /// Anchor x in pixels.
    pub x: f32,
    /// Top of the line box in pixels.
    pub top: f32,
    /// Fill color.
    pub color: Rgb8,
    /// How `x` is interpreted.
    pub anchor: Anchor,
}

/// A flat background with text drawn over it.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Output size.
    pub canvas: Canvas,
    /// Background fill.
    pub background: Rgb8,
    /// Font size shared by every item.
    pub font_size: f32,
    /// Items in draw order.
    pub items: Vec<TextItem>,
}

impl Scene {
    /// Serialize to a standalone SVG document.
    ///
    /// Baselines sit one font size below each item's `top`, so positions do not depend on the
    /// metrics of whichever face ends up drawing the text.
    pub fn to_svg(&self, family: Option<&str>) -> String {
        let Canvas { width, height } = self.canvas;
        let family = match family {
            Some(name) => format!("'{}', monospace", escape_xml(name)),
            None => "monospace".to_owned(),
        };

        let mut svg = String::with_capacity(256 + self.items.len() * 128);
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        ));
        svg.push_str(&format!(
            r#"<rect x="0" y="0" width="{width}" height="{height}" fill="{}"/>"#,
            self.background.to_hex()
        ));
        for item in &self.items {
            let anchor = match item.anchor {
                Anchor::Start => "start",
                Anchor::End => "end",
            };
            svg.push_str(&format!(
                r#"<text x="{}" y="{}" font-family="{family}" font-size="{}" fill="{}" text-anchor="{anchor}" xml:space="preserve">{}</text>"#,
                item.x,
                item.top + self.font_size,
                self.font_size,
                item.color.to_hex(),
                escape_xml(&item.text),
            ));
        }
        svg.push_str("</svg>");
        svg
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
