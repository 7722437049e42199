use super::*;

fn scene_with(text: &str) -> Scene {
    Scene {
        canvas: Canvas::new(800, 400),
        background: Rgb8::from_u32(0x0D1117),
        font_size: 12.0,
        items: vec![TextItem {
            text: text.to_owned(),
            x: 20.0,
            top: 20.0,
            color: Rgb8::from_u32(0x58A6FF),
            anchor: Anchor::Start,
        }],
    }
}

#[test]
fn svg_carries_size_background_and_items() {
    let svg = scene_with("$ keploy record").to_svg(Some("DejaVu Sans Mono"));
    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains(r#"width="800" height="400""#));
    assert!(svg.contains(r##"fill="#0D1117""##));
    assert!(svg.contains(r##"fill="#58A6FF""##));
    assert!(svg.contains("'DejaVu Sans Mono', monospace"));
    assert!(svg.contains(">$ keploy record</text>"));
}

#[test]
fn baseline_is_one_font_size_below_top() {
    let svg = scene_with("x").to_svg(None);
    assert!(svg.contains(r#"x="20" y="32""#));
    assert!(svg.contains(r#"font-family="monospace""#));
}

#[test]
fn markup_characters_are_escaped() {
    let svg = scene_with(r#"<a href="x">&'</a>"#).to_svg(None);
    assert!(svg.contains("&lt;a href=&quot;x&quot;&gt;&amp;&apos;&lt;/a&gt;"));
    assert!(!svg.contains("<a href"));
}

#[test]
fn end_anchor_is_emitted() {
    let mut scene = scene_with("[1/2]");
    scene.items[0].anchor = Anchor::End;
    assert!(scene.to_svg(None).contains(r#"text-anchor="end""#));
}
