use super::*;

#[test]
fn tool_name_is_matched_case_insensitively() {
    assert_eq!(classify("$ npm run keploy:record"), LineKind::Tool);
    assert_eq!(classify("🐰 KEPLOY agent"), LineKind::Tool);
}

#[test]
fn success_markers() {
    assert_eq!(classify("✅ PASSED"), LineKind::Success);
    assert_eq!(classify("Build SUCCESSFUL"), LineKind::Success);
}

#[test]
fn priority_order_resolves_multiple_markers() {
    // tool name beats everything else
    assert_eq!(classify("$ npm run keploy:test"), LineKind::Tool);
    // success beats record and test
    assert_eq!(classify("🐰 ✅ Test cases recorded"), LineKind::Success);
    // record beats test
    assert_eq!(classify("recording tests"), LineKind::Recording);
    assert_eq!(classify("=== RUNNING TESTS ==="), LineKind::Testing);
}

#[test]
fn unmatched_lines_fall_back_to_output() {
    assert_eq!(classify("$ cd backend"), LineKind::Output);
    assert_eq!(classify(""), LineKind::Output);
    assert_eq!(classify("📊 Coverage: 85%"), LineKind::Output);
}

#[test]
fn palette_maps_categories_to_designated_colors() {
    let p = Palette::default();
    assert_eq!(p.color_for_line("keploy").to_hex(), "#58A6FF");
    assert_eq!(p.color_for_line("✅").to_hex(), "#3FB950");
    assert_eq!(p.color_for_line("record").to_hex(), "#D29922");
    assert_eq!(p.color_for_line("test").to_hex(), "#A371F7");
    assert_eq!(p.color_for_line("$ cmd").to_hex(), "#C9D1D9");
    assert_eq!(p.background.to_hex(), "#0D1117");
}

#[test]
fn default_style_is_800_by_400_with_20px_lines() {
    let s = FrameStyle::default();
    assert_eq!(s.canvas, Canvas::new(800, 400));
    assert_eq!(s.line_height, 20.0);
    assert_eq!(s.top_offset, 20.0);
    assert_eq!(s.left_margin, 20.0);
}
