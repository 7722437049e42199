use anyhow::Context as _;
use image::RgbaImage;

use crate::foundation::error::{DemoError, DemoResult};
use crate::render::font::FontSet;
use crate::render::scene::Scene;

/// Rasterize `scene` into a straight-alpha RGBA image of exactly `scene.canvas` size.
pub fn rasterize(scene: &Scene, fonts: &FontSet) -> DemoResult<RgbaImage> {
    let (width, height) = (scene.canvas.width, scene.canvas.height);
    if width == 0 || height == 0 {
        return Err(DemoError::validation("canvas width/height must be non-zero"));
    }

    let svg = scene.to_svg(fonts.family());
    let opts = usvg::Options {
        fontdb: fonts.fontdb(),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(&svg, &opts).with_context(|| "parse frame svg")?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| DemoError::render("failed to allocate frame pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );

    let mut out = RgbaImage::new(width, height);
    for (dst, src) in out.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = image::Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
