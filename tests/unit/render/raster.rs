use super::*;
use crate::foundation::core::{Canvas, Rgb8};

fn blank(canvas: Canvas, background: Rgb8) -> Scene {
    Scene {
        canvas,
        background,
        font_size: 12.0,
        items: Vec::new(),
    }
}

#[test]
fn empty_scene_is_solid_background() {
    let fonts = FontSet::load_default();
    let bg = Rgb8::from_u32(0x0D1117);
    let img = rasterize(&blank(Canvas::new(800, 400), bg), &fonts).unwrap();

    assert_eq!(img.dimensions(), (800, 400));
    assert!(img.pixels().all(|p| *p == bg.to_rgba()));
}

#[test]
fn zero_sized_canvas_is_rejected() {
    let fonts = FontSet::load_default();
    let err = rasterize(&blank(Canvas::new(0, 10), Rgb8::new(0, 0, 0)), &fonts).unwrap_err();
    assert!(matches!(err, DemoError::Validation(_)));
}

#[test]
fn text_never_touches_pixels_outside_its_band() {
    use crate::render::scene::{Anchor, TextItem};

    let fonts = FontSet::load_default();
    let bg = Rgb8::new(0, 0, 0);
    let mut scene = blank(Canvas::new(200, 100), bg);
    scene.items.push(TextItem {
        text: "keploy".to_owned(),
        x: 10.0,
        top: 40.0,
        color: Rgb8::new(255, 255, 255),
        anchor: Anchor::Start,
    });
    let img = rasterize(&scene, &fonts).unwrap();

    // Rows well above the line box stay untouched whichever face is used.
    for y in 0..30 {
        for x in 0..200 {
            assert_eq!(*img.get_pixel(x, y), bg.to_rgba());
        }
    }
}

fn count_color(img: &RgbaImage, rows: std::ops::Range<u32>, color: Rgb8) -> usize {
    let target = color.to_rgba();
    rows.flat_map(|y| (0..img.width()).map(move |x| (x, y)))
        .filter(|&(x, y)| {
            let p = img.get_pixel(x, y);
            (0..3).all(|c| p[c].abs_diff(target[c]) <= 12)
        })
        .count()
}

#[test]
fn drawn_band_contains_the_item_color() {
    use crate::render::scene::{Anchor, TextItem};

    let fonts = FontSet::load_default();
    let blue = Rgb8::from_u32(0x58A6FF);
    let purple = Rgb8::from_u32(0xA371F7);
    let mut scene = blank(Canvas::new(400, 120), Rgb8::from_u32(0x0D1117));
    scene.items.push(TextItem {
        text: "keploy record".to_owned(),
        x: 20.0,
        top: 20.0,
        color: blue,
        anchor: Anchor::Start,
    });
    scene.items.push(TextItem {
        text: "[1/1]".to_owned(),
        x: 380.0,
        top: 80.0,
        color: purple,
        anchor: Anchor::End,
    });
    let img = rasterize(&scene, &fonts).unwrap();

    assert!(count_color(&img, 20..40, blue) > 0);
    assert_eq!(count_color(&img, 20..40, purple), 0);
    assert!(count_color(&img, 80..100, purple) > 0);
    assert_eq!(count_color(&img, 80..100, blue), 0);
}
