mod common;

use std::fs::read_dir;

use glyphsheet_charset::{CharacterSpec, Role};
use glyphsheet_rasterizer::{GlyphRasterizer, OutlineFont, RasterizationError, Typeface};
use image::RgbaImage;

const EM_SIZE: f32 = 64.0;

fn load_font() -> OutlineFont {
    OutlineFont::from_vec(common::box_font(), EM_SIZE).unwrap()
}

fn spec(ch: char, role: Role) -> CharacterSpec {
    CharacterSpec { ch, role }
}

/// Rows containing any non-transparent pixel: (first, last).
fn ink_rows(image: &RgbaImage) -> Option<(u32, u32)> {
    let rows: Vec<u32> = (0..image.height())
        .filter(|&y| (0..image.width()).any(|x| image.get_pixel(x, y)[3] > 0))
        .collect();
    Some((*rows.first()?, *rows.last()?))
}

#[test]
fn test_metrics_at_nominal_size() {
    let metrics = load_font().metrics();
    assert_eq!(metrics.em_size, EM_SIZE);
    assert!((metrics.ascent - 51.2).abs() < 0.01);
    assert!((metrics.descent - 12.8).abs() < 0.01);
}

#[test]
fn test_every_image_is_canvas_sized() {
    let font = load_font();
    for size in [32, 64, 128, 200] {
        let rasterizer = GlyphRasterizer::new(size);
        for spec in CharacterSpec::derive_all("Ab1! g") {
            let glyph = rasterizer.render(&font, &spec).unwrap();
            assert_eq!(glyph.image.dimensions(), (size, size), "{spec:?} at {size}");
        }
    }
}

#[test]
fn test_space_is_fully_transparent() {
    let font = load_font();
    let glyph = GlyphRasterizer::new(128).render(&font, &spec(' ', Role::Symbol)).unwrap();

    assert_eq!(glyph.name, "custom_font_S_space");
    assert!(glyph.image.pixels().all(|p| p.0 == [0, 0, 0, 0]));
}

#[test]
fn test_glyph_is_white_and_centered() {
    let font = load_font();
    let glyph = GlyphRasterizer::new(128).render(&font, &spec('A', Role::Uppercase)).unwrap();

    assert_eq!(glyph.name, "custom_font_U_A");
    assert_eq!(glyph.image.get_pixel(64, 80).0, [255, 255, 255, 255]);
    assert_eq!(glyph.image.get_pixel(2, 80)[3], 0);
    assert_eq!(glyph.image.get_pixel(125, 80)[3], 0);

    let columns: Vec<u32> = (0..128)
        .filter(|&x| (0..128).any(|y| glyph.image.get_pixel(x, y)[3] > 0))
        .collect();
    let left_margin = columns[0] as i32;
    let right_margin = 127 - *columns.last().unwrap() as i32;
    assert!((left_margin - right_margin).abs() <= 2, "{left_margin} vs {right_margin}");
}

#[test]
fn test_glyphs_share_baseline() {
    let font = load_font();
    let rasterizer = GlyphRasterizer::new(128);

    for (ch, role) in [('A', Role::Uppercase), ('a', Role::Lowercase), ('1', Role::Symbol)] {
        let glyph = rasterizer.render(&font, &spec(ch, role)).unwrap();
        let (_, bottom) = ink_rows(&glyph.image).unwrap();
        assert!((100..=103).contains(&bottom), "'{ch}' ends at row {bottom}");
    }
}

#[test]
fn test_descender_extends_below_baseline() {
    let font = load_font();
    let glyph = GlyphRasterizer::new(128).render(&font, &spec('g', Role::Lowercase)).unwrap();
    let (_, bottom) = ink_rows(&glyph.image).unwrap();
    assert!(bottom > 110, "descender ends at row {bottom}");
}

#[test]
fn test_uppercase_is_shorter_than_unscaled() {
    let font = load_font();
    let rasterizer = GlyphRasterizer::new(128);

    let upper = rasterizer.render(&font, &spec('A', Role::Uppercase)).unwrap();
    let (top, bottom) = ink_rows(&upper.image).unwrap();

    // 700 units at 62px/em is ~43 rows; without the 0.70 factor it would be ~62.
    let height = bottom - top + 1;
    assert!((42..=46).contains(&height), "uppercase ink height {height}");
}

#[test]
fn test_missing_glyph_renders_empty() {
    let font = load_font();
    let glyph = GlyphRasterizer::new(64).render(&font, &spec('z', Role::Lowercase)).unwrap();
    assert_eq!(glyph.name, "custom_font_L_z");
    assert!(ink_rows(&glyph.image).is_none());
}

#[test]
fn test_zero_scaled_size_is_invalid_font() {
    let font = load_font();
    let dir = tempfile::tempdir().unwrap();

    let err = GlyphRasterizer::new(1)
        .render_to(&font, &spec('A', Role::Uppercase), dir.path())
        .unwrap_err();

    assert!(matches!(err, RasterizationError::InvalidFont { ch: 'A', .. }));
    assert_eq!(read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_render_to_writes_one_png_per_variant() {
    let font = load_font();
    let dir = tempfile::tempdir().unwrap();
    let rasterizer = GlyphRasterizer::new(128);

    for spec in CharacterSpec::derive_all("Ab1!") {
        rasterizer.render_to(&font, &spec, dir.path()).unwrap();
    }

    let mut names: Vec<String> = read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "custom_font_L_a.png",
            "custom_font_L_b.png",
            "custom_font_S_1.png",
            "custom_font_S_exclamation.png",
            "custom_font_U_A.png",
            "custom_font_U_B.png",
        ]
    );

    let decoded = image::open(dir.path().join("custom_font_U_A.png")).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (128, 128));
}

#[test]
fn test_garbage_font_fails_to_load() {
    assert!(matches!(
        OutlineFont::from_vec(b"definitely not a font".to_vec(), EM_SIZE),
        Err(RasterizationError::Load(_))
    ));
}
