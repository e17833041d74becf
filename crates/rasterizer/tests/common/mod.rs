//! In-memory fixture font with rectangular glyphs.

use kurbo::{BezPath, Rect, Shape};
use write_fonts::{
    FontBuilder,
    tables::{
        cmap::Cmap,
        glyf::{GlyfLocaBuilder, Glyph, SimpleGlyph},
        head::Head,
        hhea::Hhea,
        hmtx::{Hmtx, LongMetric},
        loca::LocaFormat,
        maxp::Maxp,
    },
    types::{FWord, GlyphId, UfWord},
};

pub const UNITS_PER_EM: u16 = 1000;
pub const ASCENDER: i16 = 800;
pub const DESCENDER: i16 = -200;

/// Glyph boxes in font units: (char, x_min, y_min, x_max, y_max).
const BOXES: &[(char, f64, f64, f64, f64)] = &[
    ('A', 100.0, 0.0, 500.0, 700.0),
    ('B', 100.0, 0.0, 480.0, 700.0),
    ('a', 100.0, 0.0, 450.0, 500.0),
    ('b', 100.0, 0.0, 450.0, 720.0),
    ('g', 100.0, -200.0, 450.0, 500.0),
    ('1', 200.0, 0.0, 400.0, 700.0),
    ('!', 220.0, 0.0, 280.0, 700.0),
];

fn rect_path(x0: f64, y0: f64, x1: f64, y1: f64) -> BezPath {
    Rect::new(x0, y0, x1, y1).to_path(0.1)
}

/// Build a TrueType font whose glyphs are filled rectangles.
pub fn box_font() -> Vec<u8> {
    let mut glyf_builder = GlyfLocaBuilder::new();
    glyf_builder.add_glyph(&Glyph::Empty).unwrap();
    glyf_builder.add_glyph(&Glyph::Empty).unwrap();

    let mut mappings = vec![(' ', GlyphId::new(1))];
    for (index, (ch, x0, y0, x1, y1)) in BOXES.iter().enumerate() {
        let simple = SimpleGlyph::from_bezpath(&rect_path(*x0, *y0, *x1, *y1)).unwrap();
        glyf_builder.add_glyph(&Glyph::Simple(simple)).unwrap();
        mappings.push((*ch, GlyphId::new(index as u32 + 2)));
    }
    let (glyf, loca, loca_format) = glyf_builder.build();
    let num_glyphs = BOXES.len() as u16 + 2;

    let head = Head {
        units_per_em: UNITS_PER_EM,
        x_min: 0,
        y_min: DESCENDER,
        x_max: 600,
        y_max: ASCENDER,
        index_to_loc_format: match loca_format {
            LocaFormat::Short => 0,
            LocaFormat::Long => 1,
        },
        ..Default::default()
    };

    let hhea = Hhea {
        ascender: FWord::new(ASCENDER),
        descender: FWord::new(DESCENDER),
        advance_width_max: UfWord::new(600),
        caret_slope_rise: 1,
        number_of_h_metrics: num_glyphs,
        ..Default::default()
    };

    let hmtx = Hmtx {
        h_metrics: (0..num_glyphs).map(|_| LongMetric { advance: 600, side_bearing: 0 }).collect(),
        left_side_bearings: vec![],
    };

    let maxp = Maxp { num_glyphs, ..Default::default() };
    let cmap = Cmap::from_mappings(mappings).unwrap();

    let mut builder = FontBuilder::new();
    builder.add_table(&head).unwrap();
    builder.add_table(&hhea).unwrap();
    builder.add_table(&hmtx).unwrap();
    builder.add_table(&maxp).unwrap();
    builder.add_table(&cmap).unwrap();
    builder.add_table(&glyf).unwrap();
    builder.add_table(&loca).unwrap();
    builder.build()
}
