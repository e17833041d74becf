//! Shared fixtures: a rectangle-glyph font and a scripted font service.

use std::collections::HashMap;

use glyphsheet_font_fetch::{Fetch, HttpError, HttpResponse, StatusCode};
use kurbo::{Rect, Shape};
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

/// TrueType font mapping `A`, `a`, `b`, `B`, `1`, and `!` to filled boxes.
pub fn box_font() -> Vec<u8> {
    let boxes = [
        ('A', 700.0),
        ('a', 500.0),
        ('b', 720.0),
        ('B', 700.0),
        ('1', 700.0),
        ('!', 700.0),
    ];

    let mut glyf_builder = GlyfLocaBuilder::new();
    glyf_builder.add_glyph(&Glyph::Empty).unwrap();
    let mut mappings = Vec::new();
    for (index, (ch, top)) in boxes.iter().enumerate() {
        let path = Rect::new(100.0, 0.0, 450.0, *top).to_path(0.1);
        let simple = SimpleGlyph::from_bezpath(&path).unwrap();
        glyf_builder.add_glyph(&Glyph::Simple(simple)).unwrap();
        mappings.push((*ch, GlyphId::new(index as u32 + 1)));
    }
    let (glyf, loca, loca_format) = glyf_builder.build();
    let num_glyphs = boxes.len() as u16 + 1;

    let head = Head {
        units_per_em: 1000,
        y_min: -200,
        x_max: 600,
        y_max: 800,
        index_to_loc_format: match loca_format {
            LocaFormat::Short => 0,
            LocaFormat::Long => 1,
        },
        ..Default::default()
    };
    let hhea = Hhea {
        ascender: FWord::new(800),
        descender: FWord::new(-200),
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

/// Answers known URLs with canned responses and everything else with 404.
#[derive(Debug, Clone, Default)]
pub struct ScriptedService {
    routes: HashMap<String, (StatusCode, Vec<u8>)>,
}

impl ScriptedService {
    pub fn route(mut self, url: &str, status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        self.routes.insert(url.to_string(), (status, body.into()));
        self
    }
}

impl Fetch for ScriptedService {
    fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
        let (status, body) =
            self.routes.get(url).cloned().unwrap_or((StatusCode::NOT_FOUND, Vec::new()));
        Ok(HttpResponse { status, body })
    }
}
