//! Text measurers.
//!
//! [`ApproxMeasurer`] needs no font files and is fully deterministic, which
//! makes it the default of the generator and the measurer of choice for
//! tests. [`ShapingMeasurer`] shapes text with rustybuzz against real faces
//! that come from a [`FontProvider`] or, with the `system-fonts` feature,
//! from a fontdb database.

use rustybuzz::{Feature, UnicodeBuffer};
use simple_report_style::ResolvedStyle;
use simple_report_traits::{FontProvider, FontQuery, FontSpec, SharedFontData, TextExtent, TextMeasurer};
use simple_report_types::mm_to_internal;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};
use ttf_parser::Tag;

/// Builds the font request for a resolved style; the size is converted to
/// internal units.
pub fn font_spec(style: &ResolvedStyle) -> FontSpec {
    FontSpec::new(style.font_name.clone(), mm_to_internal(style.font_size_mm))
        .with_bold(style.bold)
        .with_italic(style.italic)
}

/// Fixed-advance metrics: every character is `advance_ratio × size` wide
/// (widened by `bold_factor` for bold text) and a line is
/// `line_height_ratio × size` tall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproxMeasurer {
    pub advance_ratio: f64,
    pub line_height_ratio: f64,
    pub bold_factor: f64,
}

impl Default for ApproxMeasurer {
    fn default() -> Self {
        Self {
            advance_ratio: 0.5,
            line_height_ratio: 1.2,
            bold_factor: 1.1,
        }
    }
}

impl ApproxMeasurer {
    pub fn new() -> Self {
        Self::default()
    }

    fn width(&self, text: &str, font: &FontSpec) -> f64 {
        let chars = text.chars().count() as f64;
        let bold = if font.bold { self.bold_factor } else { 1.0 };
        chars * self.advance_ratio * font.size * bold
    }
}

impl TextMeasurer for ApproxMeasurer {
    fn measure(&self, text: &str, font: &FontSpec) -> TextExtent {
        TextExtent::new(self.width(text, font), self.line_height(font))
    }

    fn line_height(&self, font: &FontSpec) -> f64 {
        self.line_height_ratio * font.size
    }

    fn name(&self) -> &'static str {
        "ApproxMeasurer"
    }
}

#[derive(Debug, Clone)]
struct LoadedFace {
    data: SharedFontData,
    index: u32,
}

impl LoadedFace {
    fn as_face(&self) -> Option<rustybuzz::Face<'_>> {
        rustybuzz::Face::from_slice(&self.data, self.index)
    }
}

type FaceKey = (String, bool, bool);

/// Measures text by shaping it with rustybuzz.
///
/// Faces are resolved in order from the external provider, then (with the
/// `system-fonts` feature) from fontdb. Lookups, including misses, are
/// cached per family and style. When no face is found the approximate
/// metrics are used.
#[derive(Clone)]
pub struct ShapingMeasurer {
    #[cfg(feature = "system-fonts")]
    db: Arc<RwLock<fontdb::Database>>,
    provider: Option<Arc<dyn FontProvider>>,
    faces: Arc<RwLock<HashMap<FaceKey, Option<LoadedFace>>>>,
    fallback: ApproxMeasurer,
}

impl std::fmt::Debug for ShapingMeasurer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapingMeasurer")
            .field("provider", &self.provider.as_ref().map(|p| p.name()))
            .field("fallback", &self.fallback)
            .finish()
    }
}

impl Default for ShapingMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapingMeasurer {
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "system-fonts")]
            db: Arc::new(RwLock::new(fontdb::Database::new())),
            provider: None,
            faces: Arc::new(RwLock::new(HashMap::new())),
            fallback: ApproxMeasurer::default(),
        }
    }

    /// Faces from the provider take precedence over fontdb.
    pub fn with_provider(mut self, provider: Arc<dyn FontProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn with_fallback(mut self, fallback: ApproxMeasurer) -> Self {
        self.fallback = fallback;
        self
    }

    #[cfg(feature = "system-fonts")]
    pub fn with_system_fonts(self) -> Self {
        if let Ok(mut db) = self.db.write() {
            db.load_system_fonts();
            log::debug!("Loaded {} system font faces", db.len());
        }
        self.clear_cache();
        self
    }

    /// Adds a font binary to the fontdb database.
    #[cfg(feature = "system-fonts")]
    pub fn add_font_data(&self, data: Vec<u8>) {
        log::debug!("add_font_data called with {} bytes", data.len());
        if let Ok(mut db) = self.db.write() {
            db.load_font_data(data);
        }
        self.clear_cache();
    }

    fn clear_cache(&self) {
        if let Ok(mut faces) = self.faces.write() {
            faces.clear();
        }
    }

    fn face_for(&self, font: &FontSpec) -> Option<LoadedFace> {
        let key = (font.family.to_lowercase(), font.bold, font.italic);
        if let Ok(faces) = self.faces.read()
            && let Some(cached) = faces.get(&key)
        {
            return cached.clone();
        }

        let loaded = self.load_face(font);
        if loaded.is_none() {
            log::debug!("No face for '{}' (bold: {}, italic: {})", font.family, font.bold, font.italic);
        }
        if let Ok(mut faces) = self.faces.write() {
            faces.insert(key, loaded.clone());
        }
        loaded
    }

    fn load_face(&self, font: &FontSpec) -> Option<LoadedFace> {
        if let Some(provider) = &self.provider {
            let query = FontQuery::new(font.family.clone())
                .with_bold(font.bold)
                .with_italic(font.italic);
            match provider.load_font(&query) {
                Ok(data) => return Some(LoadedFace { data, index: 0 }),
                Err(e) => log::debug!("{} could not load font: {}", provider.name(), e),
            }
        }
        self.load_from_fontdb(font)
    }

    #[cfg(feature = "system-fonts")]
    fn load_from_fontdb(&self, font: &FontSpec) -> Option<LoadedFace> {
        let db = self.db.read().ok()?;
        let query = fontdb::Query {
            families: &[fontdb::Family::Name(&font.family), fontdb::Family::SansSerif],
            weight: if font.bold {
                fontdb::Weight::BOLD
            } else {
                fontdb::Weight::NORMAL
            },
            stretch: fontdb::Stretch::Normal,
            style: if font.italic {
                fontdb::Style::Italic
            } else {
                fontdb::Style::Normal
            },
        };
        let id = db.query(&query)?;
        db.with_face_data(id, |data, index| LoadedFace {
            data: Arc::new(data.to_vec()),
            index,
        })
    }

    #[cfg(not(feature = "system-fonts"))]
    fn load_from_fontdb(&self, _font: &FontSpec) -> Option<LoadedFace> {
        None
    }
}

fn shaping_features() -> &'static [Feature] {
    static FEATURES: OnceLock<Vec<Feature>> = OnceLock::new();
    FEATURES.get_or_init(|| {
        vec![
            Feature::new(Tag::from_bytes(b"liga"), 1, ..),
            Feature::new(Tag::from_bytes(b"kern"), 1, ..),
        ]
    })
}

fn face_line_height(face: &rustybuzz::Face<'_>, size: f64) -> f64 {
    let upem = f64::from(face.units_per_em().max(1));
    let units = f64::from(face.ascender()) - f64::from(face.descender()) + f64::from(face.line_gap());
    units * size / upem
}

impl TextMeasurer for ShapingMeasurer {
    fn measure(&self, text: &str, font: &FontSpec) -> TextExtent {
        let Some(loaded) = self.face_for(font) else {
            return self.fallback.measure(text, font);
        };
        let Some(face) = loaded.as_face() else {
            return self.fallback.measure(text, font);
        };
        let height = face_line_height(&face, font.size);
        if text.is_empty() {
            return TextExtent::new(0.0, height);
        }

        let mut buffer = UnicodeBuffer::new();
        buffer.push_str(text);
        let glyphs = rustybuzz::shape(&face, shaping_features(), buffer);
        let advance: i64 = glyphs.glyph_positions().iter().map(|p| i64::from(p.x_advance)).sum();
        let upem = f64::from(face.units_per_em().max(1));
        TextExtent::new(advance as f64 * font.size / upem, height)
    }

    fn line_height(&self, font: &FontSpec) -> f64 {
        self.face_for(font)
            .as_ref()
            .and_then(LoadedFace::as_face)
            .map(|face| face_line_height(&face, font.size))
            .unwrap_or_else(|| self.fallback.line_height(font))
    }

    fn name(&self) -> &'static str {
        "ShapingMeasurer"
    }
}
