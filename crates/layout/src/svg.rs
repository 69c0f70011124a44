//! Intrinsic size of SVG documents.
//!
//! SVG data is never rendered here; the document is only parsed far enough
//! to find out how large it wants to be.

use simple_report_types::Size;
use simple_report_types::units::{MM_PER_INCH, MM_PER_POINT, MM_PER_PX};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SvgError {
    #[error("SVG data is not well-formed XML: {0}")]
    Parse(#[from] roxmltree::Error),
    #[error("Root element is <{0}>, not <svg>.")]
    NotSvg(String),
    #[error("SVG document declares neither a usable width/height nor a viewBox.")]
    NoSize,
}

/// Converts an SVG length (`"12mm"`, `"2in"`, `"300"`, ...) to millimeters.
/// Unitless values are pixels at 96 dpi. Percentages and non-positive
/// values yield `None`.
pub fn parse_length_mm(value: &str) -> Option<f64> {
    let value = value.trim();
    let split = value
        .find(|c: char| c.is_ascii_alphabetic() || c == '%')
        .unwrap_or(value.len());
    let (number, unit) = value.split_at(split);
    let number: f64 = number.trim().parse().ok()?;
    let factor = match unit.trim() {
        "" | "px" => MM_PER_PX,
        "mm" => 1.0,
        "cm" => 10.0,
        "in" => MM_PER_INCH,
        "pt" => MM_PER_POINT,
        "pc" => 12.0 * MM_PER_POINT,
        _ => return None,
    };
    let mm = number * factor;
    (mm.is_finite() && mm > 0.0).then_some(mm)
}

fn parse_view_box(value: &str) -> Option<(f64, f64)> {
    let parts: Vec<f64> = value
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect::<Result<_, _>>()
        .ok()?;
    match parts.as_slice() {
        [_, _, w, h] if *w > 0.0 && *h > 0.0 => Some((*w, *h)),
        _ => None,
    }
}

/// The size the document declares, in millimeters.
///
/// `width`/`height` attributes win. If only one of them is usable the
/// other follows from the `viewBox` aspect ratio; without either the
/// `viewBox` size is taken as pixels.
pub fn svg_intrinsic_size(data: &str) -> Result<Size, SvgError> {
    let doc = roxmltree::Document::parse(data)?;
    let root = doc.root_element();
    if root.tag_name().name() != "svg" {
        return Err(SvgError::NotSvg(root.tag_name().name().to_string()));
    }

    let width = root.attribute("width").and_then(parse_length_mm);
    let height = root.attribute("height").and_then(parse_length_mm);
    let view_box = root.attribute("viewBox").and_then(parse_view_box);

    match (width, height, view_box) {
        (Some(w), Some(h), _) => Ok(Size::new(w, h)),
        (Some(w), None, Some((vw, vh))) => Ok(Size::new(w, w * vh / vw)),
        (None, Some(h), Some((vw, vh))) => Ok(Size::new(h * vw / vh, h)),
        (None, None, Some((vw, vh))) => Ok(Size::new(vw * MM_PER_PX, vh * MM_PER_PX)),
        _ => Err(SvgError::NoSize),
    }
}

/// The size an SVG should be drawn at. A non-positive width or height is
/// derived from the document, keeping its aspect ratio when the other
/// dimension is given.
pub fn svg_target_size(data: &str, width_mm: f64, height_mm: f64) -> Result<Size, SvgError> {
    let wanted = |v: f64| v.is_finite() && v > 0.0;
    if wanted(width_mm) && wanted(height_mm) {
        // Still reject data that is not an SVG document.
        let doc = roxmltree::Document::parse(data)?;
        let name = doc.root_element().tag_name().name();
        if name != "svg" {
            return Err(SvgError::NotSvg(name.to_string()));
        }
        return Ok(Size::new(width_mm, height_mm));
    }

    let intrinsic = svg_intrinsic_size(data)?;
    Ok(match (wanted(width_mm), wanted(height_mm)) {
        (true, _) => Size::new(width_mm, width_mm * intrinsic.height / intrinsic.width),
        (_, true) => Size::new(height_mm * intrinsic.width / intrinsic.height, height_mm),
        _ => intrinsic,
    })
}
