//! Conversion between millimeters and the internal layout unit.
//!
//! Every public API works in millimeters. Before anything is placed on a
//! page the value is scaled by [`ACCURACY_FAC`], which gives the downstream
//! renderer larger numbers to work with and therefore finer sub-pixel
//! placement. The conversion is a plain multiplication and is inverted by
//! the matching division.

/// Internal units per millimeter.
pub const ACCURACY_FAC: f64 = 50.0;

pub const MM_PER_INCH: f64 = 25.4;
pub const MM_PER_POINT: f64 = MM_PER_INCH / 72.0;
/// CSS pixel at 96 dpi.
pub const MM_PER_PX: f64 = MM_PER_INCH / 96.0;

#[inline]
pub fn mm_to_internal(mm: f64) -> f64 {
    mm * ACCURACY_FAC
}

#[inline]
pub fn internal_to_mm(value: f64) -> f64 {
    value / ACCURACY_FAC
}
