use simple_report_layout::{FontSpec, Rect};
use simple_report_types::ACCURACY_FAC;

/// Font name with the conventional style suffix, e.g. `Arial-BoldItalic`.
pub fn styled_font_name(font: &FontSpec) -> String {
    let mut name = font.family.clone();
    if font.bold || font.italic {
        name.push('-');
        if font.bold && font.italic {
            name.push_str("BoldItalic");
        } else if font.bold {
            name.push_str("Bold");
        } else {
            name.push_str("Italic");
        }
    }
    name
}

/// Converts a rectangle from internal units to millimeters.
pub fn rect_to_mm(rect: Rect) -> Rect {
    rect.scaled(1.0 / ACCURACY_FAC)
}
