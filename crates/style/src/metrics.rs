//! Advance widths of the standard Type1 fonts, in 1/1000 em, for the printable
//! ASCII range. Values come from the Adobe Core 14 AFM files.
//!
//! Characters outside the table use a per-font average so that measuring never
//! fails; the PDF surface encodes them as WinAnsi where possible.

use crate::font::{FontFamily, FontSpec, FontStyle};

const FIRST_CHAR: u32 = 32;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

#[rustfmt::skip]
const TIMES_ROMAN: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
];

#[rustfmt::skip]
const TIMES_BOLD: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    930, 722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944, 722, 778,
    611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667, 333, 278, 333, 581, 500,
    333, 500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833, 556, 500,
    556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444, 394, 220, 394, 520,
];

#[rustfmt::skip]
const TIMES_ITALIC: [u16; 95] = [
    250, 333, 420, 500, 500, 833, 778, 214, 333, 333, 500, 675, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 675, 675, 675, 500,
    920, 611, 611, 667, 722, 611, 611, 722, 722, 333, 444, 667, 556, 833, 667, 722,
    611, 722, 611, 500, 556, 722, 611, 833, 611, 556, 556, 389, 278, 389, 422, 500,
    333, 500, 500, 444, 500, 444, 278, 500, 500, 278, 278, 444, 278, 722, 500, 500,
    500, 500, 389, 389, 278, 500, 444, 667, 444, 444, 389, 400, 275, 400, 541,
];

/// Oblique Helvetica shares the upright widths; bold-italic Times uses the bold table.
fn table_for(family: FontFamily, style: FontStyle) -> &'static [u16; 95] {
    match (family, style) {
        (FontFamily::Helvetica, FontStyle::Normal | FontStyle::Italic) => &HELVETICA,
        (FontFamily::Helvetica, FontStyle::Bold | FontStyle::BoldItalic) => &HELVETICA_BOLD,
        (FontFamily::Times, FontStyle::Normal) => &TIMES_ROMAN,
        (FontFamily::Times, FontStyle::Italic) => &TIMES_ITALIC,
        (FontFamily::Times, FontStyle::Bold | FontStyle::BoldItalic) => &TIMES_BOLD,
    }
}

fn fallback_width(family: FontFamily, style: FontStyle) -> u16 {
    match (family, style.is_bold()) {
        (FontFamily::Helvetica, false) => 556,
        (FontFamily::Helvetica, true) => 611,
        (FontFamily::Times, _) => 500,
    }
}

/// Advance width of a single character in 1/1000 em.
pub fn char_width_units(family: FontFamily, style: FontStyle, ch: char) -> u16 {
    let code = ch as u32;
    if (FIRST_CHAR..FIRST_CHAR + 95).contains(&code) {
        table_for(family, style)[(code - FIRST_CHAR) as usize]
    } else if ch == '\u{a0}' {
        table_for(family, style)[0]
    } else {
        fallback_width(family, style)
    }
}

/// Sum of advance widths for `text` in 1/1000 em.
pub fn text_width_units(family: FontFamily, style: FontStyle, text: &str) -> u32 {
    text.chars()
        .map(|ch| char_width_units(family, style, ch) as u32)
        .sum()
}

impl FontSpec {
    /// Width of `text` set in this font, in points.
    pub fn text_width_pt(&self, text: &str) -> f32 {
        text_width_units(self.family, self.style, text) as f32 * self.size / 1000.0
    }
}
