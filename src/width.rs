//! Text measurement helpers used to clip copy to the space a region offers.
//!
//! Geometry is never adjusted for text; instead copy is shortened to an
//! estimated glyph capacity.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Average glyph advance as a fraction of the font size.
const AVERAGE_ADVANCE_EM: f64 = 0.5;
const POINTS_PER_INCH: f64 = 72.0;
const ELLIPSIS: char = '…';

/// Display width of `text` in monospace columns.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Estimated number of columns that fit on one line `width_in` inches wide.
pub fn estimate_capacity(width_in: f64, font_size_pt: f64) -> usize {
    if !(width_in > 0.0) || !(font_size_pt > 0.0) {
        return 0;
    }
    (width_in * POINTS_PER_INCH / (font_size_pt * AVERAGE_ADVANCE_EM)).floor() as usize
}

/// Truncate `text` to at most `max_width` columns, ending with an ellipsis
/// when anything was cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if display_width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    out
}

/// Clip copy to the capacity of a `width_in`-wide line at `font_size_pt`.
pub fn clip_to_capacity(text: &str, width_in: f64, font_size_pt: f64) -> String {
    truncate_to_width(text, estimate_capacity(width_in, font_size_pt))
}
