//! Bordered text box
//!
//! A stand-in for real text rendering: the string is centered inside a
//! five-line rectangle. Glyph shapes are never rasterized.

use crate::error::{Error, Result};
use crate::grid::GlyphArt;

/// Number of lines in every text box
pub const BOX_LINES: usize = 5;

/// Narrowest box that still has room between the borders
pub const MIN_BOX_WIDTH: u32 = 4;

/// Center `text` inside a bordered rectangle
///
/// # Arguments
/// * `text` - Text to place on the middle line, clipped to `width - 4` characters;
///   control characters are replaced by `fill`
/// * `width` - Width of every line in glyphs (>= 4)
/// * `border` - Glyph for the frame
/// * `fill` - Glyph for the empty interior
///
/// # Returns
/// Exactly five lines, each `width` glyphs long
pub fn text_box(text: &str, width: u32, border: char, fill: char) -> Result<Vec<String>> {
    if width < MIN_BOX_WIDTH {
        return Err(Error::InvalidInput(format!(
            "text box width must be at least {}, got {}",
            MIN_BOX_WIDTH, width
        )));
    }

    let width = width as usize;
    let inner = width - 2;
    // Control characters (newlines, tabs) would break the five-line shape
    let clipped: String = text
        .chars()
        .map(|c| if c.is_control() { fill } else { c })
        .take(width - 4)
        .collect();
    let text_len = clipped.chars().count();
    let pad = (inner - text_len) / 2;

    let edge: String = std::iter::repeat_n(border, width).collect();
    let blank = framed(border, &fill_run(fill, inner));
    let middle = framed(
        border,
        &format!(
            "{}{}{}",
            fill_run(fill, pad),
            clipped,
            fill_run(fill, inner - text_len - pad)
        ),
    );

    Ok(vec![edge.clone(), blank.clone(), middle, blank, edge])
}

/// Same as [`text_box`], wrapped as uncoloured glyph art
pub fn text_box_art(text: &str, width: u32, border: char, fill: char) -> Result<GlyphArt> {
    let lines = text_box(text, width, border, fill)?;
    Ok(GlyphArt::from_lines(width, &lines))
}

fn fill_run(fill: char, n: usize) -> String {
    std::iter::repeat_n(fill, n).collect()
}

fn framed(border: char, interior: &str) -> String {
    let mut line = String::with_capacity(interior.len() + 2 * border.len_utf8());
    line.push(border);
    line.push_str(interior);
    line.push(border);
    line
}
