/// Red weight of the luminance formula
pub const RED_WEIGHT: f64 = 0.299;
/// Green weight of the luminance formula
pub const GREEN_WEIGHT: f64 = 0.587;
/// Blue weight of the luminance formula
pub const BLUE_WEIGHT: f64 = 0.114;

/// Calculate perceptual luminance of an RGB sample
///
/// Formula: L = (0.299*R + 0.587*G + 0.114*B) / 255
///
/// # Arguments
/// * `rgb` - Red, green and blue intensities
///
/// # Returns
/// Luminance in [0.0, 1.0]
pub fn luminance(rgb: [u8; 3]) -> f64 {
    let [r, g, b] = rgb;
    (RED_WEIGHT * r as f64 + GREEN_WEIGHT * g as f64 + BLUE_WEIGHT * b as f64) / 255.0
}

/// Map a luminance value to a palette index
///
/// # Arguments
/// * `luminance` - Luminance value, expected in [0.0, 1.0]
/// * `palette_len` - Number of glyphs in the palette (>= 1)
///
/// # Returns
/// floor(luminance * (palette_len - 1)), clamped to [0, palette_len - 1]
pub fn glyph_index(luminance: f64, palette_len: usize) -> usize {
    let last = palette_len.saturating_sub(1);
    // NaN falls through to 0
    let lum = if luminance.is_nan() { 0.0 } else { luminance.clamp(0.0, 1.0) };

    let index = (lum * last as f64).floor() as usize;
    index.min(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_black_and_white() {
        assert_eq!(luminance([0, 0, 0]), 0.0);
        assert_eq!(luminance([255, 255, 255]), 1.0);
    }

    #[test]
    fn test_luminance_weights() {
        assert!((luminance([255, 0, 0]) - 0.299).abs() < 1e-12);
        assert!((luminance([0, 255, 0]) - 0.587).abs() < 1e-12);
        assert!((luminance([0, 0, 255]) - 0.114).abs() < 1e-12);
    }

    #[test]
    fn test_glyph_index_extremes() {
        assert_eq!(glyph_index(0.0, 10), 0);
        assert_eq!(glyph_index(1.0, 10), 9);
        assert_eq!(glyph_index(luminance([255, 255, 255]), 70), 69);
    }

    #[test]
    fn test_glyph_index_clamps_out_of_range() {
        assert_eq!(glyph_index(1.0000001, 10), 9);
        assert_eq!(glyph_index(-0.5, 10), 0);
        assert_eq!(glyph_index(f64::NAN, 10), 0);
    }

    #[test]
    fn test_glyph_index_monotonic_and_bounded() {
        for len in [2usize, 5, 10, 70] {
            let mut previous = 0;
            for step in 0..=1000 {
                let lum = step as f64 / 1000.0;
                let index = glyph_index(lum, len);
                assert!(index < len);
                assert!(index >= previous);
                previous = index;
            }
        }
    }

    #[test]
    fn test_glyph_index_over_all_grays() {
        let mut previous = 0;
        for v in 0..=255u8 {
            let index = glyph_index(luminance([v, v, v]), 10);
            assert!(index >= previous && index <= 9);
            previous = index;
        }
        assert_eq!(previous, 9);
    }
}
