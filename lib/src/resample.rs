use crate::error::{Error, Result};
use image::{Rgb, RgbImage, Rgba, RgbaImage, imageops};
use rayon::prelude::*;
use std::fmt;
use std::str::FromStr;

/// How the source image is scaled to the raster grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resampling {
    /// Average every source pixel covered by a cell (box filter)
    #[default]
    Area,
    Nearest,
    Triangle,
    Lanczos3,
}

impl Resampling {
    pub fn all() -> &'static [Resampling] {
        &[
            Resampling::Area,
            Resampling::Nearest,
            Resampling::Triangle,
            Resampling::Lanczos3,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Resampling::Area => "area",
            Resampling::Nearest => "nearest",
            Resampling::Triangle => "triangle",
            Resampling::Lanczos3 => "lanczos3",
        }
    }
}

impl fmt::Display for Resampling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Resampling {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Resampling::all()
            .iter()
            .copied()
            .find(|r| r.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::Configuration(format!("unknown resampling '{}'", wanted)))
    }
}

/// Read an RGBA image back as RGB, the way a canvas pixel read does
///
/// Colour channels are kept as stored (never premultiplied). A fully
/// transparent pixel reads back as (0, 0, 0).
pub fn drop_alpha(img: &RgbaImage) -> RgbImage {
    let (width, height) = img.dimensions();
    RgbImage::from_fn(width, height, |x, y| read_back(img.get_pixel(x, y)))
}

fn read_back(p: &Rgba<u8>) -> Rgb<u8> {
    if p[3] == 0 {
        Rgb([0, 0, 0])
    } else {
        Rgb([p[0], p[1], p[2]])
    }
}

/// Resample an image to the raster grid
///
/// # Arguments
/// * `img` - Source RGBA image (non-zero dimensions)
/// * `width` - Grid columns
/// * `height` - Grid rows (may be 0)
/// * `method` - Resampling filter
///
/// # Returns
/// An RGB image of exactly `width` x `height` pixels
pub fn resample(img: &RgbaImage, width: u32, height: u32, method: Resampling) -> Result<RgbImage> {
    let (src_w, src_h) = img.dimensions();
    if src_w == 0 || src_h == 0 {
        return Err(Error::InvalidInput(format!(
            "source image has no pixels ({}x{})",
            src_w, src_h
        )));
    }

    if width == 0 || height == 0 {
        return Ok(RgbImage::new(width, height));
    }

    if (src_w, src_h) == (width, height) {
        return Ok(drop_alpha(img));
    }

    let filter = match method {
        Resampling::Area => return box_downscale(img, width, height),
        Resampling::Nearest => imageops::FilterType::Nearest,
        Resampling::Triangle => imageops::FilterType::Triangle,
        Resampling::Lanczos3 => imageops::FilterType::Lanczos3,
    };

    Ok(drop_alpha(&imageops::resize(img, width, height, filter)))
}

/// Source span `[start, end)` covered by destination cell `i` of `dst` cells
fn cell_span(i: u32, src: u32, dst: u32) -> (u32, u32) {
    let (i, src, dst) = (i as u64, src as u64, dst as u64);
    let start = i * src / dst;
    let end = ((i + 1) * src).div_ceil(dst).max(start + 1).min(src);
    (start as u32, end as u32)
}

/// Box-filter resample weighted by alpha
///
/// Every cell is round(sum(c * a) / sum(a)) over the pixels it covers, or
/// black when all of them are fully transparent. When upscaling, each cell
/// covers exactly one source pixel.
fn box_downscale(img: &RgbaImage, width: u32, height: u32) -> Result<RgbImage> {
    let (src_w, src_h) = img.dimensions();

    // Parallelize row averaging
    let rows: Vec<Vec<u8>> = (0..height)
        .into_par_iter()
        .map(|y| {
            let (y0, y1) = cell_span(y, src_h, height);
            let mut row = Vec::with_capacity(width as usize * 3);

            for x in 0..width {
                let (x0, x1) = cell_span(x, src_w, width);
                let mut sum = [0u64; 3];
                let mut alpha = 0u64;

                for sy in y0..y1 {
                    for sx in x0..x1 {
                        let p = img.get_pixel(sx, sy);
                        let a = p[3] as u64;
                        sum[0] += p[0] as u64 * a;
                        sum[1] += p[1] as u64 * a;
                        sum[2] += p[2] as u64 * a;
                        alpha += a;
                    }
                }

                if alpha == 0 {
                    row.extend_from_slice(&[0, 0, 0]);
                } else {
                    row.extend(sum.iter().map(|s| ((s + alpha / 2) / alpha) as u8));
                }
            }

            row
        })
        .collect();

    RgbImage::from_raw(width, height, rows.concat())
        .ok_or_else(|| Error::InvalidInput(format!("cannot build a {}x{} grid", width, height)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transparent_reads_back_black() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([200, 100, 50, 0]));
        assert_eq!(drop_alpha(&img).get_pixel(1, 1), &Rgb([0, 0, 0]));
    }

    #[test]
    fn test_partial_alpha_keeps_colour() {
        let img = RgbaImage::from_pixel(1, 1, Rgba([200, 100, 50, 128]));
        assert_eq!(drop_alpha(&img).get_pixel(0, 0), &Rgb([200, 100, 50]));
    }

    #[test]
    fn test_box_ignores_transparent_pixels() {
        // Opaque white next to transparent black averages to white
        let img = RgbaImage::from_fn(2, 1, |x, _| {
            if x == 0 { Rgba([255, 255, 255, 255]) } else { Rgba([0, 0, 0, 0]) }
        });
        let out = resample(&img, 1, 1, Resampling::Area).unwrap();
        assert_eq!(out.get_pixel(0, 0), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_box_weights_by_alpha() {
        // Opaque black (a=255) and white at a=85: 255*85 / 340 = 63.75
        let img = RgbaImage::from_fn(2, 1, |x, _| {
            if x == 0 { Rgba([0, 0, 0, 255]) } else { Rgba([255, 255, 255, 85]) }
        });
        let out = resample(&img, 1, 1, Resampling::Area).unwrap();
        assert_eq!(out.get_pixel(0, 0), &Rgb([64, 64, 64]));
    }

    #[test]
    fn test_box_all_transparent_is_black() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 0]));
        let out = resample(&img, 2, 2, Resampling::Area).unwrap();
        assert!(out.pixels().all(|p| p == &Rgb([0, 0, 0])));
    }

    #[test]
    fn test_cell_span_covers_source() {
        // 10 source pixels onto 3 cells
        assert_eq!(cell_span(0, 10, 3), (0, 4));
        assert_eq!(cell_span(1, 10, 3), (3, 7));
        assert_eq!(cell_span(2, 10, 3), (6, 10));
        // Upscaling: one source pixel per cell
        assert_eq!(cell_span(3, 2, 4), (1, 2));
    }

    #[test]
    fn test_box_averages_halves() {
        // Left half black, right half white, 4x2 -> 2x1
        let img = RgbaImage::from_fn(4, 2, |x, _| {
            if x < 2 { Rgba([0, 0, 0, 255]) } else { Rgba([255, 255, 255, 255]) }
        });
        let out = resample(&img, 2, 1, Resampling::Area).unwrap();
        assert_eq!(out.dimensions(), (2, 1));
        assert_eq!(out.get_pixel(0, 0), &Rgb([0, 0, 0]));
        assert_eq!(out.get_pixel(1, 0), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_box_mean_rounds() {
        let img = RgbaImage::from_fn(2, 1, |x, _| {
            if x == 0 { Rgba([0, 0, 0, 255]) } else { Rgba([255, 255, 255, 255]) }
        });
        let out = resample(&img, 1, 1, Resampling::Area).unwrap();
        assert_eq!(out.get_pixel(0, 0), &Rgb([128, 128, 128]));
    }

    #[test]
    fn test_every_method_hits_target_size() {
        let img = RgbaImage::from_pixel(37, 23, Rgba([10, 20, 30, 255]));
        for method in Resampling::all() {
            let out = resample(&img, 12, 5, *method).unwrap();
            assert_eq!(out.dimensions(), (12, 5), "{}", method);
        }
    }

    #[test]
    fn test_zero_height_grid_is_empty() {
        let img = RgbaImage::from_pixel(100, 1, Rgba([0, 0, 0, 255]));
        let out = resample(&img, 10, 0, Resampling::Area).unwrap();
        assert_eq!(out.dimensions(), (10, 0));
    }

    #[test]
    fn test_empty_source_rejected() {
        let img = RgbaImage::new(0, 0);
        assert!(matches!(
            resample(&img, 4, 4, Resampling::Nearest),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_resampling_from_str() {
        assert_eq!("Lanczos3".parse::<Resampling>().unwrap(), Resampling::Lanczos3);
        assert!("bicubic".parse::<Resampling>().is_err());
    }
}
