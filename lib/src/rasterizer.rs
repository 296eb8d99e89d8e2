use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::grid::{Cell, GlyphArt};
use crate::luminance::{glyph_index, luminance};
use crate::palette::{Palette, PaletteTable};
use crate::resample::{Resampling, resample};
use image::{RgbImage, RgbaImage};
use rayon::prelude::*;

/// Glyphs are roughly twice as tall as wide; rows are halved to compensate
pub const ASPECT_CORRECTION: f64 = 0.5;

/// Compute the raster grid height for a target width
///
/// height = floor(width * (source_height / source_width) * 0.5)
pub fn target_height(width: u32, source_width: u32, source_height: u32) -> u32 {
    let ratio = source_height as f64 / source_width as f64;
    (width as f64 * ratio * ASPECT_CORRECTION).floor() as u32
}

/// Largest grid (columns x rows) a single render will allocate
pub const MAX_GRID_CELLS: u64 = 1 << 24;

/// Converts images to glyph art using an immutable palette table
#[derive(Debug, Clone, Default)]
pub struct Rasterizer {
    palettes: PaletteTable,
}

impl Rasterizer {
    /// Rasterizer with the built-in palettes
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_palettes(palettes: PaletteTable) -> Self {
        Self { palettes }
    }

    pub fn palettes(&self) -> &PaletteTable {
        &self.palettes
    }

    /// Render an image with the default (area) resampling
    ///
    /// # Arguments
    /// * `image` - Decoded source image
    /// * `width` - Output columns (>= 1)
    /// * `palette` - Palette name
    /// * `invert` - Reverse the palette before mapping
    pub fn render(
        &self,
        image: &RgbaImage,
        width: u32,
        palette: &str,
        invert: bool,
    ) -> Result<GlyphArt> {
        self.render_with(
            image,
            &RenderConfig {
                width,
                palette: palette.to_string(),
                invert,
                resampling: Resampling::Area,
            },
        )
    }

    /// Render an image with every parameter taken from `config`
    ///
    /// Pipeline:
    /// 1. Validate width and look up the palette
    /// 2. Compute the grid height (aspect ratio halved)
    /// 3. Resample the source to the grid
    /// 4. Map every cell's luminance to a glyph
    pub fn render_with(&self, image: &RgbaImage, config: &RenderConfig) -> Result<GlyphArt> {
        config.validate()?;

        let (src_w, src_h) = image.dimensions();
        if src_w == 0 || src_h == 0 {
            return Err(Error::InvalidInput(format!(
                "image has no pixels ({}x{})",
                src_w, src_h
            )));
        }

        let palette = self.palettes.get(&config.palette)?.oriented(config.invert);
        let width = config.width;
        let height = target_height(width, src_w, src_h);
        let cells = width as u64 * height as u64;
        if cells > MAX_GRID_CELLS {
            return Err(Error::InvalidInput(format!(
                "{}x{} grid exceeds the limit of {} cells",
                width, height, MAX_GRID_CELLS
            )));
        }

        log::debug!(
            "rendering {}x{} source to {}x{} grid (palette '{}', invert {}, {})",
            src_w,
            src_h,
            width,
            height,
            config.palette.trim(),
            config.invert,
            config.resampling
        );

        if height == 0 {
            log::warn!(
                "{}x{} source at width {} yields no rows",
                src_w,
                src_h,
                width
            );
        }

        let grid = resample(image, width, height, config.resampling)?;
        Ok(map_grid(&grid, &palette))
    }
}

/// Select a glyph for one RGB sample
pub fn select_glyph(rgb: [u8; 3], palette: &Palette) -> Cell {
    let glyph = palette.glyph(glyph_index(luminance(rgb), palette.len()));
    if palette.is_colored() {
        Cell::colored(glyph, rgb)
    } else {
        Cell::plain(glyph)
    }
}

/// Map every pixel of a resampled grid to a cell, row-major
///
/// # Arguments
/// * `grid` - Raster grid, one pixel per output cell
/// * `palette` - Palette in its final orientation
pub fn map_grid(grid: &RgbImage, palette: &Palette) -> GlyphArt {
    let (width, height) = grid.dimensions();

    // Parallelize rows; collect keeps them in order
    let rows: Vec<Vec<Cell>> = (0..height)
        .into_par_iter()
        .map(|y| {
            (0..width)
                .map(|x| select_glyph(grid.get_pixel(x, y).0, palette))
                .collect::<Vec<_>>()
        })
        .collect();

    GlyphArt::new(width, rows)
}
