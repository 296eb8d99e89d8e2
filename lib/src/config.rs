use crate::error::{Error, Result};
use crate::palette::PaletteKind;
use crate::resample::Resampling;

/// Lower bound of the suggested interactive width range
pub const MIN_WIDTH: u32 = 20;
/// Upper bound of the suggested interactive width range
pub const MAX_WIDTH: u32 = 200;

/// Parameters for one glyph-art conversion
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Output columns, >= 1, default 100
    pub width: u32,
    /// Palette name, default "simple"
    pub palette: String,
    /// Reverse the palette before mapping, default false
    pub invert: bool,
    /// Grid resampling filter, default Area
    pub resampling: Resampling,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 100,
            palette: PaletteKind::Simple.name().to_string(),
            invert: false,
            resampling: Resampling::Area,
        }
    }
}

impl RenderConfig {
    /// Validates the configuration parameters
    ///
    /// Palette names are checked against the rasterizer's table at render time.
    pub fn validate(&self) -> Result<()> {
        if self.width < 1 {
            return Err(Error::InvalidInput(format!(
                "width must be at least 1, got {}",
                self.width
            )));
        }
        if self.palette.trim().is_empty() {
            return Err(Error::Configuration("palette name is empty".to_string()));
        }
        Ok(())
    }
}
