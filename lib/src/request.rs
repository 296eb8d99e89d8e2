use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::grid::GlyphArt;
use crate::rasterizer::Rasterizer;
use crate::textbox::text_box_art;
use image::RgbaImage;

/// What the user supplied
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Source {
    /// Encoded image bytes (PNG, JPEG, GIF, BMP, ...)
    Image(Vec<u8>),
    /// Text for the bordered text box
    Text(String),
    #[default]
    Empty,
}

/// One user action: an input plus the parameters to render it with
#[derive(Debug, Clone, Default)]
pub struct RenderRequest {
    pub source: Source,
    pub config: RenderConfig,
}

impl RenderRequest {
    pub fn image(bytes: Vec<u8>, config: RenderConfig) -> Self {
        Self {
            source: Source::Image(bytes),
            config,
        }
    }

    pub fn text(text: impl Into<String>, config: RenderConfig) -> Self {
        Self {
            source: Source::Text(text.into()),
            config,
        }
    }
}

/// Decode image bytes into an RGBA buffer
pub fn decode_image(bytes: &[u8]) -> Result<RgbaImage> {
    let img = image::load_from_memory(bytes)?;
    log::debug!("decoded {}x{} image from {} bytes", img.width(), img.height(), bytes.len());
    Ok(img.to_rgba8())
}

impl Rasterizer {
    /// Handle one render request
    ///
    /// Image bytes are decoded and rasterized. Text is trimmed and placed in
    /// a text box whose border and fill are the first and last glyphs of the
    /// chosen palette. An empty source, or text that is blank after
    /// trimming, is rejected.
    pub fn render_request(&self, request: &RenderRequest) -> Result<GlyphArt> {
        let config = &request.config;
        config.validate()?;

        match &request.source {
            Source::Image(bytes) => {
                let image = decode_image(bytes)?;
                self.render_with(&image, config)
            }
            Source::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Err(Error::InvalidInput("text is empty".to_string()));
                }
                let palette = self.palettes().get(&config.palette)?;
                text_box_art(text, config.width, palette.first(), palette.last())
            }
            Source::Empty => Err(Error::InvalidInput(
                "upload an image or enter some text".to_string(),
            )),
        }
    }
}

/// Render a request with the built-in palettes
pub fn render(request: &RenderRequest) -> Result<GlyphArt> {
    Rasterizer::new().render_request(request)
}
