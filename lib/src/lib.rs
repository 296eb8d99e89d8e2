//! Glyph Renderer - image to text glyph-art converter
//!
//! Maps the luminance of every cell of a downscaled image to a glyph from a
//! selectable palette. Text input is placed in a simple bordered box instead.
//!
//! # Example
//! ```no_run
//! use glyph_rendr::{RenderConfig, RenderRequest, render};
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let config = RenderConfig { width: 80, ..Default::default() };
//! let art = render(&RenderRequest::image(bytes, config)).unwrap();
//! print!("{}", art.to_text());
//! ```

pub mod config;
pub mod error;
pub mod grid;
pub mod luminance;
pub mod palette;
pub mod present;
pub mod rasterizer;
pub mod request;
pub mod resample;
pub mod textbox;

// Re-export main types for convenience
pub use config::{MAX_WIDTH, MIN_WIDTH, RenderConfig};
pub use error::{Error, Result};
pub use grid::{Cell, GlyphArt};
pub use palette::{Palette, PaletteKind, PaletteTable};
pub use rasterizer::Rasterizer;
pub use request::{RenderRequest, Source, render};
pub use resample::Resampling;
pub use textbox::text_box;
