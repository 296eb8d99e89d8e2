//! Glyph palettes
//!
//! A palette is an ordered ramp of glyphs. Index 0 stands for the darkest
//! luminance and the last index for the lightest one.

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Dense ramp, darkest first
pub const SIMPLE_GLYPHS: &str = "@%#*+=-:. ";

/// 70-step ramp, darkest first (ends with a space)
pub const DETAILED_GLYPHS: &str =
    "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'. ";

/// Unicode shade blocks, full block first
pub const BLOCK_GLYPHS: &str = "█▓▒░ ";

/// The simple ramp read the other way round
pub const INVERTED_GLYPHS: &str = " .:-=+*#%@";

/// Built-in palette variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PaletteKind {
    Simple,
    Detailed,
    Blocks,
    Inverted,
    /// Simple glyphs, with each cell carrying its sampled colour
    Color,
}

impl PaletteKind {
    /// Get all built-in variants, in menu order
    pub fn all() -> &'static [PaletteKind] {
        &[
            PaletteKind::Simple,
            PaletteKind::Detailed,
            PaletteKind::Blocks,
            PaletteKind::Inverted,
            PaletteKind::Color,
        ]
    }

    /// Name used to select this variant
    pub fn name(&self) -> &'static str {
        match self {
            PaletteKind::Simple => "simple",
            PaletteKind::Detailed => "detailed",
            PaletteKind::Blocks => "blocks",
            PaletteKind::Inverted => "inverted",
            PaletteKind::Color => "color",
        }
    }

    /// Build the palette for this variant
    pub fn palette(&self) -> Palette {
        let (glyphs, colored) = match self {
            PaletteKind::Simple => (SIMPLE_GLYPHS, false),
            PaletteKind::Detailed => (DETAILED_GLYPHS, false),
            PaletteKind::Blocks => (BLOCK_GLYPHS, false),
            PaletteKind::Inverted => (INVERTED_GLYPHS, false),
            PaletteKind::Color => (SIMPLE_GLYPHS, true),
        };

        Palette {
            glyphs: glyphs.chars().collect(),
            colored,
        }
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        PaletteKind::all()
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::Configuration(format!("unknown palette '{}'", wanted)))
    }
}

/// An ordered glyph ramp with at least two entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    glyphs: Vec<char>,
    colored: bool,
}

impl Palette {
    /// Create a palette from a darkest-first glyph string
    ///
    /// # Arguments
    /// * `glyphs` - Glyphs ordered from darkest to lightest meaning
    /// * `colored` - Whether rendered cells should carry their sampled colour
    ///
    /// # Returns
    /// The palette, or a configuration error when fewer than two glyphs are given
    pub fn new(glyphs: &str, colored: bool) -> Result<Self> {
        let glyphs: Vec<char> = glyphs.chars().collect();
        if glyphs.len() < 2 {
            return Err(Error::Configuration(format!(
                "a palette needs at least 2 glyphs, got {}",
                glyphs.len()
            )));
        }
        Ok(Self { glyphs, colored })
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Never true for a constructed palette
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn is_colored(&self) -> bool {
        self.colored
    }

    /// The darkest glyph under normal orientation
    pub fn first(&self) -> char {
        self.glyphs[0]
    }

    /// The lightest glyph under normal orientation
    pub fn last(&self) -> char {
        self.glyphs[self.glyphs.len() - 1]
    }

    /// Same glyphs, opposite index order
    pub fn reversed(&self) -> Palette {
        Palette {
            glyphs: self.glyphs.iter().rev().copied().collect(),
            colored: self.colored,
        }
    }

    /// Returns `self` reversed when `invert` is set
    pub fn oriented(&self, invert: bool) -> Palette {
        if invert { self.reversed() } else { self.clone() }
    }

    /// Glyph at `index`, clamped to the last entry
    pub fn glyph(&self, index: usize) -> char {
        self.glyphs[index.min(self.glyphs.len() - 1)]
    }
}

/// Immutable name -> palette map owned by a rasterizer
#[derive(Debug, Clone)]
pub struct PaletteTable {
    palettes: BTreeMap<String, Palette>,
}

impl PaletteTable {
    /// The five built-in variants
    pub fn builtin() -> Self {
        let palettes = PaletteKind::all()
            .iter()
            .map(|kind| (kind.name().to_string(), kind.palette()))
            .collect();
        Self { palettes }
    }

    /// Returns a copy of this table with an extra (or replaced) entry
    pub fn with_palette(mut self, name: &str, palette: Palette) -> Self {
        self.palettes.insert(name.trim().to_ascii_lowercase(), palette);
        self
    }

    /// Look a palette up by name (case-insensitive)
    pub fn get(&self, name: &str) -> Result<&Palette> {
        let key = name.trim().to_ascii_lowercase();
        self.palettes
            .get(&key)
            .ok_or_else(|| Error::Configuration(format!("unknown palette '{}'", name.trim())))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.palettes.keys().map(String::as_str)
    }
}

impl Default for PaletteTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lengths() {
        assert_eq!(PaletteKind::Simple.palette().len(), 10);
        assert_eq!(PaletteKind::Detailed.palette().len(), 70);
        assert_eq!(PaletteKind::Blocks.palette().len(), 5);
        assert_eq!(PaletteKind::Inverted.palette().len(), 10);
        assert_eq!(PaletteKind::Color.palette().len(), 10);
    }

    #[test]
    fn test_detailed_ends_with_space() {
        let p = PaletteKind::Detailed.palette();
        assert_eq!(p.first(), '$');
        assert_eq!(p.last(), ' ');
        assert!(p.glyphs().contains(&'\\'));
    }

    #[test]
    fn test_only_color_is_colored() {
        for kind in PaletteKind::all() {
            assert_eq!(kind.palette().is_colored(), *kind == PaletteKind::Color);
        }
    }

    #[test]
    fn test_reversed_preserves_length() {
        for kind in PaletteKind::all() {
            let p = kind.palette();
            let r = p.reversed();
            assert_eq!(p.len(), r.len());
            assert_eq!(p.first(), r.last());
            assert_eq!(p.last(), r.first());
            assert_eq!(r.reversed(), p);
        }
    }

    #[test]
    fn test_inverted_is_simple_reversed() {
        let simple = PaletteKind::Simple.palette();
        let inverted = PaletteKind::Inverted.palette();
        assert_eq!(simple.reversed().glyphs(), inverted.glyphs());
    }

    #[test]
    fn test_palette_needs_two_glyphs() {
        assert!(Palette::new("", false).is_err());
        assert!(Palette::new("#", false).is_err());
        assert!(Palette::new("# ", false).is_ok());
    }

    #[test]
    fn test_glyph_clamps() {
        let p = PaletteKind::Blocks.palette();
        assert_eq!(p.glyph(0), '█');
        assert_eq!(p.glyph(4), ' ');
        assert_eq!(p.glyph(99), ' ');
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("simple".parse::<PaletteKind>().unwrap(), PaletteKind::Simple);
        assert_eq!(" Blocks ".parse::<PaletteKind>().unwrap(), PaletteKind::Blocks);
        assert!("neon".parse::<PaletteKind>().is_err());
    }

    #[test]
    fn test_table_lookup() {
        let table = PaletteTable::builtin();
        assert_eq!(table.names().count(), 5);
        assert_eq!(table.get("COLOR").unwrap().len(), 10);

        let err = table.get("neon").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_table_with_custom_palette() {
        let table = PaletteTable::builtin().with_palette("Binary", Palette::new("# ", false).unwrap());
        assert_eq!(table.get("binary").unwrap().glyphs(), &['#', ' ']);
        assert_eq!(table.names().count(), 6);
    }
}
