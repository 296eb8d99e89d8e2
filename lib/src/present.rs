//! Presentation of rendered glyph art
//!
//! The rasterizer only produces cells. These helpers turn them into the
//! formats callers actually show or save.

use crate::error::Result;
use crate::grid::GlyphArt;
use std::path::Path;

/// Default file name for text exports
pub const EXPORT_FILE_NAME: &str = "ascii-art.txt";

/// Inline-styled HTML: coloured cells become `<span>`s, one row per line
pub fn to_html(art: &GlyphArt) -> String {
    let mut out = String::new();

    for row in art.rows() {
        for cell in row {
            match cell.color {
                Some([r, g, b]) => {
                    out.push_str(&format!("<span style=\"color: rgb({},{},{})\">", r, g, b));
                    push_escaped(&mut out, cell.glyph);
                    out.push_str("</span>");
                }
                None => push_escaped(&mut out, cell.glyph),
            }
        }
        out.push('\n');
    }

    out
}

fn push_escaped(out: &mut String, glyph: char) {
    match glyph {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        c => out.push(c),
    }
}

/// Terminal output with 24-bit foreground colours
///
/// Rows that used a colour end with a reset.
pub fn to_ansi(art: &GlyphArt) -> String {
    let mut out = String::new();

    for row in art.rows() {
        let mut current: Option<[u8; 3]> = None;
        for cell in row {
            if let Some(rgb) = cell.color {
                if current != Some(rgb) {
                    out.push_str(&format!("\x1b[38;2;{};{};{}m", rgb[0], rgb[1], rgb[2]));
                    current = Some(rgb);
                }
            } else if current.take().is_some() {
                out.push_str("\x1b[0m");
            }
            out.push(cell.glyph);
        }
        if current.is_some() {
            out.push_str("\x1b[0m");
        }
        out.push('\n');
    }

    out
}

/// Write the plain-text rendering to `path`
pub fn write_text_file(art: &GlyphArt, path: &Path) -> Result<()> {
    std::fs::write(path, art.to_text())?;
    log::info!("wrote {} rows to {}", art.row_count(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;

    #[test]
    fn test_html_colored_span() {
        let art = GlyphArt::new(2, vec![vec![Cell::colored('@', [1, 2, 3]), Cell::plain('<')]]);
        assert_eq!(
            to_html(&art),
            "<span style=\"color: rgb(1,2,3)\">@</span>&lt;\n"
        );
    }

    #[test]
    fn test_html_escapes_detailed_glyphs() {
        let art = GlyphArt::from_lines(4, &["&\"'>"]);
        assert_eq!(to_html(&art), "&amp;&quot;&#39;&gt;\n");
    }

    #[test]
    fn test_ansi_plain_has_no_escapes() {
        let art = GlyphArt::from_lines(3, &["@#.", " : "]);
        assert_eq!(to_ansi(&art), "@#.\n : \n");
    }

    #[test]
    fn test_ansi_groups_runs_and_resets() {
        let red = [255, 0, 0];
        let art = GlyphArt::new(
            3,
            vec![vec![Cell::colored('@', red), Cell::colored('#', red), Cell::plain('.')]],
        );
        assert_eq!(to_ansi(&art), "\x1b[38;2;255;0;0m@#\x1b[0m.\n");

        let art = GlyphArt::new(1, vec![vec![Cell::colored('@', red)]]);
        assert_eq!(to_ansi(&art), "\x1b[38;2;255;0;0m@\x1b[0m\n");
    }

    #[test]
    fn test_write_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(EXPORT_FILE_NAME);
        let art = GlyphArt::new(1, vec![vec![Cell::colored('@', [9, 9, 9])], vec![Cell::plain(' ')]]);

        write_text_file(&art, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "@\n \n");
    }

    #[test]
    fn test_write_text_file_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join(EXPORT_FILE_NAME);
        let art = GlyphArt::from_lines(1, &["@"]);
        assert!(matches!(
            write_text_file(&art, &path),
            Err(crate::error::Error::Io(_))
        ));
    }
}
