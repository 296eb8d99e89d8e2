use std::fmt;

/// One rendered glyph, with its source colour when the palette is coloured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub color: Option<[u8; 3]>,
}

impl Cell {
    pub fn plain(glyph: char) -> Self {
        Self { glyph, color: None }
    }

    pub fn colored(glyph: char, rgb: [u8; 3]) -> Self {
        Self {
            glyph,
            color: Some(rgb),
        }
    }
}

/// Rendered glyph art: rows of cells, every row `columns` cells wide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphArt {
    columns: u32,
    rows: Vec<Vec<Cell>>,
}

impl GlyphArt {
    /// # Panics
    /// If a row is not exactly `columns` cells long
    pub fn new(columns: u32, rows: Vec<Vec<Cell>>) -> Self {
        assert!(
            rows.iter().all(|row| row.len() == columns as usize),
            "every row must be {} cells wide",
            columns
        );
        Self { columns, rows }
    }

    /// Build uncoloured art from text lines of equal glyph count
    pub fn from_lines<S: AsRef<str>>(columns: u32, lines: &[S]) -> Self {
        let rows: Vec<Vec<Cell>> = lines
            .iter()
            .map(|line| line.as_ref().chars().map(Cell::plain).collect())
            .collect();
        Self::new(columns, rows)
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn cell(&self, x: u32, y: u32) -> Option<&Cell> {
        self.rows.get(y as usize)?.get(x as usize)
    }

    /// True when any cell carries a colour
    pub fn has_color(&self) -> bool {
        self.rows.iter().flatten().any(|c| c.color.is_some())
    }

    /// Rows as plain strings, colours dropped
    pub fn lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|c| c.glyph).collect())
            .collect()
    }

    /// Plain-text export: every row terminated by `\n`
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.rows.len() * (self.columns as usize + 1));
        for row in &self.rows {
            out.extend(row.iter().map(|c| c.glyph));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for GlyphArt {
    /// Lines joined by `\n`, no trailing newline
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for cell in row {
                write!(f, "{}", cell.glyph)?;
            }
        }
        Ok(())
    }
}
