//! Text utilities for position conversion.
//!
//! Provides byte offset <-> position conversion with UTF-16 columns, the
//! coordinate system both the host and the stylesheet engine speak.

use tower_lsp::lsp_types::Position;

/// Pre-computed line index for a piece of text.
///
/// Columns are counted in UTF-16 code units. Line starts are cached so line
/// lookup is a binary search.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset where each line starts.
    line_starts: Vec<usize>,
    /// Source text (needed for UTF-16 column calculation).
    source: String,
}

impl LineIndex {
    /// Build a line index from source text.
    pub fn new(source: String) -> Self {
        let mut line_starts = vec![0];

        for (i, c) in source.char_indices() {
            if c == '\n' {
                line_starts.push(i + 1);
            }
        }

        Self {
            line_starts,
            source,
        }
    }

    /// Get the source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Convert a byte offset to a position.
    ///
    /// Offsets past the end of the text clamp to the end.
    pub fn offset_to_position(&self, offset: usize) -> Position {
        let offset = offset.min(self.source.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        };

        let line_start = self.line_starts[line];
        let line_end = self
            .line_starts
            .get(line + 1)
            .copied()
            .unwrap_or(self.source.len());

        let mut col = 0u32;
        let line_slice = &self.source[line_start..line_end];

        for (i, c) in line_slice.char_indices() {
            if line_start + i >= offset {
                break;
            }
            col += c.len_utf16() as u32;
        }

        Position::new(line as u32, col)
    }

    /// Convert a position to a byte offset.
    ///
    /// Returns None if the line is out of bounds. Columns past the end of the
    /// line clamp to the line end.
    pub fn position_to_offset(&self, position: Position) -> Option<usize> {
        let line = position.line as usize;

        if line >= self.line_starts.len() {
            return None;
        }

        let line_start = self.line_starts[line];
        let line_end = self
            .line_starts
            .get(line + 1)
            .map(|&end| end.saturating_sub(1)) // Exclude newline
            .unwrap_or(self.source.len());

        let line_slice = &self.source[line_start..line_end];

        let mut utf16_col = 0u32;
        for (i, c) in line_slice.char_indices() {
            if utf16_col >= position.character {
                return Some(line_start + i);
            }
            utf16_col += c.len_utf16() as u32;
        }

        Some(line_end.min(self.source.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line() {
        let idx = LineIndex::new("color: red;".to_string());
        assert_eq!(idx.offset_to_position(0), Position::new(0, 0));
        assert_eq!(idx.offset_to_position(5), Position::new(0, 5));
        assert_eq!(idx.offset_to_position(11), Position::new(0, 11));
    }

    #[test]
    fn multi_line() {
        let idx = LineIndex::new("a {\n  color: red;\n}".to_string());
        assert_eq!(idx.offset_to_position(0), Position::new(0, 0));
        assert_eq!(idx.offset_to_position(3), Position::new(0, 3));
        assert_eq!(idx.offset_to_position(4), Position::new(1, 0));
        assert_eq!(idx.offset_to_position(6), Position::new(1, 2));
        assert_eq!(idx.offset_to_position(18), Position::new(2, 0));
    }

    #[test]
    fn position_to_offset_multi_line() {
        let idx = LineIndex::new("hello\nworld".to_string());
        assert_eq!(idx.position_to_offset(Position::new(0, 0)), Some(0));
        assert_eq!(idx.position_to_offset(Position::new(0, 5)), Some(5));
        assert_eq!(idx.position_to_offset(Position::new(1, 0)), Some(6));
        assert_eq!(idx.position_to_offset(Position::new(1, 5)), Some(11));
    }

    #[test]
    fn column_past_line_end_clamps() {
        let idx = LineIndex::new("ab\ncd".to_string());
        assert_eq!(idx.position_to_offset(Position::new(0, 40)), Some(2));
        assert_eq!(idx.position_to_offset(Position::new(1, 40)), Some(5));
    }

    #[test]
    fn utf16_handling() {
        // '😀' is 4 bytes in UTF-8 but 2 code units in UTF-16
        let idx = LineIndex::new("content: '😀';".to_string());
        assert_eq!(idx.offset_to_position(10), Position::new(0, 10));
        assert_eq!(idx.offset_to_position(14), Position::new(0, 12));
        assert_eq!(idx.position_to_offset(Position::new(0, 12)), Some(14));
    }

    #[test]
    fn out_of_bounds() {
        let idx = LineIndex::new("hello".to_string());
        assert_eq!(idx.position_to_offset(Position::new(5, 0)), None);
        assert_eq!(idx.offset_to_position(99), Position::new(0, 5));
    }
}
