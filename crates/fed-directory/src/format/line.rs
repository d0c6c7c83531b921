//! Character-column access to fixed-width lines.

use std::ops::Range;

use crate::error::{DirectoryError, Result};

/// A line addressed by character column rather than byte offset.
///
/// Directory files are nominally ASCII, but a stray multibyte character must
/// still count as one column, so non-ASCII lines carry a table of byte
/// offsets for every character boundary.
#[derive(Debug, Clone)]
pub struct FixedWidthLine<'a> {
    text: &'a str,
    /// Byte offset of every char boundary, including `text.len()`.
    /// `None` when the line is pure ASCII.
    bounds: Option<Vec<usize>>,
}

impl<'a> FixedWidthLine<'a> {
    pub fn new(text: &'a str) -> Self {
        let bounds = (!text.is_ascii()).then(|| {
            text.char_indices().map(|(idx, _)| idx).chain(std::iter::once(text.len())).collect()
        });
        Self { text, bounds }
    }

    /// Length of the line in characters.
    #[must_use]
    pub fn char_len(&self) -> usize {
        match &self.bounds {
            Some(bounds) => bounds.len() - 1,
            None => self.text.len(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Returns the characters in `range`, verbatim.
    ///
    /// Columns past the end of the line yield an empty or shortened slice.
    #[must_use]
    pub fn field(&self, range: Range<usize>) -> &'a str {
        let len = self.char_len();
        let start = range.start.min(len);
        let end = range.end.clamp(start, len);
        match &self.bounds {
            Some(bounds) => &self.text[bounds[start]..bounds[end]],
            None => &self.text[start..end],
        }
    }

    /// Returns the characters in `range` with surrounding whitespace removed.
    #[must_use]
    pub fn trimmed(&self, range: Range<usize>) -> &'a str {
        self.field(range).trim()
    }
}

/// Builds a fixed-width line column by column, left-aligning and
/// space-padding each value.
#[derive(Debug)]
pub(crate) struct LineBuilder {
    buf: String,
    columns: usize,
}

impl LineBuilder {
    pub(crate) fn with_length(length: usize) -> Self {
        Self { buf: String::with_capacity(length), columns: 0 }
    }

    /// Appends `value` into the column range `range`, which must start where
    /// the previous column ended.
    pub(crate) fn push(
        &mut self,
        field: &'static str,
        value: &str,
        range: Range<usize>,
    ) -> Result<()> {
        debug_assert_eq!(range.start, self.columns, "columns must be pushed in order");
        let width = range.len();
        let actual = value.chars().count();
        if actual > width {
            return Err(DirectoryError::FieldOverflow { field, width, actual });
        }
        self.buf.push_str(value);
        self.columns += actual;
        self.pad(width - actual);
        Ok(())
    }

    /// Pads the line with spaces up to `length` columns.
    pub(crate) fn finish(mut self, length: usize) -> String {
        if self.columns < length {
            self.pad(length - self.columns);
        }
        self.buf
    }

    fn pad(&mut self, count: usize) {
        self.buf.extend(std::iter::repeat_n(' ', count));
        self.columns += count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_fields_slice_by_column() {
        let line = FixedWidthLine::new("011000015O  NAME  ");
        assert_eq!(line.char_len(), 18);
        assert_eq!(line.field(0..9), "011000015");
        assert_eq!(line.field(9..10), "O");
        assert_eq!(line.trimmed(10..18), "NAME");
    }

    #[test]
    fn multibyte_character_is_one_column() {
        let line = FixedWidthLine::new("ÉCOLE CU  X");
        assert_eq!(line.char_len(), 11);
        assert_eq!(line.field(0..5), "ÉCOLE");
        assert_eq!(line.field(10..11), "X");
    }

    #[test]
    fn out_of_range_columns_are_clamped() {
        let line = FixedWidthLine::new("abc");
        assert_eq!(line.field(2..10), "c");
        assert_eq!(line.field(5..10), "");
    }

    #[test]
    fn builder_pads_and_rejects_overflow() {
        let mut builder = LineBuilder::with_length(8);
        builder.push("a", "12", 0..3).unwrap();
        builder.push("b", "Ü", 3..5).unwrap();
        assert_eq!(builder.finish(8), "12 Ü    ");

        let mut builder = LineBuilder::with_length(2);
        let err = builder.push("a", "toolong", 0..2).unwrap_err();
        assert!(matches!(err, DirectoryError::FieldOverflow { field: "a", width: 2, actual: 7 }));
    }
}
