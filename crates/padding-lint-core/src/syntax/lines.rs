//! Line/column lookup over source text.

/// Byte offsets at which each source line starts.
///
/// Recognised line terminators: `\r\n`, `\r`, `\n`, U+2028 and U+2029.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    /// Builds the index for `source`.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut starts = vec![0];
        let mut chars = source.char_indices().peekable();

        while let Some((offset, ch)) = chars.next() {
            match ch {
                '\r' => {
                    if let Some(&(next_offset, '\n')) = chars.peek() {
                        chars.next();
                        starts.push(next_offset + 1);
                    } else {
                        starts.push(offset + 1);
                    }
                }
                '\n' => starts.push(offset + 1),
                '\u{2028}' | '\u{2029}' => starts.push(offset + ch.len_utf8()),
                _ => {}
            }
        }

        Self {
            starts,
            len: source.len(),
        }
    }

    /// Number of lines (an empty source has one line).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// 1-indexed line containing `offset`.
    #[must_use]
    pub fn line_of(&self, offset: usize) -> usize {
        match self.starts.binary_search(&offset) {
            Ok(exact) => exact + 1,
            Err(insert) => insert,
        }
    }

    /// Byte offset where the 1-indexed `line` starts.
    #[must_use]
    pub fn line_start(&self, line: usize) -> usize {
        self.starts
            .get(line.saturating_sub(1))
            .copied()
            .unwrap_or(self.len)
    }

    /// Byte offset where the content of `line` ends, before its terminator.
    #[must_use]
    pub fn line_end(&self, line: usize, source: &str) -> usize {
        let start = self.line_start(line);
        let next = self.starts.get(line).copied().unwrap_or(self.len);
        let text = &source[start..next];
        start + text.trim_end_matches(['\r', '\n', '\u{2028}', '\u{2029}']).len()
    }

    /// 0-indexed character column of `offset` within its line.
    #[must_use]
    pub fn column_of(&self, offset: usize, source: &str) -> usize {
        let start = self.line_start(self.line_of(offset));
        source[start..offset].chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_split_on_every_terminator() {
        let src = "a\nb\r\nc\rd\u{2028}e";
        let index = LineIndex::new(src);
        assert_eq!(index.line_count(), 5);
        assert_eq!(index.line_of(0), 1);
        assert_eq!(index.line_of(2), 2);
        assert_eq!(index.line_of(5), 3);
        assert_eq!(index.line_of(7), 4);
        assert_eq!(index.line_of(src.len() - 1), 5);
    }

    #[test]
    fn terminator_belongs_to_its_line() {
        let index = LineIndex::new("ab\ncd");
        assert_eq!(index.line_of(2), 1);
        assert_eq!(index.line_of(3), 2);
    }

    #[test]
    fn line_end_excludes_terminator() {
        let src = "let a;\r\nfoo();\n";
        let index = LineIndex::new(src);
        assert_eq!(index.line_end(1, src), 6);
        assert_eq!(index.line_end(2, src), 14);
        assert_eq!(index.line_end(3, src), src.len());
    }

    #[test]
    fn columns_count_characters() {
        let src = "é = 1;";
        let index = LineIndex::new(src);
        assert_eq!(index.column_of(src.find('=').unwrap_or(0), src), 2);
    }
}
