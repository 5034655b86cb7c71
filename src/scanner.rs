//! A bounds-checked byte cursor over one addressed slice of a token.

/// Scans the bytes of `input` between `start` and `end`.
///
/// All positions are absolute offsets into `input`; no helper ever looks
/// past `end`.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'a> {
    input: &'a [u8],
    start: usize,
    end: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over `input[start..stop]` with surrounding ASCII
    /// whitespace trimmed off.
    ///
    /// Offsets past the end of `input` are clamped, and a `start` beyond
    /// `stop` yields an empty slice.
    #[must_use]
    pub fn new(input: &'a [u8], start: usize, stop: Option<usize>) -> Self {
        let end = stop.map_or(input.len(), |stop| stop.min(input.len()));
        let mut start = start.min(end);
        let mut end = end;

        while start < end && input[start].is_ascii_whitespace() {
            start += 1;
        }
        while start < end && input[end - 1].is_ascii_whitespace() {
            end -= 1;
        }

        Scanner { input, start, end }
    }

    /// The first position of the trimmed slice.
    #[inline]
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// One past the last position of the trimmed slice.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Returns `true` if `needle` occurs at `pos` and fits before the end.
    #[must_use]
    pub fn starts_with(&self, pos: usize, needle: &[u8]) -> bool {
        pos <= self.end && self.input[pos..self.end].starts_with(needle)
    }

    /// Returns the position after the run of ASCII digits at `pos`.
    #[must_use]
    pub fn skip_digits(&self, pos: usize) -> usize {
        self.skip_while(pos, u8::is_ascii_digit)
    }

    /// Returns the position after the run of ASCII whitespace at `pos`.
    #[must_use]
    pub fn skip_space(&self, pos: usize) -> usize {
        self.skip_while(pos, u8::is_ascii_whitespace)
    }

    /// Returns the first position at or after `pos` where `needle` starts.
    ///
    /// An empty `needle` is found at `pos` itself.
    #[must_use]
    pub fn find(&self, pos: usize, needle: &[u8]) -> Option<usize> {
        if pos > self.end {
            return None;
        }
        if needle.is_empty() {
            return Some(pos);
        }
        self.input[pos..self.end]
            .windows(needle.len())
            .position(|window| window == needle)
            .map(|offset| pos + offset)
    }

    /// Returns the bytes between `from` and `to`, clamped to the slice.
    #[must_use]
    pub fn slice(&self, from: usize, to: usize) -> &'a [u8] {
        let to = to.min(self.end);
        &self.input[from.min(to)..to]
    }

    fn skip_while(&self, mut pos: usize, pred: impl Fn(&u8) -> bool) -> usize {
        while pos < self.end && pred(&self.input[pos]) {
            pos += 1;
        }
        pos
    }
}

#[cfg(test)]
mod tests {
    use super::Scanner;

    #[test]
    fn test_trims_whitespace() {
        let scanner = Scanner::new(b"  {1,2}\t", 0, None);
        assert_eq!((scanner.start(), scanner.end()), (2, 7));

        let blank = Scanner::new(b"   ", 0, None);
        assert_eq!(blank.start(), blank.end());
    }

    #[test]
    fn test_clamps_offsets() {
        let scanner = Scanner::new(b"abc", 1, Some(99));
        assert_eq!((scanner.start(), scanner.end()), (1, 3));

        let inverted = Scanner::new(b"abc", 3, Some(1));
        assert_eq!((inverted.start(), inverted.end()), (1, 1));
    }

    #[test]
    fn test_skips_stop_at_end() {
        let scanner = Scanner::new(b"12  34", 0, Some(3));
        assert_eq!(scanner.skip_digits(0), 2);
        assert_eq!(scanner.skip_space(2), 2);
        assert_eq!(scanner.end(), 2);
    }

    #[test]
    fn test_find() {
        let scanner = Scanner::new(b"{2,5}}", 0, Some(5));
        assert_eq!(scanner.find(0, b"}"), Some(4));
        assert_eq!(scanner.find(2, b""), Some(2));
        assert_eq!(scanner.find(0, b">"), None);
        assert!(scanner.starts_with(0, b"{"));
        assert!(!scanner.starts_with(4, b"}}"));
    }
}
