use super::{
    Bounds, Error, Grammar, Quantifier, Result,
    grammar::BracketPair,
    scanner::Scanner,
};

/// Parses the quantifier token in `token[start..stop]` according to
/// `grammar`.
///
/// Unless `partial` is set the closing token must end the slice.
///
/// # Errors
///
/// Text that does not fit the grammar yields [`Error::Format`]. Text that
/// fits but describes an invalid range (e.g. `{5,2}`) yields the
/// construction error of [`Quantifier::new`].
pub fn parse_quantifier(
    grammar: &Grammar,
    token: &str,
    start: usize,
    stop: Option<usize>,
    partial: bool,
) -> Result<Quantifier> {
    let parser = Parser::new(grammar, token, start, stop);
    let (min, max) = parser.parse(partial).ok_or_else(|| Error::Format {
        token: token.to_string(),
    })?;

    Quantifier::new(Bounds::Pair(min, max))
}

/// Scans one quantifier token.
struct Parser<'a> {
    scanner: Scanner<'a>,
    separator: &'a [u8],
    open: &'a [u8],
    close: &'a [u8],
}

impl<'a> Parser<'a> {
    fn new(grammar: &'a Grammar, token: &'a str, start: usize, stop: Option<usize>) -> Self {
        let scanner = Scanner::new(token.as_bytes(), start, stop);

        let pair = grammar.fixed_pair().or_else(|| {
            grammar
                .bracket_pairs()
                .iter()
                .find(|pair| scanner.starts_with(scanner.start(), pair.open.as_bytes()))
        });
        let (open, close) = pair.map_or((&b""[..], &b""[..]), |BracketPair { open, close }| {
            (open.as_bytes(), close.as_bytes())
        });

        Parser {
            scanner,
            separator: grammar.separator().as_bytes(),
            open,
            close,
        }
    }

    /// Returns the min and max literals as integers, or `None` if the text
    /// does not match.
    fn parse(&self, partial: bool) -> Option<(Option<i128>, Option<i128>)> {
        let scanner = &self.scanner;

        if !scanner.starts_with(scanner.start(), self.open) {
            return None;
        }

        let min_start = scanner.start() + self.open.len();
        let min_end = scanner.skip_space(scanner.skip_digits(min_start));
        let max_start = if scanner.starts_with(min_end, self.separator) {
            scanner.skip_space(min_end + self.separator.len())
        } else {
            min_end
        };
        let close_pos = scanner.find(
            scanner.skip_space(scanner.skip_digits(max_start)),
            self.close,
        )?;

        // without a separator a lone number is both bounds
        let (min, max) = if min_end == close_pos {
            let exact = scanner.slice(min_start, close_pos);
            (exact, exact)
        } else {
            (
                scanner.slice(min_start, min_end),
                scanner.slice(max_start, close_pos),
            )
        };

        let min = parse_literal(min)?.or(Some(0));
        let max = parse_literal(max)?;

        if !partial && close_pos + self.close.len() != scanner.end() {
            return None;
        }

        Some((min, max))
    }
}

/// Reads a trimmed decimal literal; empty text is `Some(None)`.
fn parse_literal(bytes: &[u8]) -> Option<Option<i128>> {
    let text = str::from_utf8(bytes.trim_ascii()).ok()?;
    if text.is_empty() {
        return Some(None);
    }
    text.parse().ok().map(Some)
}
