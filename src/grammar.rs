//! Grammar profiles: the separator and bracket pairs that drive parsing and
//! formatting.

use super::{Quantifier, Result, parser};
use std::fmt;

/// An opening and closing token that enclose a quantifier, such as `{` `}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BracketPair {
    pub open: String,
    pub close: String,
}

impl BracketPair {
    #[must_use]
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        BracketPair {
            open: open.into(),
            close: close.into(),
        }
    }
}

impl<O: Into<String>, C: Into<String>> From<(O, C)> for BracketPair {
    fn from((open, close): (O, C)) -> Self {
        BracketPair::new(open, close)
    }
}

impl fmt::Display for BracketPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.open, self.close)
    }
}

/// An immutable text notation for [`Quantifier`]s.
///
/// When no fixed pair is set, parsing tries each of `bracket_pairs` in order
/// and takes the first whose opening token starts the text; formatting uses
/// the first of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    separator: String,
    bracket_pairs: Vec<BracketPair>,
    fixed_pair: Option<BracketPair>,
}

impl Default for Grammar {
    fn default() -> Self {
        Grammar {
            separator: ",".to_string(),
            bracket_pairs: [("(", ")"), ("{", "}"), ("[", "]"), ("<", ">")]
                .into_iter()
                .map(BracketPair::from)
                .collect(),
            fixed_pair: None,
        }
    }
}

impl Grammar {
    /// Creates a profile with the given separator and no bracket pairs.
    #[must_use]
    pub fn new(separator: impl Into<String>) -> Self {
        Grammar {
            separator: separator.into(),
            bracket_pairs: Vec::new(),
            fixed_pair: None,
        }
    }

    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Appends an alternative bracket pair.
    #[must_use]
    pub fn with_bracket_pair(mut self, pair: impl Into<BracketPair>) -> Self {
        self.bracket_pairs.push(pair.into());
        self
    }

    /// Replaces the alternative bracket pairs.
    #[must_use]
    pub fn with_bracket_pairs<P: Into<BracketPair>>(
        mut self,
        pairs: impl IntoIterator<Item = P>,
    ) -> Self {
        self.bracket_pairs = pairs.into_iter().map(Into::into).collect();
        self
    }

    /// Forces a single bracket pair for both parsing and formatting.
    #[must_use]
    pub fn with_fixed_pair(mut self, pair: impl Into<BracketPair>) -> Self {
        self.fixed_pair = Some(pair.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    #[inline]
    #[must_use]
    pub fn bracket_pairs(&self) -> &[BracketPair] {
        &self.bracket_pairs
    }

    #[inline]
    #[must_use]
    pub fn fixed_pair(&self) -> Option<&BracketPair> {
        self.fixed_pair.as_ref()
    }

    /// The pair used when formatting.
    #[must_use]
    pub fn format_pair(&self) -> Option<&BracketPair> {
        self.fixed_pair.as_ref().or_else(|| self.bracket_pairs.first())
    }

    /// Parses the whole of `token`.
    pub fn parse(&self, token: &str) -> Result<Quantifier> {
        parser::parse_quantifier(self, token, 0, None, false)
    }

    /// Parses `token[start..stop]`, optionally allowing trailing text after
    /// the closing token.
    pub fn parse_slice(
        &self,
        token: &str,
        start: usize,
        stop: Option<usize>,
        partial: bool,
    ) -> Result<Quantifier> {
        parser::parse_quantifier(self, token, start, stop, partial)
    }

    /// Formats `quantifier` as a token that [`Grammar::parse`] reads back.
    #[must_use]
    pub fn format(&self, quantifier: &Quantifier) -> String {
        let (open, close) = self
            .format_pair()
            .map_or(("", ""), |pair| (pair.open.as_str(), pair.close.as_str()));
        let min = quantifier.minvalue();

        match quantifier.maxvalue() {
            None => format!("{open}{min}{}{close}", self.separator),
            Some(max) if max == min => format!("{open}{min}{close}"),
            Some(max) => format!("{open}{min}{}{max}{close}", self.separator),
        }
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "separator {:?}, brackets [", self.separator)?;
        for (i, pair) in self.bracket_pairs.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{pair}")?;
        }
        f.write_str("]")?;
        if let Some(pair) = &self.fixed_pair {
            write!(f, ", fixed {pair}")?;
        }
        Ok(())
    }
}
