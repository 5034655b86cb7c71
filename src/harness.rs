//! Runs `ARGUMENT:EXPECT` test pairs through a [`Grammar`] and tallies the
//! results.
//!
//! This is the engine behind the `quantifiers` command-line tool; it only
//! uses the public parsing and formatting API.

use super::{BracketPair, ErrorKind, Grammar, Quantifier};
use std::fmt;

/// The error type used while reading command-line tokens.
#[derive(Debug, Eq, thiserror::Error, PartialEq)]
pub enum Error {
    /// An `encaps=` value that is not an `OPEN,CLOSE` pair.
    #[error("bad encaps: {0:?}")]
    BadEncaps(String),
    /// `sep=` was given more than once.
    #[error("multiple sep, previous {previous:?}, current {current:?}")]
    DuplicateSeparator { previous: String, current: String },
    /// A `KEY=VALUE` token with an unknown key.
    #[error("invalid keyword {key:?} with value {value:?}")]
    UnknownKey { key: String, value: String },
    /// A test pair that is not exactly `ARGUMENT:EXPECT`.
    #[error("bad test pair {0:?}")]
    BadPair(String),
}

/// What a test pair expects from parsing its argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expect {
    /// Parsing fails. `kind` is `None` for the catch-all names.
    Error {
        name: String,
        kind: Option<ErrorKind>,
    },
    /// Parsing succeeds with a value equal to this token.
    Value(String),
}

impl Expect {
    /// Reads an expectation; names ending in `Error` or `Exception` denote a
    /// failure if they are recognised.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let kind = match text {
            "ConstructionError" => Some(Some(ErrorKind::Construction)),
            "FormatError" => Some(Some(ErrorKind::Format)),
            "RangeError" => Some(Some(ErrorKind::Range)),
            "UsageError" => Some(Some(ErrorKind::Usage)),
            "ValueError" | "Exception" => Some(None),
            _ => None,
        };

        match kind {
            Some(kind) => Expect::Error {
                name: text.to_string(),
                kind,
            },
            None => Expect::Value(text.to_string()),
        }
    }
}

impl fmt::Display for Expect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expect::Error { name, .. } => f.write_str(name),
            Expect::Value(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestPair {
    pub argument: String,
    pub expect: Expect,
}

/// A grammar profile and the test pairs to run through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub grammar: Grammar,
    pub pairs: Vec<TestPair>,
}

impl Config {
    /// Reads `sep=SEP`, `encaps=OPEN,CLOSE` and `ARGUMENT:EXPECT` tokens.
    ///
    /// The first `encaps` becomes the fixed pair; every distinct one is kept
    /// as an alternative.
    ///
    /// # Errors
    ///
    /// If a token is malformed, an [`Error`] is returned.
    pub fn from_tokens<I>(tokens: I) -> Result<Self, Error>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut separator: Option<String> = None;
        let mut pairs = Vec::new();
        let mut brackets = Vec::new();

        for token in tokens {
            let token = token.as_ref();

            let Some(eq) = token.get(1..).and_then(|rest| rest.find('=')).map(|i| i + 1) else {
                pairs.push(parse_pair(token)?);
                continue;
            };

            let (key, value) = (token[..eq].trim(), token[eq + 1..].trim());
            match key {
                "encaps" => {
                    let Some((open, close)) = value.split_once(',') else {
                        return Err(Error::BadEncaps(value.to_string()));
                    };
                    let pair = BracketPair::new(open.trim(), close.trim());
                    if !brackets.contains(&pair) {
                        brackets.push(pair);
                    }
                }
                "sep" => {
                    if let Some(previous) = separator {
                        return Err(Error::DuplicateSeparator {
                            previous,
                            current: value.to_string(),
                        });
                    }
                    separator = Some(value.to_string());
                }
                _ => {
                    return Err(Error::UnknownKey {
                        key: key.to_string(),
                        value: value.to_string(),
                    });
                }
            }
        }

        let mut grammar = Grammar::default();
        if let Some(separator) = separator {
            grammar = grammar.with_separator(separator);
        }
        if let Some(first) = brackets.first().cloned() {
            grammar = grammar.with_fixed_pair(first).with_bracket_pairs(brackets);
        }

        Ok(Config { grammar, pairs })
    }
}

fn parse_pair(token: &str) -> Result<TestPair, Error> {
    let mut parts = token.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(argument), Some(expect), None) => Ok(TestPair {
            argument: argument.trim().to_string(),
            expect: Expect::new(expect.trim()),
        }),
        _ => Err(Error::BadPair(token.to_string())),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail,
    Error,
}

/// The result of one test pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub outcome: Outcome,
    pub message: String,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.outcome {
            Outcome::Pass => "[PASS]",
            Outcome::Fail => "[FAIL]",
            Outcome::Error => "[ERR ]",
        };
        write!(f, "{tag} {}", self.message)
    }
}

/// Per-pair lines and the pass/fail/error tallies of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub lines: Vec<Line>,
}

impl Report {
    fn count(&self, outcome: Outcome) -> usize {
        self.lines
            .iter()
            .filter(|line| line.outcome == outcome)
            .count()
    }

    #[must_use]
    pub fn passes(&self) -> usize {
        self.count(Outcome::Pass)
    }

    #[must_use]
    pub fn fails(&self) -> usize {
        self.count(Outcome::Fail)
    }

    #[must_use]
    pub fn errors(&self) -> usize {
        self.count(Outcome::Error)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.lines.len()
    }

    /// The percentage of passing pairs; `0.0` for an empty run.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn success(&self) -> f64 {
        if self.lines.is_empty() {
            0.0
        } else {
            self.passes() as f64 * 100.0 / self.total() as f64
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==== Tests ====")?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        writeln!(f, "==== Results ====")?;
        writeln!(f, "Passes {:10}", self.passes())?;
        writeln!(f, "Fails  {:10}", self.fails())?;
        writeln!(f, "Errors {:10}", self.errors())?;
        writeln!(f, "Total  {:10}", self.total())?;
        write!(f, "Success {:8.1}%", self.success())
    }
}

/// Parses each argument with `grammar` and compares it with its expectation.
#[must_use]
pub fn run(grammar: &Grammar, pairs: &[TestPair]) -> Report {
    Report {
        lines: pairs.iter().map(|pair| check(grammar, pair)).collect(),
    }
}

fn check(grammar: &Grammar, TestPair { argument, expect }: &TestPair) -> Line {
    let (outcome, message) = match (grammar.parse(argument), expect) {
        (Err(err), Expect::Error { kind, .. }) if kind.is_none_or(|kind| kind == err.kind()) => (
            Outcome::Pass,
            format!("argument {argument:?}, expected error {expect}"),
        ),
        (Err(err), _) => (
            Outcome::Error,
            format!("argument {argument:?}, expected {expect}, actual error {:?}", err.to_string()),
        ),
        (Ok(actual), Expect::Value(text)) if matches_value(grammar, &actual, text) => (
            Outcome::Pass,
            format!("argument {argument:?}, expected {expect}"),
        ),
        (Ok(actual), _) => (
            Outcome::Fail,
            format!(
                "argument {argument:?}, expected {expect}, actual {}",
                grammar.format(&actual)
            ),
        ),
    };

    Line { outcome, message }
}

fn matches_value(grammar: &Grammar, actual: &Quantifier, text: &str) -> bool {
    grammar.parse(text).is_ok_and(|expected| expected == *actual) || grammar.format(actual) == text
}
