//! Inclusive integer ranges (`[min, max]`, max optionally unbounded) with a
//! bracketed textual grammar such as `{2,5}`, `(3,)` or `<7>`.

#![warn(clippy::pedantic, rust_2018_idioms)]
#![allow(clippy::missing_errors_doc)]

pub mod grammar;
pub mod harness;
pub mod parser;
pub mod quantifier;
pub mod scanner;

pub use self::{
    grammar::{BracketPair, Grammar},
    quantifier::{Bounds, Iter, Quantifiable, Quantifier, Slice},
};

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A bound below zero was given.
    #[error("quantifier bound {0} is negative")]
    NegativeBound(i128),

    /// A bound larger than [`Quantifier::MAX_BOUND`] was given.
    #[error("quantifier bound {0} exceeds {max}", max = Quantifier::MAX_BOUND)]
    BoundOverflow(i128),

    /// The minimum is greater than the maximum.
    #[error("quantifier minimum {min} exceeds maximum {max}")]
    Inverted { min: u64, max: u64 },

    /// A bound sequence with a length other than one or two.
    #[error("quantifier expects one or two bounds, not {0}")]
    Arity(usize),

    /// The text does not match the grammar.
    #[error("expected a quantifier representation, not {token:?}")]
    Format { token: String },

    /// A value lies outside the range.
    #[error("{min} <= {value} <= {} does not quantify", display_max(.max))]
    OutOfRange {
        value: i128,
        min: u64,
        max: Option<u64>,
    },

    /// Reverse iteration was requested without a finite starting point.
    #[error("attempt to iterate from infinity")]
    ReverseUnbounded,

    /// Forward iteration over an unbounded range without opting in.
    #[error("attempt to iterate infinity, pass an end or allow infinite iteration")]
    Unbounded,
}

/// The four broad classes of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid shape or value passed to a constructor.
    Construction,
    /// Text that does not match the grammar.
    Format,
    /// A value outside the range.
    Range,
    /// Iteration requested in an impossible mode.
    Usage,
}

impl Error {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::NegativeBound(_)
            | Error::BoundOverflow(_)
            | Error::Inverted { .. }
            | Error::Arity(_) => ErrorKind::Construction,
            Error::Format { .. } => ErrorKind::Format,
            Error::OutOfRange { .. } => ErrorKind::Range,
            Error::ReverseUnbounded | Error::Unbounded => ErrorKind::Usage,
        }
    }
}

fn display_max(max: &Option<u64>) -> String {
    max.map_or_else(|| "inf".to_string(), |max| max.to_string())
}

pub type Result<T> = std::result::Result<T, Error>;
