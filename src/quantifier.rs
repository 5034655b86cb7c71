use super::{Error, Grammar, Result};
use std::{
    fmt,
    ops::{Bound, Range, RangeBounds, RangeFrom, RangeInclusive, RangeToInclusive},
    str::FromStr,
};

mod iter;

pub use self::iter::Iter;

/// An inclusive range of non-negative integers `[min, max]`, where `max` may
/// be unbounded.
///
/// Values are immutable once constructed and always satisfy
/// `min <= max` when `max` is bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quantifier {
    min: u64,
    max: Option<u64>,
}

/// The shapes a [`Quantifier`] can be constructed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bounds {
    /// No value; substituted by a default or the full range `[0, inf)`.
    Absent,
    /// Exactly `k`.
    Exact(i128),
    /// A min (absent means 0) and a max (absent means unbounded).
    Pair(Option<i128>, Option<i128>),
    /// One or two elements, treated like [`Bounds::Pair`]; a single element
    /// leaves the max unbounded.
    Seq(Vec<Option<i128>>),
    /// An existing value, passed through unchanged.
    Quantifier(Quantifier),
}

impl Quantifier {
    /// The largest accepted bound, so that `max + 1` is always representable.
    pub const MAX_BOUND: u64 = u64::MAX - 1;

    /// The range `[0, inf)`.
    pub const UNBOUNDED: Quantifier = Quantifier { min: 0, max: None };

    /// Constructs a quantifier from any supported input shape.
    ///
    /// # Errors
    ///
    /// Negative or too large bounds, `min > max`, or a sequence with other
    /// than one or two elements.
    pub fn new(bounds: impl Into<Bounds>) -> Result<Self> {
        Self::with_default(bounds, Bounds::Absent)
    }

    /// Like [`Quantifier::new`], but substitutes `none_value` when `bounds`
    /// is [`Bounds::Absent`].
    pub fn with_default(bounds: impl Into<Bounds>, none_value: impl Into<Bounds>) -> Result<Self> {
        let bounds = match bounds.into() {
            Bounds::Absent => none_value.into(),
            bounds => bounds,
        };

        let (min, max) = match bounds {
            Bounds::Quantifier(quantifier) => return Ok(quantifier),
            Bounds::Absent => return Ok(Self::UNBOUNDED),
            Bounds::Exact(k) => (Some(k), Some(k)),
            Bounds::Pair(min, max) => (min, max),
            Bounds::Seq(seq) => match *seq.as_slice() {
                [min] => (min, None),
                [min, max] => (min, max),
                _ => return Err(Error::Arity(seq.len())),
            },
        };

        let min = min.map_or(Ok(0), to_bound)?;
        let max = max.map(to_bound).transpose()?;

        match max {
            Some(max) if min > max => Err(Error::Inverted { min, max }),
            _ => Ok(Quantifier { min, max }),
        }
    }

    /// Constructs `[min, max]` (or `[min, inf)`) from already unsigned bounds.
    pub fn from_bounds(min: u64, max: Option<u64>) -> Result<Self> {
        Self::new(Bounds::Pair(Some(min.into()), max.map(i128::from)))
    }

    /// Parses a token with the default [`Grammar`].
    pub fn from_repr(token: &str) -> Result<Self> {
        Grammar::default().parse(token)
    }

    /// Formats the value with the default [`Grammar`].
    #[must_use]
    pub fn to_repr(&self) -> String {
        Grammar::default().format(self)
    }

    /// The lower bound.
    #[inline]
    #[must_use]
    pub const fn minvalue(&self) -> u64 {
        self.min
    }

    /// The inclusive upper bound, or `None` if unbounded.
    #[inline]
    #[must_use]
    pub const fn maxvalue(&self) -> Option<u64> {
        self.max
    }

    /// Returns the upper bound, or `none_value` if unbounded.
    #[inline]
    #[must_use]
    pub const fn maxvalue_or(&self, none_value: u64) -> u64 {
        match self.max {
            Some(max) => max,
            None => none_value,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_bounded(&self) -> bool {
        self.max.is_some()
    }

    /// Returns `true` if `min == max`.
    #[inline]
    #[must_use]
    pub fn is_singleton(&self) -> bool {
        self.max == Some(self.min)
    }

    /// Returns `true` if `value` lies within the range.
    #[must_use]
    pub fn contains(&self, value: i128) -> bool {
        i128::from(self.min) <= value && self.max.is_none_or(|max| value <= i128::from(max))
    }

    /// Returns `value` unchanged if it, or every element of it, lies within
    /// the range.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] for the first value that does not.
    pub fn quantify<V: Quantifiable>(&self, value: V) -> Result<V> {
        value.check(self)?;
        Ok(value)
    }

    /// Returns the values in the range as a half-open [`Range`].
    ///
    /// With `end`, both ends are clamped to `end`, which also stands in for
    /// an unbounded max.
    ///
    /// # Errors
    ///
    /// [`Error::Unbounded`] if the max is unbounded and no `end` is given.
    pub fn to_range(&self, end: Option<u64>) -> Result<Range<u64>> {
        let Slice { start, stop } = self.to_slice();
        match (stop, end) {
            (Some(stop), None) => Ok(start..stop),
            (None, None) => Err(Error::Unbounded),
            (stop, Some(end)) => {
                let stop = stop.map_or(end, |stop| stop.min(end));
                Ok(start.min(end)..stop)
            }
        }
    }

    /// Returns the range as an exclusive [`Slice`] `[min, max + 1)`.
    #[must_use]
    pub fn to_slice(&self) -> Slice {
        Slice {
            start: self.min,
            stop: self.max.map(|max| max + 1),
        }
    }

    #[inline]
    #[must_use]
    pub const fn to_tuple(&self) -> (u64, Option<u64>) {
        (self.min, self.max)
    }

    /// Returns a fresh lazy iterator over the values in the range.
    ///
    /// `end` caps the last value (and replaces an unbounded max). Without an
    /// `end`, an unbounded range is only iterated when `allow_infinite` is
    /// set, and never in reverse.
    ///
    /// # Errors
    ///
    /// [`Error::ReverseUnbounded`] or [`Error::Unbounded`], before anything
    /// is yielded.
    pub fn iterate(&self, end: Option<u64>, reverse: bool, allow_infinite: bool) -> Result<Iter> {
        let last = match (self.max, end) {
            (Some(max), Some(end)) => Some(max.min(end)),
            (max, end) => max.or(end),
        };

        match last {
            Some(last) => Ok(Iter::new(self.min, Some(last), reverse)),
            None if reverse => Err(Error::ReverseUnbounded),
            None if allow_infinite => Ok(Iter::new(self.min, None, false)),
            None => Err(Error::Unbounded),
        }
    }

    /// Iterates the bounded range in ascending order.
    pub fn iter(&self) -> Result<Iter> {
        self.iterate(None, false, false)
    }

    /// Iterates the bounded range in descending order.
    pub fn iter_rev(&self) -> Result<Iter> {
        self.iterate(None, true, false)
    }
}

fn to_bound(value: i128) -> Result<u64> {
    if value < 0 {
        return Err(Error::NegativeBound(value));
    }
    u64::try_from(value)
        .ok()
        .filter(|&bound| bound <= Quantifier::MAX_BOUND)
        .ok_or(Error::BoundOverflow(value))
}

impl Default for Quantifier {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_repr())
    }
}

impl FromStr for Quantifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_repr(s)
    }
}

impl RangeBounds<u64> for Quantifier {
    fn start_bound(&self) -> Bound<&u64> {
        Bound::Included(&self.min)
    }

    fn end_bound(&self) -> Bound<&u64> {
        self.max.as_ref().map_or(Bound::Unbounded, Bound::Included)
    }
}

/// An exclusive `[start, stop)` view of a [`Quantifier`], with `stop` left
/// open when the max is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slice {
    pub start: u64,
    pub stop: Option<u64>,
}

impl RangeBounds<u64> for Slice {
    fn start_bound(&self) -> Bound<&u64> {
        Bound::Included(&self.start)
    }

    fn end_bound(&self) -> Bound<&u64> {
        self.stop.as_ref().map_or(Bound::Unbounded, Bound::Excluded)
    }
}

macro_rules! impl_bounds_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Bounds {
                fn from(value: $ty) -> Self {
                    Bounds::Exact(i128::from(value))
                }
            }

            impl From<($ty, $ty)> for Bounds {
                fn from((min, max): ($ty, $ty)) -> Self {
                    Bounds::Pair(Some(i128::from(min)), Some(i128::from(max)))
                }
            }

            impl From<(Option<$ty>, Option<$ty>)> for Bounds {
                fn from((min, max): (Option<$ty>, Option<$ty>)) -> Self {
                    Bounds::Pair(min.map(i128::from), max.map(i128::from))
                }
            }

            impl From<($ty,)> for Bounds {
                fn from((min,): ($ty,)) -> Self {
                    Bounds::Pair(Some(i128::from(min)), None)
                }
            }

            impl From<Option<$ty>> for Bounds {
                fn from(value: Option<$ty>) -> Self {
                    value.map_or(Bounds::Absent, Bounds::from)
                }
            }

            impl From<&[$ty]> for Bounds {
                fn from(values: &[$ty]) -> Self {
                    Bounds::Seq(values.iter().map(|&v| Some(i128::from(v))).collect())
                }
            }

            impl From<RangeInclusive<$ty>> for Bounds {
                fn from(range: RangeInclusive<$ty>) -> Self {
                    Bounds::from((*range.start(), *range.end()))
                }
            }

            impl From<RangeFrom<$ty>> for Bounds {
                fn from(range: RangeFrom<$ty>) -> Self {
                    Bounds::from((range.start,))
                }
            }

            impl From<RangeToInclusive<$ty>> for Bounds {
                fn from(range: RangeToInclusive<$ty>) -> Self {
                    Bounds::Pair(None, Some(i128::from(range.end)))
                }
            }
        )*
    };
}

impl_bounds_from_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl From<usize> for Bounds {
    fn from(value: usize) -> Self {
        Bounds::Exact(value as i128)
    }
}

impl From<Quantifier> for Bounds {
    fn from(quantifier: Quantifier) -> Self {
        Bounds::Quantifier(quantifier)
    }
}

impl From<&Quantifier> for Bounds {
    fn from(quantifier: &Quantifier) -> Self {
        Bounds::Quantifier(*quantifier)
    }
}

impl From<Vec<Option<i128>>> for Bounds {
    fn from(seq: Vec<Option<i128>>) -> Self {
        Bounds::Seq(seq)
    }
}

impl From<&[Option<i128>]> for Bounds {
    fn from(seq: &[Option<i128>]) -> Self {
        Bounds::Seq(seq.to_vec())
    }
}

impl From<()> for Bounds {
    fn from((): ()) -> Self {
        Bounds::Absent
    }
}

impl TryFrom<Bounds> for Quantifier {
    type Error = Error;

    fn try_from(bounds: Bounds) -> Result<Self> {
        Quantifier::new(bounds)
    }
}

/// A value, or collection of values, that can be checked against a
/// [`Quantifier`].
pub trait Quantifiable {
    /// Checks every contained value against `quantifier`.
    fn check(&self, quantifier: &Quantifier) -> Result<()>;
}

macro_rules! impl_quantifiable_int {
    ($($ty:ty),*) => {
        $(
            impl Quantifiable for $ty {
                fn check(&self, quantifier: &Quantifier) -> Result<()> {
                    let value = i128::from(*self);
                    if quantifier.contains(value) {
                        Ok(())
                    } else {
                        Err(Error::OutOfRange {
                            value,
                            min: quantifier.min,
                            max: quantifier.max,
                        })
                    }
                }
            }
        )*
    };
}

impl_quantifiable_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

// usize and isize are at most 64 bits on every supported target
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
impl Quantifiable for usize {
    fn check(&self, quantifier: &Quantifier) -> Result<()> {
        (*self as u64).check(quantifier)
    }
}

#[allow(clippy::cast_possible_truncation)]
impl Quantifiable for isize {
    fn check(&self, quantifier: &Quantifier) -> Result<()> {
        (*self as i64).check(quantifier)
    }
}

impl<T: Quantifiable> Quantifiable for [T] {
    fn check(&self, quantifier: &Quantifier) -> Result<()> {
        self.iter().try_for_each(|value| value.check(quantifier))
    }
}

impl<T: Quantifiable, const N: usize> Quantifiable for [T; N] {
    fn check(&self, quantifier: &Quantifier) -> Result<()> {
        self.as_slice().check(quantifier)
    }
}

impl<T: Quantifiable> Quantifiable for Vec<T> {
    fn check(&self, quantifier: &Quantifier) -> Result<()> {
        self.as_slice().check(quantifier)
    }
}

impl<T: Quantifiable + ?Sized> Quantifiable for &T {
    fn check(&self, quantifier: &Quantifier) -> Result<()> {
        (**self).check(quantifier)
    }
}
