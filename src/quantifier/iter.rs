use std::iter::FusedIterator;

/// A lazy iterator over the values of a [`Quantifier`](super::Quantifier).
///
/// Created by [`Quantifier::iterate`](super::Quantifier::iterate). When it
/// has no last value it counts up forever; stop pulling to end it.
#[derive(Debug, Clone)]
pub struct Iter {
    front: u64,
    back: Option<u64>,
    reverse: bool,
    done: bool,
}

impl Iter {
    pub(super) fn new(first: u64, last: Option<u64>, reverse: bool) -> Self {
        debug_assert!(last.is_some() || !reverse);
        Iter {
            front: first,
            back: last,
            reverse,
            done: last.is_some_and(|last| last < first),
        }
    }

    fn pop_front(&mut self) -> Option<u64> {
        let value = self.front;
        match self.back {
            Some(back) if back == value => self.done = true,
            _ => match value.checked_add(1) {
                Some(next) => self.front = next,
                None => self.done = true,
            },
        }
        Some(value)
    }

    fn pop_back(&mut self) -> Option<u64> {
        let value = self.back?;
        if value == self.front {
            self.done = true;
        } else {
            self.back = Some(value - 1);
        }
        Some(value)
    }
}

impl Iterator for Iter {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            None
        } else if self.reverse {
            self.pop_back()
        } else {
            self.pop_front()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        match self.back {
            Some(back) => {
                let len = usize::try_from(back - self.front).ok().and_then(|n| n.checked_add(1));
                (len.unwrap_or(usize::MAX), len)
            }
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Iter {}
