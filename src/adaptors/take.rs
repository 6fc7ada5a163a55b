use std::fmt;

use crate::value::{Entry, Value};

/// An adaptor that passes on at most `n` entries.
///
/// This `struct` is created by [`take()`].
#[derive(Debug, Clone)]
pub struct Take<I> {
    iter: I,
    remaining: usize,
}

impl<I> Iterator for Take<I>
where
    I: Iterator<Item = Entry>,
{
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        // Must not pull once the quota is spent: the source may be infinite.
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining == 0 {
            return (0, Some(0));
        }

        let (lower, upper) = self.iter.size_hint();
        (
            lower.min(self.remaining),
            Some(upper.map_or(self.remaining, |upper| upper.min(self.remaining))),
        )
    }
}

/// Passes on the first `n` entries with their keys. A non-positive `n`
/// passes on nothing.
pub fn take<S>(seq: S, n: i64) -> Take<S::IntoIter>
where
    S: IntoIterator<Item = Entry>,
{
    Take {
        iter: seq.into_iter(),
        remaining: usize::try_from(n).unwrap_or(0),
    }
}

/// An adaptor that passes on entries while a predicate holds, then stops
/// for good.
///
/// This `struct` is created by [`take_while()`].
#[derive(Clone)]
pub struct TakeWhile<I, F> {
    iter: I,
    pred: F,
    done: bool,
}

impl<I, F> Iterator for TakeWhile<I, F>
where
    I: Iterator<Item = Entry>,
    F: FnMut(&Value) -> bool,
{
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        if self.done {
            return None;
        }

        match self.iter.next() {
            Some(entry) if (self.pred)(&entry.1) => Some(entry),
            _ => {
                self.done = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.iter.size_hint().1)
        }
    }
}

impl<I: fmt::Debug, F> fmt::Debug for TakeWhile<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TakeWhile")
            .field("iter", &self.iter)
            .field("done", &self.done)
            .finish()
    }
}

/// Passes on leading entries while `pred` holds for their values.
pub fn take_while<S, F>(seq: S, pred: F) -> TakeWhile<S::IntoIter, F>
where
    S: IntoIterator<Item = Entry>,
    F: FnMut(&Value) -> bool,
{
    TakeWhile {
        iter: seq.into_iter(),
        pred,
        done: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{Traced, ints, keys, vals, values};
    use crate::value::Key;

    #[test]
    fn non_positive_takes_nothing() {
        assert!(values(take(ints(3), 0)).is_empty());
        assert!(values(take(ints(3), -2)).is_empty());
        assert_eq!(values(take(ints(3), 10)), vals([0_usize, 1, 2]));
    }

    #[test]
    fn infinite_source_pulled_exactly_n() {
        let endless = (0_usize..).map(|i| (Key::from(i), Value::from(i)));
        let (traced, pulls) = Traced::new(endless);
        assert_eq!(keys(take(traced, 3)), [Key::Int(0), Key::Int(1), Key::Int(2)]);
        assert_eq!(pulls.get(), 3);
    }

    #[test]
    fn take_while_stops_for_good() {
        let small = |v: &Value| v.as_int().is_some_and(|n| n < 2);
        assert_eq!(values(take_while(ints(5), small)), vals([0_usize, 1]));
    }
}
