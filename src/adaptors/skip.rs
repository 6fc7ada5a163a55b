use std::fmt;

use crate::value::{Entry, Value};

/// An adaptor that skips the first `n` entries on its first pull.
///
/// This `struct` is created by [`drop()`] and [`tail()`].
#[derive(Debug, Clone)]
pub struct Skip<I> {
    iter: I,
    remaining: usize,
}

impl<I> Iterator for Skip<I>
where
    I: Iterator<Item = Entry>,
{
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        if self.remaining > 0 {
            let n = std::mem::take(&mut self.remaining);
            return self.iter.nth(n);
        }
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (
            lower.saturating_sub(self.remaining),
            upper.map(|upper| upper.saturating_sub(self.remaining)),
        )
    }
}

/// Skips the first `n` entries; the rest keep their keys. A non-positive
/// `n` skips nothing.
pub fn drop<S>(seq: S, n: i64) -> Skip<S::IntoIter>
where
    S: IntoIterator<Item = Entry>,
{
    Skip {
        iter: seq.into_iter(),
        remaining: usize::try_from(n).unwrap_or(0),
    }
}

/// Everything but the first entry.
#[inline]
pub fn tail<S>(seq: S) -> Skip<S::IntoIter>
where
    S: IntoIterator<Item = Entry>,
{
    drop(seq, 1)
}

/// An adaptor that skips leading entries while a predicate holds.
///
/// This `struct` is created by [`drop_while()`].
#[derive(Clone)]
pub struct SkipWhile<I, F> {
    iter: I,
    pred: Option<F>,
}

impl<I, F> Iterator for SkipWhile<I, F>
where
    I: Iterator<Item = Entry>,
    F: FnMut(&Value) -> bool,
{
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        // The predicate is dropped once the first failing entry is found.
        let Some(mut pred) = self.pred.take() else {
            return self.iter.next();
        };
        self.iter.find(|(_, value)| !pred(value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        match self.pred {
            Some(_) => (0, upper),
            None => (lower, upper),
        }
    }
}

impl<I: fmt::Debug, F> fmt::Debug for SkipWhile<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkipWhile")
            .field("iter", &self.iter)
            .field("skipping", &self.pred.is_some())
            .finish()
    }
}

/// Skips leading entries while `pred` holds; passes on the rest.
pub fn drop_while<S, F>(seq: S, pred: F) -> SkipWhile<S::IntoIter, F>
where
    S: IntoIterator<Item = Entry>,
    F: FnMut(&Value) -> bool,
{
    SkipWhile {
        iter: seq.into_iter(),
        pred: Some(pred),
    }
}
