use std::fmt;

use crate::value::{Entry, Value};

/// An adaptor emitting the running fold after each entry.
///
/// The seed itself is not emitted. Only the accumulator is kept between
/// pulls.
///
/// This `struct` is created by [`scan()`].
#[derive(Clone)]
pub struct Scan<I, F> {
    iter: I,
    f: F,
    accum: Value,
}

impl<I, F> Iterator for Scan<I, F>
where
    I: Iterator<Item = Entry>,
    F: FnMut(Value, &Value) -> Value,
{
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        let (key, value) = self.iter.next()?;
        let accum = std::mem::take(&mut self.accum);
        self.accum = (self.f)(accum, &value);
        Some((key, self.accum.clone()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I: fmt::Debug, F> fmt::Debug for Scan<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scan")
            .field("iter", &self.iter)
            .field("accum", &self.accum)
            .finish()
    }
}

/// Inclusive running left fold of `seq` from `seed`, keyed like the input.
pub fn scan<S, F>(seq: S, f: F, seed: impl Into<Value>) -> Scan<S::IntoIter, F>
where
    S: IntoIterator<Item = Entry>,
    F: FnMut(Value, &Value) -> Value,
{
    Scan {
        iter: seq.into_iter(),
        f,
        accum: seed.into(),
    }
}
