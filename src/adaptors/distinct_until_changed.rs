use std::fmt;

use crate::value::{Entry, Value};

/// An adaptor that drops consecutive entries whose classifier value is
/// strictly equal to the previous one.
///
/// Each run is represented by its first entry, key included. Only the last
/// classifier value is remembered.
///
/// This `struct` is created by [`distinct_until_changed()`] and
/// [`distinct_until_changed_by()`].
#[derive(Clone)]
pub struct DistinctUntilChanged<I, F> {
    iter: I,
    selector: F,
    last: Option<Value>,
}

impl<I, F> Iterator for DistinctUntilChanged<I, F>
where
    I: Iterator<Item = Entry>,
    F: FnMut(&Value) -> Value,
{
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        loop {
            let entry = self.iter.next()?;
            let class = (self.selector)(&entry.1);

            if self.last.as_ref() != Some(&class) {
                self.last = Some(class);
                return Some(entry);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (lower.min(1), upper)
    }
}

impl<I: fmt::Debug, F> fmt::Debug for DistinctUntilChanged<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DistinctUntilChanged")
            .field("iter", &self.iter)
            .field("last", &self.last)
            .finish()
    }
}

/// Collapses runs of strictly equal values to their first entry.
pub fn distinct_until_changed<S>(seq: S) -> DistinctUntilChanged<S::IntoIter, fn(&Value) -> Value>
where
    S: IntoIterator<Item = Entry>,
{
    distinct_until_changed_by(seq, Value::clone)
}

/// Collapses runs whose `selector` results are strictly equal to their
/// first entry.
pub fn distinct_until_changed_by<S, F>(seq: S, selector: F) -> DistinctUntilChanged<S::IntoIter, F>
where
    S: IntoIterator<Item = Entry>,
    F: FnMut(&Value) -> Value,
{
    DistinctUntilChanged {
        iter: seq.into_iter(),
        selector,
        last: None,
    }
}
