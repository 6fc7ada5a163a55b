use std::fmt;

use crate::value::{Entry, Value};

/// An adaptor that passes on the entries whose value satisfies a predicate,
/// or fails it for [`reject()`].
///
/// This `struct` is created by [`filter()`] and [`reject()`].
#[derive(Clone)]
pub struct Filter<I, F> {
    iter: I,
    pred: F,
    keep: bool,
}

impl<I, F> Iterator for Filter<I, F>
where
    I: Iterator<Item = Entry>,
    F: FnMut(&Value) -> bool,
{
    type Item = Entry;

    #[inline]
    fn next(&mut self) -> Option<Entry> {
        self.iter.find(|(_, value)| (self.pred)(value) == self.keep)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I: fmt::Debug, F> fmt::Debug for Filter<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("iter", &self.iter)
            .field("keep", &self.keep)
            .finish()
    }
}

/// Keeps entries whose value satisfies `pred`, with their keys.
///
/// # Examples
///
/// ```
/// use keyseq::{array, filter, to_array, Value};
///
/// let evens = filter(array![1, 2, 3, 4], |v: &Value| v.as_int().is_some_and(|n| n % 2 == 0));
/// assert_eq!(to_array(evens), array! { 1 => 2, 3 => 4 });
/// ```
pub fn filter<S, F>(seq: S, pred: F) -> Filter<S::IntoIter, F>
where
    S: IntoIterator<Item = Entry>,
    F: FnMut(&Value) -> bool,
{
    Filter {
        iter: seq.into_iter(),
        pred,
        keep: true,
    }
}

/// Drops entries whose value satisfies `pred`, keeping the rest with their keys.
pub fn reject<S, F>(seq: S, pred: F) -> Filter<S::IntoIter, F>
where
    S: IntoIterator<Item = Entry>,
    F: FnMut(&Value) -> bool,
{
    Filter {
        iter: seq.into_iter(),
        pred,
        keep: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{Traced, ints, keys, vals, values};
    use crate::value::Key;

    #[test]
    fn reject_is_complement() {
        let odd = |v: &Value| v.as_int().is_some_and(|n| n % 2 == 1);
        assert_eq!(values(filter(ints(6), odd)), vals([1_usize, 3, 5]));
        assert_eq!(keys(reject(ints(6), odd)), [Key::Int(0), Key::Int(2), Key::Int(4)]);
    }

    #[test]
    fn construction_does_not_pull() {
        let (traced, pulls) = Traced::new(ints(3));
        let mut adaptor = filter(traced, |_| true);
        assert_eq!(pulls.get(), 0);
        adaptor.next();
        assert_eq!(pulls.get(), 1);
    }
}
