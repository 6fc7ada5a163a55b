use std::collections::HashSet;
use std::fmt;
use std::iter::Chain;

use super::identify;
use crate::hash::HashId;
use crate::value::{Entry, Value};

/// An adaptor that lets through the first entry of every equivalence class.
///
/// Classes are decided by the canonical identifier of what `by` returns for
/// each value. Entries whose class value is unhashable are dropped.
///
/// This `struct` is created by [`uniq()`], [`uniq_by()`] and [`union()`].
#[derive(Clone)]
pub struct UniqBy<I, F> {
    iter: I,
    by: F,
    seen: HashSet<HashId>,
    op: &'static str,
}

impl<I, F> Iterator for UniqBy<I, F>
where
    I: Iterator<Item = Entry>,
    F: FnMut(&Value) -> Value,
{
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        let Self { iter, by, seen, op } = self;
        let op = *op;
        iter.find(|(_, value)| identify(op, &by(value)).is_some_and(|id| seen.insert(id)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I: fmt::Debug, F> fmt::Debug for UniqBy<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniqBy")
            .field("iter", &self.iter)
            .field("seen", &self.seen.len())
            .finish()
    }
}

/// An adaptor that lets through the first occurrence of every distinct
/// value.
///
/// This `struct` is created by [`uniq()`].
pub type Uniq<I> = UniqBy<I, fn(&Value) -> Value>;

/// An adaptor over the distinct values of two sequences.
///
/// This `struct` is created by [`union()`].
pub type Union<A, B> = Uniq<Chain<A, B>>;

fn uniq_in<I>(op: &'static str, iter: I) -> Uniq<I> {
    UniqBy {
        iter,
        by: Value::clone,
        seen: HashSet::new(),
        op,
    }
}

/// Keeps the first occurrence of each distinct value of `seq`, with its
/// key.
///
/// # Examples
///
/// ```
/// use keyseq::{array, to_array, uniq};
///
/// assert_eq!(to_array(uniq(array![1, "1", 1, 2.0, 2.0])), array! { 0 => 1, 1 => "1", 3 => 2.0 });
/// ```
pub fn uniq<S>(seq: S) -> Uniq<S::IntoIter>
where
    S: IntoIterator<Item = Entry>,
{
    uniq_in("uniq", seq.into_iter())
}

/// Keeps the first entry of `seq` for each distinct result of `by`.
pub fn uniq_by<S, F>(seq: S, by: F) -> UniqBy<S::IntoIter, F>
where
    S: IntoIterator<Item = Entry>,
    F: FnMut(&Value) -> Value,
{
    UniqBy {
        iter: seq.into_iter(),
        by,
        seen: HashSet::new(),
        op: "uniq_by",
    }
}

/// Distinct values of `a` then `b`, each with the key of its first
/// occurrence.
pub fn union<A, B>(a: A, b: B) -> Union<A::IntoIter, B::IntoIter>
where
    A: IntoIterator<Item = Entry>,
    B: IntoIterator<Item = Entry>,
{
    uniq_in("union", a.into_iter().chain(b))
}
