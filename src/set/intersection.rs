use std::collections::HashSet;
use std::fmt;

use super::{id_set, identify};
use crate::hash::HashId;
use crate::value::Entry;

/// An adaptor over the entries of one sequence whose values do (or do not)
/// occur in another.
///
/// The other sequence is drained into a set of identifiers on the first
/// pull, not at construction. Duplicates within the first sequence collapse
/// to their first occurrence.
///
/// This `struct` is created by [`intersection()`] and
/// [`difference()`](super::difference()).
pub struct Intersection<A, B> {
    iter: A,
    other: Option<B>,
    other_ids: HashSet<HashId>,
    seen: HashSet<HashId>,
    keep_common: bool,
    op: &'static str,
}

impl<A, B> Intersection<A, B> {
    pub(super) fn new(op: &'static str, iter: A, other: B, keep_common: bool) -> Self {
        Self {
            iter,
            other: Some(other),
            other_ids: HashSet::new(),
            seen: HashSet::new(),
            keep_common,
            op,
        }
    }
}

impl<A, B> Iterator for Intersection<A, B>
where
    A: Iterator<Item = Entry>,
    B: Iterator<Item = Entry>,
{
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        if let Some(other) = self.other.take() {
            self.other_ids = id_set(self.op, other);
        }

        let Self {
            iter,
            other_ids,
            seen,
            keep_common,
            op,
            ..
        } = self;
        let (op, keep_common) = (*op, *keep_common);

        iter.find(|(_, value)| {
            identify(op, value).is_some_and(|id| other_ids.contains(&id) == keep_common && seen.insert(id))
        })
    }
}

impl<A: fmt::Debug, B> fmt::Debug for Intersection<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Intersection")
            .field("iter", &self.iter)
            .field("other_buffered", &self.other.is_none())
            .field("keep_common", &self.keep_common)
            .finish()
    }
}

/// Entries of `a` whose values also occur in `b`, with `a`'s keys.
///
/// # Examples
///
/// ```
/// use keyseq::{array, intersection, to_array};
///
/// let a = array! { "x" => 1, "y" => 2, "z" => 1 };
/// assert_eq!(to_array(intersection(&a, array![1, 3])), array! { "x" => 1 });
/// ```
pub fn intersection<A, B>(a: A, b: B) -> Intersection<A::IntoIter, B::IntoIter>
where
    A: IntoIterator<Item = Entry>,
    B: IntoIterator<Item = Entry>,
{
    Intersection::new("intersection", a.into_iter(), b.into_iter(), true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;
    use crate::test_utils::{Traced, ints, values};
    use crate::value::Value;

    #[test]
    fn right_side_is_read_on_first_pull() {
        let (traced, pulls) = Traced::new(ints(3));
        let mut common = intersection(array![2, 7], traced);
        assert_eq!(pulls.get(), 0);
        assert_eq!(common.next().map(|(_, v)| v), Some(Value::from(2)));
        assert_eq!(pulls.get(), 4);
    }

    #[test]
    fn strict_membership() {
        assert_eq!(values(intersection(array![1, "2", 3.0], array!["1", 2, 3.0])), [Value::from(3.0)]);
    }
}
