use std::collections::HashSet;
use std::fmt;
use std::vec;

use super::identify;
use crate::hash::HashId;
use crate::log::trace;
use crate::value::Entry;

const OP: &str = "symmetric_difference";

/// An adaptor over the values found in exactly one of two sequences: first
/// those only in the left one, in its order, then those only in the right
/// one, in its order. Every entry keeps its own key.
///
/// The right sequence is buffered in full on the first pull. The left one
/// streams.
///
/// This `struct` is created by [`symmetric_difference()`].
pub struct SymmetricDifference<A, B> {
    left: A,
    phase: Phase<B>,
    // Identifiers of every hashable left value, emitted or not.
    left_ids: HashSet<HashId>,
    right_ids: HashSet<HashId>,
    seen: HashSet<HashId>,
}

enum Phase<B> {
    Pending(B),
    // Streaming the left side, holding the buffered right side.
    Left(vec::IntoIter<(HashId, Entry)>),
    Right(vec::IntoIter<(HashId, Entry)>),
    Done,
}

impl<A, B> Iterator for SymmetricDifference<A, B>
where
    A: Iterator<Item = Entry>,
    B: Iterator<Item = Entry>,
{
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        loop {
            match std::mem::replace(&mut self.phase, Phase::Done) {
                Phase::Pending(right) => {
                    let buffered: Vec<(HashId, Entry)> = right
                        .filter_map(|entry| Some((identify(OP, &entry.1)?, entry)))
                        .collect();
                    trace!(buffered = buffered.len(), "symmetric_difference buffered its right side");

                    self.right_ids = buffered.iter().map(|(id, _)| id.clone()).collect();
                    self.phase = Phase::Left(buffered.into_iter());
                }
                Phase::Left(buffered) => {
                    let Self {
                        left,
                        left_ids,
                        right_ids,
                        seen,
                        ..
                    } = self;
                    let found = left.find_map(|entry| {
                        let id = identify(OP, &entry.1)?;
                        left_ids.insert(id.clone());
                        (!right_ids.contains(&id) && seen.insert(id)).then_some(entry)
                    });

                    match found {
                        Some(entry) => {
                            self.phase = Phase::Left(buffered);
                            return Some(entry);
                        }
                        None => self.phase = Phase::Right(buffered),
                    }
                }
                Phase::Right(mut buffered) => {
                    let Self { left_ids, seen, .. } = self;
                    let found = buffered
                        .find(|(id, _)| !left_ids.contains(id) && seen.insert(id.clone()))
                        .map(|(_, entry)| entry);
                    if found.is_some() {
                        self.phase = Phase::Right(buffered);
                    }
                    return found;
                }
                Phase::Done => return None,
            }
        }
    }
}

impl<A: fmt::Debug, B> fmt::Debug for SymmetricDifference<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = match self.phase {
            Phase::Pending(_) => "pending",
            Phase::Left(_) => "left",
            Phase::Right(_) => "right",
            Phase::Done => "done",
        };
        f.debug_struct("SymmetricDifference")
            .field("left", &self.left)
            .field("phase", &phase)
            .finish()
    }
}

/// Values of `a` not in `b` (in `a`'s order), then values of `b` not in `a`
/// (in `b`'s order), each with its source key. Repeats collapse to their
/// first occurrence.
pub fn symmetric_difference<A, B>(a: A, b: B) -> SymmetricDifference<A::IntoIter, B::IntoIter>
where
    A: IntoIterator<Item = Entry>,
    B: IntoIterator<Item = Entry>,
{
    SymmetricDifference {
        left: a.into_iter(),
        phase: Phase::Pending(b.into_iter()),
        left_ids: HashSet::new(),
        right_ids: HashSet::new(),
        seen: HashSet::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;
    use crate::iter::to_array;
    use crate::test_utils::{Traced, ints};

    #[test]
    fn left_only_then_right_only() {
        let a = array! { 0 => 1, 1 => 2, 2 => "2", 3 => 3, "k" => 4 };
        let b = array! { "a" => 2, "b" => 5, "c" => "2", "d" => 6, "e" => 7 };
        assert_eq!(
            to_array(symmetric_difference(&a, &b)),
            array! { 0 => 1, 3 => 3, "k" => 4, "b" => 5, "d" => 6, "e" => 7 }
        );
    }

    #[test]
    fn repeats_collapse_on_both_sides() {
        let a = array![1, 1, 2];
        let b = array! { "x" => 3, "y" => 3, "z" => 2 };
        assert_eq!(to_array(symmetric_difference(&a, &b)), array! { 0 => 1, "x" => 3 });
    }

    #[test]
    fn nothing_is_read_before_the_first_pull() {
        let (left, left_pulls) = Traced::new(ints(2));
        let (right, right_pulls) = Traced::new(ints(3));
        let mut diff = symmetric_difference(left, right);
        assert_eq!((left_pulls.get(), right_pulls.get()), (0, 0));

        assert_eq!(diff.next().map(|(_, v)| v), Some(crate::Value::from(2)));
        assert_eq!(right_pulls.get(), 4);
    }
}
