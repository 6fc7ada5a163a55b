use std::collections::{VecDeque, vec_deque};
use std::fmt;

use crate::log::trace;
use crate::value::Entry;

/// An adaptor over the last `n` entries.
///
/// The tail cannot be known before the input ends, so the first pull reads
/// everything, keeping only the latest `n` entries on the way.
///
/// This `struct` is created by [`take_last()`].
pub struct TakeLast<I> {
    state: State<I>,
}

enum State<I> {
    Pending { iter: I, n: usize },
    Draining(vec_deque::IntoIter<Entry>),
}

impl<I> Iterator for TakeLast<I>
where
    I: Iterator<Item = Entry>,
{
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        if let State::Pending { iter, n } = &mut self.state {
            let n = *n;
            let mut tail = VecDeque::with_capacity(n.min(1024));
            for entry in iter {
                if tail.len() == n {
                    tail.pop_front();
                }
                if n > 0 {
                    tail.push_back(entry);
                }
            }
            trace!(kept = tail.len(), "take_last consumed its input");
            self.state = State::Draining(tail.into_iter());
        }

        match &mut self.state {
            State::Draining(tail) => tail.next(),
            State::Pending { .. } => None,
        }
    }
}

impl<I> fmt::Debug for TakeLast<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Pending { n, .. } => f.debug_struct("TakeLast").field("n", n).finish(),
            State::Draining(tail) => f.debug_struct("TakeLast").field("remaining", &tail.len()).finish(),
        }
    }
}

/// The last `n` entries of `seq`, in order, with their keys. Non-positive
/// `n` yields nothing, but the input is still read to the end.
///
/// # Examples
///
/// ```
/// use keyseq::{array, take_last, to_array};
///
/// assert_eq!(to_array(take_last(array![1, 2, 3, 4], 2)), array! { 2 => 3, 3 => 4 });
/// ```
pub fn take_last<S>(seq: S, n: i64) -> TakeLast<S::IntoIter>
where
    S: IntoIterator<Item = Entry>,
{
    TakeLast {
        state: State::Pending {
            iter: seq.into_iter(),
            n: usize::try_from(n).unwrap_or(0),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;

    #[test]
    fn short_input_is_returned_whole() {
        assert_eq!(take_last(array![1, 2], 5).count(), 2);
        assert_eq!(take_last(array![1, 2], 0).count(), 0);
        assert_eq!(take_last(array![], 3).count(), 0);
    }
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;
    use crate::test_utils::{Traced, ints, values};
    use crate::value::Value;

    proptest! {
        #[test]
        fn reads_the_whole_input_whatever_n(len in 0_usize..64, n in -2_i64..80) {
            let (traced, pulls) = Traced::new(ints(len));
            let tail = values(take_last(traced, n));

            // Every entry, plus the pull that found the end.
            prop_assert_eq!(pulls.get(), len + 1);

            let kept = usize::try_from(n).unwrap_or(0).min(len);
            let expected: Vec<Value> = (len - kept..len).map(Value::from).collect();
            prop_assert_eq!(tail, expected);
        }
    }
}
