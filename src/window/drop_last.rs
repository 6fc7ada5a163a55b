use std::collections::VecDeque;

use crate::value::Entry;

/// An adaptor that leaves out the last `n` entries.
///
/// It runs `n + 1` entries ahead of its output and never holds more than
/// that, so it works on unbounded input.
///
/// This `struct` is created by [`drop_last()`] and [`init()`].
#[derive(Debug, Clone)]
pub struct DropLast<I> {
    iter: I,
    n: usize,
    buffer: VecDeque<Entry>,
}

impl<I> Iterator for DropLast<I>
where
    I: Iterator<Item = Entry>,
{
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        while self.buffer.len() <= self.n {
            let entry = self.iter.next()?;
            self.buffer.push_back(entry);
        }
        self.buffer.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        let held = self.buffer.len();
        (
            lower.saturating_add(held).saturating_sub(self.n),
            upper
                .and_then(|upper| upper.checked_add(held))
                .map(|upper| upper.saturating_sub(self.n)),
        )
    }
}

/// All but the last `n` entries of `seq`, with their keys. Non-positive `n`
/// drops nothing.
pub fn drop_last<S>(seq: S, n: i64) -> DropLast<S::IntoIter>
where
    S: IntoIterator<Item = Entry>,
{
    let n = usize::try_from(n).unwrap_or(0);
    DropLast {
        iter: seq.into_iter(),
        n,
        buffer: VecDeque::with_capacity(n.saturating_add(1).min(1024)),
    }
}

/// All but the last entry of `seq`.
pub fn init<S>(seq: S) -> DropLast<S::IntoIter>
where
    S: IntoIterator<Item = Entry>,
{
    drop_last(seq, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;
    use crate::iter::to_array;
    use crate::test_utils::{Traced, ints};

    #[test]
    fn keeps_keys() {
        let arr = array! { "a" => 1, "b" => 2, "c" => 3 };
        assert_eq!(to_array(drop_last(&arr, 2)), array! { "a" => 1 });
        assert_eq!(to_array(init(&arr)), array! { "a" => 1, "b" => 2 });
        assert_eq!(to_array(drop_last(&arr, -1)), arr);
        assert_eq!(drop_last(&arr, 5).count(), 0);
    }

    #[test]
    fn reads_n_plus_one_ahead() {
        let (traced, pulls) = Traced::new(ints(usize::MAX));
        let mut most = drop_last(traced, 2);
        assert_eq!(pulls.get(), 0);
        assert_eq!(most.next().map(|(_, v)| v.as_int()), Some(Some(0)));
        assert_eq!(pulls.get(), 3);
    }
}
