use std::fmt;

use crate::log::trace;
use crate::value::{Entry, Value};

/// An adaptor emitting, for every entry, the fold of that entry and
/// everything after it, in the original left-to-right order.
///
/// Unlike [`Scan`](super::Scan) the first output depends on the last
/// input, so the whole input is buffered on the first pull.
///
/// This `struct` is created by [`scan_right()`].
pub struct ScanRight<I, F> {
    state: State<I, F>,
}

enum State<I, F> {
    Pending { iter: I, f: F, seed: Value },
    Draining(std::vec::IntoIter<Entry>),
    // Only observable if `f` panicked mid-buffer.
    Poisoned,
}

impl<I, F> Iterator for ScanRight<I, F>
where
    I: Iterator<Item = Entry>,
    F: FnMut(Value, &Value) -> Value,
{
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        if let State::Pending { .. } = self.state
            && let State::Pending { iter, mut f, seed } =
                std::mem::replace(&mut self.state, State::Poisoned)
        {
            let mut entries: Vec<Entry> = iter.collect();
            trace!(buffered = entries.len(), "scan_right buffered its input");

            let mut accum = seed;
            for (_, value) in entries.iter_mut().rev() {
                accum = f(accum, value);
                *value = accum.clone();
            }
            self.state = State::Draining(entries.into_iter());
        }

        match &mut self.state {
            State::Draining(buffered) => buffered.next(),
            _ => None,
        }
    }
}

impl<I, F> fmt::Debug for ScanRight<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            State::Pending { .. } => "pending",
            State::Draining(_) => "draining",
            State::Poisoned => "poisoned",
        };
        f.debug_struct("ScanRight").field("state", &state).finish()
    }
}

/// Inclusive running right fold of `seq` from `seed`, emitted in the
/// original order with the original keys. Buffers the entire input.
///
/// # Examples
///
/// ```
/// use keyseq::{array, scan_right, to_list, Value};
///
/// let add = |acc: Value, v: &Value| Value::from(acc.as_int().unwrap_or(0) + v.as_int().unwrap_or(0));
/// assert_eq!(to_list(scan_right(array![1, 2, 3], add, 0)), [
///     Value::from(6),
///     Value::from(5),
///     Value::from(3),
/// ]);
/// ```
pub fn scan_right<S, F>(seq: S, f: F, seed: impl Into<Value>) -> ScanRight<S::IntoIter, F>
where
    S: IntoIterator<Item = Entry>,
    F: FnMut(Value, &Value) -> Value,
{
    ScanRight {
        state: State::Pending {
            iter: seq.into_iter(),
            f,
            seed: seed.into(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;
    use crate::iter::to_array;
    use crate::test_utils::{Traced, ints};

    fn concat(acc: Value, v: &Value) -> Value {
        Value::from(format!("{}{}", v.as_str().unwrap_or_default(), acc.as_str().unwrap_or_default()))
    }

    #[test]
    fn folds_from_the_right_keeps_order_and_keys() {
        let arr = array! { "x" => "a", "y" => "b", "z" => "c" };
        assert_eq!(
            to_array(scan_right(&arr, concat, "")),
            array! { "x" => "abc", "y" => "bc", "z" => "c" }
        );
    }

    #[test]
    fn buffers_everything_on_first_pull() {
        let (traced, pulls) = Traced::new(ints(5));
        let mut scanned = scan_right(traced, |acc, _| acc, Value::Null);
        assert_eq!(pulls.get(), 0);
        scanned.next();
        assert_eq!(pulls.get(), 6);
    }
}
