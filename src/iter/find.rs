use std::{fmt, ops::ControlFlow};

use crate::collector::{Collector, assert_collector};
use crate::value::{Entry, Value};

/// A [`Collector`] that searches for the first value satisfying a predicate.
///
/// Breaks as soon as a match is collected.
#[derive(Clone)]
pub struct Find<F> {
    state: State<F>,
}

#[derive(Clone)]
enum State<F> {
    Searching(F),
    Found(Entry),
}

impl<F> Find<F>
where
    F: FnMut(&Value) -> bool,
{
    #[inline]
    pub const fn new(pred: F) -> Self {
        assert_collector::<_, Entry>(Self {
            state: State::Searching(pred),
        })
    }
}

impl<F> Collector for Find<F>
where
    F: FnMut(&Value) -> bool,
{
    /// The matching entry, key included.
    type Output = Option<Entry>;

    fn collect(&mut self, entry: Entry) -> ControlFlow<()> {
        let State::Searching(ref mut pred) = self.state else {
            return ControlFlow::Break(());
        };

        if pred(&entry.1) {
            self.state = State::Found(entry);
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    #[inline]
    fn finish(self) -> Self::Output {
        match self.state {
            State::Found(entry) => Some(entry),
            State::Searching(_) => None,
        }
    }

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        match self.state {
            State::Found(_) => ControlFlow::Break(()),
            State::Searching(_) => ControlFlow::Continue(()),
        }
    }
}

impl<F> fmt::Debug for Find<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let found = match &self.state {
            State::Found(entry) => Some(entry),
            State::Searching(_) => None,
        };
        f.debug_struct("Find").field("found", &found).finish()
    }
}

/// The first value of `seq` satisfying `pred`, or `None`.
///
/// Callers choose their own default with [`Option::unwrap_or`], so a
/// legitimately stored `null` is never mistaken for "not found".
pub fn find<F>(seq: impl IntoIterator<Item = Entry>, pred: F) -> Option<Value>
where
    F: FnMut(&Value) -> bool,
{
    Find::new(pred).collect_then_finish(seq).map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;
    use crate::test_utils::{Traced, ints};
    use crate::value::Key;

    #[test]
    fn first_match_with_key() {
        let arr = array! { "a" => 1, "b" => 4, "c" => 6 };
        let found = Find::new(|v: &Value| v.as_int().is_some_and(|n| n % 2 == 0))
            .collect_then_finish(&arr);
        assert_eq!(found, Some((Key::from("b"), Value::from(4))));
    }

    #[test]
    fn not_found_uses_caller_default() {
        let found = find(array![1, 3], |v| v.as_int() == Some(2));
        assert_eq!(found.unwrap_or(Value::from("none")), Value::from("none"));

        let stored_null = find(array![Value::Null], |_| true);
        assert_eq!(stored_null, Some(Value::Null));
    }

    #[test]
    fn exits_early() {
        let (traced, pulls) = Traced::new(ints(50));
        assert_eq!(find(traced, |v| v.as_int() == Some(2)), Some(Value::from(2_usize)));
        assert_eq!(pulls.get(), 3);
    }
}
