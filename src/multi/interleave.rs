use std::fmt;

use super::pulls;
use crate::source::{Pull, Source};
use crate::value::{Entry, Key};

/// An adaptor taking one value from each source in turn.
///
/// It ends the moment any source runs out, even mid-round.
///
/// This `struct` is created by [`interleave()`].
pub struct Interleave {
    cursors: Vec<Pull>,
    turn: usize,
    index: usize,
    done: bool,
}

impl Iterator for Interleave {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        if self.done {
            return None;
        }
        let Some((_, value)) = self.cursors.get_mut(self.turn).and_then(Iterator::next) else {
            self.done = true;
            return None;
        };

        self.turn = (self.turn + 1) % self.cursors.len();
        let key = Key::from(self.index);
        self.index += 1;
        Some((key, value))
    }
}

impl fmt::Debug for Interleave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interleave")
            .field("sources", &self.cursors.len())
            .field("turn", &self.turn)
            .field("done", &self.done)
            .finish()
    }
}

/// Values of `sources` taken round-robin, one per source per round.
///
/// # Examples
///
/// ```
/// use keyseq::{array, interleave, to_list, Source, Value};
///
/// let mixed = interleave([Source::from(array![1, 2, 3]), Source::from(array!["a", "b"])]);
/// assert_eq!(to_list(mixed), [Value::from(1), Value::from("a"), Value::from(2), Value::from("b"), Value::from(3)]);
/// ```
pub fn interleave(sources: impl IntoIterator<Item = Source>) -> Interleave {
    Interleave {
        cursors: pulls(sources),
        turn: 0,
        index: 0,
        done: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;
    use crate::test_utils::{Traced, ints, keys};

    #[test]
    fn stops_at_first_exhausted_source() {
        let (traced, pulls) = Traced::new(ints(10));
        let mixed = interleave([Source::once(traced), Source::from(array![]), Source::from(array![1])]);
        assert_eq!(mixed.count(), 1);
        assert_eq!(pulls.get(), 1);
    }

    #[test]
    fn output_is_reindexed() {
        let mixed = interleave([Source::from(array! { "a" => 1 }), Source::from(array! { "b" => 2 })]);
        assert_eq!(keys(mixed), [Key::Int(0), Key::Int(1)]);
    }
}
