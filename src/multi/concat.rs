use std::fmt;
use std::vec;

use super::pulls;
use crate::source::{Pull, Source};
use crate::value::{Entry, Key};

/// An adaptor draining each source in turn.
///
/// This `struct` is created by [`concat()`].
pub struct Concat {
    pending: vec::IntoIter<Pull>,
    current: Option<Pull>,
    index: usize,
}

impl Iterator for Concat {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        loop {
            if let Some((_, value)) = self.current.as_mut().and_then(Iterator::next) {
                let key = Key::from(self.index);
                self.index += 1;
                return Some((key, value));
            }
            self.current = Some(self.pending.next()?);
        }
    }
}

impl fmt::Debug for Concat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Concat")
            .field("pending", &self.pending.len())
            .field("index", &self.index)
            .finish()
    }
}

/// Values of every source, one source after another, reindexed.
pub fn concat(sources: impl IntoIterator<Item = Source>) -> Concat {
    Concat {
        pending: pulls(sources).into_iter(),
        current: None,
        index: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;
    use crate::iter::to_array;
    use crate::test_utils::{Traced, ints};

    #[test]
    fn drains_in_argument_order_and_reindexes() {
        let joined = concat([
            Source::from(array! { "a" => 1 }),
            Source::from(array![]),
            Source::once(ints(2)),
        ]);
        assert_eq!(to_array(joined), array![1, 0, 1]);
    }

    #[test]
    fn later_sources_wait_their_turn() {
        let (traced, pulls) = Traced::new(ints(3));
        let mut joined = concat([Source::from(array![9]), Source::once(traced)]);
        joined.next();
        assert_eq!(pulls.get(), 0);
    }
}
