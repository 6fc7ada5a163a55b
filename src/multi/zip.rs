use std::fmt;

use super::pulls;
use crate::source::{Pull, Source};
use crate::value::{Array, Entry, Key, Value};

/// An adaptor yielding one row per round, holding the next value of every
/// source. Stops as soon as any source runs out.
///
/// This `struct` is created by [`zip()`].
pub struct Zip {
    cursors: Vec<Pull>,
    index: usize,
    done: bool,
}

impl Iterator for Zip {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        if self.done || self.cursors.is_empty() {
            return None;
        }

        let mut row = Array::new();
        for cursor in &mut self.cursors {
            match cursor.next() {
                Some((_, value)) => row.push(value),
                None => {
                    self.done = true;
                    return None;
                }
            }
        }

        let key = Key::from(self.index);
        self.index += 1;
        Some((key, Value::from(row)))
    }
}

impl fmt::Debug for Zip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Zip")
            .field("sources", &self.cursors.len())
            .field("index", &self.index)
            .field("done", &self.done)
            .finish()
    }
}

/// Rows of corresponding values of `sources`, as long as the shortest one.
///
/// # Examples
///
/// ```
/// use keyseq::{array, to_array, zip, Source};
///
/// let rows = zip([Source::from(array![1, 2, 3]), Source::from(array![10, 20])]);
/// assert_eq!(to_array(rows), array![array![1, 10], array![2, 20]]);
/// ```
pub fn zip(sources: impl IntoIterator<Item = Source>) -> Zip {
    Zip {
        cursors: pulls(sources),
        index: 0,
        done: false,
    }
}

/// An adaptor yielding one row per round until every source has run out,
/// filling the slots of exhausted sources.
///
/// An exhausted source is never pulled again.
///
/// This `struct` is created by [`zip_longest()`].
pub struct ZipLongest {
    cursors: Vec<Option<Pull>>,
    fill: Value,
    index: usize,
}

impl Iterator for ZipLongest {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        let mut row = Array::new();
        let mut live = false;
        for slot in &mut self.cursors {
            let value = match slot.as_mut().and_then(Iterator::next) {
                Some((_, value)) => {
                    live = true;
                    value
                }
                None => {
                    *slot = None;
                    self.fill.clone()
                }
            };
            row.push(value);
        }

        if !live {
            return None;
        }
        let key = Key::from(self.index);
        self.index += 1;
        Some((key, Value::from(row)))
    }
}

impl fmt::Debug for ZipLongest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let live = self.cursors.iter().filter(|slot| slot.is_some()).count();
        f.debug_struct("ZipLongest")
            .field("live", &live)
            .field("fill", &self.fill)
            .field("index", &self.index)
            .finish()
    }
}

/// Rows of corresponding values of `sources`, as long as the longest one,
/// with `fill` standing in for sources that have run out.
pub fn zip_longest(fill: impl Into<Value>, sources: impl IntoIterator<Item = Source>) -> ZipLongest {
    ZipLongest {
        cursors: pulls(sources).into_iter().map(Some).collect(),
        fill: fill.into(),
        index: 0,
    }
}
