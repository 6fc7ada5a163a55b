use std::{cell::Cell, fmt, rc::Rc};

use crate::value::{Entry, Key, Value};

/// A one-shot source that counts how many times it has been pulled.
pub struct Traced<I> {
    iter: I,
    pulls: Rc<Cell<usize>>,
}

impl<I> Traced<I> {
    pub fn new(iter: I) -> (Self, Rc<Cell<usize>>) {
        let pulls = Rc::new(Cell::new(0));
        (
            Self {
                iter,
                pulls: Rc::clone(&pulls),
            },
            pulls,
        )
    }
}

impl<I> fmt::Debug for Traced<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traced").field("pulls", &self.pulls.get()).finish()
    }
}

impl<I: Iterator<Item = Entry>> Iterator for Traced<I> {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        self.pulls.set(self.pulls.get() + 1);
        self.iter.next()
    }
}

/// A generator of `0..len` keyed by index.
pub fn ints(len: usize) -> impl Iterator<Item = Entry> + Clone {
    (0..len).map(|i| (Key::from(i), Value::from(i)))
}

/// Values of a sequence, keys discarded.
pub fn values(seq: impl IntoIterator<Item = Entry>) -> Vec<Value> {
    seq.into_iter().map(|(_, value)| value).collect()
}

/// Keys of a sequence.
pub fn keys(seq: impl IntoIterator<Item = Entry>) -> Vec<Key> {
    seq.into_iter().map(|(key, _)| key).collect()
}

pub fn vals<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Vec<Value> {
    values.into_iter().map(Into::into).collect()
}
