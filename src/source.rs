//! Uniform pull cursors over replayable and one-shot sequences.
//!
//! An [`Array`] can be replayed any number of times. An iterator handed in
//! through [`Source::once`] is one-shot: once it has yielded, the items are
//! gone, and a later rewind cannot bring them back. That is the caller's
//! concern, not something operators guard against.

use std::fmt;

use crate::log::{debug, trace};
use crate::value::{Array, Entry, Value};

/// A pull cursor that can be asked to restart.
pub trait Cursor {
    /// Moves back to the first entry, if the underlying source allows it.
    fn rewind(&mut self);

    /// Pulls the next entry.
    fn next_entry(&mut self) -> Option<Entry>;
}

/// A replayable cursor over an [`Array`].
///
/// The cursor may be advanced by its owner before it is handed to a
/// multi-source operator; that operator rewinds it back to the start.
#[derive(Debug, Clone)]
pub struct ArrayCursor {
    array: Array,
    pos: usize,
}

impl ArrayCursor {
    pub fn new(array: Array) -> Self {
        Self { array, pos: 0 }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl Cursor for ArrayCursor {
    #[inline]
    fn rewind(&mut self) {
        self.pos = 0;
    }

    fn next_entry(&mut self) -> Option<Entry> {
        let entry = self.array.entry_at(self.pos)?.clone();
        self.pos += 1;
        Some(entry)
    }
}

impl Iterator for ArrayCursor {
    type Item = Entry;

    #[inline]
    fn next(&mut self) -> Option<Entry> {
        self.next_entry()
    }
}

/// A one-shot cursor over an arbitrary iterator.
pub struct OnceCursor<I> {
    iter: I,
    started: bool,
}

impl<I> OnceCursor<I> {
    pub fn new(iter: I) -> Self {
        Self {
            iter,
            started: false,
        }
    }
}

impl<I> Cursor for OnceCursor<I>
where
    I: Iterator<Item = Entry>,
{
    fn rewind(&mut self) {
        if self.started {
            // Nothing to go back to: the consumed items no longer exist.
            debug!("rewind of a one-shot source that already yielded; continuing in place");
        }
    }

    fn next_entry(&mut self) -> Option<Entry> {
        self.started = true;
        self.iter.next()
    }
}

/// Anything a sequence operator can read from.
pub enum Source {
    /// Replayable.
    Array(Array),
    /// One-shot.
    Once(Box<dyn Iterator<Item = Entry>>),
    /// A caller-owned cursor, possibly mid-traversal.
    Cursor(Box<dyn Cursor>),
}

impl Source {
    /// Wraps a one-shot iterator (a generator, a reader, ...).
    pub fn once(iter: impl Iterator<Item = Entry> + 'static) -> Self {
        Source::Once(Box::new(iter))
    }

    pub fn cursor(cursor: impl Cursor + 'static) -> Self {
        Source::Cursor(Box::new(cursor))
    }

    /// Whether re-reading this source yields the same entries again.
    pub fn is_replayable(&self) -> bool {
        matches!(self, Source::Array(_))
    }

    /// Converts into a uniform pull cursor.
    pub fn into_cursor(self) -> Box<dyn Cursor> {
        match self {
            Source::Array(array) => Box::new(ArrayCursor::new(array)),
            Source::Once(iter) => Box::new(OnceCursor::new(iter)),
            Source::Cursor(cursor) => cursor,
        }
    }

    /// Reads a sequence-shaped value: an array or a traversable object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Array(array) => Some(Source::Array(array)),
            Value::Object(obj) if obj.is_traversable() => Some(Source::Array(obj.props().clone())),
            _ => None,
        }
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Array(array) => f.debug_tuple("Array").field(array).finish(),
            Source::Once(_) => f.write_str("Once(..)"),
            Source::Cursor(_) => f.write_str("Cursor(..)"),
        }
    }
}

impl From<Array> for Source {
    #[inline]
    fn from(array: Array) -> Self {
        Source::Array(array)
    }
}

impl From<&Array> for Source {
    #[inline]
    fn from(array: &Array) -> Self {
        Source::Array(array.clone())
    }
}

impl From<ArrayCursor> for Source {
    #[inline]
    fn from(cursor: ArrayCursor) -> Self {
        Source::cursor(cursor)
    }
}

impl IntoIterator for Source {
    type Item = Entry;
    type IntoIter = Pull;

    fn into_iter(self) -> Pull {
        Pull {
            cursor: self.into_cursor(),
            rewound: false,
        }
    }
}

/// Iterator over a [`Source`], rewinding it before the first pull.
pub struct Pull {
    cursor: Box<dyn Cursor>,
    rewound: bool,
}

impl Iterator for Pull {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        if !self.rewound {
            trace!("rewinding source before first pull");
            self.cursor.rewind();
            self.rewound = true;
        }
        self.cursor.next_entry()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{array, value::Key};

    #[test]
    fn advanced_cursor_is_rewound() {
        let mut cursor = ArrayCursor::new(array![1, 2, 3]);
        cursor.next_entry();
        cursor.next_entry();
        assert_eq!(cursor.position(), 2);

        let values: Vec<_> = Source::from(cursor).into_iter().map(|(_, v)| v).collect();
        assert_eq!(values, [Value::from(1), Value::from(2), Value::from(3)]);
    }

    #[test]
    fn one_shot_is_consumed_once() {
        let mut cursor = OnceCursor::new((0..3).map(|i| (Key::from(i as usize), Value::from(i))));
        assert_eq!(cursor.next_entry(), Some((Key::Int(0), Value::Int(0))));
        cursor.rewind();
        assert_eq!(cursor.next_entry(), Some((Key::Int(1), Value::Int(1))));
    }

    #[test]
    fn sequence_shaped_values() {
        assert!(Source::from_value(Value::from(array![1])).is_some());
        assert!(Source::from_value(Value::from(1)).is_none());
    }
}
