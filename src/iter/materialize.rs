use std::iter;

use crate::value::{Array, Entry, Key, Value};

/// Materializes `seq` keeping its keys. A repeated key overwrites the
/// earlier value in place.
pub fn to_array(seq: impl IntoIterator<Item = Entry>) -> Array {
    seq.into_iter().collect()
}

/// Materializes the values of `seq` in order, discarding keys.
pub fn to_list(seq: impl IntoIterator<Item = Entry>) -> Vec<Value> {
    seq.into_iter().map(|(_, value)| value).collect()
}

/// Lazy projection created by [`values()`] and [`keys()`].
pub type Project<I> = iter::Map<iter::Enumerate<I>, fn((usize, Entry)) -> Entry>;

/// Lazily projects each entry's value, reindexed from zero.
pub fn values<S>(seq: S) -> Project<S::IntoIter>
where
    S: IntoIterator<Item = Entry>,
{
    fn project((index, (_, value)): (usize, Entry)) -> Entry {
        (Key::from(index), value)
    }
    seq.into_iter().enumerate().map(project as fn(_) -> _)
}

/// Lazily projects each entry's key as a value, reindexed from zero.
pub fn keys<S>(seq: S) -> Project<S::IntoIter>
where
    S: IntoIterator<Item = Entry>,
{
    fn project((index, (key, _)): (usize, Entry)) -> Entry {
        (Key::from(index), Value::from(key))
    }
    seq.into_iter().enumerate().map(project as fn(_) -> _)
}
