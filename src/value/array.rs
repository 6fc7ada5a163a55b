use std::{collections::HashMap, fmt};

use super::{Entry, Key, Value};

/// An insertion-ordered map from [`Key`] to [`Value`].
///
/// This is both the replayable sequence source and the materialized result
/// of eager operators. Assigning to an existing key replaces the value in
/// place; the entry keeps its original position.
///
/// # Examples
///
/// ```
/// use keyseq::{array, Key, Value};
///
/// let mut arr = array![10, 20];
/// arr.insert("name", "x");
/// arr.push(30);
///
/// assert_eq!(arr.len(), 4);
/// assert_eq!(arr.get(&Key::Int(2)), Some(&Value::from(30)));
/// ```
#[derive(Clone, Default)]
pub struct Array {
    entries: Vec<Entry>,
    index: HashMap<Key, usize>,
    next_int: i64,
}

impl Array {
    /// Creates an empty array.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list: values keyed `0, 1, 2, ...`.
    pub fn from_values<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
        let mut arr = Self::new();
        values.into_iter().for_each(|value| arr.push(value));
        arr
    }

    /// Appends `value` under one past the largest integer key seen so far.
    pub fn push(&mut self, value: impl Into<Value>) {
        let key = Key::Int(self.next_int);
        self.insert(key, value);
    }

    /// Sets `key` to `value`, returning the replaced value if the key existed.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();

        if let Some(&pos) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[pos].1, value));
        }

        if let Key::Int(int) = key {
            self.next_int = self.next_int.max(int.saturating_add(1));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    #[inline]
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    #[inline]
    pub fn get_mut(&mut self, key: &Key) -> Option<&mut Value> {
        self.index.get(key).map(|&pos| &mut self.entries[pos].1)
    }

    #[inline]
    pub fn contains_key(&self, key: &Key) -> bool {
        self.index.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrowing iterator over entries in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&Key, &Value)> + ExactSizeIterator {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Consumes the array, dropping keys.
    pub fn into_values(self) -> impl Iterator<Item = Value> {
        self.entries.into_iter().map(|(_, value)| value)
    }

    #[inline]
    pub(crate) fn entry_at(&self, pos: usize) -> Option<&Entry> {
        self.entries.get(pos)
    }
}

impl PartialEq for Array {
    /// Strict equality: same keys with strictly equal values, in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl FromIterator<Entry> for Array {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        let mut arr = Self::new();
        arr.extend(iter);
        arr
    }
}

impl Extend<Entry> for Array {
    fn extend<I: IntoIterator<Item = Entry>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Array {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = Entry;
    type IntoIter = std::iter::Cloned<std::slice::Iter<'a, Entry>>;

    /// Replays the array by cloning each entry.
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter().cloned()
    }
}

/// Builds an [`Array`].
///
/// `array![a, b, c]` makes a list keyed from zero; `array!{k => v, ...}`
/// uses explicit keys.
///
/// ```
/// use keyseq::{array, Key};
///
/// let list = array![1, "two", 3.0];
/// let map = array! { "a" => 1, 5 => true };
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(map.keys().collect::<Vec<_>>(), [&Key::Str("a".into()), &Key::Int(5)]);
/// ```
#[macro_export]
macro_rules! array {
    () => {
        $crate::Array::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut arr = $crate::Array::new();
        $(arr.insert($key, $value);)+
        arr
    }};
    ($($value:expr),+ $(,)?) => {{
        let mut arr = $crate::Array::new();
        $(arr.push($value);)+
        arr
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_follows_largest_int_key() {
        let mut arr = Array::new();
        arr.insert(5, "a");
        arr.insert("k", "b");
        arr.push("c");

        assert_eq!(arr.keys().cloned().collect::<Vec<_>>(), [
            Key::Int(5),
            Key::Str("k".into()),
            Key::Int(6)
        ]);
    }

    #[test]
    fn overwrite_keeps_position() {
        let mut arr = array! { "a" => 1, "b" => 2 };
        assert_eq!(arr.insert("a", 3), Some(Value::Int(1)));

        let pairs: Vec<_> = arr.into_iter().collect();
        assert_eq!(pairs, [
            (Key::Str("a".into()), Value::Int(3)),
            (Key::Str("b".into()), Value::Int(2)),
        ]);
    }

    #[test]
    fn borrowed_iteration_replays() {
        let arr = array![1, 2];
        assert_eq!((&arr).into_iter().count(), 2);
        assert_eq!((&arr).into_iter().count(), 2);
    }
}
