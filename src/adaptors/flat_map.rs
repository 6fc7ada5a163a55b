use std::fmt;

use super::flatten::into_entries;
use crate::value::{Entry, Key, Value};

/// An adaptor that maps each value, then inlines sequence results one
/// level deep. Output is reindexed from zero.
///
/// This `struct` is created by [`flat_map()`].
#[derive(Clone)]
pub struct FlatMap<I, F> {
    iter: I,
    f: F,
    front: Option<std::vec::IntoIter<Entry>>,
    index: usize,
}

impl<I, F> FlatMap<I, F> {
    fn emit(&mut self, value: Value) -> Option<Entry> {
        let key = Key::from(self.index);
        self.index += 1;
        Some((key, value))
    }
}

impl<I, F> Iterator for FlatMap<I, F>
where
    I: Iterator<Item = Entry>,
    F: FnMut(&Value) -> Value,
{
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        loop {
            if let Some(front) = &mut self.front {
                if let Some((_, value)) = front.next() {
                    return self.emit(value);
                }
                self.front = None;
            }

            let (_, value) = self.iter.next()?;
            match into_entries((self.f)(&value)) {
                Ok(inner) => self.front = Some(inner),
                // Not a sequence: emitted as a single element.
                Err(single) => return self.emit(single),
            }
        }
    }
}

impl<I: fmt::Debug, F> fmt::Debug for FlatMap<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatMap")
            .field("iter", &self.iter)
            .field("index", &self.index)
            .finish()
    }
}

/// Maps every value with `f` and inlines results that are sequences.
pub fn flat_map<S, F>(seq: S, f: F) -> FlatMap<S::IntoIter, F>
where
    S: IntoIterator<Item = Entry>,
    F: FnMut(&Value) -> Value,
{
    FlatMap {
        iter: seq.into_iter(),
        f,
        front: None,
        index: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;
    use crate::iter::to_array;

    #[test]
    fn singles_and_sequences() {
        let arr = array![1, 2, 3];
        let out = flat_map(&arr, |v: &Value| match v.as_int() {
            Some(2) => Value::from(array!["a", array!["b"]]),
            _ => v.clone(),
        });
        assert_eq!(to_array(out), array![1, "a", array!["b"], 3]);
    }
}
