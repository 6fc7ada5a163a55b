use std::fmt;

use crate::value::{Entry, Key, Value};

/// An adaptor that transforms each value, keeping its key.
///
/// This `struct` is created by [`map()`].
#[derive(Clone)]
pub struct Map<I, F> {
    iter: I,
    f: F,
}

impl<I, F> Iterator for Map<I, F>
where
    I: Iterator<Item = Entry>,
    F: FnMut(&Value) -> Value,
{
    type Item = Entry;

    #[inline]
    fn next(&mut self) -> Option<Entry> {
        let (key, value) = self.iter.next()?;
        Some((key, (self.f)(&value)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I: fmt::Debug, F> fmt::Debug for Map<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map").field("iter", &self.iter).finish()
    }
}

/// Transforms every value with `f`, keeping keys.
pub fn map<S, F>(seq: S, f: F) -> Map<S::IntoIter, F>
where
    S: IntoIterator<Item = Entry>,
    F: FnMut(&Value) -> Value,
{
    Map {
        iter: seq.into_iter(),
        f,
    }
}

/// An adaptor that replaces each value by one of its fields.
///
/// This `struct` is created by [`pluck()`].
#[derive(Debug, Clone)]
pub struct Pluck<I> {
    iter: I,
    field: Key,
}

impl<I> Iterator for Pluck<I>
where
    I: Iterator<Item = Entry>,
{
    type Item = Entry;

    #[inline]
    fn next(&mut self) -> Option<Entry> {
        let (key, value) = self.iter.next()?;
        Some((key, value.get(&self.field).cloned().unwrap_or_default()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Replaces every value by its `field`, or `null` where the value has no
/// such field. Keys are kept.
pub fn pluck<S>(seq: S, field: impl Into<Key>) -> Pluck<S::IntoIter>
where
    S: IntoIterator<Item = Entry>,
{
    Pluck {
        iter: seq.into_iter(),
        field: field.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;
    use crate::iter::to_array;

    #[test]
    fn pluck_fields() {
        let rows = array! {
            "a" => array! { "id" => 1, "name" => "x" },
            "b" => array! { "name" => "y" },
            "c" => 3,
        };
        assert_eq!(to_array(pluck(&rows, "id")), array! { "a" => 1, "b" => Value::Null, "c" => Value::Null });
    }
}

#[cfg(test)]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use super::*;
    use crate::test_utils::{keys, values};
    use crate::value::Array;

    fn triple(value: &Value) -> Value {
        Value::from(value.as_int().unwrap_or(0).wrapping_mul(3))
    }

    proptest! {
        #[test]
        fn values_mapped_keys_kept(
            entries in propvec((any::<i64>(), any::<i32>()), ..=16),
        ) {
            let arr: Array = entries
                .into_iter()
                .map(|(key, num)| (Key::from(key), Value::from(num)))
                .collect();

            let expected: Vec<_> = arr.values().map(triple).collect();
            prop_assert_eq!(values(map(&arr, triple)), expected);
            prop_assert_eq!(keys(map(&arr, triple)), keys(&arr));
        }
    }
}
