use crate::value::{Entry, Key, Value};

/// Splits a sequence-shaped value into its entries, or hands the value back.
pub(crate) fn into_entries(value: Value) -> Result<std::vec::IntoIter<Entry>, Value> {
    match value {
        Value::Array(arr) => Ok(arr.into_iter()),
        Value::Object(obj) if obj.is_traversable() => Ok(obj.props().clone().into_iter()),
        other => Err(other),
    }
}

/// An adaptor that inlines nested sequences up to a fixed depth.
///
/// Output is reindexed from zero: inner sequences have unrelated key
/// spaces, so no key survives.
///
/// This `struct` is created by [`flatten()`].
#[derive(Debug, Clone)]
pub struct Flatten<I> {
    iter: I,
    depth: usize,
    // Open inner sequences, innermost last, with the depth still allowed
    // below each.
    stack: Vec<(std::vec::IntoIter<Entry>, usize)>,
    index: usize,
}

impl<I> Iterator for Flatten<I>
where
    I: Iterator<Item = Entry>,
{
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        loop {
            let (value, depth) = match self.stack.last_mut() {
                Some((inner, depth)) => match inner.next() {
                    Some((_, value)) => (value, *depth),
                    None => {
                        self.stack.pop();
                        continue;
                    }
                },
                None => (self.iter.next()?.1, self.depth),
            };

            let value = if depth > 0 {
                match into_entries(value) {
                    Ok(inner) => {
                        self.stack.push((inner, depth - 1));
                        continue;
                    }
                    Err(value) => value,
                }
            } else {
                value
            };

            let key = Key::from(self.index);
            self.index += 1;
            return Some((key, value));
        }
    }
}

/// Inlines nested sequences up to `depth` levels. Keys are discarded and
/// the output reindexed; `depth == 0` only reindexes.
///
/// # Examples
///
/// ```
/// use keyseq::{array, flatten, to_array};
///
/// let nested = array![1, array![2, array![3, array![4]]]];
/// assert_eq!(to_array(flatten(&nested, 2)), array![1, 2, 3, array![4]]);
/// ```
pub fn flatten<S>(seq: S, depth: usize) -> Flatten<S::IntoIter>
where
    S: IntoIterator<Item = Entry>,
{
    Flatten {
        iter: seq.into_iter(),
        depth,
        stack: Vec::new(),
        index: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;
    use crate::iter::to_array;
    use crate::value::ObjectRef;

    #[test]
    fn depth_zero_reindexes_only() {
        let arr = array! { "a" => array![1], "b" => 2 };
        assert_eq!(to_array(flatten(&arr, 0)), array![array![1], 2]);
    }

    #[test]
    fn inner_keys_are_discarded() {
        let arr = array![array! { "x" => 1, "y" => 2 }, array! { "x" => 3 }];
        assert_eq!(to_array(flatten(&arr, 1)), array![1, 2, 3]);
    }

    #[test]
    fn traversable_objects_are_sequences() {
        let obj = ObjectRef::builder("Bag").props(array![7, 8]).traversable().build();
        let opaque = ObjectRef::new("Point", array![9]);
        let arr = array![obj, opaque.clone()];
        assert_eq!(to_array(flatten(&arr, 5)), array![7, 8, opaque]);
    }

    #[test]
    fn empty_inner_sequences_vanish() {
        let arr = array![array![], 1, array![array![]]];
        assert_eq!(to_array(flatten(&arr, 3)), array![1]);
    }
}
