use std::fmt;

use crate::value::{Array, Entry, Key, Value};

/// An adaptor that chunks contiguous runs of entries sharing a
/// discriminator value.
///
/// A chunk is flushed the moment the discriminator changes, so equal
/// discriminators in separate runs land in separate chunks. Chunks keep
/// the inner keys; the chunks themselves are indexed from zero.
///
/// This `struct` is created by [`partition_by()`].
#[derive(Clone)]
pub struct PartitionBy<I, F> {
    iter: I,
    discriminator: F,
    pending: Option<(Value, Array)>,
    index: usize,
    done: bool,
}

impl<I, F> PartitionBy<I, F> {
    fn flush(&mut self, chunk: Array) -> Entry {
        let key = Key::from(self.index);
        self.index += 1;
        (key, Value::Array(chunk))
    }
}

impl<I, F> Iterator for PartitionBy<I, F>
where
    I: Iterator<Item = Entry>,
    F: FnMut(&Value) -> Value,
{
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        while !self.done {
            let Some((key, value)) = self.iter.next() else {
                self.done = true;
                break;
            };

            let class = (self.discriminator)(&value);
            match &mut self.pending {
                Some((current, chunk)) if *current == class => {
                    chunk.insert(key, value);
                }
                pending => {
                    let mut chunk = Array::new();
                    chunk.insert(key, value);

                    if let Some((_, finished)) = pending.replace((class, chunk)) {
                        return Some(self.flush(finished));
                    }
                }
            }
        }

        let (_, chunk) = self.pending.take()?;
        Some(self.flush(chunk))
    }
}

impl<I: fmt::Debug, F> fmt::Debug for PartitionBy<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartitionBy")
            .field("iter", &self.iter)
            .field("pending", &self.pending)
            .finish()
    }
}

/// Splits `seq` into chunks of contiguous entries whose `discriminator`
/// results are strictly equal.
///
/// # Examples
///
/// ```
/// use keyseq::{array, partition_by, to_list, Value};
///
/// let words = array!["ant", "apple", "bear", "bob", "cat"];
/// let first = |v: &Value| Value::from(&v.as_str().unwrap_or_default()[..1]);
///
/// assert_eq!(to_list(partition_by(&words, first)), [
///     Value::from(array! { 0 => "ant", 1 => "apple" }),
///     Value::from(array! { 2 => "bear", 3 => "bob" }),
///     Value::from(array! { 4 => "cat" }),
/// ]);
/// ```
pub fn partition_by<S, F>(seq: S, discriminator: F) -> PartitionBy<S::IntoIter, F>
where
    S: IntoIterator<Item = Entry>,
    F: FnMut(&Value) -> Value,
{
    PartitionBy {
        iter: seq.into_iter(),
        discriminator,
        pending: None,
        index: 0,
        done: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;
    use crate::iter::to_array;
    use crate::test_utils::Traced;

    fn parity(v: &Value) -> Value {
        Value::from(v.as_int().unwrap_or(0) % 2)
    }

    #[test]
    fn boundaries_are_order_sensitive() {
        let arr = array![1, 3, 2, 5];
        assert_eq!(
            to_array(partition_by(&arr, parity)),
            array![
                array! { 0 => 1, 1 => 3 },
                array! { 2 => 2 },
                array! { 3 => 5 },
            ]
        );
    }

    #[test]
    fn flushes_without_reading_ahead() {
        let source = (0..7_usize).map(|i| (Key::from(i), Value::from(i64::from(i == 6))));
        let (traced, pulls) = Traced::new(source);
        let mut chunks = partition_by(traced, parity);
        assert!(chunks.next().is_some());
        // Six equal entries plus the one that changed the discriminator.
        assert_eq!(pulls.get(), 7);
        assert!(chunks.next().is_some());
        assert!(chunks.next().is_none());
    }

    #[test]
    fn empty_input() {
        assert_eq!(partition_by(array![], parity).count(), 0);
    }
}
