use std::{fmt, ops::ControlFlow};

use super::Classify;
use crate::collector::{Collector, assert_collector};
use crate::error::Result;
use crate::value::{Array, Entry, Value};

/// A [`Collector`] that buckets entries by the key their value classifies
/// to.
///
/// Buckets appear in order of first occurrence. Each bucket is an array
/// keeping the entries' original keys.
#[derive(Clone)]
pub struct GroupBy<F> {
    classify: Classify<F>,
    groups: Array,
}

impl<F> GroupBy<F>
where
    F: FnMut(&Value) -> Value,
{
    #[inline]
    pub fn new(grouper: F) -> Self {
        assert_collector::<_, Entry>(Self {
            classify: Classify::new("group_by", grouper),
            groups: Array::new(),
        })
    }
}

impl<F> Collector for GroupBy<F>
where
    F: FnMut(&Value) -> Value,
{
    type Output = Result<Array>;

    fn collect(&mut self, (key, value): Entry) -> ControlFlow<()> {
        let group = self.classify.key_of(&value)?;
        match self.groups.get_mut(&group) {
            Some(Value::Array(bucket)) => {
                bucket.insert(key, value);
            }
            _ => {
                let mut bucket = Array::new();
                bucket.insert(key, value);
                self.groups.insert(group, bucket);
            }
        }
        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Result<Array> {
        self.classify.finish(self.groups)
    }

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        self.classify.break_hint()
    }
}

impl<F> fmt::Debug for GroupBy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupBy")
            .field("groups", &self.groups)
            .finish()
    }
}

/// Groups `seq` into buckets keyed by `grouper`'s result.
///
/// # Examples
///
/// ```
/// use keyseq::{array, group_by, Value};
///
/// let parity = |v: &Value| Value::from(if v.as_int().unwrap_or(0) % 2 == 0 { "even" } else { "odd" });
/// assert_eq!(
///     group_by(array![1, 2, 3], parity).unwrap(),
///     array! {
///         "odd" => array! { 0 => 1, 2 => 3 },
///         "even" => array! { 1 => 2 },
///     },
/// );
/// ```
pub fn group_by<F>(seq: impl IntoIterator<Item = Entry>, grouper: F) -> Result<Array>
where
    F: FnMut(&Value) -> Value,
{
    GroupBy::new(grouper).collect_then_finish(seq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;
    use crate::test_utils::{Traced, ints};

    #[test]
    fn string_integer_groups_share_a_bucket() {
        let grouped = group_by(array!["a", "b"], |v| {
            Value::from(if v.as_str() == Some("a") { "1" } else { "x" })
        })
        .unwrap();
        assert_eq!(grouped, array! { 1 => array! { 0 => "a" }, "x" => array! { 1 => "b" } });
    }

    #[test]
    fn bad_grouper_fails_at_the_element() {
        let (traced, pulls) = Traced::new(ints(10));
        let err = group_by(traced, |v| {
            if v.as_int() == Some(2) { Value::from(array![]) } else { v.clone() }
        })
        .unwrap_err();

        assert_eq!(err.op(), "group_by");
        assert_eq!(pulls.get(), 3);
    }
}
