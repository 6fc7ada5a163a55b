use std::{fmt, ops::ControlFlow};

use super::Classify;
use crate::collector::{Collector, assert_collector};
use crate::error::Result;
use crate::value::{Array, Entry, Value};

/// A [`Collector`] that tallies how many values classify to each key.
#[derive(Clone)]
pub struct CountBy<F> {
    classify: Classify<F>,
    counts: Array,
}

impl<F> CountBy<F>
where
    F: FnMut(&Value) -> Value,
{
    #[inline]
    pub fn new(classifier: F) -> Self {
        assert_collector::<_, Entry>(Self {
            classify: Classify::new("count_by", classifier),
            counts: Array::new(),
        })
    }
}

impl<F> Collector for CountBy<F>
where
    F: FnMut(&Value) -> Value,
{
    type Output = Result<Array>;

    fn collect(&mut self, (_, value): Entry) -> ControlFlow<()> {
        let key = self.classify.key_of(&value)?;
        match self.counts.get_mut(&key) {
            Some(Value::Int(count)) => *count += 1,
            _ => {
                self.counts.insert(key, 1);
            }
        }
        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Result<Array> {
        self.classify.finish(self.counts)
    }

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        self.classify.break_hint()
    }
}

impl<F> fmt::Debug for CountBy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountBy").field("counts", &self.counts).finish()
    }
}

/// Counts the values of `seq` per `classifier` result.
///
/// # Examples
///
/// ```
/// use keyseq::{array, count_by, Value};
///
/// let first_letter = |v: &Value| Value::from(v.as_str().and_then(|s| s.get(..1)));
/// assert_eq!(
///     count_by(array!["ant", "bee", "asp"], first_letter).unwrap(),
///     array! { "a" => 2, "b" => 1 },
/// );
/// ```
pub fn count_by<F>(seq: impl IntoIterator<Item = Entry>, classifier: F) -> Result<Array>
where
    F: FnMut(&Value) -> Value,
{
    CountBy::new(classifier).collect_then_finish(seq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;

    #[test]
    fn float_classifications_truncate() {
        let counts = count_by(array![1.2, 1.9, 2.5], Value::clone).unwrap();
        assert_eq!(counts, array! { 1 => 2, 2 => 1 });
    }

    #[test]
    fn rejects_unusable_classification() {
        let err = count_by(array![1], |_| Value::from(f64::NAN)).unwrap_err();
        assert_eq!(err.op(), "count_by");
    }
}
