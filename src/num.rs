//! Numeric [`Collector`]s.
//!
//! Both read every value through [`Value::coerce_number`], so nothing is
//! rejected: values with no numeric reading count as zero.

use std::ops::ControlFlow;

use crate::collector::{Collector, assert_collector};
use crate::value::{Entry, Number, Value};

/// A [`Collector`] that adds up the coerced values it collects.
///
/// Stays integral until a float is seen or the running total overflows.
#[derive(Debug, Clone)]
pub struct Sum {
    total: Number,
}

impl Sum {
    #[inline]
    pub const fn new() -> Self {
        assert_collector::<_, Entry>(Self {
            total: Number::Int(0),
        })
    }
}

impl Default for Sum {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Collector for Sum {
    type Output = Number;

    #[inline]
    fn collect(&mut self, (_, value): Entry) -> ControlFlow<()> {
        self.total = self.total.add(value.coerce_number());
        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Number {
        self.total
    }
}

/// A [`Collector`] that computes the arithmetic mean of the coerced values.
///
/// The denominator is the number of values collected, including those that
/// coerced to zero for lack of a numeric reading. Its output is `0.0` if
/// nothing was collected.
#[derive(Debug, Clone, Default)]
pub struct Average {
    sum: Sum,
    count: usize,
}

impl Average {
    #[inline]
    pub const fn new() -> Self {
        assert_collector::<_, Entry>(Self {
            sum: Sum::new(),
            count: 0,
        })
    }
}

impl Collector for Average {
    type Output = f64;

    #[inline]
    fn collect(&mut self, entry: Entry) -> ControlFlow<()> {
        self.count += 1;
        self.sum.collect(entry)
    }

    fn finish(self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.sum.finish().as_f64() / self.count as f64
    }
}

/// Sum of the coerced values of `seq`, as an int or a float value.
///
/// # Examples
///
/// ```
/// use keyseq::{array, sum, Value};
///
/// assert_eq!(sum(array![1, "2", true, "x"]), Value::from(4));
/// assert_eq!(sum(array![1, 0.5]), Value::from(1.5));
/// ```
pub fn sum(seq: impl IntoIterator<Item = Entry>) -> Value {
    Sum::new().collect_then_finish(seq).into()
}

/// Mean of the coerced values of `seq`. Single pass.
pub fn average(seq: impl IntoIterator<Item = Entry>) -> f64 {
    Average::new().collect_then_finish(seq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;
    use crate::source::Source;
    use crate::test_utils::ints;

    #[test]
    fn average_counts_ignored_values() {
        assert_eq!(average(array![]), 0.0);
        assert_eq!(average(array![2, 4, 6]), 4.0);
        assert_eq!(average(array![1, "3", true, Value::Null]), 1.25);
        assert_eq!(average(array!["a", 4]), 2.0);
    }

    #[test]
    fn one_shot_sources() {
        assert_eq!(sum(Source::once(ints(5))), Value::from(10));
        assert_eq!(average(Source::once(ints(5))), 2.0);
    }

    #[test]
    fn overflow_switches_to_float() {
        let total = sum(array![i64::MAX, 1]);
        assert!(matches!(total, Value::Float(_)));
    }
}
