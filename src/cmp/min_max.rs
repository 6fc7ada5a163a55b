use std::{cmp::Ordering, ops::ControlFlow};

use crate::collector::{Collector, assert_collector};
use crate::value::{Entry, Value};

/// A [`Collector`] that keeps the greatest value under the default
/// comparison.
///
/// Its output is `None` if nothing was collected. Among equal maxima, the
/// first one collected is kept.
///
/// # Examples
///
/// ```
/// use keyseq::{array, cmp::Max, prelude::*, Value};
///
/// // "10" compares numerically but comes back as the original string.
/// let max = array![9, "10", 3].into_iter().feed_into(Max::new());
/// assert_eq!(max, Some(Value::from("10")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Max {
    max: Option<Value>,
}

impl Max {
    #[inline]
    pub const fn new() -> Self {
        assert_collector::<_, Entry>(Self { max: None })
    }
}

impl Collector for Max {
    type Output = Option<Value>;

    fn collect(&mut self, (_, value): Entry) -> ControlFlow<()> {
        match &self.max {
            Some(max) if value.loose_cmp(max) != Ordering::Greater => {}
            _ => self.max = Some(value),
        }
        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Option<Value> {
        self.max
    }
}

/// A [`Collector`] that keeps the least value under the default comparison.
///
/// Its output is `None` if nothing was collected. Among equal minima, the
/// first one collected is kept.
#[derive(Debug, Clone, Default)]
pub struct Min {
    min: Option<Value>,
}

impl Min {
    #[inline]
    pub const fn new() -> Self {
        assert_collector::<_, Entry>(Self { min: None })
    }
}

impl Collector for Min {
    type Output = Option<Value>;

    fn collect(&mut self, (_, value): Entry) -> ControlFlow<()> {
        match &self.min {
            Some(min) if value.loose_cmp(min) != Ordering::Less => {}
            _ => self.min = Some(value),
        }
        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Option<Value> {
        self.min
    }
}

/// Greatest value of `seq`, or `None` if it is empty.
pub fn max(seq: impl IntoIterator<Item = Entry>) -> Option<Value> {
    Max::new().collect_then_finish(seq)
}

/// Least value of `seq`, or `None` if it is empty.
pub fn min(seq: impl IntoIterator<Item = Entry>) -> Option<Value> {
    Min::new().collect_then_finish(seq)
}
