use std::ops::ControlFlow;

use crate::collector::{Collector, assert_collector};
use crate::value::Entry;

/// A [`Collector`] that counts the entries it collects.
///
/// # Examples
///
/// ```
/// use keyseq::{array, count};
///
/// assert_eq!(count(array![3, 7, 0]), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Count {
    count: usize,
}

impl Count {
    #[inline]
    pub const fn new() -> Self {
        assert_collector::<_, Entry>(Count { count: 0 })
    }

    #[inline]
    pub const fn get(&self) -> usize {
        self.count
    }
}

impl<T> Collector<T> for Count {
    type Output = usize;

    #[inline]
    fn collect(&mut self, _: T) -> ControlFlow<()> {
        self.count += 1;
        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> usize {
        self.count
    }

    #[inline]
    fn collect_then_finish(self, items: impl IntoIterator<Item = T>) -> usize {
        self.count + items.into_iter().count()
    }
}

/// Number of entries in `seq`.
pub fn count(seq: impl IntoIterator<Item = Entry>) -> usize {
    Count::new().collect_then_finish(seq)
}
