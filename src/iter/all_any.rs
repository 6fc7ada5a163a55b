mod raw_all_any;

use std::{fmt, ops::ControlFlow};

use raw_all_any::RawAllAny;

use crate::collector::{Collector, assert_collector};
use crate::value::{Entry, Value};

/// A [`Collector`] that tests whether every value satisfies a predicate.
///
/// The output starts as `true` (an empty input satisfies it) and breaks on
/// the first value that fails.
#[derive(Clone)]
pub struct Every<F> {
    inner: RawAllAny<F, true>,
}

impl<F> Every<F>
where
    F: FnMut(&Value) -> bool,
{
    #[inline]
    pub const fn new(pred: F) -> Self {
        assert_collector::<_, Entry>(Self {
            inner: RawAllAny::new(pred),
        })
    }
}

impl<F> Collector for Every<F>
where
    F: FnMut(&Value) -> bool,
{
    type Output = bool;

    #[inline]
    fn collect(&mut self, (_, value): Entry) -> ControlFlow<()> {
        self.inner.collect_impl(&value)
    }

    #[inline]
    fn finish(self) -> bool {
        self.inner.get()
    }

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        self.inner.break_hint()
    }
}

impl<F: FnMut(&Value) -> bool> fmt::Debug for Every<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.debug_impl(f.debug_struct("Every"))
    }
}

/// A [`Collector`] that tests whether some value satisfies a predicate.
///
/// The output starts as `false` (an empty input has no witness) and breaks
/// on the first value that passes.
#[derive(Clone)]
pub struct Any<F> {
    inner: RawAllAny<F, false>,
}

impl<F> Any<F>
where
    F: FnMut(&Value) -> bool,
{
    #[inline]
    pub const fn new(pred: F) -> Self {
        assert_collector::<_, Entry>(Self {
            inner: RawAllAny::new(pred),
        })
    }
}

impl<F> Collector for Any<F>
where
    F: FnMut(&Value) -> bool,
{
    type Output = bool;

    #[inline]
    fn collect(&mut self, (_, value): Entry) -> ControlFlow<()> {
        self.inner.collect_impl(&value)
    }

    #[inline]
    fn finish(self) -> bool {
        self.inner.get()
    }

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        self.inner.break_hint()
    }
}

impl<F: FnMut(&Value) -> bool> fmt::Debug for Any<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.debug_impl(f.debug_struct("Any"))
    }
}

/// Whether every value of `seq` satisfies `pred`. Stops at the first failure.
pub fn every<F>(seq: impl IntoIterator<Item = Entry>, pred: F) -> bool
where
    F: FnMut(&Value) -> bool,
{
    Every::new(pred).collect_then_finish(seq)
}

/// Whether some value of `seq` satisfies `pred`. Stops at the first match.
pub fn some<F>(seq: impl IntoIterator<Item = Entry>, pred: F) -> bool
where
    F: FnMut(&Value) -> bool,
{
    Any::new(pred).collect_then_finish(seq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;
    use crate::source::Source;
    use crate::test_utils::{Traced, ints};

    #[test]
    fn empty_input() {
        assert!(every(array![], |_| false));
        assert!(!some(array![], |_| true));
    }

    #[test]
    fn stops_at_deciding_element() {
        let (traced, pulls) = Traced::new(ints(10));
        assert!(!every(traced, |v| v.as_int() != Some(3)));
        assert_eq!(pulls.get(), 4);

        let (traced, pulls) = Traced::new(ints(10));
        assert!(some(Source::once(traced), |v| v.as_int() == Some(0)));
        assert_eq!(pulls.get(), 1);
    }
}
