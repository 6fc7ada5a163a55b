//! The consuming half of the engine.
//!
//! Every eager operator is a [`Collector`]: it is fed entries one at a time
//! and produces its result on [`finish()`](Collector::finish). A collector
//! that already knows its answer (`every` hit a mismatch, `find` found a
//! match, a classifier returned something unusable) returns
//! [`Break(())`](ControlFlow::Break) and the driver stops pulling, so
//! early-exit operators never read further than they must.
//!
//! # Unspecified behaviors
//!
//! After [`collect()`](Collector::collect) has returned `Break(())` once,
//! further calls to anything but [`finish()`](Collector::finish) are
//! unspecified. Implementors must still not panic on them.

use std::ops::ControlFlow;

use crate::value::Entry;

/// A sink that accumulates entries into an output.
pub trait Collector<T = Entry> {
    /// The result yielded by [`finish()`](Collector::finish).
    type Output;

    /// Accumulates one item. `Break(())` means no further item can change
    /// the output.
    fn collect(&mut self, item: T) -> ControlFlow<()>;

    /// Consumes the collector and returns the accumulated result.
    fn finish(self) -> Self::Output;

    /// Whether the collector has stopped before receiving anything.
    ///
    /// Drivers call it once, before the first pull, so no item is consumed
    /// prematurely.
    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Accumulates items until the iterator is exhausted or the collector
    /// breaks. Items after the breaking one are left in the iterator.
    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()>
    where
        Self: Sized,
    {
        self.break_hint()?;
        items.into_iter().try_for_each(|item| self.collect(item))
    }

    /// Accumulates items, then finishes.
    fn collect_then_finish(mut self, items: impl IntoIterator<Item = T>) -> Self::Output
    where
        Self: Sized,
    {
        let _ = self.collect_many(items);
        self.finish()
    }
}

#[inline(always)]
pub(crate) const fn assert_collector<C, T>(collector: C) -> C
where
    C: Collector<T>,
{
    collector
}
