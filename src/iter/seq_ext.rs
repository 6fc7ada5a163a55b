use crate::collector::Collector;
use crate::stage::Stage;
use crate::value::{Array, Entry, Value};

/// Extends every keyed sequence with method-style entry points.
///
/// This trait is automatically implemented for all iterators of [`Entry`].
pub trait SeqExt: Iterator<Item = Entry> {
    /// Feeds entries into `collector` until it breaks or the sequence runs
    /// out, then returns its output.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyseq::{array, prelude::*, iter::Count};
    ///
    /// assert_eq!(array![1, 2, 3].into_iter().feed_into(Count::new()), 3);
    /// ```
    #[inline]
    fn feed_into<C>(self, collector: C) -> C::Output
    where
        Self: Sized,
        C: Collector<Entry>,
    {
        collector.collect_then_finish(self)
    }

    /// Applies a curried stage to this sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyseq::{array, prelude::*, stage, Value};
    ///
    /// let doubled = array![1, 2, 3]
    ///     .into_iter()
    ///     .pipe(stage::take(2))
    ///     .pipe(stage::map(|v: &Value| Value::from(v.as_int().unwrap_or(0) * 2)))
    ///     .to_list();
    ///
    /// assert_eq!(doubled, [Value::from(2), Value::from(4)]);
    /// ```
    #[inline]
    fn pipe<S>(self, stage: S) -> S::Output
    where
        Self: Sized,
        S: Stage<Self>,
    {
        stage.apply(self)
    }

    /// Materializes keys and values.
    #[inline]
    fn to_array(self) -> Array
    where
        Self: Sized,
    {
        super::to_array(self)
    }

    /// Materializes values only.
    #[inline]
    fn to_list(self) -> Vec<Value>
    where
        Self: Sized,
    {
        super::to_list(self)
    }
}

impl<I: Iterator<Item = Entry>> SeqExt for I {}
