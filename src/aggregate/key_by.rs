use std::{fmt, ops::ControlFlow};

use super::Classify;
use crate::collector::{Collector, assert_collector};
use crate::error::Result;
use crate::value::{Array, Entry, Value};

/// A [`Collector`] that re-keys values by what `keyer` returns.
///
/// On a key collision the later value wins, in the slot of the first.
#[derive(Clone)]
pub struct KeyBy<F> {
    classify: Classify<F>,
    keyed: Array,
}

impl<F> KeyBy<F>
where
    F: FnMut(&Value) -> Value,
{
    #[inline]
    pub fn new(keyer: F) -> Self {
        assert_collector::<_, Entry>(Self {
            classify: Classify::new("key_by", keyer),
            keyed: Array::new(),
        })
    }
}

impl<F> Collector for KeyBy<F>
where
    F: FnMut(&Value) -> Value,
{
    type Output = Result<Array>;

    fn collect(&mut self, (_, value): Entry) -> ControlFlow<()> {
        let key = self.classify.key_of(&value)?;
        self.keyed.insert(key, value);
        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Result<Array> {
        self.classify.finish(self.keyed)
    }

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        self.classify.break_hint()
    }
}

impl<F> fmt::Debug for KeyBy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyBy").field("keyed", &self.keyed).finish()
    }
}

/// Re-keys `seq` by `keyer`. Last write wins.
pub fn key_by<F>(seq: impl IntoIterator<Item = Entry>, keyer: F) -> Result<Array>
where
    F: FnMut(&Value) -> Value,
{
    KeyBy::new(keyer).collect_then_finish(seq)
}
