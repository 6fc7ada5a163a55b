use std::ops::ControlFlow;

use crate::collector::{Collector, assert_collector};
use crate::value::{Entry, Value};

/// A [`Collector`] that keeps the first entry and stops.
#[derive(Debug, Clone, Default)]
pub struct First {
    entry: Option<Entry>,
}

impl First {
    #[inline]
    pub const fn new() -> Self {
        assert_collector::<_, Entry>(First { entry: None })
    }
}

impl Collector for First {
    type Output = Option<Entry>;

    #[inline]
    fn collect(&mut self, entry: Entry) -> ControlFlow<()> {
        self.entry.get_or_insert(entry);
        ControlFlow::Break(())
    }

    #[inline]
    fn finish(self) -> Self::Output {
        self.entry
    }

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        if self.entry.is_some() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

/// The first value of `seq`, or `None` if it is empty. Pulls at most once.
pub fn first(seq: impl IntoIterator<Item = Entry>) -> Option<Value> {
    First::new().collect_then_finish(seq).map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;
    use crate::test_utils::{Traced, ints};

    #[test]
    fn pulls_once() {
        let (traced, pulls) = Traced::new(ints(5));
        assert_eq!(first(traced), Some(Value::from(0_usize)));
        assert_eq!(pulls.get(), 1);
        assert_eq!(first(array![]), None);
    }
}
