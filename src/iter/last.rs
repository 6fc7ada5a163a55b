use std::ops::ControlFlow;

use crate::collector::{Collector, assert_collector};
use crate::value::{Entry, Value};

/// A [`Collector`] that stores the last entry it collects.
#[derive(Debug, Clone, Default)]
pub struct Last {
    entry: Option<Entry>,
}

impl Last {
    #[inline]
    pub const fn new() -> Self {
        assert_collector::<_, Entry>(Last { entry: None })
    }
}

impl Collector for Last {
    type Output = Option<Entry>;

    #[inline]
    fn collect(&mut self, entry: Entry) -> ControlFlow<()> {
        self.entry = Some(entry);
        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Self::Output {
        self.entry
    }

    fn collect_then_finish(self, items: impl IntoIterator<Item = Entry>) -> Self::Output {
        items.into_iter().last().or(self.entry)
    }
}

/// The last value of `seq`, or `None` if it is empty.
pub fn last(seq: impl IntoIterator<Item = Entry>) -> Option<Value> {
    Last::new().collect_then_finish(seq).map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;

    #[test]
    fn last_or_none() {
        assert_eq!(last(array![1, 2, 3]), Some(Value::from(3)));
        assert_eq!(last(array![]), None);
    }
}
