use std::ops::ControlFlow;

use crate::collector::{Collector, assert_collector};
use crate::value::{Entry, Value};

/// A [`Collector`] that looks for a value strictly equal to a needle.
///
/// Strict means same kind and same content: `1`, `1.0` and `"1"` are three
/// different needles.
#[derive(Debug, Clone)]
pub struct Contains {
    needle: Value,
    found: bool,
}

impl Contains {
    pub fn new(needle: impl Into<Value>) -> Self {
        assert_collector::<_, Entry>(Self {
            needle: needle.into(),
            found: false,
        })
    }
}

impl Collector for Contains {
    type Output = bool;

    fn collect(&mut self, (_, value): Entry) -> ControlFlow<()> {
        if value == self.needle {
            self.found = true;
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    #[inline]
    fn finish(self) -> bool {
        self.found
    }
}

/// Whether `seq` holds a value strictly equal to `needle`.
pub fn contains(seq: impl IntoIterator<Item = Entry>, needle: impl Into<Value>) -> bool {
    Contains::new(needle).collect_then_finish(seq)
}
