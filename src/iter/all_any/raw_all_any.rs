use std::ops::ControlFlow;

use crate::value::Value;

#[derive(Clone)]
// ALL = true: every
// ALL = false: some
pub(super) struct RawAllAny<F, const ALL: bool> {
    pred: Option<F>,
}

impl<F, const ALL: bool> RawAllAny<F, ALL>
where
    F: FnMut(&Value) -> bool,
{
    #[inline]
    pub const fn new(pred: F) -> Self {
        Self { pred: Some(pred) }
    }

    #[inline]
    pub const fn get(&self) -> bool {
        // is_none/ALL 0 (ANY) 1 (ALL)
        // 0           0       1
        // 1           1       0
        // => XOR
        ALL ^ self.pred.is_none()
    }

    pub fn collect_impl(&mut self, value: &Value) -> ControlFlow<()> {
        let Some(ref mut pred) = self.pred else {
            return ControlFlow::Break(());
        };

        // A mismatch for `every` or a match for `some` decides the answer.
        if ALL ^ pred(value) {
            self.pred = None;
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    #[inline]
    pub fn break_hint(&self) -> ControlFlow<()> {
        if self.pred.is_none() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    pub fn debug_impl(&self, mut f: std::fmt::DebugStruct<'_, '_>) -> std::fmt::Result {
        // Closures have nothing to show, so report the running answer instead.
        f.field(if ALL { "every" } else { "some" }, &self.get())
            .finish()
    }
}
