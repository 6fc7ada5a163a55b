//! Classifier-driven aggregation into keyed buckets.
//!
//! A classifier maps each value to something usable as a key, cast by
//! [`Key::from_value`]. A classifier that returns anything else stops the
//! aggregation at that element with
//! [`InvalidArgument`](crate::Error::InvalidArgument), so each collector
//! here outputs a [`Result`](crate::Result).
//!
//! [`Key::from_value`]: crate::Key::from_value

mod count_by;
mod group_by;
mod key_by;

pub use count_by::*;
pub use group_by::*;
pub use key_by::*;

use std::ops::ControlFlow;

use crate::error::{Error, Result};
use crate::value::{Key, Value};

/// Shared state of the classifying collectors: the classifier, and the
/// first error it produced.
#[derive(Clone)]
struct Classify<F> {
    op: &'static str,
    f: F,
    error: Option<Error>,
}

impl<F> Classify<F>
where
    F: FnMut(&Value) -> Value,
{
    const fn new(op: &'static str, f: F) -> Self {
        Self { op, f, error: None }
    }

    /// Classifies `value`, remembering the error and breaking if the result
    /// is not key-typed.
    fn key_of(&mut self, value: &Value) -> ControlFlow<(), Key> {
        match Key::from_value(self.op, &(self.f)(value)) {
            Ok(key) => ControlFlow::Continue(key),
            Err(err) => {
                self.error = Some(err);
                ControlFlow::Break(())
            }
        }
    }

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        if self.error.is_some() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    #[inline]
    fn finish<T>(self, output: T) -> Result<T> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(output),
        }
    }
}
