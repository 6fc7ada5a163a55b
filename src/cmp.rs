//! Ordering-based operators.
//!
//! [`min`] and [`max`] compare through [`Value::loose_cmp`]; the sorts use
//! [`Value::total_cmp`] unless the caller supplies comparators. Everything
//! hands back original elements, never coerced ones.
//!
//! [`Value::loose_cmp`]: crate::Value::loose_cmp
//! [`Value::total_cmp`]: crate::Value::total_cmp

mod min_max;
mod sort;

pub use min_max::*;
pub use sort::*;
