//! Lazy and eager operators over keyed sequences.
//!
//! A sequence is anything that yields [`Entry`] pairs of a [`Key`] and a
//! dynamically typed [`Value`]: an [`Array`] (replayable), or any iterator
//! wrapped as a [`Source`] (possibly one-shot, possibly infinite).
//!
//! Operators come in two flavors:
//!
//! - **Lazy** operators ([`map`], [`filter`], [`uniq`], [`aperture`], ...)
//!   return an iterator and read nothing from their input until pulled.
//! - **Eager** operators ([`reduce`], [`sum`], [`group_by`], [`sort`], ...)
//!   drain their input and return a result. They are built on [`Collector`]s,
//!   which stop reading as soon as the answer is known.
//!
//! Each documented operator states whether it keeps the keys of its input or
//! reindexes its output from zero.
//!
//! # Calling conventions
//!
//! The free functions at the crate root are the *direct* form: the sequence
//! comes first.
//!
//! ```
//! use keyseq::{array, map, take, to_list, Value};
//!
//! let squares = map(take(array![1, 2, 3, 4], 3), |v: &Value| {
//!     let n = v.as_int().unwrap_or(0);
//!     Value::from(n * n)
//! });
//! assert_eq!(to_list(squares), [Value::from(1), Value::from(4), Value::from(9)]);
//! ```
//!
//! The [`stage`] module has the *curried* form of every operator, for
//! building pipelines before the data exists.
//!
//! ```
//! use keyseq::{array, prelude::*, stage, Value};
//!
//! let total = array![1, 2, 2, 3]
//!     .into_iter()
//!     .pipe(stage::uniq())
//!     .pipe(stage::sum());
//! assert_eq!(total, Value::from(6));
//! ```
//!
//! Callers holding untyped arguments go through [`dispatch`], which tells
//! the conventions apart by the shape of the arguments.
//!
//! # Errors
//!
//! Invalid arguments are reported as [`Error::InvalidArgument`]. Checks that
//! need no input (a window size, say) fail when the operator is built; checks
//! that depend on an element (a classifier returning an array) fail when that
//! element is reached.
//!
//! # Features
//!
//! - `tracing` (default): emit [`tracing`](https://docs.rs/tracing) events
//!   for call resolution, buffering and skipped values.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod adaptors;
mod aggregate;
pub mod cmp;
pub mod collector;
pub mod dispatch;
mod error;
pub mod hash;
pub mod iter;
mod log;
mod multi;
pub mod num;
pub mod prelude;
mod set;
pub mod source;
pub mod stage;
mod value;
mod window;

#[cfg(test)]
mod test_utils;

pub use adaptors::*;
pub use aggregate::*;
pub use cmp::*;
pub use collector::*;
pub use error::*;
pub use hash::HashId;
pub use iter::*;
pub use multi::*;
pub use num::*;
pub use set::*;
pub use source::*;
pub use value::*;
pub use window::*;
