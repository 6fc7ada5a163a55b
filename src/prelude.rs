//! Re-exports the traits and types most pipelines need.
//!
//! ```
//! use keyseq::prelude::*;
//! ```

pub use crate::collector::Collector;
pub use crate::iter::SeqExt;
pub use crate::stage::Stage;
pub use crate::value::{Array, Entry, Key, Value};
