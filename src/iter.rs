//! Eager single-pass operators.

mod all_any;
mod contains;
mod count;
mod find;
mod first;
mod last;
mod materialize;
mod reduce;
mod seq_ext;

pub use all_any::*;
pub use contains::*;
pub use count::*;
pub use find::*;
pub use first::*;
pub use last::*;
pub use materialize::*;
pub use reduce::*;
pub use seq_ext::*;
