//! The lazy operator set.
//!
//! Constructing an adaptor only captures its arguments; nothing is pulled
//! from the source until the adaptor itself is pulled. Unless stated
//! otherwise an adaptor preserves the keys of the entries it passes on.

mod distinct_until_changed;
mod filter;
mod flat_map;
mod flatten;
mod map;
mod partition_by;
mod scan;
mod scan_right;
mod skip;
mod take;

pub use distinct_until_changed::*;
pub use filter::*;
pub use flat_map::*;
pub use flatten::*;
pub use map::*;
pub use partition_by::*;
pub use scan::*;
pub use scan_right::*;
pub use skip::*;
pub use take::*;
