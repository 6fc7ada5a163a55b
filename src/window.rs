//! Operators over a bounded trailing buffer.
//!
//! Each adaptor owns a FIFO of at most `n` (or `n + 1`) entries, created
//! with it and dropped with it.

mod aperture;
mod drop_last;
mod take_last;

pub use aperture::*;
pub use drop_last::*;
pub use take_last::*;
