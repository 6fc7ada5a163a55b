//! Combinators over several sources at once.
//!
//! Every source is turned into a pull cursor and rewound to its start before
//! the first element is combined, so a caller-owned cursor that was already
//! advanced is read from the beginning. One-shot sources cannot go back and
//! simply continue.
//!
//! Sources are pulled round-robin in argument order, one step per source per
//! round. All outputs are reindexed from zero.

mod concat;
mod interleave;
mod transpose;
mod zip;

pub use concat::*;
pub use interleave::*;
pub use transpose::*;
pub use zip::*;

use crate::source::{Pull, Source};

fn pulls(sources: impl IntoIterator<Item = Source>) -> Vec<Pull> {
    sources.into_iter().map(Source::into_iter).collect()
}
