//! Uniqueness and set algebra over canonical identifiers.
//!
//! Every operator here is lazy and keeps the keys of the entries it emits.
//! Values with no canonical identifier (see [`hash::canonical`]) are left
//! out of every result; that is a policy, not an error.
//!
//! [`hash::canonical`]: crate::hash::canonical

mod difference;
mod intersection;
mod symmetric_difference;
mod uniq;

pub use difference::*;
pub use intersection::*;
pub use symmetric_difference::*;
pub use uniq::*;

use std::collections::HashSet;

use crate::hash::{HashId, canonical};
use crate::log::trace;
use crate::value::{Entry, Value};

/// Canonicalizes `value`, logging when it has to be left out.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn identify(op: &'static str, value: &Value) -> Option<HashId> {
    let id = canonical(value);
    if id.is_none() {
        trace!(op, kind = %value.kind(), "skipping unhashable value");
    }
    id
}

/// Drains `seq` into the set of its values' identifiers.
fn id_set(op: &'static str, seq: impl Iterator<Item = Entry>) -> HashSet<HashId> {
    let ids: HashSet<HashId> = seq.filter_map(|(_, value)| identify(op, &value)).collect();
    trace!(op, distinct = ids.len(), "buffered right-hand identifiers");
    ids
}
