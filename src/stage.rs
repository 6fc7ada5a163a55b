//! The curried calling convention.
//!
//! Each function here takes an operator's parameters without its sequence
//! and returns a unary [`Stage`] that takes the sequence later. Stages
//! compose with [`Stage::then`] and are applied with [`Stage::apply`] or
//! [`SeqExt::pipe`](crate::SeqExt::pipe).
//!
//! Parameter checks that do not need the sequence run when the stage is
//! built, as they do for the direct form:
//!
//! ```
//! use keyseq::stage;
//!
//! assert!(stage::aperture::<keyseq::Array>(0).is_err());
//! ```
//!
//! # Examples
//!
//! ```
//! use keyseq::{array, stage::{self, Stage}, Value};
//!
//! let double = |v: &Value| Value::from(v.as_int().unwrap_or(0) * 2);
//! let pipeline = stage::drop(1).then(stage::map(double)).then(stage::sum());
//!
//! assert_eq!(pipeline.apply(array![1, 2, 3]), Value::from(10));
//! ```

use std::cmp::Ordering;

use crate::adaptors::*;
use crate::error::Result;
use crate::multi::{Concat, Interleave, Zip, ZipLongest};
use crate::set::{Difference, Intersection, SymmetricDifference, Union, Uniq, UniqBy};
use crate::source::Source;
use crate::value::{Array, Entry, Key, Value};
use crate::window::{Aperture, DropLast, TakeLast};

/// A deferred unary operation.
///
/// Every `FnOnce(In) -> Out` is a stage, so plain closures slot into a
/// pipeline next to the constructors of this module.
pub trait Stage<In> {
    type Output;

    fn apply(self, input: In) -> Self::Output;

    /// Feeds this stage's output into `next`.
    #[inline]
    fn then<N>(self, next: N) -> Then<Self, N>
    where
        Self: Sized,
        N: Stage<Self::Output>,
    {
        Then { first: self, next }
    }
}

impl<In, Out, F> Stage<In> for F
where
    F: FnOnce(In) -> Out,
{
    type Output = Out;

    #[inline]
    fn apply(self, input: In) -> Out {
        self(input)
    }
}

/// Two stages run back to back.
///
/// This `struct` is created by [`Stage::then()`].
#[derive(Debug, Clone)]
pub struct Then<A, B> {
    first: A,
    next: B,
}

impl<In, A, B> Stage<In> for Then<A, B>
where
    A: Stage<In>,
    B: Stage<A::Output>,
{
    type Output = B::Output;

    #[inline]
    fn apply(self, input: In) -> B::Output {
        self.next.apply(self.first.apply(input))
    }
}

// Lazy operators.

pub fn filter<S, F>(pred: F) -> impl FnOnce(S) -> Filter<S::IntoIter, F>
where
    S: IntoIterator<Item = Entry>,
    F: FnMut(&Value) -> bool,
{
    move |seq| crate::filter(seq, pred)
}

pub fn reject<S, F>(pred: F) -> impl FnOnce(S) -> Filter<S::IntoIter, F>
where
    S: IntoIterator<Item = Entry>,
    F: FnMut(&Value) -> bool,
{
    move |seq| crate::reject(seq, pred)
}

pub fn map<S, F>(f: F) -> impl FnOnce(S) -> Map<S::IntoIter, F>
where
    S: IntoIterator<Item = Entry>,
    F: FnMut(&Value) -> Value,
{
    move |seq| crate::map(seq, f)
}

pub fn pluck<S>(field: impl Into<Key>) -> impl FnOnce(S) -> Pluck<S::IntoIter>
where
    S: IntoIterator<Item = Entry>,
{
    let field = field.into();
    move |seq| crate::pluck(seq, field)
}

pub fn take<S>(n: i64) -> impl FnOnce(S) -> Take<S::IntoIter>
where
    S: IntoIterator<Item = Entry>,
{
    move |seq| crate::take(seq, n)
}

pub fn take_while<S, F>(pred: F) -> impl FnOnce(S) -> TakeWhile<S::IntoIter, F>
where
    S: IntoIterator<Item = Entry>,
    F: FnMut(&Value) -> bool,
{
    move |seq| crate::take_while(seq, pred)
}

pub fn drop<S>(n: i64) -> impl FnOnce(S) -> Skip<S::IntoIter>
where
    S: IntoIterator<Item = Entry>,
{
    move |seq| crate::drop(seq, n)
}

pub fn drop_while<S, F>(pred: F) -> impl FnOnce(S) -> SkipWhile<S::IntoIter, F>
where
    S: IntoIterator<Item = Entry>,
    F: FnMut(&Value) -> bool,
{
    move |seq| crate::drop_while(seq, pred)
}

pub fn tail<S>() -> impl FnOnce(S) -> Skip<S::IntoIter>
where
    S: IntoIterator<Item = Entry>,
{
    crate::tail
}

pub fn init<S>() -> impl FnOnce(S) -> DropLast<S::IntoIter>
where
    S: IntoIterator<Item = Entry>,
{
    crate::init
}

pub fn flatten<S>(depth: usize) -> impl FnOnce(S) -> Flatten<S::IntoIter>
where
    S: IntoIterator<Item = Entry>,
{
    move |seq| crate::flatten(seq, depth)
}

pub fn flat_map<S, F>(f: F) -> impl FnOnce(S) -> FlatMap<S::IntoIter, F>
where
    S: IntoIterator<Item = Entry>,
    F: FnMut(&Value) -> Value,
{
    move |seq| crate::flat_map(seq, f)
}

pub fn distinct_until_changed<S>() -> impl FnOnce(S) -> DistinctUntilChanged<S::IntoIter, fn(&Value) -> Value>
where
    S: IntoIterator<Item = Entry>,
{
    crate::distinct_until_changed
}

pub fn distinct_until_changed_by<S, F>(selector: F) -> impl FnOnce(S) -> DistinctUntilChanged<S::IntoIter, F>
where
    S: IntoIterator<Item = Entry>,
    F: FnMut(&Value) -> Value,
{
    move |seq| crate::distinct_until_changed_by(seq, selector)
}

pub fn partition_by<S, F>(discriminator: F) -> impl FnOnce(S) -> PartitionBy<S::IntoIter, F>
where
    S: IntoIterator<Item = Entry>,
    F: FnMut(&Value) -> Value,
{
    move |seq| crate::partition_by(seq, discriminator)
}

pub fn scan<S, F>(f: F, seed: impl Into<Value>) -> impl FnOnce(S) -> Scan<S::IntoIter, F>
where
    S: IntoIterator<Item = Entry>,
    F: FnMut(Value, &Value) -> Value,
{
    let seed = seed.into();
    move |seq| crate::scan(seq, f, seed)
}

pub fn scan_right<S, F>(f: F, seed: impl Into<Value>) -> impl FnOnce(S) -> ScanRight<S::IntoIter, F>
where
    S: IntoIterator<Item = Entry>,
    F: FnMut(Value, &Value) -> Value,
{
    let seed = seed.into();
    move |seq| crate::scan_right(seq, f, seed)
}

pub fn values<S>() -> impl FnOnce(S) -> crate::iter::Project<S::IntoIter>
where
    S: IntoIterator<Item = Entry>,
{
    crate::values
}

pub fn keys<S>() -> impl FnOnce(S) -> crate::iter::Project<S::IntoIter>
where
    S: IntoIterator<Item = Entry>,
{
    crate::keys
}

// Uniqueness and set algebra. The stage input is the left-hand side.

pub fn uniq<S>() -> impl FnOnce(S) -> Uniq<S::IntoIter>
where
    S: IntoIterator<Item = Entry>,
{
    crate::uniq
}

pub fn uniq_by<S, F>(by: F) -> impl FnOnce(S) -> UniqBy<S::IntoIter, F>
where
    S: IntoIterator<Item = Entry>,
    F: FnMut(&Value) -> Value,
{
    move |seq| crate::uniq_by(seq, by)
}

pub fn union<S, B>(other: B) -> impl FnOnce(S) -> Union<S::IntoIter, B::IntoIter>
where
    S: IntoIterator<Item = Entry>,
    B: IntoIterator<Item = Entry>,
{
    move |seq| crate::union(seq, other)
}

pub fn intersection<S, B>(other: B) -> impl FnOnce(S) -> Intersection<S::IntoIter, B::IntoIter>
where
    S: IntoIterator<Item = Entry>,
    B: IntoIterator<Item = Entry>,
{
    move |seq| crate::intersection(seq, other)
}

pub fn difference<S, B>(other: B) -> impl FnOnce(S) -> Difference<S::IntoIter, B::IntoIter>
where
    S: IntoIterator<Item = Entry>,
    B: IntoIterator<Item = Entry>,
{
    move |seq| crate::difference(seq, other)
}

pub fn symmetric_difference<S, B>(other: B) -> impl FnOnce(S) -> SymmetricDifference<S::IntoIter, B::IntoIter>
where
    S: IntoIterator<Item = Entry>,
    B: IntoIterator<Item = Entry>,
{
    move |seq| crate::symmetric_difference(seq, other)
}

// Windows.

/// Fails right away, like [`crate::aperture`], if `size` is not positive.
pub fn aperture<S>(size: i64) -> Result<impl FnOnce(S) -> Aperture<S::IntoIter>>
where
    S: IntoIterator<Item = Entry>,
{
    let size = crate::window::window_size(size)?;
    Ok(move |seq: S| Aperture::new(seq.into_iter(), size))
}

pub fn drop_last<S>(n: i64) -> impl FnOnce(S) -> DropLast<S::IntoIter>
where
    S: IntoIterator<Item = Entry>,
{
    move |seq| crate::drop_last(seq, n)
}

pub fn take_last<S>(n: i64) -> impl FnOnce(S) -> TakeLast<S::IntoIter>
where
    S: IntoIterator<Item = Entry>,
{
    move |seq| crate::take_last(seq, n)
}

// Multi-source combinators. The stage input becomes the first source.

fn lead<S>(seq: S, others: impl IntoIterator<Item = Source>) -> Vec<Source>
where
    S: IntoIterator<Item = Entry>,
    S::IntoIter: 'static,
{
    std::iter::once(Source::once(seq.into_iter())).chain(others).collect()
}

pub fn zip<S>(others: impl IntoIterator<Item = Source>) -> impl FnOnce(S) -> Zip
where
    S: IntoIterator<Item = Entry>,
    S::IntoIter: 'static,
{
    let others: Vec<Source> = others.into_iter().collect();
    move |seq| crate::zip(lead(seq, others))
}

pub fn zip_longest<S>(fill: impl Into<Value>, others: impl IntoIterator<Item = Source>) -> impl FnOnce(S) -> ZipLongest
where
    S: IntoIterator<Item = Entry>,
    S::IntoIter: 'static,
{
    let fill = fill.into();
    let others: Vec<Source> = others.into_iter().collect();
    move |seq| crate::zip_longest(fill, lead(seq, others))
}

pub fn interleave<S>(others: impl IntoIterator<Item = Source>) -> impl FnOnce(S) -> Interleave
where
    S: IntoIterator<Item = Entry>,
    S::IntoIter: 'static,
{
    let others: Vec<Source> = others.into_iter().collect();
    move |seq| crate::interleave(lead(seq, others))
}

pub fn concat<S>(others: impl IntoIterator<Item = Source>) -> impl FnOnce(S) -> Concat
where
    S: IntoIterator<Item = Entry>,
    S::IntoIter: 'static,
{
    let others: Vec<Source> = others.into_iter().collect();
    move |seq| crate::concat(lead(seq, others))
}

/// Transposes the rows held as values of the input; see [`crate::unzip`].
pub fn unzip<S>() -> impl FnOnce(S) -> Result<Array>
where
    S: IntoIterator<Item = Entry>,
{
    crate::unzip
}

// Eager operators.

pub fn count<S>() -> impl FnOnce(S) -> usize
where
    S: IntoIterator<Item = Entry>,
{
    crate::count
}

pub fn contains<S>(needle: impl Into<Value>) -> impl FnOnce(S) -> bool
where
    S: IntoIterator<Item = Entry>,
{
    let needle = needle.into();
    move |seq| crate::contains(seq, needle)
}

pub fn every<S, F>(pred: F) -> impl FnOnce(S) -> bool
where
    S: IntoIterator<Item = Entry>,
    F: FnMut(&Value) -> bool,
{
    move |seq| crate::every(seq, pred)
}

pub fn some<S, F>(pred: F) -> impl FnOnce(S) -> bool
where
    S: IntoIterator<Item = Entry>,
    F: FnMut(&Value) -> bool,
{
    move |seq| crate::some(seq, pred)
}

pub fn find<S, F>(pred: F) -> impl FnOnce(S) -> Option<Value>
where
    S: IntoIterator<Item = Entry>,
    F: FnMut(&Value) -> bool,
{
    move |seq| crate::find(seq, pred)
}

pub fn first<S>() -> impl FnOnce(S) -> Option<Value>
where
    S: IntoIterator<Item = Entry>,
{
    crate::first
}

pub fn last<S>() -> impl FnOnce(S) -> Option<Value>
where
    S: IntoIterator<Item = Entry>,
{
    crate::last
}

pub fn reduce<S, F>(f: F, seed: Option<Value>) -> impl FnOnce(S) -> Option<Value>
where
    S: IntoIterator<Item = Entry>,
    F: FnMut(Value, &Value) -> Value,
{
    move |seq| crate::reduce(seq, f, seed)
}

pub fn fold<S, F>(seed: impl Into<Value>, f: F) -> impl FnOnce(S) -> Value
where
    S: IntoIterator<Item = Entry>,
    F: FnMut(Value, &Value) -> Value,
{
    let seed = seed.into();
    move |seq| crate::fold(seq, seed, f)
}

pub fn sum<S>() -> impl FnOnce(S) -> Value
where
    S: IntoIterator<Item = Entry>,
{
    crate::sum
}

pub fn average<S>() -> impl FnOnce(S) -> f64
where
    S: IntoIterator<Item = Entry>,
{
    crate::average
}

pub fn min<S>() -> impl FnOnce(S) -> Option<Value>
where
    S: IntoIterator<Item = Entry>,
{
    crate::min
}

pub fn max<S>() -> impl FnOnce(S) -> Option<Value>
where
    S: IntoIterator<Item = Entry>,
{
    crate::max
}

pub fn sort<S>() -> impl FnOnce(S) -> Array
where
    S: IntoIterator<Item = Entry>,
{
    crate::sort
}

pub fn sort_by<S, F>(comparable: F) -> impl FnOnce(S) -> Result<Array>
where
    S: IntoIterator<Item = Entry>,
    F: FnMut(&Value) -> Value,
{
    move |seq| crate::sort_by(seq, comparable)
}

pub fn sort_with<S, C>(comparators: impl IntoIterator<Item = C>) -> impl FnOnce(S) -> Array
where
    S: IntoIterator<Item = Entry>,
    C: Fn(&Value, &Value) -> Ordering,
{
    let comparators: Vec<C> = comparators.into_iter().collect();
    move |seq| crate::sort_with(seq, comparators)
}

pub fn group_by<S, F>(grouper: F) -> impl FnOnce(S) -> Result<Array>
where
    S: IntoIterator<Item = Entry>,
    F: FnMut(&Value) -> Value,
{
    move |seq| crate::group_by(seq, grouper)
}

pub fn key_by<S, F>(keyer: F) -> impl FnOnce(S) -> Result<Array>
where
    S: IntoIterator<Item = Entry>,
    F: FnMut(&Value) -> Value,
{
    move |seq| crate::key_by(seq, keyer)
}

pub fn count_by<S, F>(classifier: F) -> impl FnOnce(S) -> Result<Array>
where
    S: IntoIterator<Item = Entry>,
    F: FnMut(&Value) -> Value,
{
    move |seq| crate::count_by(seq, classifier)
}

pub fn to_array<S>() -> impl FnOnce(S) -> Array
where
    S: IntoIterator<Item = Entry>,
{
    crate::to_array
}

pub fn to_list<S>() -> impl FnOnce(S) -> Vec<Value>
where
    S: IntoIterator<Item = Entry>,
{
    crate::to_list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;
    use crate::iter::SeqExt;
    use crate::test_utils::{Traced, ints};

    fn add(acc: Value, v: &Value) -> Value {
        Value::from(acc.as_int().unwrap_or(0) + v.as_int().unwrap_or(0))
    }

    #[test]
    fn stages_match_direct_calls() {
        let arr = array![3, 1, 2, 3];
        assert_eq!(uniq().apply(&arr).count(), crate::uniq(&arr).count());
        assert_eq!(scan_right(add, 0).apply(&arr).to_list(), crate::scan_right(&arr, add, 0).to_list());
        assert_eq!(sort().apply(&arr), crate::sort(&arr));
        assert_eq!(reduce(add, None).apply(&arr), Some(Value::from(9)));
    }

    #[test]
    fn building_a_pipeline_reads_nothing() {
        let (traced, pulls) = Traced::new(ints(10));
        let pipeline = filter(|v: &Value| v.truthy()).then(take(3));
        let mut out = pipeline.apply(traced);
        assert_eq!(pulls.get(), 0);

        assert_eq!(out.next().map(|(_, v)| v), Some(Value::from(1)));
        assert_eq!(pulls.get(), 2);
    }

    #[test]
    fn aperture_checks_size_up_front() {
        assert!(aperture::<Array>(-1).is_err());
        let windows = aperture(2).unwrap().apply(array![1, 2, 3]);
        assert_eq!(windows.count(), 2);
    }

    #[test]
    fn multi_source_stage_leads_with_its_input() {
        let rows = ints(2).pipe(zip([Source::from(array!["a", "b", "c"])]));
        assert_eq!(crate::to_array(rows), array![array![0, "a"], array![1, "b"]]);
    }

    #[test]
    fn plain_functions_are_stages() {
        let kept = reject(|v: &Value| v.truthy()).then(crate::count).apply(array![0, 1, "", 2]);
        assert_eq!(kept, 2);
    }
}
