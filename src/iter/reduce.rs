use std::{fmt, ops::ControlFlow};

use crate::collector::{Collector, assert_collector};
use crate::value::{Entry, Value};

/// A [`Collector`] that folds every value into an accumulator, starting
/// from a seed.
///
/// # Examples
///
/// ```
/// use keyseq::{array, fold, Value};
///
/// let total = fold(array![1, 2, 3], Value::from(10), |acc, v| {
///     Value::from(acc.as_int().unwrap_or(0) + v.as_int().unwrap_or(0))
/// });
/// assert_eq!(total, Value::from(16));
/// ```
#[derive(Clone)]
pub struct Fold<F> {
    accum: Value,
    f: F,
}

impl<F> Fold<F>
where
    F: FnMut(Value, &Value) -> Value,
{
    #[inline]
    pub fn new(seed: impl Into<Value>, f: F) -> Self {
        assert_collector::<_, Entry>(Self {
            accum: seed.into(),
            f,
        })
    }
}

impl<F> Collector for Fold<F>
where
    F: FnMut(Value, &Value) -> Value,
{
    type Output = Value;

    fn collect(&mut self, (_, value): Entry) -> ControlFlow<()> {
        let accum = std::mem::take(&mut self.accum);
        self.accum = (self.f)(accum, &value);
        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Value {
        self.accum
    }

    fn collect_then_finish(self, items: impl IntoIterator<Item = Entry>) -> Value {
        let mut f = self.f;
        items
            .into_iter()
            .fold(self.accum, |accum, (_, value)| f(accum, &value))
    }
}

impl<F> fmt::Debug for Fold<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fold").field("accum", &self.accum).finish()
    }
}

/// A [`Collector`] that reduces values with no seed: the first value is
/// the initial accumulator.
///
/// Its output is `None` if nothing was collected.
#[derive(Clone)]
pub struct Reduce<F> {
    accum: Option<Value>,
    f: F,
}

impl<F> Reduce<F>
where
    F: FnMut(Value, &Value) -> Value,
{
    #[inline]
    pub const fn new(f: F) -> Self {
        assert_collector::<_, Entry>(Self { accum: None, f })
    }
}

impl<F> Collector for Reduce<F>
where
    F: FnMut(Value, &Value) -> Value,
{
    type Output = Option<Value>;

    fn collect(&mut self, (_, value): Entry) -> ControlFlow<()> {
        self.accum = Some(match self.accum.take() {
            Some(accum) => (self.f)(accum, &value),
            None => value,
        });
        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Option<Value> {
        self.accum
    }
}

impl<F> fmt::Debug for Reduce<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reduce").field("accum", &self.accum).finish()
    }
}

/// Folds `seq` from the left starting at `seed`.
pub fn fold<F>(seq: impl IntoIterator<Item = Entry>, seed: impl Into<Value>, f: F) -> Value
where
    F: FnMut(Value, &Value) -> Value,
{
    Fold::new(seed, f).collect_then_finish(seq)
}

/// Reduces `seq` from the left.
///
/// With a seed this is [`fold`] and always returns `Some`. Without one, the
/// first value seeds the fold and an empty input gives `None`.
pub fn reduce<F>(seq: impl IntoIterator<Item = Entry>, f: F, seed: Option<Value>) -> Option<Value>
where
    F: FnMut(Value, &Value) -> Value,
{
    match seed {
        Some(seed) => Some(fold(seq, seed, f)),
        None => Reduce::new(f).collect_then_finish(seq),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;

    fn concat(acc: Value, v: &Value) -> Value {
        Value::from(format!("{}{}", acc.as_str().unwrap_or_default(), v.as_str().unwrap_or_default()))
    }

    #[test]
    fn seeded_and_unseeded() {
        let arr = array!["a", "b", "c"];
        assert_eq!(reduce(&arr, concat, None), Some(Value::from("abc")));
        assert_eq!(reduce(&arr, concat, Some(Value::from(">"))), Some(Value::from(">abc")));
        assert_eq!(reduce(array![], concat, None), None);
        assert_eq!(reduce(array![], concat, Some(Value::from("seed"))), Some(Value::from("seed")));
    }
}
