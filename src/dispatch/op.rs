use std::{cmp::Ordering, vec};

use super::{Arg, Invoked};
use crate::error::{Error, Result};
use crate::source::Source;
use crate::value::{Func, Value};

/// The operations reachable through [`call`](super::call): those taking a
/// transform, predicate or classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Filter,
    Reject,
    Map,
    FlatMap,
    TakeWhile,
    DropWhile,
    /// `(selector?)`
    DistinctUntilChanged,
    PartitionBy,
    /// `(reducer, seed)`
    Scan,
    /// `(reducer, seed)`
    ScanRight,
    /// `(reducer, seed?)`
    Reduce,
    Every,
    Some,
    /// `(predicate, default?)`
    Find,
    GroupBy,
    KeyBy,
    CountBy,
    SortBy,
    /// `(comparator, comparator...)`
    SortWith,
    UniqBy,
}

impl Op {
    pub fn name(self) -> &'static str {
        match self {
            Op::Filter => "filter",
            Op::Reject => "reject",
            Op::Map => "map",
            Op::FlatMap => "flat_map",
            Op::TakeWhile => "take_while",
            Op::DropWhile => "drop_while",
            Op::DistinctUntilChanged => "distinct_until_changed",
            Op::PartitionBy => "partition_by",
            Op::Scan => "scan",
            Op::ScanRight => "scan_right",
            Op::Reduce => "reduce",
            Op::Every => "every",
            Op::Some => "some",
            Op::Find => "find",
            Op::GroupBy => "group_by",
            Op::KeyBy => "key_by",
            Op::CountBy => "count_by",
            Op::SortBy => "sort_by",
            Op::SortWith => "sort_with",
            Op::UniqBy => "uniq_by",
        }
    }

    /// Whether `(callable, sequence, ...)` is accepted as well as
    /// `(sequence, callable, ...)`.
    pub fn accepts_flexible(self) -> bool {
        matches!(self, Op::GroupBy | Op::KeyBy | Op::UniqBy | Op::CountBy)
    }

    /// Whether the operation can be called with no parameters at all.
    pub fn params_optional(self) -> bool {
        matches!(self, Op::DistinctUntilChanged)
    }

    /// How many parameters the operation takes besides its sequence.
    pub fn max_params(self) -> usize {
        match self {
            Op::Scan | Op::ScanRight | Op::Reduce | Op::Find => 2,
            Op::SortWith => usize::MAX,
            _ => 1,
        }
    }
}

/// Parameters left after the sequence was taken out, consumed in order.
struct Params {
    op: Op,
    rest: vec::IntoIter<Arg>,
}

impl Params {
    fn callable(&mut self) -> Result<Func> {
        let arg = self
            .rest
            .next()
            .ok_or_else(|| Error::invalid(self.op.name(), "missing callable argument"))?;

        let func = match &arg {
            Arg::Value(Value::Func(func)) => Some(func.clone()),
            Arg::Value(Value::Object(obj)) => obj.invoker().cloned(),
            _ => None,
        };
        func.ok_or_else(|| {
            Error::invalid(self.op.name(), format!("expected a callable, got {}", arg.describe()))
        })
    }

    fn optional_callable(&mut self) -> Result<Option<Func>> {
        if self.rest.as_slice().is_empty() {
            return Ok(None);
        }
        self.callable().map(Some)
    }

    fn callables(&mut self) -> Result<Vec<Func>> {
        let mut funcs = vec![self.callable()?];
        while !self.rest.as_slice().is_empty() {
            funcs.push(self.callable()?);
        }
        Ok(funcs)
    }

    fn optional_value(&mut self) -> Result<Option<Value>> {
        match self.rest.next() {
            Some(Arg::Value(value)) => Ok(Some(value)),
            Some(Arg::Seq(_)) => Err(Error::invalid(
                self.op.name(),
                "expected a value, got a one-shot sequence",
            )),
            None => Ok(None),
        }
    }
}

fn predicate(func: Func) -> impl FnMut(&Value) -> bool {
    move |value| func.call(std::slice::from_ref(value)).truthy()
}

fn transform(func: Func) -> impl FnMut(&Value) -> Value {
    move |value| func.call(std::slice::from_ref(value))
}

fn reducer(func: Func) -> impl FnMut(Value, &Value) -> Value {
    move |accum, value| func.call(&[accum, value.clone()])
}

fn comparator(func: Func) -> impl Fn(&Value, &Value) -> Ordering {
    move |a, b| {
        let sign = func.call(&[a.clone(), b.clone()]).coerce_number().as_f64();
        sign.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
    }
}

fn lazy(iter: impl Iterator<Item = crate::value::Entry> + 'static) -> Invoked {
    Invoked::Seq(Box::new(iter))
}

/// Parameters checked against an operation's shape, before any sequence is
/// seen.
#[derive(Debug)]
pub(super) enum Bound {
    Callable(Func),
    OptionalCallable(Option<Func>),
    Seeded(Func, Option<Value>),
    Chain(Vec<Func>),
}

pub(super) fn bind(op: Op, params: Vec<Arg>) -> Result<Bound> {
    if params.len() > op.max_params() {
        return Err(Error::invalid(
            op.name(),
            format!("takes at most {} argument(s) besides the sequence, got {}", op.max_params(), params.len()),
        ));
    }

    let mut params = Params {
        op,
        rest: params.into_iter(),
    };

    Ok(match op {
        Op::DistinctUntilChanged => Bound::OptionalCallable(params.optional_callable()?),
        Op::Scan | Op::ScanRight | Op::Reduce | Op::Find => {
            let func = params.callable()?;
            Bound::Seeded(func, params.optional_value()?)
        }
        Op::SortWith => Bound::Chain(params.callables()?),
        _ => Bound::Callable(params.callable()?),
    })
}

pub(super) fn invoke(op: Op, seq: Source, bound: Bound) -> Result<Invoked> {
    let invoked = match (op, bound) {
        (Op::Filter, Bound::Callable(f)) => lazy(crate::filter(seq, predicate(f))),
        (Op::Reject, Bound::Callable(f)) => lazy(crate::reject(seq, predicate(f))),
        (Op::Map, Bound::Callable(f)) => lazy(crate::map(seq, transform(f))),
        (Op::FlatMap, Bound::Callable(f)) => lazy(crate::flat_map(seq, transform(f))),
        (Op::TakeWhile, Bound::Callable(f)) => lazy(crate::take_while(seq, predicate(f))),
        (Op::DropWhile, Bound::Callable(f)) => lazy(crate::drop_while(seq, predicate(f))),
        (Op::DistinctUntilChanged, Bound::OptionalCallable(selector)) => match selector {
            Some(selector) => lazy(crate::distinct_until_changed_by(seq, transform(selector))),
            None => lazy(crate::distinct_until_changed(seq)),
        },
        (Op::PartitionBy, Bound::Callable(f)) => lazy(crate::partition_by(seq, transform(f))),
        (Op::Scan, Bound::Seeded(f, seed)) => lazy(crate::scan(seq, reducer(f), seed.unwrap_or_default())),
        (Op::ScanRight, Bound::Seeded(f, seed)) => {
            lazy(crate::scan_right(seq, reducer(f), seed.unwrap_or_default()))
        }
        (Op::Reduce, Bound::Seeded(f, seed)) => Invoked::Value(Value::from(crate::reduce(seq, reducer(f), seed))),
        (Op::Every, Bound::Callable(f)) => Invoked::Value(Value::from(crate::every(seq, predicate(f)))),
        (Op::Some, Bound::Callable(f)) => Invoked::Value(Value::from(crate::some(seq, predicate(f)))),
        (Op::Find, Bound::Seeded(f, default)) => {
            Invoked::Value(crate::find(seq, predicate(f)).unwrap_or(default.unwrap_or_default()))
        }
        (Op::GroupBy, Bound::Callable(f)) => Invoked::Value(crate::group_by(seq, transform(f))?.into()),
        (Op::KeyBy, Bound::Callable(f)) => Invoked::Value(crate::key_by(seq, transform(f))?.into()),
        (Op::CountBy, Bound::Callable(f)) => Invoked::Value(crate::count_by(seq, transform(f))?.into()),
        (Op::SortBy, Bound::Callable(f)) => Invoked::Value(crate::sort_by(seq, transform(f))?.into()),
        (Op::SortWith, Bound::Chain(funcs)) => {
            Invoked::Value(crate::sort_with(seq, funcs.into_iter().map(comparator)).into())
        }
        (Op::UniqBy, Bound::Callable(f)) => lazy(crate::uniq_by(seq, transform(f))),
        (op, bound) => {
            return Err(Error::invalid(op.name(), format!("parameters bound for another operation: {bound:?}")));
        }
    };
    Ok(invoked)
}

#[cfg(test)]
mod tests {
    use super::super::{Curried, call};
    use super::*;
    use crate::array;
    use crate::test_utils::{Traced, ints};
    use crate::value::ObjectRef;

    fn first_letter() -> Func {
        Func::new(|args| Value::from(args[0].as_str().and_then(|s| s.get(..1))))
    }

    fn curried(invoked: Invoked) -> Curried {
        match invoked {
            Invoked::Curried(curried) => curried,
            other => panic!("expected a curried call, got {other:?}"),
        }
    }

    #[test]
    fn flexible_and_direct_agree() {
        let words = array!["ant", "bee", "asp"];
        let direct = call(Op::GroupBy, vec![words.clone().into(), first_letter().into()]).unwrap();
        let flexible = call(Op::GroupBy, vec![first_letter().into(), words.into()]).unwrap();
        assert_eq!(direct.into_value(), flexible.into_value());
    }

    #[test]
    fn curried_calls_run_later() {
        let pending = curried(call(Op::CountBy, vec![first_letter().into()]).unwrap());
        assert_eq!(pending.op(), Op::CountBy);
        let counts = pending.call(array!["ant", "asp"]).unwrap().into_value();
        assert_eq!(counts, Some(Value::from(array! { "a" => 2 })));
    }

    #[test]
    fn find_with_default() {
        let is_big = Func::new(|args| Value::from(args[0].as_int().unwrap_or(0) > 10));
        let found = call(Op::Find, vec![array![1, 2].into(), is_big.into(), Arg::from("none")]).unwrap();
        assert_eq!(found.into_value(), Some(Value::from("none")));
    }

    #[test]
    fn reducers_get_accumulator_then_value() {
        let sub = Func::new(|args| {
            Value::from(args[0].as_int().unwrap_or(0) - args[1].as_int().unwrap_or(0))
        });
        let out = call(Op::Reduce, vec![array![10, 3, 2].into(), sub.clone().into()]).unwrap();
        assert_eq!(out.into_value(), Some(Value::from(5)));

        let scanned = call(Op::Scan, vec![array![1, 2].into(), sub.into(), Arg::from(0)]).unwrap();
        assert_eq!(scanned.into_value(), Some(Value::from(array![-1, -3])));
    }

    #[test]
    fn invocable_objects_are_callables() {
        let upper = ObjectRef::builder("Upper")
            .invocable(Func::new(|args| Value::from(args[0].as_str().map(str::to_uppercase))))
            .build();
        let out = call(Op::Map, vec![array!["a"].into(), upper.into()]).unwrap();
        assert_eq!(out.into_value(), Some(Value::from(array!["A"])));
    }

    #[test]
    fn parameter_errors() {
        let err = call(Op::Filter, vec![array![1].into(), Arg::from(1)]).unwrap_err();
        assert_eq!(err.to_string(), "filter: expected a callable, got int");

        let err = call(Op::Map, vec![array![1].into(), first_letter().into(), Arg::from(1)]).unwrap_err();
        assert_eq!(err.op(), "map");

        let err = call(Op::KeyBy, vec![array![array![]].into(), Func::new(|args| args[0].clone()).into()])
            .unwrap_err();
        assert_eq!(err.op(), "key_by");
    }

    #[test]
    fn curried_parameters_are_checked_at_call_time() {
        let keep_all = Func::new(|_| Value::from(true));
        let err = call(Op::Filter, vec![keep_all.clone().into(), Arg::from(1)]).unwrap_err();
        assert_eq!(err.to_string(), "filter: takes at most 1 argument(s) besides the sequence, got 2");

        let (traced, pulls) = Traced::new(ints(3));
        let seed = Arg::Seq(crate::source::Source::once(traced));
        let err = call(Op::Scan, vec![keep_all.into(), seed]).unwrap_err();
        assert_eq!(err.op(), "scan");
        assert_eq!(pulls.get(), 0);
    }

    #[test]
    fn sort_with_chains_comparators() {
        let by_len = Func::new(|args| {
            let len = |v: &Value| v.as_str().map_or(0, str::len) as i64;
            Value::from(len(&args[0]) - len(&args[1]))
        });
        let alphabetical = Func::new(|args| Value::from(args[0].loose_cmp(&args[1]) as i64));
        let words = array!["bee", "a", "ant", "cd"];

        let direct = call(Op::SortWith, vec![words.clone().into(), by_len.clone().into(), alphabetical.clone().into()]);
        let sorted = array! { 1 => "a", 3 => "cd", 2 => "ant", 0 => "bee" };
        assert_eq!(direct.unwrap().into_value(), Some(Value::from(sorted.clone())));

        let pending = curried(call(Op::SortWith, vec![by_len.into(), alphabetical.into()]).unwrap());
        assert_eq!(pending.call(words).unwrap().into_value(), Some(Value::from(sorted)));

        let err = call(Op::SortWith, vec![array![1].into(), first_letter().into(), Arg::from(2)]).unwrap_err();
        assert_eq!(err.to_string(), "sort_with: expected a callable, got int");
    }
}
