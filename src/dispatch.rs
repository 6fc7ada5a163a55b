//! The untyped calling convention.
//!
//! Typed code picks its convention by name: `keyseq::map(seq, f)` is direct
//! and `keyseq::stage::map(f)` is curried. When arguments arrive as dynamic
//! [`Arg`]s instead, [`resolve`] decides the [`CallFrame`] by looking at what
//! the arguments *are*, never at how many there are, since several
//! operations take optional trailing parameters:
//!
//! 1. A first argument that is both a sequence and callable is rejected as
//!    ambiguous.
//! 2. A sequence first means [`CallFrame::Direct`].
//! 3. A callable first, followed by a sequence, means
//!    [`CallFrame::Flexible`] for the operations that allow it
//!    ([`Op::accepts_flexible`]).
//! 4. Any other callable first means [`CallFrame::Curried`], as does no
//!    argument at all for an operation whose parameters are all optional.
//!
//! [`call`] then checks the parameters against the operation's shape, in
//! every frame, and runs the operation or hands back a [`Curried`] call that
//! takes its sequence later. A bad parameter is an error from [`call`]
//! itself, never from [`Curried::call`].

mod op;

pub use op::*;

use std::fmt;

use crate::error::{Error, Result};
use crate::log::trace;
use crate::source::Source;
use crate::value::{Array, Entry, Func, ObjectRef, Value};

/// A dynamically typed argument.
pub enum Arg {
    /// A sequence that is not a value, such as a one-shot iterator.
    Seq(Source),
    Value(Value),
}

impl Arg {
    pub fn is_sequence(&self) -> bool {
        match self {
            Arg::Seq(_) => true,
            Arg::Value(value) => value.is_sequence(),
        }
    }

    pub fn is_callable(&self) -> bool {
        match self {
            Arg::Seq(_) => false,
            Arg::Value(value) => value.is_callable(),
        }
    }

    fn describe(&self) -> String {
        match self {
            Arg::Seq(_) => "sequence".to_owned(),
            Arg::Value(value) => value.kind().to_string(),
        }
    }
}

impl fmt::Debug for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Seq(source) => f.debug_tuple("Seq").field(source).finish(),
            Arg::Value(value) => f.debug_tuple("Value").field(value).finish(),
        }
    }
}

macro_rules! value_args {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Arg {
                #[inline]
                fn from(value: $ty) -> Self {
                    Arg::Value(value.into())
                }
            }
        )*
    };
}

value_args!(Value, Array, Func, ObjectRef, bool, i32, i64, f64, &str, String);

impl From<Source> for Arg {
    #[inline]
    fn from(source: Source) -> Self {
        Arg::Seq(source)
    }
}

/// How an invocation's arguments line up with the operation's parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallFrame {
    /// `op(sequence, params...)`
    Direct,
    /// `op(params...)`, returning a unary call awaiting the sequence.
    Curried,
    /// `op(callable, sequence, params...)`
    Flexible,
}

/// Decides the call frame of `op` applied to `args`.
pub fn resolve(op: Op, args: &[Arg]) -> Result<CallFrame> {
    let frame = match args {
        [] if op.params_optional() => CallFrame::Curried,
        [] => {
            return Err(Error::invalid(
                op.name(),
                "expected a sequence or a callable, got no arguments",
            ));
        }
        [first, ..] if first.is_sequence() && first.is_callable() => {
            return Err(Error::invalid(
                op.name(),
                "first argument is both a sequence and a callable",
            ));
        }
        [first, ..] if first.is_sequence() => CallFrame::Direct,
        [first, second, ..]
            if first.is_callable() && op.accepts_flexible() && second.is_sequence() =>
        {
            CallFrame::Flexible
        }
        [first, ..] if first.is_callable() => CallFrame::Curried,
        [first, ..] => {
            return Err(Error::invalid(
                op.name(),
                format!("expected a sequence or a callable first, got {}", first.describe()),
            ));
        }
    };

    trace!(op = op.name(), ?frame, args = args.len(), "resolved call frame");
    Ok(frame)
}

/// The result of a dynamic call.
pub enum Invoked {
    /// An eager operation's result.
    Value(Value),
    /// A lazy operation's output, not yet pulled.
    Seq(Box<dyn Iterator<Item = Entry>>),
    /// The operation still waits for its sequence.
    Curried(Curried),
}

impl Invoked {
    /// Materializes the result as a value. A lazy sequence becomes an array
    /// with its keys; a curried call has no value yet.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Invoked::Value(value) => Some(value),
            Invoked::Seq(seq) => Some(Value::Array(seq.collect())),
            Invoked::Curried(_) => None,
        }
    }
}

impl fmt::Debug for Invoked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Invoked::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Invoked::Seq(_) => f.write_str("Seq(..)"),
            Invoked::Curried(curried) => f.debug_tuple("Curried").field(curried).finish(),
        }
    }
}

/// An operation with its parameters bound, waiting for a sequence.
#[derive(Debug)]
pub struct Curried {
    op: Op,
    bound: op::Bound,
}

impl Curried {
    pub fn op(&self) -> Op {
        self.op
    }

    /// Runs the operation over `seq`.
    pub fn call(self, seq: impl Into<Source>) -> Result<Invoked> {
        op::invoke(self.op, seq.into(), self.bound)
    }
}

/// Resolves and performs `op` over `args`.
///
/// # Examples
///
/// ```
/// use keyseq::{array, dispatch::{call, Arg, Invoked, Op}, Func, Value};
///
/// let double = Func::new(|args| Value::from(args[0].as_int().unwrap_or(0) * 2));
///
/// // Direct.
/// let direct = call(Op::Map, vec![array![1, 2].into(), double.clone().into()]).unwrap();
/// assert_eq!(direct.into_value(), Some(Value::from(array![2, 4])));
///
/// // Curried.
/// let Invoked::Curried(curried) = call(Op::Map, vec![double.into()]).unwrap() else {
///     panic!("expected a curried call");
/// };
/// assert_eq!(curried.call(array![5]).unwrap().into_value(), Some(Value::from(array![10])));
/// ```
pub fn call(op: Op, mut args: Vec<Arg>) -> Result<Invoked> {
    match resolve(op, &args)? {
        CallFrame::Curried => Ok(Invoked::Curried(Curried {
            op,
            bound: op::bind(op, args)?,
        })),
        CallFrame::Direct => {
            let seq = into_source(op, args.remove(0))?;
            op::invoke(op, seq, op::bind(op, args)?)
        }
        CallFrame::Flexible => {
            let seq = into_source(op, args.remove(1))?;
            op::invoke(op, seq, op::bind(op, args)?)
        }
    }
}

fn into_source(op: Op, arg: Arg) -> Result<Source> {
    match arg {
        Arg::Seq(source) => Ok(source),
        Arg::Value(value) => {
            let kind = value.kind();
            Source::from_value(value)
                .ok_or_else(|| Error::invalid(op.name(), format!("expected a sequence, got {kind}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;

    fn func() -> Arg {
        Func::new(|args| args[0].clone()).into()
    }

    #[test]
    fn frames() {
        assert_eq!(resolve(Op::Map, &[array![1].into(), func()]), Ok(CallFrame::Direct));
        assert_eq!(resolve(Op::Map, &[func()]), Ok(CallFrame::Curried));
        assert_eq!(resolve(Op::GroupBy, &[func(), array![1].into()]), Ok(CallFrame::Flexible));
        assert_eq!(resolve(Op::DistinctUntilChanged, &[]), Ok(CallFrame::Curried));
        assert!(resolve(Op::Map, &[]).is_err());
        assert!(resolve(Op::Map, &[Arg::from(3)]).is_err());
    }

    #[test]
    fn flexible_order_is_limited_to_classifiers() {
        // A sequence in second place does not make `reduce` flexible: its
        // second parameter is a seed, which may itself be an array.
        let frame = resolve(Op::Reduce, &[func(), array![].into()]);
        assert_eq!(frame, Ok(CallFrame::Curried));
    }

    #[test]
    fn ambiguous_first_argument() {
        let both = ObjectRef::builder("Both")
            .props(array![1, 2])
            .traversable()
            .invocable(Func::new(|_| Value::Null))
            .build();

        let err = resolve(Op::UniqBy, &[both.into(), array![1].into()]).unwrap_err();
        assert_eq!(err.op(), "uniq_by");
        assert!(err.to_string().contains("both a sequence and a callable"));
    }

    #[test]
    fn one_shot_sources_are_sequences() {
        let seq = Source::once(crate::test_utils::ints(3));
        assert_eq!(resolve(Op::Filter, &[seq.into(), func()]), Ok(CallFrame::Direct));
    }
}
