//! The dynamic value model shared by every operator.
//!
//! Elements are [`Entry`] pairs of a [`Key`] and a [`Value`]. `Value` is a
//! closed set of kinds, which keeps canonical hashing, numeric coercion and
//! the default comparison total functions over it.

mod array;
mod compare;
mod key;
mod number;
mod object;

pub use array::*;
pub use key::*;
pub use number::*;
pub use object::*;

use std::fmt;

/// A dynamically typed element.
///
/// [`PartialEq`] is strict equality: both sides must be the same kind with
/// equal content. Objects, functions and resources compare by identity.
/// `-0.0 == 0.0` and `NaN != NaN`, as for `f64`.
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array(Array),
    Object(ObjectRef),
    Func(Func),
    Resource(Resource),
}

/// Name of a value's kind, for error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Null,
    Bool,
    Int,
    Float,
    Str,
    Array,
    Object,
    Func,
    Resource,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::Str => "string",
            Kind::Array => "array",
            Kind::Object => "object",
            Kind::Func => "callable",
            Kind::Resource => "resource",
        };
        f.write_str(name)
    }
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::Str(_) => Kind::Str,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
            Value::Func(_) => Kind::Func,
            Value::Resource(_) => Kind::Resource,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(int) => Some(*int),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Falsy values: `null`, `false`, `0`, `0.0`, `""`, `"0"` and the empty array.
    pub fn truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(int) => *int != 0,
            Value::Float(float) => *float != 0.0,
            Value::Str(s) => !(s.is_empty() || s == "0"),
            Value::Array(arr) => !arr.is_empty(),
            Value::Object(_) | Value::Func(_) | Value::Resource(_) => true,
        }
    }

    /// Whether the value can be iterated as a sequence.
    pub fn is_sequence(&self) -> bool {
        match self {
            Value::Array(_) => true,
            Value::Object(obj) => obj.is_traversable(),
            _ => false,
        }
    }

    /// Whether the value can be invoked.
    pub fn is_callable(&self) -> bool {
        match self {
            Value::Func(_) => true,
            Value::Object(obj) => obj.invoker().is_some(),
            _ => false,
        }
    }

    /// The entries of a sequence-shaped value: an array, or a traversable
    /// object's properties.
    pub fn as_entries(&self) -> Option<&Array> {
        match self {
            Value::Array(arr) => Some(arr),
            Value::Object(obj) if obj.is_traversable() => Some(obj.props()),
            _ => None,
        }
    }

    /// Looks up a field of an array or an object's properties.
    pub fn get(&self, key: &Key) -> Option<&Value> {
        match self {
            Value::Array(arr) => arr.get(key),
            Value::Object(obj) => obj.props().get(key),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Func(a), Value::Func(b)) => a.ptr_eq(b),
            (Value::Resource(a), Value::Resource(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(int) => write!(f, "{int}"),
            Value::Float(float) => write!(f, "{float:?}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::Array(arr) => fmt::Debug::fmt(arr, f),
            Value::Object(obj) => fmt::Debug::fmt(obj, f),
            Value::Func(func) => fmt::Debug::fmt(func, f),
            Value::Resource(res) => write!(f, "resource({})#{}", res.kind(), res.identity()),
        }
    }
}

macro_rules! from_impls {
    ($($ty:ty => |$v:ident| $conv:expr;)*) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from($v: $ty) -> Self {
                    $conv
                }
            }
        )*
    };
}

from_impls! {
    bool => |b| Value::Bool(b);
    i32 => |int| Value::Int(int.into());
    i64 => |int| Value::Int(int);
    usize => |int| Value::Int(int as i64);
    f64 => |float| Value::Float(float);
    &str => |s| Value::Str(s.to_owned());
    String => |s| Value::Str(s);
    Array => |arr| Value::Array(arr);
    ObjectRef => |obj| Value::Object(obj);
    Func => |func| Value::Func(func);
    Resource => |res| Value::Resource(res);
}

impl<T: Into<Value>> From<Option<T>> for Value {
    #[inline]
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;

    #[test]
    fn strict_equality() {
        assert_eq!(Value::from(1), Value::Int(1));
        assert_ne!(Value::from(1), Value::from(1.0));
        assert_ne!(Value::from(1), Value::from("1"));
        assert_eq!(Value::from(-0.0), Value::from(0.0));
        assert_ne!(Value::from(f64::NAN), Value::from(f64::NAN));
        assert_eq!(Value::from(array![1, "a"]), Value::from(array![1, "a"]));
        assert_ne!(Value::from(array![1, 2]), Value::from(array![2, 1]));

        let f = Func::new(|_| Value::Null);
        assert_eq!(Value::from(f.clone()), Value::from(f));
        assert_ne!(
            Value::from(Func::new(|_| Value::Null)),
            Value::from(Func::new(|_| Value::Null))
        );
    }

    #[test]
    fn truthiness() {
        for falsy in [
            Value::Null,
            Value::from(false),
            Value::from(0),
            Value::from(0.0),
            Value::from(""),
            Value::from("0"),
            Value::from(Array::new()),
        ] {
            assert!(!falsy.truthy(), "{falsy:?} should be falsy");
        }
        assert!(Value::from("0.0").truthy());
        assert!(Value::from(array![0]).truthy());
    }

    #[test]
    fn shapes() {
        let both = ObjectRef::builder("Both")
            .traversable()
            .invocable(Func::new(|_| Value::Null))
            .build();
        let both = Value::from(both);

        assert!(both.is_sequence() && both.is_callable());
        assert!(Value::from(array![]).is_sequence());
        assert!(!Value::from("strlen").is_callable());
    }
}
