//! Canonical equality identifiers.
//!
//! [`canonical`] maps a value to a [`HashId`] such that two strictly equal
//! values always get the same identifier and unequal values get different
//! ones, with two deliberate exceptions inherited from float semantics:
//! every NaN shares one identifier, and `-0.0` shares `0.0`'s. Identifiers
//! are self-delimiting so nested arrays cannot collide by concatenation.

use std::fmt::{self, Write as _};

use crate::value::{Key, Value};

/// The equality-class token of a hashable value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HashId(String);

impl HashId {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HashId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonicalizes `value`, or returns `None` if it is unhashable.
///
/// Functions and resources are unhashable, and so is any array (or object
/// property set, for traversal purposes) holding one at any depth. Objects
/// hash by identity, so only the same instance matches.
///
/// # Examples
///
/// ```
/// use keyseq::{array, hash::canonical, Func, Value};
///
/// assert_eq!(canonical(&Value::from(1)), canonical(&Value::from(1)));
/// assert_ne!(canonical(&Value::from(1)), canonical(&Value::from("1")));
/// assert_eq!(canonical(&Value::from(f64::NAN)), canonical(&Value::from(-f64::NAN)));
/// assert!(canonical(&Value::from(array![1, Func::new(|_| Value::Null)])).is_none());
/// ```
pub fn canonical(value: &Value) -> Option<HashId> {
    let mut out = String::new();
    write_value(&mut out, value)?;
    Some(HashId(out))
}

fn write_value(out: &mut String, value: &Value) -> Option<()> {
    // Writing into a `String` cannot fail.
    let _ = match value {
        Value::Null => out.write_str("n"),
        Value::Bool(b) => write!(out, "b:{}", u8::from(*b)),
        Value::Int(int) => write!(out, "i:{int}"),
        Value::Float(float) if float.is_nan() => out.write_str("f:nan"),
        Value::Float(float) if float.is_infinite() => {
            out.write_str(if *float > 0.0 { "f:+inf" } else { "f:-inf" })
        }
        // `+ 0.0` turns -0.0 into 0.0 and leaves everything else alone.
        Value::Float(float) => write!(out, "f:{:?}", float + 0.0),
        Value::Str(s) => write!(out, "s{}:{s}", s.len()),
        Value::Object(obj) => write!(out, "o:{}", obj.identity()),
        Value::Array(arr) => {
            let _ = write!(out, "a{}[", arr.len());
            for (key, item) in arr.iter() {
                write_key(out, key);
                out.push_str("=>");
                write_value(out, item)?;
                out.push(';');
            }
            out.write_str("]")
        }
        Value::Func(_) | Value::Resource(_) => return None,
    };
    Some(())
}

fn write_key(out: &mut String, key: &Key) {
    let _ = match key {
        Key::Int(int) => write!(out, "i:{int}"),
        Key::Str(s) => write!(out, "s{}:{s}", s.len()),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;
    use crate::value::{ObjectRef, Resource};

    fn id(value: impl Into<Value>) -> Option<String> {
        canonical(&value.into()).map(|id| id.as_str().to_owned())
    }

    #[test]
    fn identifier_formats() {
        assert_eq!(id(Value::Null).as_deref(), Some("n"));
        assert_eq!(id(true).as_deref(), Some("b:1"));
        assert_eq!(id(-7).as_deref(), Some("i:-7"));
        assert_eq!(id(-0.0), id(0.0));
        assert_eq!(id(f64::NEG_INFINITY).as_deref(), Some("f:-inf"));
        assert_eq!(id("ab").as_deref(), Some("s2:ab"));
        assert_eq!(id(array!["a"]).as_deref(), Some("a1[i:0=>s1:a;]"));
    }

    #[test]
    fn kinds_stay_apart() {
        assert_ne!(id(1), id(1.0));
        assert_ne!(id(1), id("1"));
        assert_ne!(id(Value::Null), id(""));
        assert_ne!(id(array![1, 2]), id(array![2, 1]));
        assert_ne!(id(array! { "a" => 1 }), id(array! { "b" => 1 }));
    }

    #[test]
    fn objects_hash_by_identity() {
        let a = ObjectRef::new("Point", array![1, 2]);
        let b = ObjectRef::new("Point", array![1, 2]);
        assert_eq!(id(a.clone()), id(a.clone()));
        assert_ne!(id(a), id(b));
    }

    #[test]
    fn resources_are_unhashable() {
        assert_eq!(id(Resource::new("stream")), None);
        assert_eq!(id(array![array![Resource::new("stream")]]), None);
    }
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn strictly_equal_scalars_share_ids(a in any::<i64>(), b in any::<i64>(), s in ".{0,8}") {
            prop_assert_eq!(canonical(&Value::from(a)) == canonical(&Value::from(b)), a == b);
            prop_assert_eq!(canonical(&Value::from(s.as_str())), canonical(&Value::from(s.clone())));
        }
    }
}
