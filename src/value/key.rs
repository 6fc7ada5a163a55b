use std::fmt;

use super::Value;
use crate::error::{Error, Result};

/// A sequence key.
///
/// Strings that spell a canonical decimal integer (`"7"`, `"-3"`, but not
/// `"07"` or `"+3"`) are stored as [`Key::Int`], so `"7"` and `7` name the
/// same slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Int(i64),
    Str(String),
}

/// A key/value pair flowing through every operator.
pub type Entry = (Key, Value);

impl Key {
    /// Casts a classifier/grouper/keyer result into a key.
    ///
    /// `op` names the operation in the error raised for values that cannot
    /// index a map (arrays, objects, callables, resources, non-finite floats).
    pub fn from_value(op: &'static str, value: &Value) -> Result<Key> {
        match value {
            Value::Int(int) => Ok(Key::Int(*int)),
            Value::Str(s) => Ok(Key::from(s.as_str())),
            Value::Bool(b) => Ok(Key::Int(i64::from(*b))),
            Value::Null => Ok(Key::Str(String::new())),
            Value::Float(float) if float.is_finite() => Ok(Key::Int(float.trunc() as i64)),
            other => Err(Error::invalid(
                op,
                format!("expected a value usable as a key, got {}", other.kind()),
            )),
        }
    }

    /// Returns the integer form if this is an integer key.
    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(int) => Some(*int),
            Key::Str(_) => None,
        }
    }
}

fn parse_canonical_int(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    let canonical = match digits.as_bytes() {
        [] => false,
        [b'0'] => !s.starts_with('-'),
        [first, rest @ ..] => {
            (b'1'..=b'9').contains(first) && rest.iter().all(u8::is_ascii_digit)
        }
    };

    if canonical { s.parse().ok() } else { None }
}

impl From<i64> for Key {
    #[inline]
    fn from(int: i64) -> Self {
        Key::Int(int)
    }
}

impl From<i32> for Key {
    #[inline]
    fn from(int: i32) -> Self {
        Key::Int(int.into())
    }
}

impl From<usize> for Key {
    #[inline]
    fn from(index: usize) -> Self {
        Key::Int(index as i64)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        match parse_canonical_int(s) {
            Some(int) => Key::Int(int),
            None => Key::Str(s.to_owned()),
        }
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        match parse_canonical_int(&s) {
            Some(int) => Key::Int(int),
            None => Key::Str(s),
        }
    }
}

impl From<Key> for Value {
    #[inline]
    fn from(key: Key) -> Self {
        match key {
            Key::Int(int) => Value::Int(int),
            Key::Str(s) => Value::Str(s),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(int) => write!(f, "{int}"),
            Key::Str(s) => write!(f, "{s:?}"),
        }
    }
}
