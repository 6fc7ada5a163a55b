use super::Value;

/// A numeric reading of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(int) => int as f64,
            Number::Float(float) => float,
        }
    }

    /// Adds two numbers, staying integral until overflow or a float shows up.
    pub fn add(self, other: Number) -> Number {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a
                .checked_add(b)
                .map_or_else(|| Number::Float(a as f64 + b as f64), Number::Int),
            (a, b) => Number::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl From<Number> for Value {
    fn from(num: Number) -> Self {
        match num {
            Number::Int(int) => Value::Int(int),
            Number::Float(float) => Value::Float(float),
        }
    }
}

/// Parses a numeric-looking string: optional surrounding whitespace, an
/// optional sign, digits with an optional fraction and exponent.
pub(crate) fn parse_numeric(s: &str) -> Option<Number> {
    let trimmed = s.trim_matches(|c: char| c.is_ascii_whitespace());
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);

    // Rust's float parser also takes "inf", "NaN" and friends.
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        || unsigned.contains(|c: char| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
    {
        return None;
    }

    if let Ok(int) = trimmed.parse::<i64>() {
        return Some(Number::Int(int));
    }
    trimmed.parse::<f64>().ok().map(Number::Float)
}

impl Value {
    /// Reads this value as a number if it is one, or a numeric-looking string.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Int(int) => Some(Number::Int(*int)),
            Value::Float(float) => Some(Number::Float(*float)),
            Value::Str(s) => parse_numeric(s),
            _ => None,
        }
    }

    /// Coercion used by `sum` and `average`.
    ///
    /// | value | number |
    /// |---|---|
    /// | `true` | 1 |
    /// | `false`, `null` | 0 |
    /// | int, float | as-is |
    /// | numeric string | parsed |
    /// | anything else | 0 |
    pub fn coerce_number(&self) -> Number {
        match self {
            Value::Bool(true) => Number::Int(1),
            other => other.as_number().unwrap_or(Number::Int(0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;

    #[test]
    fn coercion_table() {
        assert_eq!(Value::Bool(true).coerce_number(), Number::Int(1));
        assert_eq!(Value::Bool(false).coerce_number(), Number::Int(0));
        assert_eq!(Value::Null.coerce_number(), Number::Int(0));
        assert_eq!(Value::Int(-4).coerce_number(), Number::Int(-4));
        assert_eq!(Value::Float(2.5).coerce_number(), Number::Float(2.5));
        assert_eq!(Value::from("3").coerce_number(), Number::Int(3));
        assert_eq!(Value::from(" 1.5e1 ").coerce_number(), Number::Float(15.0));
        assert_eq!(Value::from("12abc").coerce_number(), Number::Int(0));
        assert_eq!(Value::from("inf").coerce_number(), Number::Int(0));
        assert_eq!(Value::from(array![1]).coerce_number(), Number::Int(0));
    }

    #[test]
    fn integer_overflow_promotes() {
        let sum = Number::Int(i64::MAX).add(Number::Int(1));
        assert_eq!(sum, Number::Float(i64::MAX as f64 + 1.0));
    }
}
