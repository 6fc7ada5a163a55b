use std::cmp::Ordering;

use super::{Array, Number, Value};

impl Value {
    /// The default comparison used by `min`, `max`, `sort` and `sort_by`.
    ///
    /// Numbers and numeric strings compare numerically, so `"10"` ranks above
    /// `9`. Null and booleans compare by truthiness. A number against a
    /// non-numeric string compares the number's decimal text. Otherwise
    /// kinds rank `null/bool < numbers < strings < arrays < objects <
    /// functions < resources`.
    ///
    /// This is not a consistent order: NaN is `Equal` to every number,
    /// `true` is `Equal` to both `5` and `7`, and mixing numeric with
    /// non-numeric strings can form cycles. It is fine for picking an
    /// extreme; use [`total_cmp`](Value::total_cmp) to sort.
    pub fn loose_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Null | Value::Bool(_), _) | (_, Value::Null | Value::Bool(_)) => {
                self.truthy().cmp(&other.truthy())
            }
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Str(a), Value::Str(b)) => match (self.as_number(), other.as_number()) {
                (Some(x), Some(y)) => cmp_numbers(x, y),
                _ => a.as_bytes().cmp(b.as_bytes()),
            },
            (Value::Int(_) | Value::Float(_), Value::Str(s)) => match other.as_number() {
                Some(y) => cmp_numbers(self.coerce_number(), y),
                None => number_text(self).as_bytes().cmp(s.as_bytes()),
            },
            (Value::Str(s), Value::Int(_) | Value::Float(_)) => match self.as_number() {
                Some(x) => cmp_numbers(x, other.coerce_number()),
                None => s.as_bytes().cmp(number_text(other).as_bytes()),
            },
            (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
                cmp_numbers(self.coerce_number(), other.coerce_number())
            }
            (Value::Array(a), Value::Array(b)) => cmp_arrays(a, b),
            (Value::Object(a), Value::Object(b)) => cmp_arrays(a.props(), b.props()),
            (Value::Resource(a), Value::Resource(b)) => a.identity().cmp(&b.identity()),
            _ => rank(self).cmp(&rank(other)),
        }
    }
}

impl Value {
    /// A total order over values, used by `sort` and `sort_by`.
    ///
    /// Values fall into classes ranked `null/bool < numbers < strings <
    /// arrays < objects < functions < resources`, where numbers include
    /// numeric strings. Within a class:
    ///
    /// - null and booleans compare by truthiness;
    /// - numbers compare exactly by value, with every NaN equal to each
    ///   other and after every other number;
    /// - strings compare byte-wise;
    /// - arrays compare by length, then element-wise;
    /// - objects compare by their properties, resources by identity.
    ///
    /// It agrees with [`loose_cmp`](Value::loose_cmp) wherever that one is
    /// consistent.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cmp::Ordering::*;
    /// use keyseq::Value;
    ///
    /// assert_eq!(Value::from(f64::NAN).total_cmp(&Value::from(i64::MAX)), Greater);
    /// assert_eq!(Value::from(true).total_cmp(&Value::from(0)), Less);
    /// assert_eq!(Value::from("10").total_cmp(&Value::from(9.5)), Greater);
    /// assert_eq!(Value::from(1_000).total_cmp(&Value::from("1a")), Less);
    /// ```
    pub fn total_cmp(&self, other: &Value) -> Ordering {
        let (a, b) = (SortClass::of(self), SortClass::of(other));
        a.rank().cmp(&b.rank()).then_with(|| match (a, b) {
            (SortClass::Truth(x), SortClass::Truth(y)) => x.cmp(&y),
            (SortClass::Number(x), SortClass::Number(y)) => total_cmp_numbers(x, y),
            (SortClass::Text(x), SortClass::Text(y)) => x.as_bytes().cmp(y.as_bytes()),
            (SortClass::List(x), SortClass::List(y)) | (SortClass::Object(x), SortClass::Object(y)) => {
                total_cmp_arrays(x, y)
            }
            (SortClass::Resource(x), SortClass::Resource(y)) => x.cmp(&y),
            _ => Ordering::Equal,
        })
    }
}

#[derive(Clone, Copy)]
enum SortClass<'a> {
    Truth(bool),
    Number(Number),
    Text(&'a str),
    List(&'a Array),
    Object(&'a Array),
    Func,
    Resource(u64),
}

impl<'a> SortClass<'a> {
    fn of(value: &'a Value) -> Self {
        match value {
            Value::Null | Value::Bool(_) => SortClass::Truth(value.truthy()),
            Value::Int(int) => SortClass::Number(Number::Int(*int)),
            Value::Float(float) => SortClass::Number(Number::Float(*float)),
            Value::Str(s) => value.as_number().map_or(SortClass::Text(s), SortClass::Number),
            Value::Array(arr) => SortClass::List(arr),
            Value::Object(obj) => SortClass::Object(obj.props()),
            Value::Func(_) => SortClass::Func,
            Value::Resource(res) => SortClass::Resource(res.identity()),
        }
    }

    fn rank(self) -> u8 {
        match self {
            SortClass::Truth(_) => 0,
            SortClass::Number(_) => 1,
            SortClass::Text(_) => 2,
            SortClass::List(_) => 3,
            SortClass::Object(_) => 4,
            SortClass::Func => 5,
            SortClass::Resource(_) => 6,
        }
    }
}

fn total_cmp_numbers(x: Number, y: Number) -> Ordering {
    match (x, y) {
        (Number::Int(a), Number::Int(b)) => a.cmp(&b),
        (Number::Int(a), Number::Float(b)) => cmp_int_float(a, b),
        (Number::Float(a), Number::Int(b)) => cmp_int_float(b, a).reverse(),
        (Number::Float(a), Number::Float(b)) => match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            // -0.0 and 0.0 stay equal.
            (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        },
    }
}

// Exact: `int as f64` would round above 2^53.
fn cmp_int_float(int: i64, float: f64) -> Ordering {
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if float.is_nan() || float >= LIMIT {
        Ordering::Less
    } else if float < -LIMIT {
        Ordering::Greater
    } else {
        let whole = float.trunc();
        int.cmp(&(whole as i64))
            .then_with(|| 0.0_f64.partial_cmp(&(float - whole)).unwrap_or(Ordering::Equal))
    }
}

fn total_cmp_arrays(a: &Array, b: &Array) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| {
        a.values()
            .zip(b.values())
            .map(|(x, y)| x.total_cmp(y))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}

fn cmp_numbers(x: Number, y: Number) -> Ordering {
    match (x, y) {
        (Number::Int(a), Number::Int(b)) => a.cmp(&b),
        (x, y) => x.as_f64().partial_cmp(&y.as_f64()).unwrap_or(Ordering::Equal),
    }
}

fn number_text(value: &Value) -> String {
    match value {
        Value::Int(int) => int.to_string(),
        Value::Float(float) => float.to_string(),
        _ => String::new(),
    }
}

fn cmp_arrays(a: &Array, b: &Array) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| {
        a.values()
            .zip(b.values())
            .map(|(x, y)| x.loose_cmp(y))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}

fn rank(value: &Value) -> u8 {
    match value {
        Value::Null | Value::Bool(_) => 0,
        Value::Int(_) | Value::Float(_) => 1,
        Value::Str(_) => 2,
        Value::Array(_) => 3,
        Value::Object(_) => 4,
        Value::Func(_) => 5,
        Value::Resource(_) => 6,
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering::*;

    use super::*;
    use crate::array;

    #[test]
    fn numeric_strings_compare_numerically() {
        assert_eq!(Value::from("10").loose_cmp(&Value::from(9)), Greater);
        assert_eq!(Value::from("10").loose_cmp(&Value::from("9")), Greater);
        assert_eq!(Value::from(2.5).loose_cmp(&Value::from(2)), Greater);
        assert_eq!(Value::from("2").loose_cmp(&Value::from(2)), Equal);
    }

    #[test]
    fn mixed_kinds() {
        assert_eq!(Value::from("abc").loose_cmp(&Value::from("abd")), Less);
        assert_eq!(Value::from(5).loose_cmp(&Value::from("a")), Less);
        assert_eq!(Value::Null.loose_cmp(&Value::from(0)), Equal);
        assert_eq!(Value::Bool(true).loose_cmp(&Value::from(0)), Greater);
        assert_eq!(Value::from(array![1, 2]).loose_cmp(&Value::from(array![3])), Greater);
        assert_eq!(Value::from(array![1]).loose_cmp(&Value::from("z")), Greater);
        assert_eq!(Value::Float(f64::NAN).loose_cmp(&Value::from(1)), Equal);
    }

    #[test]
    fn total_order_breaks_loose_cycles() {
        assert_eq!(Value::Float(f64::NAN).total_cmp(&Value::Float(f64::NAN)), Equal);
        assert_eq!(Value::Float(f64::NAN).total_cmp(&Value::from(1)), Greater);
        assert_eq!(Value::Bool(true).total_cmp(&Value::from(-5)), Less);
        assert_eq!(Value::from("2").total_cmp(&Value::from("10")), Less);
        assert_eq!(Value::from("10").total_cmp(&Value::from("1a")), Less);
        assert_eq!(Value::from("2").total_cmp(&Value::from("1a")), Less);
        assert_eq!(Value::from(-0.0).total_cmp(&Value::from(0)), Equal);
        assert_eq!(Value::from(i64::MAX).total_cmp(&Value::from(9_223_372_036_854_775_807.0)), Less);
    }
}

#[cfg(test)]
mod proptests {
    use std::cmp::Ordering::*;

    use proptest::prelude::*;

    use super::*;

    fn any_scalar() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            Just(Value::Float(f64::NAN)),
            any::<bool>().prop_map(Value::from),
            any::<i64>().prop_map(Value::from),
            any::<f64>().prop_map(Value::from),
            "[0-9a.-]{0,3}".prop_map(Value::from),
        ]
    }

    proptest! {
        #[test]
        fn total_cmp_is_a_total_order(a in any_scalar(), b in any_scalar(), c in any_scalar()) {
            prop_assert_eq!(a.total_cmp(&b), b.total_cmp(&a).reverse());
            if a.total_cmp(&b) != Greater && b.total_cmp(&c) != Greater {
                prop_assert_ne!(a.total_cmp(&c), Greater);
            }
        }
    }
}
