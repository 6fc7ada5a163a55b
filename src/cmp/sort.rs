use std::cmp::Ordering;

use itertools::Itertools;

use crate::error::Result;
use crate::value::{Array, Entry, Key, Value};

/// Sorts `seq` ascending under [`Value::total_cmp`], keeping each value's
/// key. Stable.
///
/// # Examples
///
/// ```
/// use keyseq::{array, sort};
///
/// assert_eq!(sort(array! { "a" => 3, "b" => "1", "c" => 2 }), array! { "b" => "1", "c" => 2, "a" => 3 });
/// ```
pub fn sort(seq: impl IntoIterator<Item = Entry>) -> Array {
    seq.into_iter()
        .sorted_by(|(_, a), (_, b)| a.total_cmp(b))
        .collect()
}

/// Sorts `seq` ascending by what `comparable` returns for each value under
/// [`Value::total_cmp`], keeping keys. Stable: entries with equal comparables keep input order.
///
/// `comparable` must return something usable as a key (a string, number,
/// bool or null). Anything else fails with
/// [`InvalidArgument`](crate::Error::InvalidArgument) when that element is
/// reached. Comparables are computed once per element.
pub fn sort_by<F>(seq: impl IntoIterator<Item = Entry>, mut comparable: F) -> Result<Array>
where
    F: FnMut(&Value) -> Value,
{
    let decorated: Vec<(Value, Entry)> = seq
        .into_iter()
        .map(|entry| {
            let by = comparable(&entry.1);
            Key::from_value("sort_by", &by)?;
            Ok((by, entry))
        })
        .collect::<Result<_>>()?;

    Ok(decorated
        .into_iter()
        .sorted_by(|(a, _), (b, _)| a.total_cmp(b))
        .map(|(_, entry)| entry)
        .collect())
}

/// Sorts `seq` with a chain of comparators, keeping keys. Stable.
///
/// Comparators are tried in order and the first one that does not report
/// `Equal` decides. With no comparators the input order is kept.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use keyseq::{array, sort_with, Key, Value};
///
/// let people = array![
///     array! { "name" => "bo", "age" => 30 },
///     array! { "name" => "al", "age" => 25 },
///     array! { "name" => "cy", "age" => 25 },
/// ];
/// let field = |v: &Value, f: &str| v.get(&Key::from(f)).cloned().unwrap_or_default();
/// let by_age = |a: &Value, b: &Value| field(a, "age").loose_cmp(&field(b, "age"));
/// let by_name_desc = |a: &Value, b: &Value| field(b, "name").loose_cmp(&field(a, "name"));
///
/// let chain: [&dyn Fn(&Value, &Value) -> Ordering; 2] = [&by_age, &by_name_desc];
/// let sorted = sort_with(&people, chain);
/// let names: Vec<_> = sorted.values().map(|p| field(p, "name")).collect();
/// assert_eq!(names, [Value::from("cy"), Value::from("al"), Value::from("bo")]);
/// ```
pub fn sort_with<C>(seq: impl IntoIterator<Item = Entry>, comparators: impl IntoIterator<Item = C>) -> Array
where
    C: Fn(&Value, &Value) -> Ordering,
{
    let comparators: Vec<C> = comparators.into_iter().collect();
    seq.into_iter()
        .sorted_by(|(_, a), (_, b)| {
            comparators
                .iter()
                .map(|cmp| cmp(a, b))
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal)
        })
        .collect()
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;
    use crate::test_utils::values;

    fn mixed() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            Just(Value::Float(f64::NAN)),
            any::<bool>().prop_map(Value::from),
            (-20_i64..20).prop_map(Value::from),
            (-20.0_f64..20.0).prop_map(Value::from),
            "[0-9a]{0,3}".prop_map(Value::from),
        ]
    }

    fn key_typed() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::from),
            (-20_i64..20).prop_map(Value::from),
            "[0-9a]{0,3}".prop_map(Value::from),
        ]
    }

    proptest! {
        #[test]
        fn sort_orders_mixed_input(items in prop::collection::vec(mixed(), 0..300)) {
            let sorted = values(sort(Array::from_values(items.clone())));
            prop_assert_eq!(sorted.len(), items.len());
            prop_assert!(sorted.windows(2).all(|w| w[0].total_cmp(&w[1]).is_le()));
        }

        #[test]
        fn sort_by_accepts_any_key_typed_comparable(
            items in prop::collection::vec(key_typed(), 0..300),
        ) {
            let sorted = sort_by(Array::from_values(items.clone()), Value::clone);
            prop_assert_eq!(sorted.map(|arr| arr.len()), Ok(items.len()));
        }
    }
}
