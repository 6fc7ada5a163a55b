use super::Intersection;
use crate::value::Entry;

/// An adaptor over the entries of one sequence whose values do not occur in
/// another.
///
/// This `struct` is created by [`difference()`].
pub type Difference<A, B> = Intersection<A, B>;

/// Entries of `a` whose values do not occur in `b`, with `a`'s keys.
/// Repeated values of `a` collapse to their first occurrence.
pub fn difference<A, B>(a: A, b: B) -> Difference<A::IntoIter, B::IntoIter>
where
    A: IntoIterator<Item = Entry>,
    B: IntoIterator<Item = Entry>,
{
    Intersection::new("difference", a.into_iter(), b.into_iter(), false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;
    use crate::iter::to_array;

    #[test]
    fn keeps_left_keys_and_collapses_repeats() {
        let a = array! { "p" => 1, "q" => 2, "r" => 1, "s" => 4 };
        assert_eq!(to_array(difference(&a, array![2])), array! { "p" => 1, "s" => 4 });
    }
}
