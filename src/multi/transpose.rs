use super::pulls;
use crate::error::{Error, Result};
use crate::log::trace;
use crate::source::Source;
use crate::value::{Array, Entry, Value};

/// Turns rows into columns. Each row is read in full and its keys dropped.
/// There are as many columns as the shortest row has values; the extra
/// values of longer rows are discarded.
///
/// # Examples
///
/// ```
/// use keyseq::{array, transpose, Source};
///
/// let columns = transpose([Source::from(array![1, 2, 3]), Source::from(array!["a", "b"])]);
/// assert_eq!(columns, array![array![1, "a"], array![2, "b"]]);
/// ```
pub fn transpose(rows: impl IntoIterator<Item = Source>) -> Array {
    let mut rows: Vec<_> = pulls(rows)
        .into_iter()
        .map(|row| row.map(|(_, value)| value).collect::<Vec<Value>>().into_iter())
        .collect();

    let width = rows.iter().map(ExactSizeIterator::len).min().unwrap_or(0);
    trace!(rows = rows.len(), width, "transposing");

    Array::from_values(
        (0..width).map(|_| Array::from_values(rows.iter_mut().filter_map(Iterator::next))),
    )
}

/// [`transpose`] over the rows held as values of `seq`.
///
/// Fails with [`InvalidArgument`](crate::Error::InvalidArgument) at the
/// first value that is not itself a sequence.
pub fn unzip(seq: impl IntoIterator<Item = Entry>) -> Result<Array> {
    let rows = seq
        .into_iter()
        .map(|(_, value)| {
            let kind = value.kind();
            Source::from_value(value)
                .ok_or_else(|| Error::invalid("unzip", format!("expected every element to be a row, got {kind}")))
        })
        .collect::<Result<Vec<Source>>>()?;
    Ok(transpose(rows))
}
