use std::collections::VecDeque;
use std::fmt;

use crate::error::{Error, Result};
use crate::value::{Array, Entry, Key, Value};

/// An adaptor emitting every run of `size` consecutive values as an array.
///
/// Windows are reindexed both inside and out. An input shorter than `size`
/// yields nothing.
///
/// This `struct` is created by [`aperture()`].
#[derive(Clone)]
pub struct Aperture<I> {
    iter: I,
    size: usize,
    window: VecDeque<Value>,
    index: usize,
}

impl<I> Iterator for Aperture<I>
where
    I: Iterator<Item = Entry>,
{
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        while self.window.len() < self.size {
            let (_, value) = self.iter.next()?;
            self.window.push_back(value);
        }

        let snapshot = Array::from_values(self.window.iter().cloned());
        self.window.pop_front();

        let key = Key::from(self.index);
        self.index += 1;
        Some((key, Value::from(snapshot)))
    }
}

impl<I: fmt::Debug> fmt::Debug for Aperture<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aperture")
            .field("iter", &self.iter)
            .field("size", &self.size)
            .field("window", &self.window)
            .finish()
    }
}

/// Sliding windows of `size` values over `seq`.
///
/// Fails immediately, before reading anything, if `size` is not positive.
///
/// # Examples
///
/// ```
/// use keyseq::{aperture, array, to_array};
///
/// let windows = aperture(array![1, 2, 3, 4], 2).unwrap();
/// assert_eq!(to_array(windows), array![array![1, 2], array![2, 3], array![3, 4]]);
/// ```
pub fn aperture<S>(seq: S, size: i64) -> Result<Aperture<S::IntoIter>>
where
    S: IntoIterator<Item = Entry>,
{
    let size = window_size(size)?;
    Ok(Aperture::new(seq.into_iter(), size))
}

impl<I> Aperture<I> {
    pub(crate) fn new(iter: I, size: usize) -> Self {
        Self {
            iter,
            size,
            window: VecDeque::with_capacity(size.min(1024)),
            index: 0,
        }
    }
}

pub(crate) fn window_size(size: i64) -> Result<usize> {
    usize::try_from(size)
        .ok()
        .filter(|&size| size > 0)
        .ok_or_else(|| Error::invalid("aperture", format!("size must be positive, got {size}")))
}
