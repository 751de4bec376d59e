use std::sync::Arc;

use crate::sequence::traits::SequenceCore;

/// A run of elements stored contiguously.
///
/// The buffer is shared between every sequence derived from it; a suffix
/// only moves `start` forward. A `Many` is never empty.
#[derive(Debug, Clone)]
pub struct Many<T> {
    items: Arc<[T]>,
    start: usize,
}

impl<T> Many<T> {
    pub(crate) fn as_slice(&self) -> &[T] {
        &self.items[self.start..]
    }

    /// The elements from `offset` onwards, sharing the buffer.
    ///
    /// `offset` must be below the length, so that the result stays
    /// non-empty.
    pub(crate) fn skip(&self, offset: usize) -> Self {
        debug_assert!(offset < self.as_slice().len());
        Many {
            items: self.items.clone(),
            start: self.start + offset,
        }
    }

    #[cfg(test)]
    pub(crate) fn shares_buffer_with(&self, other: &Many<T>) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl<T> From<Vec<T>> for Many<T> {
    fn from(items: Vec<T>) -> Self {
        debug_assert!(!items.is_empty());
        Many {
            items: items.into(),
            start: 0,
        }
    }
}

impl<'a, T: 'a> SequenceCore<'a, T, std::slice::Iter<'a, T>> for Many<T> {
    #[inline]
    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn get(&'a self, index: usize) -> Option<&'a T> {
        self.as_slice().get(index)
    }

    #[inline]
    fn iter(&'a self) -> std::slice::Iter<'a, T> {
        self.as_slice().iter()
    }
}
