use std::iter::FusedIterator;

use super::core::Sequence;
use super::traits::SequenceCore;

/// An iterator over the elements of a sequence, in index order.
///
/// Cons cells are followed one at a time and contiguous runs are handed
/// out as slices, so iterating never recurses no matter how the sequence
/// was built.
pub struct Iter<'a, T> {
    run: std::slice::Iter<'a, T>,
    rest: Option<&'a Sequence<T>>,
    len: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(sequence: &'a Sequence<T>) -> Self {
        Iter {
            run: <&[T]>::default().iter(),
            rest: Some(sequence),
            len: sequence.len(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            if let Some(item) = self.run.next() {
                self.len -= 1;
                return Some(item);
            }
            match self.rest.take()? {
                Sequence::Empty(inner) => self.run = inner.iter(),
                Sequence::One(inner) => self.run = inner.iter(),
                Sequence::Many(inner) => self.run = inner.iter(),
                Sequence::Cons(inner) => {
                    self.rest = Some(inner.tail());
                    self.len -= 1;
                    return Some(inner.head());
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            run: self.run.clone(),
            rest: self.rest,
            len: self.len,
        }
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
