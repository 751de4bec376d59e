use std::sync::Arc;

use crate::error;
use crate::sequence::core::Sequence;
use crate::sequence::iter::Iter;
use crate::sequence::traits::SequenceCore;

/// An element prepended to an existing sequence.
///
/// The tail is shared, not copied, so prepending is O(1) and `rest` of a
/// cons is just its tail.
#[derive(Clone)]
pub struct Cons<T> {
    cell: Arc<Cell<T>>,
}

struct Cell<T> {
    head: T,
    tail: Sequence<T>,
    len: usize,
}

impl<T> Cons<T> {
    pub(crate) fn new(head: T, tail: Sequence<T>) -> Self {
        let len = tail.len() + 1;
        Cons {
            cell: Arc::new(Cell { head, tail, len }),
        }
    }

    pub(crate) fn head(&self) -> &T {
        &self.cell.head
    }

    pub(crate) fn tail(&self) -> &Sequence<T> {
        &self.cell.tail
    }

    /// The elements from `index` onwards, for `0 < index < len`.
    ///
    /// Walks down the chain and shares whatever is left.
    pub(crate) fn suffix_from(&self, index: usize) -> error::Result<Sequence<T>>
    where
        T: Clone,
    {
        let mut current = self;
        let mut index = index;
        loop {
            index -= 1;
            let tail = current.tail();
            if index == 0 {
                return Ok(tail.clone());
            }
            match tail {
                Sequence::Cons(next) => current = next,
                other => return other.suffix_from(index),
            }
        }
    }
}

// Dropping a cell drops its tail, which for a long chain of cells would
// recurse once per element. Unlink the chain iteratively instead, stopping
// at the first cell that is still shared with another sequence.
impl<T> Drop for Cell<T> {
    fn drop(&mut self) {
        let mut tail = std::mem::take(&mut self.tail);
        while let Sequence::Cons(cons) = tail {
            match Arc::try_unwrap(cons.cell) {
                Ok(mut cell) => tail = std::mem::take(&mut cell.tail),
                Err(_) => break,
            }
        }
    }
}

impl<'a, T: 'a> SequenceCore<'a, T, std::iter::Chain<std::iter::Once<&'a T>, Iter<'a, T>>>
    for Cons<T>
{
    #[inline]
    fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    fn len(&self) -> usize {
        self.cell.len
    }

    fn get(&'a self, index: usize) -> Option<&'a T> {
        let mut current = self;
        let mut index = index;
        loop {
            if index == 0 {
                return Some(current.head());
            }
            index -= 1;
            match current.tail() {
                Sequence::Cons(next) => current = next,
                other => return other.get(index).ok(),
            }
        }
    }

    #[inline]
    fn iter(&'a self) -> std::iter::Chain<std::iter::Once<&'a T>, Iter<'a, T>> {
        std::iter::once(self.head()).chain(self.tail().iter())
    }
}
