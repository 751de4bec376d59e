// creation.rs contains the functions that create and derive a Sequence
// compare.rs contains the structural comparisons

use crate::error;

use super::{
    iter::Iter,
    traits::SequenceCore,
    variant::{Cons, Empty, Many, One},
};

/// A persistent, ordered, finite sequence of elements.
///
/// A sequence never changes once constructed. Every derived sequence
/// (by prepending, taking a suffix, mapping...) is a new value that may
/// share storage with the sequence it was derived from.
///
/// Which variant holds the elements is not observable: equality, hashing,
/// ordering and rendering only look at the elements, in order.
#[derive(Clone)]
pub enum Sequence<T> {
    Empty(Empty<T>),
    One(One<T>),
    Many(Many<T>),
    Cons(Cons<T>),
}

// sequences are handed across threads without synchronization
static_assertions::assert_impl_all!(Sequence<i64>: Send, Sync);
static_assertions::assert_impl_all!(Sequence<String>: Send, Sync);

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::Empty(Empty::new())
    }
}

impl<T> Sequence<T> {
    /// Check whether the sequence is empty
    pub fn is_empty(&self) -> bool {
        match self {
            Sequence::Empty(inner) => inner.is_empty(),
            Sequence::One(inner) => inner.is_empty(),
            Sequence::Many(inner) => inner.is_empty(),
            Sequence::Cons(inner) => inner.is_empty(),
        }
    }

    /// Get the amount of elements in the sequence
    pub fn len(&self) -> usize {
        match self {
            Sequence::Empty(inner) => inner.len(),
            Sequence::One(inner) => inner.len(),
            Sequence::Many(inner) => inner.len(),
            Sequence::Cons(inner) => inner.len(),
        }
    }

    /// Get the element at `index`.
    ///
    /// Fails with [`error::Error::IndexOutOfRange`] if `index` is not below
    /// the length.
    pub fn get(&self, index: usize) -> error::Result<&T> {
        let item = match self {
            Sequence::Empty(inner) => inner.get(index),
            Sequence::One(inner) => inner.get(index),
            Sequence::Many(inner) => inner.get(index),
            Sequence::Cons(inner) => inner.get(index),
        };
        item.ok_or(error::Error::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Iterate over the elements in index order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
}
