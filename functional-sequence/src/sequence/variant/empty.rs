use std::marker::PhantomData;

use crate::sequence::traits::SequenceCore;

#[derive(Debug, Clone)]
pub struct Empty<T> {
    marker: PhantomData<T>,
}

impl<T> Empty<T> {
    pub(crate) fn new() -> Self {
        Empty {
            marker: PhantomData,
        }
    }
}

impl<'a, T: 'a> SequenceCore<'a, T, std::slice::Iter<'a, T>> for Empty<T> {
    #[inline]
    fn is_empty(&self) -> bool {
        true
    }

    #[inline]
    fn len(&self) -> usize {
        0
    }

    #[inline]
    fn get(&'a self, _index: usize) -> Option<&'a T> {
        None
    }

    #[inline]
    fn iter(&'a self) -> std::slice::Iter<'a, T> {
        <&[T]>::default().iter()
    }
}
