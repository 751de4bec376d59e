use crate::sequence::traits::SequenceCore;

#[derive(Debug, Clone)]
pub struct One<T> {
    item: T,
}

impl<T> One<T> {
    pub(crate) fn item(&self) -> &T {
        &self.item
    }
}

impl<T> From<T> for One<T> {
    fn from(item: T) -> Self {
        One { item }
    }
}

impl<'a, T: 'a> SequenceCore<'a, T, std::slice::Iter<'a, T>> for One<T> {
    #[inline]
    fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    fn len(&self) -> usize {
        1
    }

    #[inline]
    fn get(&'a self, index: usize) -> Option<&'a T> {
        if index == 0 {
            Some(&self.item)
        } else {
            None
        }
    }

    #[inline]
    fn iter(&'a self) -> std::slice::Iter<'a, T> {
        std::slice::from_ref(&self.item).iter()
    }
}
