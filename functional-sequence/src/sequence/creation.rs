use crate::error;

use super::{
    core::Sequence,
    variant::{Cons, Empty},
};

impl<T> Sequence<T> {
    pub(crate) fn new(items: Vec<T>) -> Self {
        match items.len() {
            0 => Self::Empty(Empty::new()),
            1 => match items.into_iter().next() {
                Some(item) => Self::singleton(item),
                None => Self::empty(),
            },
            _ => Self::Many(items.into()),
        }
    }

    /// Construct an empty sequence
    pub fn empty() -> Self {
        Self::Empty(Empty::new())
    }

    /// Construct a sequence holding just `item`
    pub fn singleton(item: T) -> Self {
        Self::One(item.into())
    }

    /// Concatenate two sequences, `prefix` first.
    ///
    /// Neither input is disturbed. A single-element prefix is prepended in
    /// O(1) and shares all of `sequence`; longer prefixes are copied
    /// together with `sequence` into fresh storage.
    pub fn prepend_all(prefix: &Self, sequence: &Self) -> Self
    where
        T: Clone,
    {
        match (prefix, sequence) {
            (Self::Empty(_), sequence) => sequence.clone(),
            (prefix, Self::Empty(_)) => prefix.clone(),
            (Self::One(item), sequence) => {
                Self::Cons(Cons::new(item.item().clone(), sequence.clone()))
            }
            // handle other cases in less efficient way
            (prefix, sequence) => {
                let mut many = Vec::with_capacity(prefix.len() + sequence.len());
                many.extend(prefix.iter().cloned());
                many.extend(sequence.iter().cloned());
                Self::new(many)
            }
        }
    }

    /// The elements at indices `index..len`.
    ///
    /// Returns the empty sequence when `index == len` and fails with
    /// [`error::Error::IndexOutOfRange`] when `index > len`. The result
    /// shares storage with `self`.
    pub fn suffix_from(&self, index: usize) -> error::Result<Self>
    where
        T: Clone,
    {
        let len = self.len();
        if index > len {
            return Err(error::Error::IndexOutOfRange { index, len });
        }
        match self {
            _ if index == 0 => Ok(self.clone()),
            _ if index == len => Ok(Self::empty()),
            Self::Many(many) => Ok(Self::Many(many.skip(index))),
            Self::Cons(cons) => cons.suffix_from(index),
            // with at most one element, the guards above cover every index
            Self::Empty(_) | Self::One(_) => Ok(Self::empty()),
        }
    }

    /// Copy the elements out into a vector
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(items: [T; N]) -> Self {
        Self::new(items.into())
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_picks_variant_by_length() {
        assert!(matches!(Sequence::<i32>::new(vec![]), Sequence::Empty(_)));
        assert!(matches!(Sequence::new(vec![1]), Sequence::One(_)));
        assert!(matches!(Sequence::new(vec![1, 2]), Sequence::Many(_)));
    }

    #[test]
    fn test_prepend_one_shares_tail() {
        let tail = Sequence::from(vec![2, 3]);
        let sequence = Sequence::prepend_all(&Sequence::singleton(1), &tail);
        match &sequence {
            Sequence::Cons(cons) => match (cons.tail(), &tail) {
                (Sequence::Many(a), Sequence::Many(b)) => assert!(a.shares_buffer_with(b)),
                _ => panic!("tail should stay a Many"),
            },
            _ => panic!("expected a cons cell"),
        }
        assert_eq!(sequence.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_prepend_many_copies() {
        let sequence = Sequence::prepend_all(&Sequence::from([1, 2]), &Sequence::from([3, 4]));
        assert!(matches!(sequence, Sequence::Many(_)));
        assert_eq!(sequence.to_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_prepend_empty() {
        let sequence = Sequence::from([1, 2]);
        let empty = Sequence::empty();
        assert_eq!(Sequence::prepend_all(&empty, &sequence), sequence);
        assert_eq!(Sequence::prepend_all(&sequence, &empty), sequence);
        assert!(Sequence::<i32>::prepend_all(&empty, &empty).is_empty());
    }

    #[test]
    fn test_suffix_of_many_shares_buffer() {
        let sequence = Sequence::from(vec![1, 2, 3, 4]);
        let suffix = sequence.suffix_from(2).unwrap();
        match (&sequence, &suffix) {
            (Sequence::Many(a), Sequence::Many(b)) => assert!(a.shares_buffer_with(b)),
            _ => panic!("expected both to be Many"),
        }
        assert_eq!(suffix.to_vec(), vec![3, 4]);
        // the source is left alone
        assert_eq!(sequence.to_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_suffix_of_cons_chain_walks_into_tail() {
        let tail = Sequence::from(vec![3, 4, 5]);
        let sequence = Sequence::prepend_all(
            &Sequence::singleton(1),
            &Sequence::prepend_all(&Sequence::singleton(2), &tail),
        );
        assert_eq!(sequence.suffix_from(1).unwrap().to_vec(), vec![2, 3, 4, 5]);
        assert_eq!(sequence.suffix_from(2).unwrap(), tail);
        assert_eq!(sequence.suffix_from(4).unwrap().to_vec(), vec![5]);
        assert!(sequence.suffix_from(5).unwrap().is_empty());
    }

    #[test]
    fn test_suffix_bounds() {
        let sequence = Sequence::from([1, 2, 3]);
        assert_eq!(sequence.suffix_from(0).unwrap(), sequence);
        assert!(sequence.suffix_from(3).unwrap().is_empty());
        assert_eq!(
            sequence.suffix_from(4),
            Err(error::Error::IndexOutOfRange { index: 4, len: 3 })
        );
        assert!(Sequence::<i32>::empty().suffix_from(0).unwrap().is_empty());
        assert_eq!(
            Sequence::<i32>::empty().suffix_from(1),
            Err(error::Error::IndexOutOfRange { index: 1, len: 0 })
        );
        assert!(Sequence::singleton(1).suffix_from(1).unwrap().is_empty());
    }

    #[test]
    fn test_get_across_variants() {
        let sequence = Sequence::prepend_all(&Sequence::singleton(0), &Sequence::from([1, 2]));
        assert_eq!(sequence.get(0), Ok(&0));
        assert_eq!(sequence.get(2), Ok(&2));
        assert_eq!(
            sequence.get(3),
            Err(error::Error::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(Sequence::singleton("a").get(0), Ok(&"a"));
        assert!(Sequence::<u8>::empty().get(0).is_err());
    }

    #[test]
    fn test_collect() {
        let sequence: Sequence<i32> = (1..=3).collect();
        assert_eq!(sequence.len(), 3);
        assert_eq!(sequence.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_long_cons_chain_drops_without_overflow() {
        let mut sequence = Sequence::empty();
        for i in 0..200_000 {
            sequence = Sequence::prepend_all(&Sequence::singleton(i), &sequence);
        }
        assert_eq!(sequence.len(), 200_000);
        assert_eq!(sequence.get(199_999), Ok(&0));
        drop(sequence);
    }

    #[test]
    fn test_dropping_shared_chain_keeps_other_alive() {
        let mut shared = Sequence::empty();
        for i in 0..10 {
            shared = Sequence::prepend_all(&Sequence::singleton(i), &shared);
        }
        let longer = Sequence::prepend_all(&Sequence::singleton(10), &shared);
        drop(shared);
        assert_eq!(longer.len(), 11);
        assert_eq!(
            longer.to_vec(),
            vec![10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0]
        );
    }
}
