/// The core sequence interface: a storage variant must implement this to
/// function.
///
/// [`Sequence`](super::Sequence) dispatches to its variants through this
/// trait, so each variant gets to pick its own iterator type and the
/// compiler can specialize the inner layers.
pub(crate) trait SequenceCore<'a, T, I>
where
    T: 'a,
    I: Iterator<Item = &'a T>,
{
    /// Check whether the sequence is empty
    fn is_empty(&self) -> bool;

    /// Get the amount of elements in the sequence
    fn len(&self) -> usize;

    /// Get the element at the index, if it exists
    fn get(&'a self, index: usize) -> Option<&'a T>;

    /// Get the elements from the sequence as an iterator
    fn iter(&'a self) -> I;
}
