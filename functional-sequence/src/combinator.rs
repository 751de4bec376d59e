//! Higher-order list combinators over [`Sequence`].
//!
//! These are the classic cons/first/rest decomposition, map, filter,
//! reduce (a left fold) and reverse. None of them changes its arguments.
//! Each walks its input with an iterator, so arbitrarily long sequences
//! never exhaust the stack. Functions are called exactly once per element,
//! in index order.
//!
//! `map_r` and `filter_r` compute the same results as `map` and `filter`,
//! but are written as a fold that conses onto an accumulator, followed by
//! a reverse.

use crate::error;
use crate::sequence::Sequence;

/// Prepend `x` to `xs`.
///
/// The result has `x` at index 0 followed by all of `xs`, which it shares.
pub fn cons<T: Clone>(x: T, xs: &Sequence<T>) -> Sequence<T> {
    Sequence::prepend_all(&Sequence::singleton(x), xs)
}

/// The element at index 0.
///
/// Fails with [`error::Error::EmptySequence`] if `xs` is empty.
pub fn first<T>(xs: &Sequence<T>) -> error::Result<&T> {
    if xs.is_empty() {
        return Err(error::Error::EmptySequence);
    }
    xs.get(0)
}

/// Everything but the first element.
///
/// Fails with [`error::Error::EmptySequence`] if `xs` is empty.
pub fn rest<T: Clone>(xs: &Sequence<T>) -> error::Result<Sequence<T>> {
    if xs.is_empty() {
        return Err(error::Error::EmptySequence);
    }
    xs.suffix_from(1)
}

/// Apply `f` to every element, producing a sequence of the same length.
pub fn map<T, R, F>(mut f: F, xs: &Sequence<T>) -> Sequence<R>
where
    F: FnMut(&T) -> R,
{
    let mut result: Vec<R> = Vec::with_capacity(xs.len());
    for item in xs.iter() {
        result.push(f(item));
    }
    result.into()
}

/// The elements for which `pred` holds, in their original order.
pub fn filter<T, F>(mut pred: F, xs: &Sequence<T>) -> Sequence<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let mut result: Vec<T> = Vec::new();
    for item in xs.iter() {
        if pred(item) {
            result.push(item.clone());
        }
    }
    result.into()
}

/// Left fold: `f(...f(f(acc, x0), x1)..., xn)`.
///
/// Returns `acc` untouched when `xs` is empty.
pub fn reduce<T, R, F>(mut f: F, acc: R, xs: &Sequence<T>) -> R
where
    F: FnMut(R, &T) -> R,
{
    let mut accumulator = acc;
    for item in xs.iter() {
        accumulator = f(accumulator, item);
    }
    accumulator
}

/// The elements in the opposite order.
///
/// Always equal to `reduce(|acc, x| cons(x.clone(), &acc), Sequence::empty(), xs)`,
/// but built in one pass into contiguous storage.
pub fn reverse<T: Clone>(xs: &Sequence<T>) -> Sequence<T> {
    let mut items = xs.to_vec();
    items.reverse();
    items.into()
}

/// [`map`], expressed as a fold consing onto an accumulator and a reverse.
pub fn map_r<T, R, F>(mut f: F, xs: &Sequence<T>) -> Sequence<R>
where
    R: Clone,
    F: FnMut(&T) -> R,
{
    reverse(&reduce(
        |acc: Sequence<R>, x: &T| cons(f(x), &acc),
        Sequence::empty(),
        xs,
    ))
}

/// [`filter`], expressed as a fold consing onto an accumulator and a reverse.
pub fn filter_r<T, F>(mut pred: F, xs: &Sequence<T>) -> Sequence<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    reverse(&reduce(
        |acc: Sequence<T>, x: &T| {
            if pred(x) {
                cons(x.clone(), &acc)
            } else {
                acc
            }
        },
        Sequence::empty(),
        xs,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cons_onto_empty() {
        let sequence = cons(1, &Sequence::empty());
        assert_eq!(sequence, Sequence::singleton(1));
    }

    #[test]
    fn test_first_and_rest_of_singleton() {
        let sequence = Sequence::singleton("only");
        assert_eq!(first(&sequence), Ok(&"only"));
        assert!(rest(&sequence).unwrap().is_empty());
    }

    #[test]
    fn test_first_and_rest_of_cons() {
        let tail = Sequence::from([2, 3]);
        let sequence = cons(1, &tail);
        assert_eq!(first(&sequence), Ok(&1));
        assert_eq!(rest(&sequence).unwrap(), tail);
    }

    #[test]
    fn test_map_calls_in_order() {
        let mut seen = Vec::new();
        let result = map(
            |x: &i32| {
                seen.push(*x);
                x * 10
            },
            &Sequence::from([3, 1, 2]),
        );
        assert_eq!(result, Sequence::from([30, 10, 20]));
        assert_eq!(seen, vec![3, 1, 2]);
    }

    #[test]
    fn test_map_changes_element_type() {
        let result = map(|x: &i32| x.to_string(), &Sequence::from([1, 2]));
        assert_eq!(result, Sequence::from(["1".to_string(), "2".to_string()]));
    }

    #[test]
    fn test_filter_calls_once_per_element() {
        let mut calls = 0;
        let result = filter(
            |x: &i32| {
                calls += 1;
                *x > 1
            },
            &Sequence::from([1, 2, 3, 0]),
        );
        assert_eq!(result, Sequence::from([2, 3]));
        assert_eq!(calls, 4);
    }

    #[test]
    fn test_filter_r_calls_in_order() {
        let mut seen = Vec::new();
        let result = filter_r(
            |x: &i32| {
                seen.push(*x);
                x % 2 == 0
            },
            &Sequence::from([4, 5, 6]),
        );
        assert_eq!(result, Sequence::from([4, 6]));
        assert_eq!(seen, vec![4, 5, 6]);
    }

    #[test]
    fn test_reduce_is_left_fold() {
        let result = reduce(
            |acc: String, x: &&str| format!("({}{})", acc, x),
            String::new(),
            &Sequence::from(["a", "b", "c"]),
        );
        assert_eq!(result, "(((a)b)c)");
    }

    #[test]
    fn test_empty_inputs() {
        let empty: Sequence<i32> = Sequence::empty();
        assert!(map(|x: &i32| x + 1, &empty).is_empty());
        assert!(filter(|_: &i32| true, &empty).is_empty());
        assert!(reverse(&empty).is_empty());
        assert!(map_r(|x: &i32| x + 1, &empty).is_empty());
        assert!(filter_r(|_: &i32| true, &empty).is_empty());
        assert_eq!(reduce(|acc: i32, x: &i32| acc + x, 42, &empty), 42);
        assert_eq!(first(&empty), Err(error::Error::EmptySequence));
        assert_eq!(rest(&empty), Err(error::Error::EmptySequence));
    }
}
