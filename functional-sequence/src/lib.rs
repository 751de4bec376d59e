//! A persistent immutable sequence and the higher-order combinators
//! `cons`, `first`, `rest`, `map`, `filter`, `reduce` and `reverse`.
//!
//! ```
//! use functional_sequence::{cons, filter, map, reduce, Sequence};
//!
//! let xs = cons(1, &Sequence::from([2, 3]));
//! assert_eq!(map(|x: &i32| x + 1, &xs), Sequence::from([2, 3, 4]));
//! assert_eq!(filter(|x: &i32| x % 2 != 0, &xs), Sequence::from([1, 3]));
//! assert_eq!(reduce(|acc: i32, x: &i32| acc + x, 0, &xs), 6);
//! ```
pub mod combinator;
pub mod error;
pub mod sequence;

pub use combinator::{cons, filter, filter_r, first, map, map_r, reduce, rest, reverse};
pub use error::{Error, Result};
pub use sequence::{Iter, Sequence};
