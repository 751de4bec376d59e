//! A persistent sequence: an immutable list of elements of one type.
//!
//! The sequence is an enum over a few storage variants (empty, a single
//! element, a shared contiguous run, and a cons cell prepended to another
//! sequence). Deriving a sequence from another never changes the source,
//! and shares as much storage with it as the variant allows.
mod compare;
mod core;
mod creation;
mod display;
mod iter;
#[cfg(feature = "serde")]
mod serialization;
mod traits;
mod variant;

pub use self::core::Sequence;
pub use iter::Iter;
