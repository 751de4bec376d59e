//! A worked example for the sequence combinators: applying per-currency
//! VAT to a list of prices.
//!
//! ```
//! use functional_sequence::Sequence;
//! use functional_vat::{apply_vat_all, Price};
//!
//! let prices = Sequence::from([Price::new(10000, "SEK"), Price::new(1000, "EUR")]);
//! assert_eq!(
//!     apply_vat_all(&prices),
//!     Sequence::from([Price::new(12500, "SEK"), Price::new(1200, "EUR")])
//! );
//! ```
pub mod idiomatic;
mod price;
mod vat;

pub use price::Price;
pub use vat::{apply_vat, apply_vat_all, has_vat, rate};
