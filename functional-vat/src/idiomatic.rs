//! The same VAT computation written with standard iterator adapters over
//! a slice instead of the sequence combinators.

use crate::price::Price;

pub fn apply_vat_all(prices: &[Price]) -> Vec<Price> {
    prices.iter().map(Price::apply_vat).collect()
}
