use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use functional_sequence::{map, Sequence};

use crate::price::Price;

/// The VAT rate for a currency, as a fraction.
///
/// Currencies outside the table carry no VAT. Codes are matched exactly.
pub fn rate(currency: &str) -> Decimal {
    match currency {
        "RON" => dec!(0.19),
        "BGN" | "EUR" => dec!(0.20),
        "CZK" => dec!(0.21),
        "PLN" => dec!(0.23),
        "DKK" | "SEK" => dec!(0.25),
        "HUF" => dec!(0.27),
        _ => Decimal::ZERO,
    }
}

pub fn apply_vat(price: &Price) -> Price {
    price.apply_vat()
}

pub fn has_vat(price: &Price) -> bool {
    price.has_vat()
}

/// Apply VAT to every price, in order.
pub fn apply_vat_all(prices: &Sequence<Price>) -> Sequence<Price> {
    map(apply_vat, prices)
}
