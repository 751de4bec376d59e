use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::vat::rate;

/// An amount of money in minor units (cents, öre...) and a currency code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Price {
    amount: i64,
    currency: String,
}

impl Price {
    pub fn new(amount: i64, currency: impl Into<String>) -> Self {
        Price {
            amount,
            currency: currency.into(),
        }
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// The VAT due on this price, rounded to whole minor units.
    ///
    /// Halves round up, i.e. away from zero for positive amounts and
    /// towards zero for negative ones.
    pub fn vat(&self) -> i64 {
        let vat = round_half_up(Decimal::from(self.amount) * rate(&self.currency));
        // the rate is below 1, so this never leaves the range of the amount
        match vat.to_i64() {
            Some(vat) => vat,
            None if vat.is_sign_negative() => i64::MIN,
            None => i64::MAX,
        }
    }

    /// A new price with VAT added to the amount, in the same currency.
    ///
    /// The amount saturates at the bounds of `i64`.
    pub fn apply_vat(&self) -> Self {
        Price {
            amount: self.amount.saturating_add(self.vat()),
            currency: self.currency.clone(),
        }
    }

    pub fn has_vat(&self) -> bool {
        rate(&self.currency) > Decimal::ZERO
    }
}

fn round_half_up(value: Decimal) -> Decimal {
    let rounding_strategy = if value >= Decimal::ZERO {
        RoundingStrategy::MidpointAwayFromZero
    } else {
        RoundingStrategy::MidpointTowardZero
    };
    value.round_dp_with_strategy(0, rounding_strategy)
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
