//! Display amounts

use rust_decimal::Decimal;
use serde::Serialize;

use core_kernel::Money;

/// A money amount on the wire: rounded to currency precision, sent as a
/// JSON number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Amount(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl From<Money> for Amount {
    fn from(money: Money) -> Self {
        Amount(money.round_to_currency().amount())
    }
}
