use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Periodic compound interest rate, as a decimal fraction (0.25 = 25%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CriticalRate {
    pub value: Decimal,
}

impl CriticalRate {
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// A sample is admissible when the rate lies strictly between 0 and 1.
    pub fn is_admissible(&self) -> bool {
        self.value > Decimal::ZERO && self.value < Decimal::ONE
    }
}
