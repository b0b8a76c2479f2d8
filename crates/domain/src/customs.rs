//! Customs charges on imported goods.
//!
//! The customs fee is a fixed-bracket government charge on the declared
//! value (purchase price plus delivery, in local currency). Customs VAT is
//! charged on the landed cost: goods plus delivery plus the customs fee.

use rust_decimal::Decimal;

/// Bracket table: (upper bound of declared value, fee), local currency.
const FEE_BRACKETS: &[(u64, u64)] = &[
    (200_000, 1_067),
    (450_000, 2_134),
    (1_200_000, 4_269),
    (2_700_000, 11_746),
    (4_200_000, 16_524),
    (5_500_000, 21_344),
    (7_000_000, 27_540),
];

/// Fee above the highest bracket.
const FEE_CAP: u64 = 30_000;

/// Returns the customs fee for a declared value.
///
/// Monotonically non-decreasing; boundaries are inclusive on the lower
/// bracket (a declared value of exactly 200 000 pays 1 067).
pub fn customs_fee(declared_value: Decimal) -> Decimal {
    for (bound, fee) in FEE_BRACKETS {
        if declared_value <= Decimal::from(*bound) {
            return Decimal::from(*fee);
        }
    }
    Decimal::from(FEE_CAP)
}

/// VAT charged at the border on the landed cost.
pub fn customs_vat(landed_cost: Decimal, vat_rate: Decimal) -> Decimal {
    if landed_cost <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    landed_cost * vat_rate
}
