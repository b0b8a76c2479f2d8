//! Domestic tax regimes.
//!
//! Three mutually exclusive regimes apply to the sale. All flat percentages
//! live in [`TaxRates`] so callers never spell the statutory constants.

use crate::enums::TaxScheme;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Flat statutory percentages, as decimal fractions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxRates {
    /// Individual profit tax (13%).
    pub individual_profit: Decimal,
    /// OSNO profit tax (20%).
    pub osno_profit: Decimal,
    /// USN revenue tax (6%).
    pub usn_revenue: Decimal,
    /// USN profit tax (15%).
    pub usn_profit: Decimal,
    /// VAT (20%), used both at the border and for OSNO output VAT.
    pub vat: Decimal,
}

impl Default for TaxRates {
    fn default() -> Self {
        Self {
            individual_profit: Decimal::new(13, 2),
            osno_profit: Decimal::new(20, 2),
            usn_revenue: Decimal::new(6, 2),
            usn_profit: Decimal::new(15, 2),
            vat: Decimal::new(20, 2),
        }
    }
}

/// Total tax due on a sale, customs VAT included.
///
/// `total_cost` is the full landed cost of the trade (goods, delivery,
/// customs fee, customs VAT, storage); profit is clamped at zero so a
/// losing trade never produces a negative tax.
///
/// USN picks the lesser of the revenue tax and the profit tax; on a tie the
/// revenue tax wins.
pub fn tax_due(
    selling_price: Decimal,
    scheme: TaxScheme,
    customs_vat: Decimal,
    total_cost: Decimal,
    rates: &TaxRates,
) -> Decimal {
    let profit = (selling_price - total_cost).max(Decimal::ZERO);
    match scheme {
        TaxScheme::Individual => rates.individual_profit * profit + customs_vat,
        TaxScheme::Osno => {
            // Output VAT on the sale, netted against VAT already paid at the
            // border. Never refunds below zero within a single trade.
            let output_vat = (rates.vat * selling_price - customs_vat).max(Decimal::ZERO);
            output_vat + rates.osno_profit * profit + customs_vat
        }
        TaxScheme::Usn => {
            let revenue_tax = rates.usn_revenue * selling_price;
            let profit_tax = rates.usn_profit * profit;
            let base = if revenue_tax <= profit_tax {
                revenue_tax
            } else {
                profit_tax
            };
            customs_vat + base
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn individual_taxes_profit_plus_customs_vat() {
        let rates = TaxRates::default();
        // profit = 100000 - 80000 = 20000; 13% = 2600; + 5000 customs VAT
        let due = tax_due(
            dec!(100000),
            TaxScheme::Individual,
            dec!(5000),
            dec!(80000),
            &rates,
        );
        assert_eq!(due, dec!(7600));
    }

    #[test]
    fn individual_clamps_negative_profit() {
        let rates = TaxRates::default();
        let due = tax_due(
            dec!(50000),
            TaxScheme::Individual,
            dec!(5000),
            dec!(80000),
            &rates,
        );
        assert_eq!(due, dec!(5000));
    }

    #[test]
    fn osno_nets_output_vat_against_customs_vat() {
        let rates = TaxRates::default();
        // output VAT = 20% * 100000 = 20000, minus 5000 already paid = 15000
        // profit tax = 20% * 20000 = 4000; plus the 5000 paid at the border
        let due = tax_due(
            dec!(100000),
            TaxScheme::Osno,
            dec!(5000),
            dec!(80000),
            &rates,
        );
        assert_eq!(due, dec!(24000));
    }

    #[test]
    fn osno_never_refunds_excess_customs_vat() {
        let rates = TaxRates::default();
        // output VAT 20% * 10000 = 2000 < 5000 customs VAT: netted to zero
        let due = tax_due(
            dec!(10000),
            TaxScheme::Osno,
            dec!(5000),
            dec!(10000),
            &rates,
        );
        assert_eq!(due, dec!(5000));
    }

    #[test]
    fn usn_picks_lesser_of_revenue_and_profit_tax() {
        let rates = TaxRates::default();
        // revenue tax = 6% * 100000 = 6000; profit tax = 15% * 20000 = 3000
        let due = tax_due(
            dec!(100000),
            TaxScheme::Usn,
            dec!(1000),
            dec!(80000),
            &rates,
        );
        assert_eq!(due, dec!(4000));

        // revenue tax = 6000; profit tax = 15% * 90000 = 13500
        let due = tax_due(
            dec!(100000),
            TaxScheme::Usn,
            dec!(1000),
            dec!(10000),
            &rates,
        );
        assert_eq!(due, dec!(7000));
    }

    #[test]
    fn usn_tie_resolves_to_revenue_tax() {
        let rates = TaxRates::default();
        // selling 100000, total_cost 60000: revenue tax = 6000,
        // profit tax = 15% * 40000 = 6000. Exact tie.
        let due = tax_due(
            dec!(100000),
            TaxScheme::Usn,
            dec!(0),
            dec!(60000),
            &rates,
        );
        assert_eq!(due, dec!(6000));

        // Nudge profit up by one unit: profit tax now exceeds revenue tax,
        // so the revenue branch must still be chosen.
        let due_nudged = tax_due(
            dec!(100000),
            TaxScheme::Usn,
            dec!(0),
            dec!(59999),
            &rates,
        );
        assert_eq!(due_nudged, dec!(6000));
    }
}
