use serde::{Deserialize, Serialize};
use std::fmt;

/// Domestic tax regime applied to the sale. Regimes are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxScheme {
    /// Private individual: flat tax on profit plus customs VAT.
    Individual,
    /// General regime: output VAT netted against customs VAT, plus profit tax.
    Osno,
    /// Simplified regime: lesser of a revenue tax and a profit tax, plus customs VAT.
    Usn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShippingMode {
    Air,
    Sea,
}

impl fmt::Display for ShippingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Air => write!(f, "air"),
            Self::Sea => write!(f, "sea"),
        }
    }
}

/// Directional drift applied to the exchange-rate mean when sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateTrend {
    Rising,
    Falling,
    /// Drift sign is drawn per trial with equal probability.
    Random,
}
