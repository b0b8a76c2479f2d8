use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Summary of a non-empty set of admissible critical-rate samples.
///
/// Never constructed from an empty set; absence of admissible samples is
/// expressed as `Option::None` by the aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub mean: Decimal,
    pub median: Decimal,
    pub min: Decimal,
    pub max: Decimal,
    pub count: usize,
}
