//! Summary statistics and histogram binning over admissible samples.

use crit_rate_domain::value_objects::summary::SummaryStatistics;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Mean, median, min and max of a sample set; `None` when the set is empty.
///
/// Statistics over an empty set are undefined and must be reported as
/// absent, never as zero.
pub fn summarize(samples: &[Decimal]) -> Option<SummaryStatistics> {
    if samples.is_empty() {
        return None;
    }

    let mut sorted = samples.to_vec();
    sorted.sort();

    let count = sorted.len();
    let sum: Decimal = sorted.iter().sum();
    let mean = sum / Decimal::from(count);
    let median = if count % 2 == 1 {
        sorted[count / 2]
    } else {
        (sorted[count / 2 - 1] + sorted[count / 2]) / Decimal::TWO
    };

    Some(SummaryStatistics {
        mean,
        median,
        min: sorted[0],
        max: sorted[count - 1],
        count,
    })
}

/// One histogram bucket: `[lower, upper)`, last bucket inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: Decimal,
    pub upper: Decimal,
    pub count: usize,
}

/// Equal-width binning of the samples into `bins` buckets.
pub fn histogram(samples: &[Decimal], bins: usize) -> Vec<HistogramBin> {
    if samples.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = *samples.iter().min().unwrap_or(&Decimal::ZERO);
    let max = *samples.iter().max().unwrap_or(&Decimal::ZERO);

    if min == max {
        return vec![HistogramBin {
            lower: min,
            upper: max,
            count: samples.len(),
        }];
    }

    let width = (max - min) / Decimal::from(bins);
    let mut counts = vec![0usize; bins];
    for sample in samples {
        let offset = (*sample - min) / width;
        let index = offset.trunc().to_usize().unwrap_or(0).min(bins - 1);
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: min + width * Decimal::from(i),
            upper: min + width * Decimal::from(i + 1),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn summarize_empty_is_none() {
        assert!(summarize(&[]).is_none());
    }

    #[test]
    fn summarize_odd_count() {
        let stats = summarize(&[dec!(0.3), dec!(0.1), dec!(0.2)]).unwrap();
        assert_eq!(stats.mean, dec!(0.2));
        assert_eq!(stats.median, dec!(0.2));
        assert_eq!(stats.min, dec!(0.1));
        assert_eq!(stats.max, dec!(0.3));
        assert_eq!(stats.count, 3);
    }

    #[test]
    fn summarize_even_count_averages_the_middle() {
        let stats = summarize(&[dec!(0.4), dec!(0.1), dec!(0.2), dec!(0.3)]).unwrap();
        assert_eq!(stats.median, dec!(0.25));
        assert_eq!(stats.mean, dec!(0.25));
    }

    #[test]
    fn histogram_counts_all_samples() {
        let samples = [dec!(0.05), dec!(0.15), dec!(0.17), dec!(0.95)];
        let bins = histogram(&samples, 10);
        assert_eq!(bins.len(), 10);
        let total: usize = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, samples.len());
        // max lands in the last (inclusive) bucket
        assert_eq!(bins.last().unwrap().count, 1);
    }

    #[test]
    fn histogram_of_identical_samples_is_one_bucket() {
        let samples = [dec!(0.5), dec!(0.5), dec!(0.5)];
        let bins = histogram(&samples, 10);
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].count, 3);
    }

    #[test]
    fn histogram_of_empty_is_empty() {
        assert!(histogram(&[], 10).is_empty());
        assert!(histogram(&[dec!(0.5)], 0).is_empty());
    }
}
