//! Injectable sampling models for delivery times and exchange rates.
//!
//! Both models implement [`Sampler`] so the driver never touches a
//! distribution directly; deterministic variants make it testable with a
//! fixed seed or fixed values.

use crit_rate_domain::enums::RateTrend;
use crit_rate_domain::errors::DomainError;
use rand::Rng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

pub const WEEKS_PER_YEAR: f64 = 52.0;

/// A scalar draw from a configured distribution.
pub trait Sampler {
    fn sample(&self, rng: &mut StdRng) -> f64;
}

/// Delivery time distribution, in weeks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DeliveryTimeModel {
    Uniform { min_weeks: f64, max_weeks: f64 },
    Normal { mean_weeks: f64, std_dev_weeks: f64 },
    /// Deterministic delivery time, for tests and what-if runs.
    Fixed { weeks: f64 },
}

impl DeliveryTimeModel {
    pub fn validate(&self) -> Result<(), DomainError> {
        match self {
            Self::Uniform {
                min_weeks,
                max_weeks,
            } => {
                if !min_weeks.is_finite() || !max_weeks.is_finite() || *min_weeks <= 0.0 {
                    return Err(DomainError::invalid(
                        "delivery_time",
                        "uniform bounds must be positive finite weeks",
                    ));
                }
                if min_weeks >= max_weeks {
                    return Err(DomainError::invalid(
                        "delivery_time",
                        format!("uniform bounds inverted: {min_weeks} >= {max_weeks}"),
                    ));
                }
            }
            Self::Normal {
                mean_weeks,
                std_dev_weeks,
            } => {
                if !mean_weeks.is_finite() || *mean_weeks <= 0.0 {
                    return Err(DomainError::invalid(
                        "delivery_time",
                        "normal mean must be positive finite weeks",
                    ));
                }
                if !std_dev_weeks.is_finite() || *std_dev_weeks < 0.0 {
                    return Err(DomainError::invalid(
                        "delivery_time",
                        "normal std dev must be non-negative and finite",
                    ));
                }
            }
            Self::Fixed { weeks } => {
                if !weeks.is_finite() || *weeks <= 0.0 {
                    return Err(DomainError::invalid(
                        "delivery_time",
                        "fixed delivery time must be positive finite weeks",
                    ));
                }
            }
        }
        Ok(())
    }
}

impl Sampler for DeliveryTimeModel {
    fn sample(&self, rng: &mut StdRng) -> f64 {
        match self {
            Self::Uniform {
                min_weeks,
                max_weeks,
            } => rng.random_range(*min_weeks..*max_weeks),
            Self::Normal {
                mean_weeks,
                std_dev_weeks,
            } => match Normal::new(*mean_weeks, *std_dev_weeks) {
                Ok(dist) => dist.sample(rng),
                Err(_) => *mean_weeks,
            },
            Self::Fixed { weeks } => *weeks,
        }
    }
}

/// Exchange rate distribution: a normal draw around a trend-shifted mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRateModel {
    /// Base local-per-foreign rate.
    pub base_rate: f64,
    pub std_dev: f64,
    pub trend: RateTrend,
    /// Relative shift of the mean (0.05 = 5%). Sign comes from the trend.
    pub drift_pct: f64,
}

impl ExchangeRateModel {
    #[must_use]
    pub fn new(base_rate: f64, std_dev: f64) -> Self {
        Self {
            base_rate,
            std_dev,
            trend: RateTrend::Random,
            drift_pct: 0.0,
        }
    }

    #[must_use]
    pub fn with_trend(mut self, trend: RateTrend, drift_pct: f64) -> Self {
        self.trend = trend;
        self.drift_pct = drift_pct;
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.base_rate.is_finite() || self.base_rate <= 0.0 {
            return Err(DomainError::invalid(
                "exchange_rate",
                "base rate must be positive and finite",
            ));
        }
        if !self.std_dev.is_finite() || self.std_dev < 0.0 {
            return Err(DomainError::invalid(
                "exchange_rate",
                "std dev must be non-negative and finite",
            ));
        }
        if !self.drift_pct.is_finite() || self.drift_pct < 0.0 {
            return Err(DomainError::invalid(
                "exchange_rate",
                "drift must be non-negative and finite",
            ));
        }
        Ok(())
    }
}

impl Sampler for ExchangeRateModel {
    fn sample(&self, rng: &mut StdRng) -> f64 {
        let shift = match self.trend {
            RateTrend::Rising => self.drift_pct,
            RateTrend::Falling => -self.drift_pct,
            RateTrend::Random => {
                if rng.random_bool(0.5) {
                    self.drift_pct
                } else {
                    -self.drift_pct
                }
            }
        };
        let mean = self.base_rate * (1.0 + shift);
        match Normal::new(mean, self.std_dev) {
            Ok(dist) => dist.sample(rng),
            Err(_) => mean,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn uniform_draws_stay_in_bounds() {
        let model = DeliveryTimeModel::Uniform {
            min_weeks: 8.0,
            max_weeks: 16.0,
        };
        let mut rng = rng();
        for _ in 0..1000 {
            let w = model.sample(&mut rng);
            assert!((8.0..16.0).contains(&w));
        }
    }

    #[test]
    fn fixed_model_is_deterministic() {
        let model = DeliveryTimeModel::Fixed { weeks: 2.0 };
        let mut rng = rng();
        assert_eq!(model.sample(&mut rng), 2.0);
        assert_eq!(model.sample(&mut rng), 2.0);
    }

    #[test]
    fn normal_draws_cluster_around_mean() {
        let model = DeliveryTimeModel::Normal {
            mean_weeks: 12.0,
            std_dev_weeks: 1.0,
        };
        let mut rng = rng();
        let n = 5000;
        let sum: f64 = (0..n).map(|_| model.sample(&mut rng)).sum();
        let mean = sum / f64::from(n);
        assert!((mean - 12.0).abs() < 0.1, "sample mean {mean}");
    }

    #[test]
    fn trend_shifts_the_exchange_rate_mean() {
        let rising = ExchangeRateModel::new(100.0, 0.0).with_trend(RateTrend::Rising, 0.05);
        let falling = ExchangeRateModel::new(100.0, 0.0).with_trend(RateTrend::Falling, 0.05);
        let mut rng = rng();
        assert!((rising.sample(&mut rng) - 105.0).abs() < 1e-9);
        assert!((falling.sample(&mut rng) - 95.0).abs() < 1e-9);
    }

    #[test]
    fn random_trend_uses_both_signs() {
        let model = ExchangeRateModel::new(100.0, 0.0).with_trend(RateTrend::Random, 0.05);
        let mut rng = rng();
        let mut above = 0;
        let mut below = 0;
        for _ in 0..200 {
            let r = model.sample(&mut rng);
            if r > 100.0 {
                above += 1;
            } else {
                below += 1;
            }
        }
        assert!(above > 0 && below > 0);
    }

    #[test]
    fn validation_rejects_degenerate_models() {
        assert!(
            DeliveryTimeModel::Uniform {
                min_weeks: 16.0,
                max_weeks: 8.0,
            }
            .validate()
            .is_err()
        );
        assert!(
            DeliveryTimeModel::Normal {
                mean_weeks: 12.0,
                std_dev_weeks: -1.0,
            }
            .validate()
            .is_err()
        );
        assert!(DeliveryTimeModel::Fixed { weeks: 0.0 }.validate().is_err());
        assert!(ExchangeRateModel::new(0.0, 1.0).validate().is_err());
        assert!(ExchangeRateModel::new(90.0, -1.0).validate().is_err());
        assert!(
            ExchangeRateModel::new(90.0, 5.0)
                .with_trend(RateTrend::Rising, f64::NAN)
                .validate()
                .is_err()
        );
    }
}
