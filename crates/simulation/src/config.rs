//! Simulation configuration.
//!
//! One explicit, immutable structure carries every knob of a run; the
//! driver receives it whole instead of reading ambient state.

use crate::sampler::{DeliveryTimeModel, ExchangeRateModel};
use crit_rate_domain::cost_model::CostComponents;
use crit_rate_domain::enums::TaxScheme;
use crit_rate_domain::errors::DomainError;
use crit_rate_domain::tax::TaxRates;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One shipping option: its foreign-currency cost and time distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingLeg {
    /// Delivery cost in foreign currency.
    pub delivery_cost: Decimal,
    pub delivery_time: DeliveryTimeModel,
}

impl ShippingLeg {
    #[must_use]
    pub fn new(delivery_cost: Decimal, delivery_time: DeliveryTimeModel) -> Self {
        Self {
            delivery_cost,
            delivery_time,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.delivery_cost < Decimal::ZERO {
            return Err(DomainError::invalid(
                "delivery_cost",
                "must not be negative",
            ));
        }
        self.delivery_time.validate()
    }
}

/// Configuration for one Monte Carlo run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of independent trials.
    pub trials: usize,
    /// Purchase price in foreign currency.
    pub purchase_price: Decimal,
    /// Selling price in local currency.
    pub selling_price: Decimal,
    pub air: ShippingLeg,
    pub sea: ShippingLeg,
    pub exchange_rate: ExchangeRateModel,
    pub tax_scheme: TaxScheme,
    pub tax_rates: TaxRates,
    pub compounding_periods_per_year: u32,
    /// Dwell time in storage after delivery, in years.
    pub storage_time_years: f64,
    /// Storage cost in local currency.
    pub storage_cost: Decimal,
    pub components: CostComponents,
    /// RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl SimulationConfig {
    #[must_use]
    pub fn new(
        trials: usize,
        purchase_price: Decimal,
        selling_price: Decimal,
        air: ShippingLeg,
        sea: ShippingLeg,
        exchange_rate: ExchangeRateModel,
    ) -> Self {
        Self {
            trials,
            purchase_price,
            selling_price,
            air,
            sea,
            exchange_rate,
            tax_scheme: TaxScheme::Individual,
            tax_rates: TaxRates::default(),
            compounding_periods_per_year: 12,
            storage_time_years: 0.0,
            storage_cost: Decimal::ZERO,
            components: CostComponents::default(),
            seed: None,
        }
    }

    #[must_use]
    pub fn with_tax_scheme(mut self, scheme: TaxScheme) -> Self {
        self.tax_scheme = scheme;
        self
    }

    #[must_use]
    pub fn with_tax_rates(mut self, rates: TaxRates) -> Self {
        self.tax_rates = rates;
        self
    }

    #[must_use]
    pub fn with_compounding(mut self, periods_per_year: u32) -> Self {
        self.compounding_periods_per_year = periods_per_year;
        self
    }

    #[must_use]
    pub fn with_storage(mut self, time_years: f64, cost: Decimal) -> Self {
        self.storage_time_years = time_years;
        self.storage_cost = cost;
        self.components.storage = true;
        self
    }

    #[must_use]
    pub fn with_components(mut self, components: CostComponents) -> Self {
        self.components = components;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Rejects out-of-domain inputs before any trial runs.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.purchase_price <= Decimal::ZERO {
            return Err(DomainError::invalid("purchase_price", "must be positive"));
        }
        if self.selling_price <= Decimal::ZERO {
            return Err(DomainError::invalid("selling_price", "must be positive"));
        }
        if self.compounding_periods_per_year == 0 {
            return Err(DomainError::invalid(
                "compounding_periods_per_year",
                "must be at least 1",
            ));
        }
        if !self.storage_time_years.is_finite() || self.storage_time_years < 0.0 {
            return Err(DomainError::invalid(
                "storage_time_years",
                "must be a non-negative finite number",
            ));
        }
        if self.storage_cost < Decimal::ZERO {
            return Err(DomainError::invalid("storage_cost", "must not be negative"));
        }
        self.air.validate()?;
        self.sea.validate()?;
        self.exchange_rate.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn config() -> SimulationConfig {
        SimulationConfig::new(
            1000,
            dec!(3000),
            dec!(360000),
            ShippingLeg::new(
                dec!(120),
                DeliveryTimeModel::Uniform {
                    min_weeks: 1.0,
                    max_weeks: 3.0,
                },
            ),
            ShippingLeg::new(
                dec!(50),
                DeliveryTimeModel::Uniform {
                    min_weeks: 8.0,
                    max_weeks: 16.0,
                },
            ),
            ExchangeRateModel::new(90.0, 5.0),
        )
    }

    #[test]
    fn default_config_is_valid() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn builders_set_fields() {
        let cfg = config()
            .with_tax_scheme(TaxScheme::Usn)
            .with_compounding(4)
            .with_storage(0.25, dec!(5000))
            .with_seed(42);

        assert_eq!(cfg.tax_scheme, TaxScheme::Usn);
        assert_eq!(cfg.compounding_periods_per_year, 4);
        assert!(cfg.components.storage);
        assert_eq!(cfg.storage_cost, dec!(5000));
        assert_eq!(cfg.seed, Some(42));
    }

    #[test]
    fn validation_rejects_bad_inputs() {
        let mut cfg = config();
        cfg.purchase_price = Decimal::ZERO;
        assert!(cfg.validate().is_err());

        let mut cfg = config();
        cfg.compounding_periods_per_year = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = config();
        cfg.sea.delivery_time = DeliveryTimeModel::Uniform {
            min_weeks: 16.0,
            max_weeks: 8.0,
        };
        assert!(cfg.validate().is_err());

        let mut cfg = config();
        cfg.storage_cost = dec!(-1);
        assert!(cfg.validate().is_err());
    }
}
