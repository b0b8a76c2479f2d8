//! Break-even cost model and critical-rate solver.
//!
//! The critical rate is the periodic compound rate `r` at which financing
//! the purchase exactly consumes the profit margin:
//!
//! ```text
//! net_margin = buying_price * (1 + r/n)^(n * T)
//! ```
//!
//! where `net_margin` is the selling price less all additional costs and
//! `T` is the total elapsed time in years. Inverting for `r` gives
//! `r = n * ((net_margin / buying_price)^(1 / (n * T)) - 1)`.

use crate::customs;
use crate::enums::TaxScheme;
use crate::errors::DomainError;
use crate::tax::{self, TaxRates};
use crate::value_objects::rate::CriticalRate;
use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

/// Inputs for one break-even evaluation, all money in local currency.
///
/// Immutable per evaluation; carries no identity beyond its field values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeParameters {
    pub buying_price: Decimal,
    pub selling_price: Decimal,
    pub delivery_cost: Decimal,
    pub storage_cost: Decimal,
    pub delivery_time_years: f64,
    /// Dwell time in storage after delivery, in years.
    pub storage_time_years: f64,
    pub tax_scheme: TaxScheme,
    pub compounding_periods_per_year: u32,
}

impl TradeParameters {
    /// Rejects out-of-domain inputs before any evaluation.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.buying_price <= Decimal::ZERO {
            return Err(DomainError::invalid("buying_price", "must be positive"));
        }
        if self.selling_price <= Decimal::ZERO {
            return Err(DomainError::invalid("selling_price", "must be positive"));
        }
        if self.delivery_cost < Decimal::ZERO {
            return Err(DomainError::invalid("delivery_cost", "must not be negative"));
        }
        if self.storage_cost < Decimal::ZERO {
            return Err(DomainError::invalid("storage_cost", "must not be negative"));
        }
        if !self.delivery_time_years.is_finite() || self.delivery_time_years <= 0.0 {
            return Err(DomainError::invalid(
                "delivery_time_years",
                "must be a positive finite number",
            ));
        }
        if !self.storage_time_years.is_finite() || self.storage_time_years < 0.0 {
            return Err(DomainError::invalid(
                "storage_time_years",
                "must be a non-negative finite number",
            ));
        }
        if self.compounding_periods_per_year == 0 {
            return Err(DomainError::invalid(
                "compounding_periods_per_year",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Toggles for the optional cost components.
///
/// The duplicated script variants (with and without customs, with and
/// without storage) collapse into this one configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostComponents {
    pub customs: bool,
    pub storage: bool,
}

impl Default for CostComponents {
    fn default() -> Self {
        Self {
            customs: true,
            storage: false,
        }
    }
}

/// Itemized additional costs of one trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub delivery: Decimal,
    pub customs_fee: Decimal,
    /// VAT paid at the border; already folded into `taxes`.
    pub customs_vat: Decimal,
    /// Total tax due, customs VAT included.
    pub taxes: Decimal,
    pub storage: Decimal,
    /// delivery + customs_fee + taxes + storage.
    pub total: Decimal,
}

/// Outcome of one critical-rate evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RateOutcome {
    Feasible(CriticalRate),
    /// The selling price does not cover the additional costs, or the
    /// inputs degenerate numerically. Not an error; a filtered outcome.
    Infeasible,
}

impl RateOutcome {
    pub fn feasible(&self) -> Option<CriticalRate> {
        match self {
            Self::Feasible(rate) => Some(*rate),
            Self::Infeasible => None,
        }
    }
}

/// Rate outcome together with the costs that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub outcome: RateOutcome,
    pub costs: CostBreakdown,
}

/// Computes the itemized additional costs for a trade.
pub fn additional_costs(
    params: &TradeParameters,
    components: CostComponents,
    rates: &TaxRates,
) -> CostBreakdown {
    let declared_value = params.buying_price + params.delivery_cost;

    let (customs_fee, customs_vat) = if components.customs {
        let fee = customs::customs_fee(declared_value);
        let vat = customs::customs_vat(declared_value + fee, rates.vat);
        (fee, vat)
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };

    let storage = if components.storage {
        params.storage_cost
    } else {
        Decimal::ZERO
    };

    // Profit base: everything actually spent to land and hold the goods.
    let total_cost =
        params.buying_price + params.delivery_cost + customs_fee + customs_vat + storage;

    let taxes = tax::tax_due(
        params.selling_price,
        params.tax_scheme,
        customs_vat,
        total_cost,
        rates,
    );

    let total = params.delivery_cost + customs_fee + taxes + storage;

    CostBreakdown {
        delivery: params.delivery_cost,
        customs_fee,
        customs_vat,
        taxes,
        storage,
        total,
    }
}

/// Evaluates the closed-form critical rate for one trade.
///
/// Degenerate samples (non-positive margin, non-positive base, non-finite
/// result) come back as [`RateOutcome::Infeasible`] rather than NaN or a
/// complex result. Assumes parameters already passed
/// [`TradeParameters::validate`]; anything that slips through degenerates
/// to `Infeasible`, never to undefined numeric behavior.
pub fn evaluate(
    params: &TradeParameters,
    components: CostComponents,
    rates: &TaxRates,
) -> Evaluation {
    let costs = additional_costs(params, components, rates);
    let outcome = solve_rate(params, components, &costs);
    Evaluation { outcome, costs }
}

fn solve_rate(
    params: &TradeParameters,
    components: CostComponents,
    costs: &CostBreakdown,
) -> RateOutcome {
    if params.buying_price <= Decimal::ZERO || params.compounding_periods_per_year == 0 {
        return RateOutcome::Infeasible;
    }

    let net_margin = params.selling_price - costs.total;
    if net_margin <= Decimal::ZERO {
        return RateOutcome::Infeasible;
    }

    let elapsed_years = params.delivery_time_years
        + if components.storage {
            params.storage_time_years
        } else {
            0.0
        };
    if !elapsed_years.is_finite() || elapsed_years <= 0.0 {
        return RateOutcome::Infeasible;
    }

    // Money stays in Decimal up to here; the exponentiation runs in f64.
    let base = (net_margin / params.buying_price).to_f64().unwrap_or(0.0);
    if base <= 0.0 {
        return RateOutcome::Infeasible;
    }

    let n = f64::from(params.compounding_periods_per_year);
    let rate = n * (base.powf(1.0 / (n * elapsed_years)) - 1.0);
    if !rate.is_finite() {
        return RateOutcome::Infeasible;
    }

    match Decimal::from_f64(rate) {
        Some(value) => RateOutcome::Feasible(CriticalRate::new(value)),
        None => RateOutcome::Infeasible,
    }
}
