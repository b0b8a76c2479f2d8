//! Monte Carlo driver.
//!
//! Each trial is independent and stateless: draw one exchange rate, draw a
//! delivery time per shipping mode, convert the foreign-currency costs,
//! evaluate the cost model once per mode and keep the sample only when the
//! rate is admissible. Everything else is silently dropped, never retried.

use crate::config::{ShippingLeg, SimulationConfig};
use crate::sampler::{Sampler, WEEKS_PER_YEAR};
use crate::statistics;
use crit_rate_domain::cost_model::{self, TradeParameters};
use crit_rate_domain::enums::ShippingMode;
use crit_rate_domain::errors::DomainError;
use crit_rate_domain::value_objects::summary::SummaryStatistics;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Retained samples and statistics for one shipping mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeReport {
    pub mode: ShippingMode,
    /// Admissible critical-rate samples, in trial order.
    pub samples: Vec<Decimal>,
    /// Trials dropped as infeasible or out of the admissible range.
    pub dropped: usize,
    /// `None` when no trial produced an admissible rate.
    pub stats: Option<SummaryStatistics>,
}

/// Outcome of one full Monte Carlo run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub trials: usize,
    pub air: ModeReport,
    pub sea: ModeReport,
}

pub struct MonteCarloRunner {
    config: SimulationConfig,
}

struct ModeAccumulator {
    mode: ShippingMode,
    samples: Vec<Decimal>,
    dropped: usize,
}

impl ModeAccumulator {
    fn new(mode: ShippingMode) -> Self {
        Self {
            mode,
            samples: Vec::new(),
            dropped: 0,
        }
    }

    fn finish(self) -> ModeReport {
        let stats = statistics::summarize(&self.samples);
        if stats.is_none() {
            warn!(mode = %self.mode, "no admissible critical-rate samples");
        }
        ModeReport {
            mode: self.mode,
            samples: self.samples,
            dropped: self.dropped,
            stats,
        }
    }
}

impl MonteCarloRunner {
    #[must_use]
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Runs the configured number of trials and aggregates per mode.
    ///
    /// Fails only on invalid configuration, before any sampling; per-trial
    /// degeneracy is filtered, and an empty retained set yields absent
    /// statistics rather than a panic.
    pub fn run(&self) -> Result<RunReport, DomainError> {
        let cfg = &self.config;
        cfg.validate()?;

        let mut rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        info!(trials = cfg.trials, seed = ?cfg.seed, "starting Monte Carlo run");

        let mut air = ModeAccumulator::new(ShippingMode::Air);
        let mut sea = ModeAccumulator::new(ShippingMode::Sea);

        for _ in 0..cfg.trials {
            let fx = cfg.exchange_rate.sample(&mut rng);
            let fx = match Decimal::from_f64(fx) {
                Some(rate) if rate > Decimal::ZERO => rate,
                // A degenerate draw invalidates the whole trial.
                _ => {
                    air.dropped += 1;
                    sea.dropped += 1;
                    continue;
                }
            };

            Self::run_leg(cfg, &cfg.air, fx, &mut rng, &mut air);
            Self::run_leg(cfg, &cfg.sea, fx, &mut rng, &mut sea);
        }

        debug!(
            air_retained = air.samples.len(),
            air_dropped = air.dropped,
            sea_retained = sea.samples.len(),
            sea_dropped = sea.dropped,
            "run complete"
        );

        Ok(RunReport {
            trials: cfg.trials,
            air: air.finish(),
            sea: sea.finish(),
        })
    }

    fn run_leg(
        cfg: &SimulationConfig,
        leg: &ShippingLeg,
        fx: Decimal,
        rng: &mut StdRng,
        acc: &mut ModeAccumulator,
    ) {
        let weeks = leg.delivery_time.sample(rng);

        let params = TradeParameters {
            buying_price: cfg.purchase_price * fx,
            selling_price: cfg.selling_price,
            delivery_cost: leg.delivery_cost * fx,
            storage_cost: cfg.storage_cost,
            delivery_time_years: weeks / WEEKS_PER_YEAR,
            storage_time_years: cfg.storage_time_years,
            tax_scheme: cfg.tax_scheme,
            compounding_periods_per_year: cfg.compounding_periods_per_year,
        };

        let evaluation = cost_model::evaluate(&params, cfg.components, &cfg.tax_rates);
        match evaluation.outcome.feasible() {
            Some(rate) if rate.is_admissible() => acc.samples.push(rate.value),
            _ => acc.dropped += 1,
        }
    }
}
