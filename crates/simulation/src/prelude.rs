//! Prelude module for convenient imports.
//!
//! Re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use crit_rate_simulation::prelude::*;
//! ```

// Configuration
pub use crate::config::{ShippingLeg, SimulationConfig};

// Monte Carlo
pub use crate::monte_carlo::{ModeReport, MonteCarloRunner, RunReport};

// Sampling models
pub use crate::sampler::{DeliveryTimeModel, ExchangeRateModel, Sampler, WEEKS_PER_YEAR};

// Statistics
pub use crate::statistics::{HistogramBin, histogram, summarize};
