//! Monte Carlo driver for the critical-rate cost model.
//!
//! Draws randomized delivery times and exchange rates, evaluates the
//! closed-form break-even rate once per shipping mode and trial, keeps only
//! admissible samples (rate strictly between 0 and 1) and summarizes the
//! survivors per mode.

pub mod config;
pub mod monte_carlo;
pub mod prelude;
pub mod sampler;
pub mod statistics;
