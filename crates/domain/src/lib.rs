//! Core cost and tax model for cross-border resale trades.
//!
//! Given the parameters of a single trade (buy abroad, ship by air or sea,
//! sell domestically), this crate computes the break-even additional costs
//! (delivery, customs, taxes, storage) and the critical bank rate at which
//! financing the purchase exactly consumes the profit margin.

pub mod cost_model;
pub mod customs;
pub mod enums;
pub mod errors;
pub mod tax;
pub mod value_objects;
