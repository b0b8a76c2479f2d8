use thiserror::Error;

/// Errors raised by the cost model and simulation configuration.
///
/// An infeasible trade is not an error: it is a filtered outcome carried by
/// [`crate::cost_model::RateOutcome::Infeasible`]. Likewise an empty result
/// set is reported as absence, never as an error.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl DomainError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
