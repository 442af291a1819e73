//! Error taxonomy for shape generation.
//!
//! All errors are raised at the point of detection, before any partial
//! building is assembled. Generation is deterministic, so there is no retry
//! path; sweep harnesses are expected to record per-case failures and move on.

use thiserror::Error;

/// Result type for shape generation.
pub type Result<T> = std::result::Result<T, ShapeError>;

#[derive(Error, Debug)]
pub enum ShapeError {
    /// A shape parameter violates a documented precondition.
    #[error("invalid geometry: {param} = {value} ({reason})")]
    InvalidGeometry {
        param: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// The perimeter zone depth is incompatible with the footprint size.
    #[error(
        "invalid zoning: perimeter_zone_depth = {depth} \
         (footprint min dimension is {min_dimension})"
    )]
    InvalidZoning { depth: f64, min_dimension: f64 },

    /// A computed polygon has fewer than 3 effective vertices or zero area.
    /// Unreachable from validated inputs; treated as a fatal internal failure.
    #[error("degenerate footprint polygon: {name}")]
    DegenerateFootprint { name: String },

    /// Structural failure while assembling the model hierarchy.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ShapeError {
    fn invalid(param: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidGeometry {
            param,
            value,
            reason,
        }
    }
}

/// Checks that a length parameter is strictly positive.
pub(crate) fn require_positive(param: &'static str, value: f64) -> Result<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ShapeError::invalid(param, value, "must be > 0"))
    }
}

/// Checks that `value < limit` (strictly).
pub(crate) fn require_less_than(
    param: &'static str,
    value: f64,
    limit: f64,
    reason: &'static str,
) -> Result<()> {
    if value < limit {
        Ok(())
    } else {
        Err(ShapeError::invalid(param, value, reason))
    }
}
