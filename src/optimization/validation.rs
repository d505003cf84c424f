//! Validation helpers for gradient descent.
//!
//! This module centralizes the consistency checks used across the optimizer
//! interface:
//!
//! - **Option checks**: [`verify_tolerance`], [`verify_max_iters`] ensure the
//!   stopping criteria are usable before a run starts. Rejecting a zero
//!   tolerance here is what makes the optimizer's `2 × tolerance` sentinel
//!   sound: the convergence test is guaranteed to fail exactly once.
//! - **Policy checks**: [`verify_rate`], [`verify_decay_rate`],
//!   [`verify_momentum_rate`], [`verify_patience`] validate learning-rate
//!   policy parameters at construction.
//! - **State checks**: [`validate_initial_point`], [`validate_step`] enforce
//!   non-empty, finite, dimension-consistent vectors at the run boundary.
//!
//! These helpers standardize error reporting by returning domain-specific
//! [`OptError`] variants, making higher-level code more uniform.
use crate::optimization::{
    errors::{OptError, OptResult},
    types::{Point, Step},
};

/// Validate the convergence tolerance.
///
/// The value must be **finite** and **strictly positive**; zero is rejected
/// because the sentinel seeding of the first convergence check relies on
/// `2 × tolerance > tolerance`.
///
/// # Errors
/// Returns [`OptError::InvalidTolerance`] if the value is non-finite or ≤ 0.0.
pub fn verify_tolerance(tol: f64) -> OptResult<()> {
    if !tol.is_finite() {
        return Err(OptError::InvalidTolerance { tol, reason: "Tolerance must be finite." });
    }
    if tol <= 0.0 {
        return Err(OptError::InvalidTolerance { tol, reason: "Tolerance must be positive." });
    }
    Ok(())
}

/// Validate the iteration cap.
///
/// # Errors
/// Returns [`OptError::InvalidMaxIters`] if `max_iters == 0`.
pub fn verify_max_iters(max_iters: usize) -> OptResult<()> {
    if max_iters == 0 {
        return Err(OptError::InvalidMaxIters {
            max_iters,
            reason: "Maximum iterations must be greater than zero.",
        });
    }
    Ok(())
}

/// Validate a base learning rate (finite, strictly positive).
///
/// # Errors
/// Returns [`OptError::InvalidRate`] if the value is non-finite or ≤ 0.0.
pub fn verify_rate(rate: f64) -> OptResult<()> {
    if !rate.is_finite() {
        return Err(OptError::InvalidRate { rate, reason: "Learning rate must be finite." });
    }
    if rate <= 0.0 {
        return Err(OptError::InvalidRate { rate, reason: "Learning rate must be positive." });
    }
    Ok(())
}

/// Validate a decay rate (finite, non-negative).
///
/// # Errors
/// Returns [`OptError::InvalidDecayRate`] if the value is non-finite or < 0.0.
pub fn verify_decay_rate(rate: f64) -> OptResult<()> {
    if !rate.is_finite() {
        return Err(OptError::InvalidDecayRate { rate, reason: "Decay rate must be finite." });
    }
    if rate < 0.0 {
        return Err(OptError::InvalidDecayRate { rate, reason: "Decay rate must be non-negative." });
    }
    Ok(())
}

/// Validate a momentum rate (finite, non-negative).
///
/// # Errors
/// Returns [`OptError::InvalidMomentumRate`] if the value is non-finite or
/// < 0.0.
pub fn verify_momentum_rate(rate: f64) -> OptResult<()> {
    if !rate.is_finite() {
        return Err(OptError::InvalidMomentumRate {
            rate,
            reason: "Momentum rate must be finite.",
        });
    }
    if rate < 0.0 {
        return Err(OptError::InvalidMomentumRate {
            rate,
            reason: "Momentum rate must be non-negative.",
        });
    }
    Ok(())
}

/// Validate a history window length.
///
/// # Errors
/// Returns [`OptError::InvalidPatience`] if `patience == 0`.
pub fn verify_patience(patience: usize) -> OptResult<()> {
    if patience == 0 {
        return Err(OptError::InvalidPatience {
            patience,
            reason: "Patience must be at least 1.",
        });
    }
    Ok(())
}

/// Validate an initial point: non-empty with all finite coordinates.
///
/// # Errors
/// - [`OptError::EmptyInitialPoint`] if the point has no coordinates.
/// - [`OptError::NonFinitePoint`] with the index/value of the first
///   offending element.
pub fn validate_initial_point(point: &Point) -> OptResult<()> {
    if point.is_empty() {
        return Err(OptError::EmptyInitialPoint);
    }
    for (index, &value) in point.iter().enumerate() {
        if !value.is_finite() {
            return Err(OptError::NonFinitePoint {
                index,
                value,
                reason: "Point coordinates must be finite.",
            });
        }
    }
    Ok(())
}

/// Validate a step vector against the problem dimension and finiteness.
///
/// # Errors
/// - [`OptError::StepDimMismatch`] if the length does not match `dim`.
/// - [`OptError::NonFiniteStep`] with the index/value of the first
///   offending element.
pub fn validate_step(step: &Step, dim: usize) -> OptResult<()> {
    if step.len() != dim {
        return Err(OptError::StepDimMismatch { expected: dim, found: step.len() });
    }
    for (index, &value) in step.iter().enumerate() {
        if !value.is_finite() {
            return Err(OptError::NonFiniteStep {
                index,
                value,
                reason: "Step elements must be finite.",
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn tolerance_must_be_positive_and_finite() {
        assert!(verify_tolerance(1e-4).is_ok());
        assert!(matches!(verify_tolerance(0.0), Err(OptError::InvalidTolerance { .. })));
        assert!(matches!(verify_tolerance(-1.0), Err(OptError::InvalidTolerance { .. })));
        assert!(matches!(verify_tolerance(f64::NAN), Err(OptError::InvalidTolerance { .. })));
        assert!(matches!(
            verify_tolerance(f64::INFINITY),
            Err(OptError::InvalidTolerance { .. })
        ));
    }

    #[test]
    fn max_iters_must_be_positive() {
        assert!(verify_max_iters(1).is_ok());
        assert!(matches!(verify_max_iters(0), Err(OptError::InvalidMaxIters { .. })));
    }

    #[test]
    fn rate_checks_follow_their_domains() {
        assert!(verify_rate(0.1).is_ok());
        assert!(verify_rate(0.0).is_err());
        assert!(verify_decay_rate(0.0).is_ok());
        assert!(verify_decay_rate(-0.1).is_err());
        assert!(verify_momentum_rate(0.9).is_ok());
        assert!(verify_momentum_rate(-0.9).is_err());
        assert!(verify_patience(5).is_ok());
        assert!(verify_patience(0).is_err());
    }

    #[test]
    fn initial_point_must_be_non_empty_and_finite() {
        assert!(validate_initial_point(&array![1.0, 2.0]).is_ok());
        assert_eq!(
            validate_initial_point(&Point::zeros(0)).unwrap_err(),
            OptError::EmptyInitialPoint
        );
        assert!(matches!(
            validate_initial_point(&array![1.0, f64::NAN]).unwrap_err(),
            OptError::NonFinitePoint { index: 1, .. }
        ));
    }

    #[test]
    fn step_must_match_dimension_and_be_finite() {
        assert!(validate_step(&array![0.1, 0.2], 2).is_ok());
        assert_eq!(
            validate_step(&array![0.1], 2).unwrap_err(),
            OptError::StepDimMismatch { expected: 2, found: 1 }
        );
        assert!(matches!(
            validate_step(&array![0.1, f64::INFINITY], 2).unwrap_err(),
            OptError::NonFiniteStep { index: 1, .. }
        ));
    }
}
