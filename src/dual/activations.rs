//! Activation functions, implemented for dual numbers.
//!
//! Pure compositions of the arithmetic primitives; no new differentiation
//! rules are introduced here.
use crate::dual::errors::DualResult;
use crate::dual::number::DualNumber;

/// Default `alpha` for [`isru`].
pub const DEFAULT_ISRU_ALPHA: f64 = 1.0;

/// Identity activation.
pub fn identity(d: &DualNumber) -> DualNumber {
    d.clone()
}

/// Softsign activation: `d / (1 + |d|)`.
pub fn softsign(d: &DualNumber) -> DualResult<DualNumber> {
    d.div(&d.abs().add_scalar(1.0))
}

/// Inverse square root unit: `d / (1 + alpha·d²)^0.5`.
pub fn isru(d: &DualNumber, alpha: f64) -> DualResult<DualNumber> {
    d.div(&d.powf(2.0).mul_scalar(alpha).add_scalar(1.0).powf(0.5))
}

/// [`isru`] with `alpha = 1.0`.
pub fn isru_default(d: &DualNumber) -> DualResult<DualNumber> {
    isru(d, DEFAULT_ISRU_ALPHA)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const X: f64 = 2.0;
    const DX: f64 = 3.0;

    fn assert_dual_close(actual: &DualNumber, value: f64, derivative: f64) {
        assert_relative_eq!(actual.scalar_value().unwrap(), value, max_relative = 1e-12);
        assert_relative_eq!(actual.scalar_derivative().unwrap(), derivative, max_relative = 1e-12);
    }

    #[test]
    fn identity_passes_through() {
        let d = DualNumber::scalar(X, DX);
        assert_eq!(identity(&d), d);
    }

    #[test]
    fn softsign_matches_closed_form() {
        let d = DualNumber::scalar(X, DX);
        assert_dual_close(
            &softsign(&d).unwrap(),
            X / (1.0 + X.abs()),
            1.0 / (1.0 + X.abs()).powi(2) * DX,
        );
    }

    #[test]
    fn isru_matches_closed_form() {
        let d = DualNumber::scalar(X, DX);
        let alpha = 4.0;
        assert_dual_close(
            &isru(&d, alpha).unwrap(),
            X / (1.0 + alpha * X * X).sqrt(),
            1.0 / (1.0 + alpha * X * X).powf(1.5) * DX,
        );
    }

    #[test]
    fn isru_default_uses_unit_alpha() {
        let d = DualNumber::scalar(X, DX);
        assert_eq!(isru_default(&d).unwrap(), isru(&d, 1.0).unwrap());
    }
}
