//! Elementary function library for dual numbers.
//!
//! Primitive rules ([`exp`], [`log`], [`sin`], [`cos`]) are written directly
//! with the chain rule; everything else is derived compositionally from them
//! and the arithmetic layer, so the product/quotient rules stay load-bearing:
//! [`tan`]/[`cot`]/[`csc`]/[`sec`] are quotients of sin/cos, the hyperbolic
//! family is built from [`exp`], and [`sigmoid`] is `1/(1 + exp(-d))` rather
//! than a hand-differentiated formula. [`matmul`] applies a constant linear
//! map to both components identically (`d(Mx) = M·dx`).
use ndarray::{Array2, ArrayView1, ArrayView2, Ix1, Ix2};

use crate::dual::errors::{DualError, DualResult};
use crate::dual::number::DualNumber;

/// `(e^x, e^x·dx)`.
pub fn exp(d: &DualNumber) -> DualNumber {
    d.chain(f64::exp, f64::exp)
}

/// `(ln x, dx/x)`.
///
/// # Errors
/// [`DualError::LogDomain`] if any element of the value is ≤ 0.
pub fn log(d: &DualNumber) -> DualResult<DualNumber> {
    if let Some(&bad) = d.value().iter().find(|&&v| v <= 0.0) {
        return Err(DualError::LogDomain { value: bad });
    }
    Ok(d.chain(f64::ln, f64::recip))
}

/// Logistic sigmoid `1/(1 + exp(-d))`.
///
/// Built compositionally from [`exp`] and the quotient rule so the
/// arithmetic layer does the differentiation.
pub fn sigmoid(d: &DualNumber) -> DualResult<DualNumber> {
    exp(&d.neg()).add_scalar(1.0).rdiv_scalar(1.0)
}

/// `(sin x, cos x·dx)`.
pub fn sin(d: &DualNumber) -> DualNumber {
    d.chain(f64::sin, f64::cos)
}

/// `(cos x, −sin x·dx)`.
pub fn cos(d: &DualNumber) -> DualNumber {
    d.chain(f64::cos, |v| -v.sin())
}

/// `sin/cos`.
///
/// # Errors
/// [`DualError::DivisionByZero`] where `cos x` is exactly zero.
pub fn tan(d: &DualNumber) -> DualResult<DualNumber> {
    sin(d).div(&cos(d))
}

/// `1/tan`.
pub fn cot(d: &DualNumber) -> DualResult<DualNumber> {
    tan(d)?.rdiv_scalar(1.0)
}

/// `1/sin`.
pub fn csc(d: &DualNumber) -> DualResult<DualNumber> {
    sin(d).rdiv_scalar(1.0)
}

/// `1/cos`.
pub fn sec(d: &DualNumber) -> DualResult<DualNumber> {
    cos(d).rdiv_scalar(1.0)
}

/// `(exp(d) − exp(−d)) / 2`.
pub fn sinh(d: &DualNumber) -> DualResult<DualNumber> {
    exp(d).sub(&exp(&d.neg()))?.div_scalar(2.0)
}

/// `(exp(d) + exp(−d)) / 2`.
pub fn cosh(d: &DualNumber) -> DualResult<DualNumber> {
    exp(d).add(&exp(&d.neg()))?.div_scalar(2.0)
}

/// `sinh/cosh`.
pub fn tanh(d: &DualNumber) -> DualResult<DualNumber> {
    sinh(d)?.div(&cosh(d)?)
}

/// `1/tanh`.
pub fn coth(d: &DualNumber) -> DualResult<DualNumber> {
    tanh(d)?.rdiv_scalar(1.0)
}

/// `1/sinh`.
pub fn csch(d: &DualNumber) -> DualResult<DualNumber> {
    sinh(d)?.rdiv_scalar(1.0)
}

/// `1/cosh`.
pub fn sech(d: &DualNumber) -> DualResult<DualNumber> {
    cosh(d)?.rdiv_scalar(1.0)
}

fn as_vector(a: &ndarray::ArrayD<f64>) -> DualResult<ArrayView1<'_, f64>> {
    a.view()
        .into_dimensionality::<Ix1>()
        .map_err(|_| DualError::UnsupportedRank { ndim: a.ndim(), reason: "expected rank 1" })
}

fn as_matrix(a: &ndarray::ArrayD<f64>) -> DualResult<ArrayView2<'_, f64>> {
    a.view()
        .into_dimensionality::<Ix2>()
        .map_err(|_| DualError::UnsupportedRank { ndim: a.ndim(), reason: "expected rank 2" })
}

/// Apply a constant (non-differentiable) matrix to a dual.
///
/// The linear-map differentiation rule: both the value and the derivative
/// are mapped through `matrix` identically. A 0-d operand scales the matrix;
/// rank-1 and rank-2 operands are ordinary matrix–vector and matrix–matrix
/// products.
///
/// # Errors
/// - [`DualError::MatMulShapeMismatch`] if the inner dimensions disagree.
/// - [`DualError::UnsupportedRank`] for operands of rank 3 or higher.
pub fn matmul(matrix: &Array2<f64>, d: &DualNumber) -> DualResult<DualNumber> {
    match d.ndim() {
        0 => {
            let x = d.scalar_value()?;
            let dx = d.scalar_derivative()?;
            DualNumber::new(matrix.mapv(|m| m * x).into_dyn(), matrix.mapv(|m| m * dx).into_dyn())
        }
        1 => {
            let x = as_vector(d.value())?;
            if matrix.ncols() != x.len() {
                return Err(DualError::MatMulShapeMismatch {
                    rows: matrix.nrows(),
                    cols: matrix.ncols(),
                    operand: d.shape().to_vec(),
                });
            }
            let dx = as_vector(d.derivative())?;
            DualNumber::new(matrix.dot(&x).into_dyn(), matrix.dot(&dx).into_dyn())
        }
        2 => {
            let x = as_matrix(d.value())?;
            if matrix.ncols() != x.nrows() {
                return Err(DualError::MatMulShapeMismatch {
                    rows: matrix.nrows(),
                    cols: matrix.ncols(),
                    operand: d.shape().to_vec(),
                });
            }
            let dx = as_matrix(d.derivative())?;
            DualNumber::new(matrix.dot(&x).into_dyn(), matrix.dot(&dx).into_dyn())
        }
        ndim => Err(DualError::UnsupportedRank {
            ndim,
            reason: "matmul supports operands of rank 0, 1, or 2",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests check every library function against its closed-form
    // derivative at (x, dx) = (2, 3), mirroring a calculus table: the derived
    // functions (tan family, hyperbolics, sigmoid) are validated against the
    // hand-differentiated formula even though they are built compositionally,
    // which is exactly what makes the quotient rule load-bearing.
    // Also covered: log/tan domain errors, matmul over ranks 0/1/2, and the
    // chain-rule round trip exp(sin(d)).
    // -------------------------------------------------------------------------

    const X: f64 = 2.0;
    const DX: f64 = 3.0;

    fn d() -> DualNumber {
        DualNumber::scalar(X, DX)
    }

    fn assert_dual_close(actual: &DualNumber, value: f64, derivative: f64) {
        assert_relative_eq!(actual.scalar_value().unwrap(), value, max_relative = 1e-12);
        assert_relative_eq!(actual.scalar_derivative().unwrap(), derivative, max_relative = 1e-12);
    }

    #[test]
    fn exp_rule() {
        assert_dual_close(&exp(&d()), X.exp(), X.exp() * DX);
    }

    #[test]
    fn log_rule() {
        assert_dual_close(&log(&d()).unwrap(), X.ln(), DX / X);
    }

    #[test]
    fn log_rejects_non_positive_values() {
        let err = log(&DualNumber::scalar(0.0, 1.0)).unwrap_err();
        assert_eq!(err, DualError::LogDomain { value: 0.0 });
        assert!(log(&DualNumber::scalar(-1.5, 1.0)).is_err());
    }

    #[test]
    // Purpose
    // -------
    // sigmoid is assembled from exp and the quotient rule; its derivative
    // must still match the textbook s·(1 − s)·dx.
    fn sigmoid_matches_closed_form() {
        let s = 1.0 / (1.0 + (-X).exp());
        assert_dual_close(&sigmoid(&d()).unwrap(), s, s * (1.0 - s) * DX);
    }

    #[test]
    fn sin_and_cos_rules() {
        assert_dual_close(&sin(&d()), X.sin(), X.cos() * DX);
        assert_dual_close(&cos(&d()), X.cos(), -X.sin() * DX);
    }

    #[test]
    fn tan_family_matches_closed_forms() {
        assert_dual_close(&tan(&d()).unwrap(), X.tan(), (1.0 / X.cos()).powi(2) * DX);
        assert_dual_close(&cot(&d()).unwrap(), 1.0 / X.tan(), -(1.0 / X.sin()).powi(2) * DX);
        assert_dual_close(
            &csc(&d()).unwrap(),
            1.0 / X.sin(),
            -(1.0 / X.sin()) * (1.0 / X.tan()) * DX,
        );
        assert_dual_close(&sec(&d()).unwrap(), 1.0 / X.cos(), (1.0 / X.cos()) * X.tan() * DX);
    }

    #[test]
    fn hyperbolic_family_matches_closed_forms() {
        assert_dual_close(&sinh(&d()).unwrap(), X.sinh(), X.cosh() * DX);
        assert_dual_close(&cosh(&d()).unwrap(), X.cosh(), X.sinh() * DX);
        assert_dual_close(&tanh(&d()).unwrap(), X.tanh(), (1.0 / X.cosh()).powi(2) * DX);
        assert_dual_close(&coth(&d()).unwrap(), 1.0 / X.tanh(), -(1.0 / X.sinh()).powi(2) * DX);
        assert_dual_close(
            &csch(&d()).unwrap(),
            1.0 / X.sinh(),
            -(1.0 / X.sinh()) * (1.0 / X.tanh()) * DX,
        );
        assert_dual_close(
            &sech(&d()).unwrap(),
            1.0 / X.cosh(),
            -(1.0 / X.cosh()) * X.tanh() * DX,
        );
    }

    #[test]
    // Purpose
    // -------
    // Chain-rule round trip: exp(sin(2, 3)) must carry value e^sin(2) and
    // derivative e^sin(2)·cos(2)·3 within floating tolerance.
    fn chain_rule_round_trip() {
        let outer = exp(&sin(&d()));
        assert_dual_close(&outer, X.sin().exp(), X.sin().exp() * X.cos() * DX);
    }

    #[test]
    fn matmul_scales_a_zero_dim_operand() {
        let m = array![[1.0, 2.0], [3.0, 4.0]];
        let out = matmul(&m, &DualNumber::scalar(2.0, 0.5)).unwrap();
        assert_eq!(out.value(), &array![[2.0, 4.0], [6.0, 8.0]].into_dyn());
        assert_eq!(out.derivative(), &array![[0.5, 1.0], [1.5, 2.0]].into_dyn());
    }

    #[test]
    fn matmul_maps_value_and_derivative_identically() {
        let m = array![[1.0, 0.0], [0.0, 2.0], [1.0, 1.0]];
        let d = DualNumber::new(array![3.0, 4.0].into_dyn(), array![1.0, -1.0].into_dyn()).unwrap();
        let out = matmul(&m, &d).unwrap();
        assert_eq!(out.value(), &array![3.0, 8.0, 7.0].into_dyn());
        assert_eq!(out.derivative(), &array![1.0, -2.0, 0.0].into_dyn());
    }

    #[test]
    fn matmul_handles_rank_two_operands() {
        let m = array![[2.0, 0.0], [0.0, 2.0]];
        let d = DualNumber::new(
            array![[1.0, 2.0], [3.0, 4.0]].into_dyn(),
            array![[0.0, 1.0], [1.0, 0.0]].into_dyn(),
        )
        .unwrap();
        let out = matmul(&m, &d).unwrap();
        assert_eq!(out.value(), &array![[2.0, 4.0], [6.0, 8.0]].into_dyn());
        assert_eq!(out.derivative(), &array![[0.0, 2.0], [2.0, 0.0]].into_dyn());
    }

    #[test]
    fn matmul_rejects_incompatible_and_unsupported_shapes() {
        let m = array![[1.0, 2.0]];
        let wrong_len =
            DualNumber::new(array![1.0, 2.0, 3.0].into_dyn(), array![0.0, 0.0, 0.0].into_dyn())
                .unwrap();
        assert!(matches!(
            matmul(&m, &wrong_len).unwrap_err(),
            DualError::MatMulShapeMismatch { rows: 1, cols: 2, .. }
        ));

        let rank3 = DualNumber::constant(ndarray::ArrayD::zeros(ndarray::IxDyn(&[2, 2, 2])));
        assert!(matches!(
            matmul(&m, &rank3).unwrap_err(),
            DualError::UnsupportedRank { ndim: 3, .. }
        ));
    }
}
