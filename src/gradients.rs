//! Gradient extraction by derivative seeding.
//!
//! All three entrypoints share one contract: the caller's function takes a
//! slice of 0-d dual numbers (one per coordinate) and returns a scalar dual,
//! so it is differentiable by construction. [`partial_derivative`] seeds one
//! standard basis direction, [`gradient`] sweeps every coordinate (O(n)
//! function evaluations — the forward-mode scaling limit; no sub-computation
//! is shared between coordinates), and [`directional_derivative`] seeds an
//! arbitrary direction in a single evaluation.
use ndarray::Array1;

use crate::dual::errors::{DualError, DualResult};
use crate::dual::number::DualNumber;

/// Partial derivative of `func` with respect to coordinate `index`.
///
/// Builds one 0-d dual per coordinate, all with derivative 0 except the one
/// at `index`, which gets the standard basis seed 1. The returned dual's
/// value is `func(point)` and its derivative is `∂func/∂point[index]`.
///
/// # Errors
/// - [`DualError::IndexOutOfBounds`] if `index >= point.len()`.
/// - Any error produced by `func` itself.
pub fn partial_derivative<F>(point: &Array1<f64>, func: F, index: usize) -> DualResult<DualNumber>
where
    F: Fn(&[DualNumber]) -> DualResult<DualNumber>,
{
    if index >= point.len() {
        return Err(DualError::IndexOutOfBounds { index, len: point.len() });
    }
    let args: Vec<DualNumber> = point
        .iter()
        .enumerate()
        .map(|(i, &x)| DualNumber::scalar(x, if i == index { 1.0 } else { 0.0 }))
        .collect();
    func(&args)
}

/// Function value and full gradient of `func` at `point`.
///
/// Calls [`partial_derivative`] once per coordinate and collects the
/// derivatives in order; the function value is taken from the last call
/// (every call yields the same value). Costs `point.len()` evaluations of
/// `func`.
///
/// # Errors
/// - [`DualError::EmptyPoint`] if `point` has no coordinates.
/// - [`DualError::NonScalarOutput`] if `func` returns a shaped dual.
/// - Any error produced by `func` itself.
pub fn gradient<F>(point: &Array1<f64>, func: F) -> DualResult<(f64, Array1<f64>)>
where
    F: Fn(&[DualNumber]) -> DualResult<DualNumber>,
{
    if point.is_empty() {
        return Err(DualError::EmptyPoint);
    }
    let mut value = 0.0;
    let mut grad = Array1::zeros(point.len());
    for i in 0..point.len() {
        let y = partial_derivative(point, &func, i)?;
        value = y.scalar_value()?;
        grad[i] = y.scalar_derivative()?;
    }
    Ok((value, grad))
}

/// Directional derivative of `func` along the direction carried by
/// `dual_point`.
///
/// `dual_point` must be rank 1: its value is the point and its derivative is
/// the direction vector. Coordinates are paired into 0-d duals
/// `(value[i], derivative[i])` and `func` is evaluated once; the result's
/// derivative is the directional derivative. One evaluation regardless of
/// dimension.
///
/// # Errors
/// - [`DualError::NotAVector`] if `dual_point` is not rank 1.
/// - [`DualError::EmptyPoint`] if it has no coordinates.
/// - Any error produced by `func` itself.
pub fn directional_derivative<F>(dual_point: &DualNumber, func: F) -> DualResult<DualNumber>
where
    F: Fn(&[DualNumber]) -> DualResult<DualNumber>,
{
    if dual_point.ndim() != 1 {
        return Err(DualError::NotAVector { ndim: dual_point.ndim() });
    }
    if dual_point.shape()[0] == 0 {
        return Err(DualError::EmptyPoint);
    }
    let args: Vec<DualNumber> = dual_point
        .value()
        .iter()
        .zip(dual_point.derivative().iter())
        .map(|(&x, &dx)| DualNumber::scalar(x, dx))
        .collect();
    func(&args)
}
