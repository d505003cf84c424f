//! Integration tests for the descent-and-regression pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end path: dual-number objectives, gradient
//!   extraction, learning-rate policies, the descent loop, and the model
//!   `fit` seam working together.
//! - Exercise realistic fitting regimes (noisy data, policy-specific
//!   hyperparameters) rather than toy edge cases only.
//!
//! Coverage
//! --------
//! - `optimization::descent`:
//!   - Univariate and bivariate convergence through the public wrapper.
//! - `optimization::learning_rates`:
//!   - A 2-parameter linear regression fitted to within 0.1 of the true
//!     slope/intercept under each of Constant, TimeDecay, GradientDecay,
//!     and Momentum.
//! - `models::linear_regression`:
//!   - Construction from a feature table and labels, explicit starting
//!     parameters, and `FitOutcome` reporting.
//!
//! Exclusions
//! ----------
//! - Fine-grained validation of the arithmetic rules, policy state
//!   machines, and option rejection — covered by unit tests next to each
//!   module.
//! - Divergence under deliberately bad rates; the crate documents that as
//!   caller responsibility.
use approx::assert_abs_diff_eq;
use ndarray::{array, Array1, Array2};
use rust_autodiff::dual::prelude::*;
use rust_autodiff::models::{LinearRegression, LossModel};
use rust_autodiff::optimization::prelude::*;

const TRUE_SLOPE: f64 = 2.5;
const TRUE_INTERCEPT: f64 = 4.0;

/// Seven noisy points on `y = 2.5·x + 4`, noise summing to zero so the
/// least-squares optimum sits close to the true parameters.
fn regression_problem() -> LinearRegression {
    let noise = [0.1, -0.1, -0.1, 0.1, -0.1, 0.0, 0.1];
    let x: Vec<f64> = (0..7).map(f64::from).collect();
    let y: Vec<f64> =
        x.iter().zip(noise.iter()).map(|(x, n)| TRUE_SLOPE * x + TRUE_INTERCEPT + n).collect();
    let features = Array2::from_shape_vec((7, 1), x).expect("7×1 feature table");
    LinearRegression::new(features, Array1::from_vec(y), Some(array![0.0, 1.0]))
        .expect("validated regression problem")
}

/// Fit the shared problem under one policy and assert the learned
/// parameters land within 0.1 of the true intercept and slope.
fn assert_policy_recovers_line(policy: LearningRate, max_iters: usize) {
    let opts = DescentOptions::new(1e-3, max_iters, policy, false).expect("validated options");
    let outcome = regression_problem().fit(&opts).expect("fit should succeed");
    assert_abs_diff_eq!(outcome.params[0], TRUE_INTERCEPT, epsilon = 0.1);
    assert_abs_diff_eq!(outcome.params[1], TRUE_SLOPE, epsilon = 0.1);
    assert_eq!(outcome.status, DescentStatus::Converged);
    assert!(outcome.iterations <= max_iters);
}

#[test]
fn univariate_descent_through_the_public_wrapper() {
    let func = |d: &[DualNumber]| -> DualResult<DualNumber> {
        Ok(d[0].sub_scalar(3.0).powf(2.0).add_scalar(5.0))
    };
    let opts =
        DescentOptions::new(1e-4, 100, LearningRate::constant(0.6).unwrap(), false).unwrap();
    let outcome = gradient_descent(&array![10.0], func, &opts).unwrap();
    let x = outcome.final_point().unwrap();
    assert_abs_diff_eq!(x[0], 3.0, epsilon = 0.05);
    assert_abs_diff_eq!(outcome.value, 5.0, epsilon = 0.05);
    assert_eq!(outcome.status, DescentStatus::Converged);
}

#[test]
fn bivariate_descent_through_the_public_wrapper() {
    let func = |d: &[DualNumber]| -> DualResult<DualNumber> {
        let first = d[0].sub_scalar(2.0).powf(2.0);
        let second = d[1].add_scalar(3.0).powf(2.0);
        Ok(first.add(&second)?.add_scalar(8.0))
    };
    let opts =
        DescentOptions::new(1e-2, 100, LearningRate::constant(0.6).unwrap(), false).unwrap();
    let outcome = gradient_descent(&array![10.0, 12.0], func, &opts).unwrap();
    let x = outcome.final_point().unwrap();
    assert_abs_diff_eq!(x[0], 2.0, epsilon = 0.05);
    assert_abs_diff_eq!(x[1], -3.0, epsilon = 0.05);
    assert_abs_diff_eq!(outcome.value, 8.0, epsilon = 0.05);
}

#[test]
fn constant_rate_recovers_the_line() {
    assert_policy_recovers_line(LearningRate::constant(0.005).unwrap(), 1000);
}

#[test]
fn time_decay_recovers_the_line() {
    assert_policy_recovers_line(LearningRate::time_decay(0.005, 1e-3).unwrap(), 2000);
}

#[test]
fn gradient_decay_recovers_the_line() {
    assert_policy_recovers_line(LearningRate::gradient_decay(0.01, 5).unwrap(), 2000);
}

#[test]
fn momentum_recovers_the_line() {
    assert_policy_recovers_line(LearningRate::momentum(0.001, 0.9, 1e-3).unwrap(), 2000);
}
