//! Gradient-descent optimizer driven by dual-number gradients.
//!
//! The optimizer's working point is a [`DualNumber`] whose derivative slot
//! holds the most recent **step vector**, not a mathematical derivative:
//! [`DualNumber::derivative_norm`] over that slot is the convergence signal.
//! Each iteration evaluates the full gradient (one forward sweep per
//! coordinate), asks the learning-rate policy for a step, and subtracts it.
//! The loop runs while `iterations < max_iters` and the last step norm
//! exceeds the tolerance; hitting the cap is a normal, reportable terminal
//! state. No retries and no line search — a divergent rate choice is the
//! caller's responsibility.
use ndarray::Ix1;

use crate::dual::errors::DualResult;
use crate::dual::number::DualNumber;
use crate::gradients::gradient;
use crate::optimization::{
    errors::{OptError, OptResult},
    learning_rates::{LearningRate, StepContext},
    types::{Grad, Point, DEFAULT_MAX_ITERS, DEFAULT_TOLERANCE},
    validation::{validate_initial_point, validate_step, verify_max_iters, verify_tolerance},
};

/// Terminal and transient states of a descent run.
///
/// `MaxItersReached` is a normal outcome, not an error: the run report
/// carries it so callers can decide whether to continue with a fresh
/// budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescentStatus {
    Initialized,
    Iterating,
    Converged,
    MaxItersReached,
}

/// Optimizer-level configuration.
///
/// Fields:
/// - `tolerance`: convergence threshold on the step norm.
/// - `max_iters`: hard cap on iterations.
/// - `learning_rate`: policy instance; cloned and reset for each run.
/// - `verbose`: if `true`, prints one progress line per iteration to stderr.
///
/// Default: `tolerance = 1e-2`, `max_iters = 10`, constant rate `0.1`,
/// `verbose = false`.
#[derive(Debug, Clone, PartialEq)]
pub struct DescentOptions {
    pub tolerance: f64,
    pub max_iters: usize,
    pub learning_rate: LearningRate,
    pub verbose: bool,
}

impl DescentOptions {
    /// Construct validated options.
    ///
    /// # Rules
    /// - `tolerance` must be **finite and strictly positive** (a zero
    ///   tolerance would defeat the sentinel that forces the first
    ///   iteration).
    /// - `max_iters` must be `> 0`.
    ///
    /// # Errors
    /// - [`OptError::InvalidTolerance`] for non-finite or non-positive
    ///   tolerances.
    /// - [`OptError::InvalidMaxIters`] if `max_iters == 0`.
    pub fn new(
        tolerance: f64, max_iters: usize, learning_rate: LearningRate, verbose: bool,
    ) -> OptResult<Self> {
        verify_tolerance(tolerance)?;
        verify_max_iters(max_iters)?;
        Ok(Self { tolerance, max_iters, learning_rate, verbose })
    }
}

impl Default for DescentOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iters: DEFAULT_MAX_ITERS,
            learning_rate: LearningRate::default(),
            verbose: false,
        }
    }
}

/// Canonical result returned by a descent run.
///
/// - `point`: final position, with the last step vector in the derivative
///   slot.
/// - `value`: objective value from the final iteration's gradient sweep.
/// - `gradient`: gradient from that same sweep.
/// - `status`: [`DescentStatus::Converged`] or
///   [`DescentStatus::MaxItersReached`].
/// - `iterations`: number of steps performed.
/// - `step_norm`: Euclidean norm of the last step.
#[derive(Debug, Clone, PartialEq)]
pub struct DescentOutcome {
    pub point: DualNumber,
    pub value: f64,
    pub gradient: Grad,
    pub status: DescentStatus,
    pub iterations: usize,
    pub step_norm: f64,
}

impl DescentOutcome {
    /// The final position as a plain vector.
    pub fn final_point(&self) -> OptResult<Point> {
        point_vector(&self.point)
    }
}

fn point_vector(dual: &DualNumber) -> OptResult<Point> {
    dual.value()
        .view()
        .into_dimensionality::<Ix1>()
        .map(|v| v.to_owned())
        .map_err(|_| OptError::DualFailure {
            text: format!("expected a rank-1 point, got rank {}", dual.ndim()),
        })
}

/// Iterative minimizer for a dual-number objective.
///
/// Holds the objective plus run-scoped state (current point, last value and
/// gradient, iteration count, status). One instance can run `fit` repeatedly;
/// every call starts from a clean slate — the policy is cloned from the
/// options and reset, so no history leaks between runs.
pub struct GradientDescent<F> {
    func: F,
    value: Option<f64>,
    gradient: Option<Grad>,
    iterations: usize,
    status: DescentStatus,
}

impl<F> GradientDescent<F>
where
    F: Fn(&[DualNumber]) -> DualResult<DualNumber>,
{
    pub fn new(func: F) -> Self {
        Self {
            func,
            value: None,
            gradient: None,
            iterations: 0,
            status: DescentStatus::Initialized,
        }
    }

    pub fn status(&self) -> DescentStatus {
        self.status
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Minimize the objective from `initial`.
    ///
    /// Seeds the working point with an artificial derivative of
    /// `2 × tolerance` so the convergence check fails on the first test and
    /// at least one iteration runs (sound because the options validated
    /// `tolerance > 0`). Terminates when the step norm falls to the
    /// tolerance or the iteration cap is hit.
    ///
    /// # Errors
    /// - Point/step validation failures ([`OptError::EmptyInitialPoint`],
    ///   [`OptError::NonFinitePoint`], [`OptError::NonFiniteStep`], ...).
    /// - Any error surfaced by the objective through the gradient sweep
    ///   (division by zero, log domain, shape mismatches).
    pub fn fit(&mut self, initial: &Point, opts: &DescentOptions) -> OptResult<DescentOutcome> {
        validate_initial_point(initial)?;
        let mut policy = opts.learning_rate.clone();
        policy.reset();
        self.iterations = 0;
        self.value = None;
        self.gradient = None;

        let sentinel = Point::from_elem(initial.len(), 2.0 * opts.tolerance);
        let mut current = DualNumber::new(initial.clone().into_dyn(), sentinel.into_dyn())
            .map_err(OptError::from)?;

        self.status = DescentStatus::Iterating;
        while self.iterations < opts.max_iters && current.derivative_norm() > opts.tolerance {
            current = self.step(&current, &mut policy)?;
            self.iterations += 1;
            if opts.verbose {
                eprintln!(
                    "iter {}: x = {}, ||step|| = {:.6e}",
                    self.iterations,
                    current,
                    current.derivative_norm()
                );
            }
        }
        self.status = if current.derivative_norm() <= opts.tolerance {
            DescentStatus::Converged
        } else {
            DescentStatus::MaxItersReached
        };

        let value = self.value.ok_or(OptError::UnknownError)?;
        let gradient = self.gradient.clone().ok_or(OptError::UnknownError)?;
        let step_norm = current.derivative_norm();
        Ok(DescentOutcome {
            point: current,
            value,
            gradient,
            status: self.status,
            iterations: self.iterations,
            step_norm,
        })
    }

    /// One descent iteration: gradient sweep, policy step, point update.
    fn step(&mut self, current: &DualNumber, policy: &mut LearningRate) -> OptResult<DualNumber> {
        let x = point_vector(current)?;
        let (value, grad) = gradient(&x, &self.func)?;
        let ctx = StepContext {
            point: &x,
            gradient: &grad,
            value,
            iteration: self.iterations,
        };
        let step = policy.update(&ctx)?;
        validate_step(&step, x.len())?;
        let next_x = &x - &step;
        self.value = Some(value);
        self.gradient = Some(grad);
        DualNumber::new(next_x.into_dyn(), step.into_dyn()).map_err(OptError::from)
    }
}

/// Estimate the minimizer of `func` by gradient descent.
///
/// Thin wrapper over [`GradientDescent`] for one-shot runs: builds the
/// optimizer, fits from `initial`, and returns the outcome (final point with
/// last step vector, final value, final gradient, terminal status).
pub fn gradient_descent<F>(
    initial: &Point, func: F, opts: &DescentOptions,
) -> OptResult<DescentOutcome>
where
    F: Fn(&[DualNumber]) -> DualResult<DualNumber>,
{
    let mut descent = GradientDescent::new(func);
    descent.fit(initial, opts)
}
