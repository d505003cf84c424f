//! Model-to-optimizer seam.
//!
//! - [`LossModel`]: trait a model implements to become fittable — a loss
//!   over dual-number parameters plus an initial parameter vector.
//! - [`FitOutcome`]: normalized result returned by the provided `fit`.
//!
//! Convention: the loss must be composed purely of dual-number operations so
//! it is differentiable by construction; the generic `fit` then drives
//! gradient descent over it with no model-specific wiring.
use crate::dual::errors::DualResult;
use crate::dual::number::DualNumber;
use crate::optimization::{
    descent::{gradient_descent, DescentOptions, DescentStatus},
    errors::OptResult,
    types::{Grad, Point},
};

/// Learned parameters and diagnostics from a model fit.
///
/// - `params`: parameter vector at the end of the run.
/// - `loss`: loss value from the final iteration's gradient sweep.
/// - `gradient`: loss gradient from that same sweep.
/// - `status`: terminal optimizer state.
/// - `iterations`: descent iterations performed.
#[derive(Debug, Clone, PartialEq)]
pub struct FitOutcome {
    pub params: Point,
    pub loss: f64,
    pub gradient: Grad,
    pub status: DescentStatus,
    pub iterations: usize,
}

/// User-implemented loss interface for fittable models.
///
/// Required:
/// - `loss(&[DualNumber]) -> DualResult<DualNumber>`: evaluate the loss at a
///   parameter vector, one 0-d dual per parameter, returning a scalar dual.
/// - `init_params() -> Point`: starting parameter vector for `fit`.
///
/// Provided:
/// - `fit(&DescentOptions) -> OptResult<FitOutcome>`: run gradient descent
///   on the loss from `init_params`. The optimizer clones and resets the
///   options' learning-rate policy, so repeated fits are independent.
pub trait LossModel {
    fn loss(&self, params: &[DualNumber]) -> DualResult<DualNumber>;

    fn init_params(&self) -> Point;

    fn fit(&self, opts: &DescentOptions) -> OptResult<FitOutcome> {
        let outcome = gradient_descent(&self.init_params(), |p| self.loss(p), opts)?;
        let params = outcome.final_point()?;
        Ok(FitOutcome {
            params,
            loss: outcome.value,
            gradient: outcome.gradient,
            status: outcome.status,
            iterations: outcome.iterations,
        })
    }
}
