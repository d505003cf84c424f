//! Learning-rate policies for gradient descent.
//!
//! A policy maps the optimizer's per-iteration context (point, gradient,
//! function value, iteration count) to a step vector. The four variants form
//! a closed set behind one capability surface — [`LearningRate::update`] —
//! dispatched by tag, and each variant owns exactly the mutable history it
//! needs:
//!
//! - [`LearningRate::Constant`]: `step = gradient × rate`, stateless.
//! - [`LearningRate::TimeDecay`]: rate decays as `initial / (1 + decay·n)`.
//! - [`LearningRate::GradientDecay`]: Barzilai–Borwein-style secant estimate
//!   from consecutive (point, gradient) pairs, averaged over a bounded
//!   history window.
//! - [`LearningRate::Momentum`]: a velocity accumulator; the returned step
//!   is the velocity itself, not `gradient × rate`.
//!
//! Policies are stateful across the calls of one optimization run. The
//! optimizer resets its policy at the start of every `fit`, so reuse across
//! runs never leaks history.
use std::collections::VecDeque;

use crate::optimization::{
    errors::OptResult,
    types::{Grad, Point, Step, DEFAULT_RATE},
    validation::{verify_decay_rate, verify_momentum_rate, verify_patience, verify_rate},
};

/// Default decay rate for [`LearningRate::TimeDecay`].
pub const DEFAULT_TIME_DECAY: f64 = 1e-2;

/// Default history window for [`LearningRate::GradientDecay`].
pub const DEFAULT_PATIENCE: usize = 5;

/// Default momentum rate for [`LearningRate::Momentum`].
pub const DEFAULT_MOMENTUM_RATE: f64 = 0.9;

/// Default decay rate for [`LearningRate::Momentum`].
pub const DEFAULT_MOMENTUM_DECAY: f64 = 1e-1;

/// Per-iteration context handed to a policy by the optimizer.
///
/// - `point`: current position in parameter space.
/// - `gradient`: gradient of the objective at `point`.
/// - `value`: objective value at `point`.
/// - `iteration`: iteration count before this step (0 on the first call).
#[derive(Debug, Clone, Copy)]
pub struct StepContext<'a> {
    pub point: &'a Point,
    pub gradient: &'a Grad,
    pub value: f64,
    pub iteration: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LearningRate {
    /// Fixed step scale; never mutates its rate.
    Constant { rate: f64 },

    /// `rate_n = initial_rate / (1 + decay_rate·n)`.
    TimeDecay {
        initial_rate: f64,
        decay_rate: f64,
        rate: f64,
    },

    /// Secant (Barzilai–Borwein) rate estimate averaged over the `patience`
    /// most recent values.
    ///
    /// When consecutive gradients are identical, `dot(Δg, Δg)` is exactly
    /// zero and the candidate estimate is undefined; the previous rate is
    /// reused for that iteration instead, so no NaN can enter the history.
    GradientDecay {
        initial_rate: f64,
        rate: f64,
        patience: usize,
        prev_point: Option<Point>,
        prev_gradient: Option<Grad>,
        history: VecDeque<f64>,
    },

    /// Velocity accumulator: `ν ← momentum_rate·ν + gradient·rate_n` with a
    /// time-decayed rate; the step is `ν` itself.
    Momentum {
        initial_rate: f64,
        rate: f64,
        momentum_rate: f64,
        decay_rate: f64,
        velocity: Option<Step>,
    },
}

impl LearningRate {
    /// Validated constant policy.
    ///
    /// # Errors
    /// [`crate::optimization::errors::OptError::InvalidRate`] for a
    /// non-finite or non-positive rate.
    pub fn constant(rate: f64) -> OptResult<Self> {
        verify_rate(rate)?;
        Ok(LearningRate::Constant { rate })
    }

    /// Validated time-decay policy.
    ///
    /// # Errors
    /// Rejects a non-positive/non-finite rate or a negative/non-finite
    /// decay rate.
    pub fn time_decay(initial_rate: f64, decay_rate: f64) -> OptResult<Self> {
        verify_rate(initial_rate)?;
        verify_decay_rate(decay_rate)?;
        Ok(LearningRate::TimeDecay { initial_rate, decay_rate, rate: initial_rate })
    }

    /// Validated gradient-decay (secant) policy.
    ///
    /// # Errors
    /// Rejects a non-positive/non-finite rate or a zero patience.
    pub fn gradient_decay(initial_rate: f64, patience: usize) -> OptResult<Self> {
        verify_rate(initial_rate)?;
        verify_patience(patience)?;
        Ok(LearningRate::GradientDecay {
            initial_rate,
            rate: initial_rate,
            patience,
            prev_point: None,
            prev_gradient: None,
            history: VecDeque::new(),
        })
    }

    /// Validated momentum policy.
    ///
    /// # Errors
    /// Rejects non-finite or out-of-domain rates.
    pub fn momentum(initial_rate: f64, momentum_rate: f64, decay_rate: f64) -> OptResult<Self> {
        verify_rate(initial_rate)?;
        verify_momentum_rate(momentum_rate)?;
        verify_decay_rate(decay_rate)?;
        Ok(LearningRate::Momentum {
            initial_rate,
            rate: initial_rate,
            momentum_rate,
            decay_rate,
            velocity: None,
        })
    }

    /// The rate the policy would currently scale a gradient by.
    pub fn rate(&self) -> f64 {
        match self {
            LearningRate::Constant { rate }
            | LearningRate::TimeDecay { rate, .. }
            | LearningRate::GradientDecay { rate, .. }
            | LearningRate::Momentum { rate, .. } => *rate,
        }
    }

    /// Compute the next step vector and advance the policy's state.
    pub fn update(&mut self, ctx: &StepContext<'_>) -> OptResult<Step> {
        match self {
            LearningRate::Constant { rate } => Ok(ctx.gradient * *rate),

            LearningRate::TimeDecay { initial_rate, decay_rate, rate } => {
                *rate = *initial_rate / (1.0 + *decay_rate * ctx.iteration as f64);
                Ok(ctx.gradient * *rate)
            }

            LearningRate::GradientDecay {
                initial_rate,
                rate,
                patience,
                prev_point,
                prev_gradient,
                history,
            } => {
                if ctx.iteration > 0 {
                    if let (Some(px), Some(pg)) = (prev_point.as_ref(), prev_gradient.as_ref()) {
                        let delta_x = ctx.point - px;
                        let delta_g = ctx.gradient - pg;
                        let denom = delta_g.dot(&delta_g);
                        if denom != 0.0 {
                            let candidate = (delta_x.dot(&delta_g) / denom).abs();
                            *rate = candidate.min(initial_rate.abs());
                        }
                        // denom == 0: identical consecutive gradients, reuse the rate
                        history.push_back(*rate);
                        if history.len() > *patience {
                            history.pop_front();
                        }
                        *rate = history.iter().sum::<f64>() / history.len() as f64;
                    }
                }
                *prev_point = Some(ctx.point.clone());
                *prev_gradient = Some(ctx.gradient.clone());
                Ok(ctx.gradient * *rate)
            }

            LearningRate::Momentum { initial_rate, rate, momentum_rate, decay_rate, velocity } => {
                *rate = *initial_rate / (1.0 + *decay_rate * ctx.iteration as f64);
                if ctx.iteration == 0 {
                    *velocity = Some(Step::zeros(ctx.gradient.len()));
                }
                let nu = velocity.get_or_insert_with(|| Step::zeros(ctx.gradient.len()));
                let next = nu.mapv(|v| v * *momentum_rate) + ctx.gradient * *rate;
                *nu = next.clone();
                Ok(next)
            }
        }
    }

    /// Clear all run-scoped state and restore the initial rate.
    pub fn reset(&mut self) {
        match self {
            LearningRate::Constant { .. } => {}
            LearningRate::TimeDecay { initial_rate, rate, .. } => {
                *rate = *initial_rate;
            }
            LearningRate::GradientDecay {
                initial_rate,
                rate,
                prev_point,
                prev_gradient,
                history,
                ..
            } => {
                *rate = *initial_rate;
                *prev_point = None;
                *prev_gradient = None;
                history.clear();
            }
            LearningRate::Momentum { initial_rate, rate, velocity, .. } => {
                *rate = *initial_rate;
                *velocity = None;
            }
        }
    }
}

/// Lift a bare float into a constant policy, unvalidated; prefer
/// [`LearningRate::constant`] when the value is untrusted.
impl From<f64> for LearningRate {
    fn from(rate: f64) -> Self {
        LearningRate::Constant { rate }
    }
}

impl Default for LearningRate {
    fn default() -> Self {
        LearningRate::Constant { rate: DEFAULT_RATE }
    }
}
