//! optimization::types — shared numeric aliases and default constants.
//!
//! Centralize the vector types and documented defaults used by the
//! gradient-descent layer so the rest of the optimization code can stay
//! agnostic to `ndarray` specifics. Points, gradients, and steps all share
//! one length (the problem dimension) and are conceptually column vectors.
use ndarray::Array1;

/// Point in parameter space, one `f64` per coordinate.
pub type Point = Array1<f64>;

/// Gradient vector, matching the shape of [`Point`].
pub type Grad = Array1<f64>;

/// Step vector produced by a learning-rate policy, matching [`Point`].
pub type Step = Array1<f64>;

/// Default convergence tolerance on the step norm.
pub const DEFAULT_TOLERANCE: f64 = 1e-2;

/// Default hard cap on descent iterations.
pub const DEFAULT_MAX_ITERS: usize = 10;

/// Default constant learning rate.
pub const DEFAULT_RATE: f64 = 0.1;
