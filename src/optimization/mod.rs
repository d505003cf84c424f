//! optimization — gradient descent, learning-rate policies, and a unified
//! error surface.
//!
//! Purpose
//! -------
//! Provide the iterative-minimization layer of the crate: a gradient-descent
//! state machine driven by dual-number gradient sweeps, a closed family of
//! learning-rate policies behind one `update(context) -> step` capability,
//! and a single error/result surface. Callers supply an objective written in
//! dual-number operations, an initial point, and options, and obtain the
//! minimizing point plus diagnostics.
//!
//! Key behaviors
//! -------------
//! - Expose a high-level entrypoint ([`descent::gradient_descent`]) and a
//!   reusable state machine ([`descent::GradientDescent`]) for repeated
//!   runs.
//! - Supply four learning-rate policies (constant, time decay, secant-based
//!   gradient decay, momentum) with run-scoped mutable state and an
//!   always-reset-on-entry guarantee.
//! - Normalize configuration issues, numerical failures, and dual-arithmetic
//!   errors into a single enum ([`errors::OptError`]) with a common result
//!   alias ([`errors::OptResult`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - The objective is differentiable by construction: it is expressed purely
//!   in dual-number arithmetic, so the gradient sweep is exact, not a
//!   finite-difference approximation.
//! - Options are validated at construction ([`descent::DescentOptions`]);
//!   in particular the tolerance is strictly positive, which makes the
//!   first-iteration sentinel sound.
//! - Exceeding the iteration cap is a normal terminal state
//!   ([`descent::DescentStatus::MaxItersReached`]), reported in the outcome,
//!   never raised as an error.
//! - Each run owns its policy instance (cloned from the options and reset),
//!   so concurrent or repeated fits cannot share mutable history.
//!
//! Conventions
//! -----------
//! - Points, gradients, and steps use the `ndarray`-based aliases in
//!   [`types`] ([`types::Point`], [`types::Grad`], [`types::Step`]), all of
//!   the problem dimension.
//! - The current point is carried as a dual number whose derivative slot
//!   holds the latest step vector; its Euclidean norm is the convergence
//!   signal.
//! - Public entrypoints that can fail return [`errors::OptResult`]; callers
//!   never see raw dual-arithmetic errors.
//! - Verbose mode prints per-iteration diagnostics to stderr and never
//!   alters control flow or error semantics.
//!
//! Downstream usage
//! ----------------
//! - Model code implements a loss over dual numbers and calls
//!   [`descent::gradient_descent`] (directly or through the model layer's
//!   `fit`) with a [`descent::DescentOptions`] configuration.
//! - Front-ends import the curated surface via `optimization::prelude::*`.
//!
//! Testing notes
//! -------------
//! - Unit tests in the submodules focus on local concerns:
//!   - `learning_rates`: per-policy update sequences, history bounding,
//!     degenerate-denominator handling, resets.
//!   - `descent`: convergence scenarios, sentinel behavior, cap reporting,
//!     error propagation.
//!   - `validation`: rejection rules for options, rates, points, and steps.
//! - Integration tests exercise end-to-end fits, verifying that every policy
//!   reaches the documented targets on a small regression problem.

pub mod descent;
pub mod errors;
pub mod learning_rates;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::descent::{
    gradient_descent, DescentOptions, DescentOutcome, DescentStatus, GradientDescent,
};
pub use self::errors::{OptError, OptResult};
pub use self::learning_rates::{LearningRate, StepContext};
pub use self::types::{Grad, Point, Step};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_autodiff::optimization::prelude::*;
//
// to import the main optimization surface in a single line.

pub mod prelude {
    pub use super::descent::{
        gradient_descent, DescentOptions, DescentOutcome, DescentStatus, GradientDescent,
    };
    pub use super::errors::{OptError, OptResult};
    pub use super::learning_rates::{LearningRate, StepContext};
    pub use super::types::{Grad, Point, Step};
}
