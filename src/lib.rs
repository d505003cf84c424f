//! rust_autodiff — forward-mode automatic differentiation via dual numbers.
//!
//! Purpose
//! -------
//! Serve as the crate root for a small numerical stack built in three
//! layers: dual-number arithmetic implementing exact differentiation rules,
//! gradient extraction by derivative seeding, and a gradient-descent
//! optimizer with pluggable learning-rate policies. A least-squares
//! linear-regression model sits on top as a thin consumer of the optimizer.
//!
//! Key behaviors
//! -------------
//! - Re-export the core modules (`dual`, `gradients`, `optimization`,
//!   `models`) as the public crate surface.
//! - Propagate derivatives forward through caller-supplied functions one
//!   seed direction at a time; a full gradient costs one function
//!   evaluation per input dimension.
//! - Keep every operation eager and tuple-algebraic: there is no
//!   computation graph, no tape, and no reverse-mode pass.
//!
//! Invariants & assumptions
//! ------------------------
//! - A dual number's value and derivative always share one shape; mismatched
//!   construction fails immediately and is never broadcast away.
//! - Objectives and losses are written purely in dual-number operations, so
//!   they are differentiable by construction.
//! - All numerical containers are `ndarray` arrays over `f64`.
//!
//! Conventions
//! -----------
//! - Fallible operations return crate result aliases (`DualResult`,
//!   `OptResult`, `ModelResult`); errors are typed enums and nothing
//!   intentionally panics.
//! - Lower-layer errors funnel into the optimizer's `OptError` surface via
//!   `From` conversions, so callers of `fit`/`gradient_descent` handle a
//!   single error type.
//! - The optimizer stores its latest step vector in the derivative slot of
//!   its current point; the step norm is the convergence signal.
//!
//! Downstream usage
//! ----------------
//! - Write an objective over `&[DualNumber]` and call
//!   `optimization::gradient_descent`, or implement `models::LossModel` and
//!   call `fit`.
//! - For derivative extraction without optimization, use the `gradients`
//!   module directly.
//!
//! Testing notes
//! -------------
//! - Unit tests live beside each module; differentiation rules are checked
//!   against closed-form fixtures.
//! - `tests/integration_fit_pipeline.rs` exercises the full
//!   descent-and-regression pipeline under every learning-rate policy.

pub mod dual;
pub mod gradients;
pub mod models;
pub mod optimization;
