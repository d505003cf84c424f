//! models — thin consumers of the optimizer through the loss seam.
//!
//! Purpose
//! -------
//! House concrete models that become fittable by implementing
//! [`traits::LossModel`]: a loss composed of dual-number operations plus an
//! initial parameter vector. The provided `fit` drives the generic
//! gradient-descent layer; models carry no optimizer wiring of their own.
//!
//! Key behaviors
//! -------------
//! - Validate datasets at construction and report problems as
//!   [`errors::ModelError`] values (funneled into the optimizer's error
//!   surface via `From` when a fit is running).
//! - Keep model state immutable during fitting: the optimizer owns all
//!   run-scoped mutation.
//!
//! Downstream usage
//! ----------------
//! - [`linear_regression::LinearRegression`] is the concrete model: a
//!   least-squares loss over an intercept and per-feature slopes.
//! - New models implement [`traits::LossModel`] and inherit `fit` for free.

pub mod errors;
pub mod linear_regression;
pub mod traits;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{ModelError, ModelResult};
pub use self::linear_regression::LinearRegression;
pub use self::traits::{FitOutcome, LossModel};
