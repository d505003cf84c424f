//! dual — forward-mode automatic differentiation via dual numbers.
//!
//! Purpose
//! -------
//! Provide the numeric core of the crate: a [`DualNumber`] type pairing a
//! value with its derivative, arithmetic that propagates exact
//! differentiation rules (sum, product, quotient, power, chain), and a
//! library of elementary and activation functions expressed in terms of that
//! arithmetic.
//!
//! Key behaviors
//! -------------
//! - Enforce the one hard invariant of the crate: value and derivative share
//!   a single shape at all times. Construction with mismatched shapes fails
//!   immediately with [`DualError::ShapeMismatch`]; nothing is broadcast.
//! - Normalize constants through a single lift factory before any binary
//!   rule is applied, so `c + d` is exactly `lift(c) + d` for every
//!   operation, reflected forms included.
//! - Express derived functions (tan family, hyperbolics, sigmoid,
//!   activations) compositionally from the primitive rules, so the
//!   arithmetic layer is exercised rather than bypassed.
//!
//! Invariants & assumptions
//! ------------------------
//! - All containers are `ndarray` arrays over `f64`; 0-d arrays represent
//!   scalars so one type covers every rank.
//! - Operations are pure: operands are never mutated, every result is a
//!   fresh dual. The only mutation point is [`DualNumber::set_derivative`],
//!   which revalidates the shape invariant.
//! - Domain violations (log of a non-positive value, division by an exact
//!   zero) surface as typed [`DualError`] values, never as panics or silent
//!   NaN injection.
//!
//! Downstream usage
//! ----------------
//! - `gradients` seeds dual numbers through caller-supplied functions to
//!   extract partial, full, and directional derivatives.
//! - `optimization` consumes [`DualNumber::derivative_norm`] as its
//!   convergence signal and stores the latest step vector in the derivative
//!   slot of its current point.
//! - `models` compose losses out of these primitives so they are
//!   differentiable by construction.
//!
//! Testing notes
//! -------------
//! - Unit tests sit next to each submodule: exact-rule fixtures in
//!   `number`, closed-form derivative checks for every library function in
//!   `functions` and `activations`.

pub mod activations;
pub mod errors;
pub mod functions;
pub mod number;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{DualError, DualResult};
pub use self::number::DualNumber;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_autodiff::dual::prelude::*;
//
// to import the dual-number surface in a single line.

pub mod prelude {
    pub use super::errors::{DualError, DualResult};
    pub use super::number::DualNumber;
}
