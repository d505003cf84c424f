//! Dual numbers: (value, derivative) pairs with algebraic structure, so that
//! `(x, dx) + (y, dy) = (x + y, dx + dy)` and
//! `(x, dx) · (y, dy) = (x·y, x·dy + y·dx)`.
//!
//! Both components are `ndarray` containers of one shared shape (0-d for
//! scalars). Shape equality between value and derivative is the module's hard
//! invariant: every constructor checks it and fails with
//! [`DualError::ShapeMismatch`] instead of broadcasting. Binary operations
//! likewise require equal operand shapes; constants are normalized through
//! the central lift helper before any rule is applied, so `c + d` and
//! `lift(c) + d` are the same computation.
use ndarray::{ArrayD, IxDyn};

use crate::dual::errors::{DualError, DualResult};

/// A number (or same-shaped array of numbers) carrying its derivative.
///
/// Fields are private so the shape invariant cannot be bypassed; use
/// [`DualNumber::new`] and friends to construct and the accessors to read.
/// Operations are pure: each returns a fresh `DualNumber` and never mutates
/// its operands. Derived `PartialEq` is structural — two duals are equal iff
/// both components are element-wise equal, shapes included.
#[derive(Debug, Clone, PartialEq)]
pub struct DualNumber {
    value: ArrayD<f64>,
    derivative: ArrayD<f64>,
}

impl DualNumber {
    /// Construct a dual from a (value, derivative) pair.
    ///
    /// # Errors
    /// [`DualError::ShapeMismatch`] if the two shapes differ; shapes are
    /// never coerced or broadcast.
    pub fn new(value: ArrayD<f64>, derivative: ArrayD<f64>) -> DualResult<Self> {
        if value.shape() != derivative.shape() {
            return Err(DualError::ShapeMismatch {
                value_shape: value.shape().to_vec(),
                derivative_shape: derivative.shape().to_vec(),
            });
        }
        Ok(Self { value, derivative })
    }

    /// Construct a 0-d (scalar) dual.
    pub fn scalar(x: f64, dx: f64) -> Self {
        Self {
            value: ArrayD::from_elem(IxDyn(&[]), x),
            derivative: ArrayD::from_elem(IxDyn(&[]), dx),
        }
    }

    /// Lift a plain array into a dual with a zero derivative.
    ///
    /// This is the factory for treating constants as having no sensitivity;
    /// reflected scalar operations route through the same lift so constant
    /// handling is identical everywhere.
    pub fn constant(value: ArrayD<f64>) -> Self {
        let derivative = ArrayD::zeros(value.raw_dim());
        Self { value, derivative }
    }

    /// Lift a plain scalar into a 0-d dual with zero derivative.
    pub fn constant_scalar(x: f64) -> Self {
        Self::scalar(x, 0.0)
    }

    // ---- Accessors ----

    pub fn value(&self) -> &ArrayD<f64> {
        &self.value
    }

    pub fn derivative(&self) -> &ArrayD<f64> {
        &self.derivative
    }

    pub fn shape(&self) -> &[usize] {
        self.value.shape()
    }

    pub fn ndim(&self) -> usize {
        self.value.ndim()
    }

    /// Consume the dual and return its (value, derivative) parts.
    pub fn into_parts(self) -> (ArrayD<f64>, ArrayD<f64>) {
        (self.value, self.derivative)
    }

    /// Replace the derivative component, keeping the value.
    ///
    /// Used by the optimizer to seed its convergence sentinel.
    ///
    /// # Errors
    /// [`DualError::ShapeMismatch`] if the new derivative's shape differs
    /// from the value's.
    pub fn set_derivative(&mut self, derivative: ArrayD<f64>) -> DualResult<()> {
        if self.value.shape() != derivative.shape() {
            return Err(DualError::ShapeMismatch {
                value_shape: self.value.shape().to_vec(),
                derivative_shape: derivative.shape().to_vec(),
            });
        }
        self.derivative = derivative;
        Ok(())
    }

    /// Extract the single element of a 0-d value.
    ///
    /// # Errors
    /// [`DualError::NonScalarOutput`] if the dual is shaped.
    pub fn scalar_value(&self) -> DualResult<f64> {
        if self.ndim() != 0 {
            return Err(DualError::NonScalarOutput { shape: self.shape().to_vec() });
        }
        Ok(self.value.sum())
    }

    /// Extract the single element of a 0-d derivative.
    ///
    /// # Errors
    /// [`DualError::NonScalarOutput`] if the dual is shaped.
    pub fn scalar_derivative(&self) -> DualResult<f64> {
        if self.ndim() != 0 {
            return Err(DualError::NonScalarOutput { shape: self.shape().to_vec() });
        }
        Ok(self.derivative.sum())
    }

    /// Euclidean norm of the derivative component.
    ///
    /// The optimizer treats this as its convergence signal: the derivative
    /// field of its current point holds the most recent step vector.
    pub fn derivative_norm(&self) -> f64 {
        self.derivative.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    // ---- Internal kernels ----
    //
    // Binary rules assume equal shapes; the public wrappers check operands
    // and the scalar forms normalize constants through `lift` first.

    /// Lift a scalar constant to a zero-derivative dual of this dual's shape.
    fn lift(&self, c: f64) -> Self {
        Self {
            value: ArrayD::from_elem(self.value.raw_dim(), c),
            derivative: ArrayD::zeros(self.value.raw_dim()),
        }
    }

    fn check_operands(&self, rhs: &Self) -> DualResult<()> {
        if self.shape() != rhs.shape() {
            return Err(DualError::OperandShapeMismatch {
                left: self.shape().to_vec(),
                right: rhs.shape().to_vec(),
            });
        }
        Ok(())
    }

    fn add_impl(&self, rhs: &Self) -> Self {
        Self {
            value: &self.value + &rhs.value,
            derivative: &self.derivative + &rhs.derivative,
        }
    }

    fn sub_impl(&self, rhs: &Self) -> Self {
        Self {
            value: &self.value - &rhs.value,
            derivative: &self.derivative - &rhs.derivative,
        }
    }

    fn mul_impl(&self, rhs: &Self) -> Self {
        Self {
            value: &self.value * &rhs.value,
            derivative: &self.derivative * &rhs.value + &self.value * &rhs.derivative,
        }
    }

    /// Quotient rule; callers must have rejected zero denominators already.
    fn div_impl(&self, rhs: &Self) -> Self {
        let num = &self.derivative * &rhs.value - &self.value * &rhs.derivative;
        let den = &rhs.value * &rhs.value;
        Self { value: &self.value / &rhs.value, derivative: num / den }
    }

    fn check_denominator(d: &Self) -> DualResult<()> {
        if d.value.iter().any(|&v| v == 0.0) {
            return Err(DualError::DivisionByZero);
        }
        Ok(())
    }

    /// Apply an element-wise function and its derivative with the chain rule:
    /// `(f(x), f'(x)·dx)`. The workhorse for the elementary function library.
    pub(crate) fn chain(
        &self, value_fn: impl Fn(f64) -> f64, deriv_fn: impl Fn(f64) -> f64,
    ) -> Self {
        let value = self.value.mapv(|v| value_fn(v));
        let derivative = self.value.mapv(|v| deriv_fn(v)) * &self.derivative;
        Self { value, derivative }
    }

    // ---- Unary operations ----

    /// Negation: `(-x, -dx)`.
    pub fn neg(&self) -> Self {
        Self { value: self.value.mapv(|v| -v), derivative: self.derivative.mapv(|v| -v) }
    }

    /// Absolute value: `(|x|, dx·sign(x))`.
    ///
    /// The derivative is undefined at `x = 0`; `f64::signum(0.0)` is `1.0`,
    /// so the kink reports `dx` rather than failing.
    pub fn abs(&self) -> Self {
        self.chain(f64::abs, f64::signum)
    }

    /// Power rule for a fixed real exponent: `(x^p, p·x^(p-1)·dx)`.
    ///
    /// Fractional powers of negative elements yield NaN, propagated from the
    /// underlying `f64` arithmetic.
    pub fn powf(&self, p: f64) -> Self {
        self.chain(|v| v.powf(p), |v| p * v.powf(p - 1.0))
    }

    // ---- Binary operations ----

    /// Component-wise sum of values and derivatives.
    ///
    /// # Errors
    /// [`DualError::OperandShapeMismatch`] if the shapes differ.
    pub fn add(&self, rhs: &Self) -> DualResult<Self> {
        self.check_operands(rhs)?;
        Ok(self.add_impl(rhs))
    }

    /// Component-wise difference of values and derivatives.
    ///
    /// # Errors
    /// [`DualError::OperandShapeMismatch`] if the shapes differ.
    pub fn sub(&self, rhs: &Self) -> DualResult<Self> {
        self.check_operands(rhs)?;
        Ok(self.sub_impl(rhs))
    }

    /// Product rule: `(x1·x2, x1·dx2 + x2·dx1)`.
    ///
    /// # Errors
    /// [`DualError::OperandShapeMismatch`] if the shapes differ.
    pub fn mul(&self, rhs: &Self) -> DualResult<Self> {
        self.check_operands(rhs)?;
        Ok(self.mul_impl(rhs))
    }

    /// Quotient rule: `(x1/x2, (dx1·x2 − x1·dx2)/x2²)`.
    ///
    /// # Errors
    /// - [`DualError::OperandShapeMismatch`] if the shapes differ.
    /// - [`DualError::DivisionByZero`] if any denominator element is exactly
    ///   zero.
    pub fn div(&self, rhs: &Self) -> DualResult<Self> {
        self.check_operands(rhs)?;
        Self::check_denominator(rhs)?;
        Ok(self.div_impl(rhs))
    }

    // ---- Scalar operations (constant lifted first) ----

    /// `self + c`, with `c` lifted to a zero-derivative dual.
    pub fn add_scalar(&self, c: f64) -> Self {
        self.add_impl(&self.lift(c))
    }

    /// `self − c`, with `c` lifted to a zero-derivative dual.
    pub fn sub_scalar(&self, c: f64) -> Self {
        self.sub_impl(&self.lift(c))
    }

    /// `c − self` (reflected), with `c` lifted first.
    pub fn rsub_scalar(&self, c: f64) -> Self {
        self.lift(c).sub_impl(self)
    }

    /// `self × c`, with `c` lifted to a zero-derivative dual.
    pub fn mul_scalar(&self, c: f64) -> Self {
        self.mul_impl(&self.lift(c))
    }

    /// `self / c`, with `c` lifted first.
    ///
    /// # Errors
    /// [`DualError::DivisionByZero`] if `c == 0.0`.
    pub fn div_scalar(&self, c: f64) -> DualResult<Self> {
        let rhs = self.lift(c);
        Self::check_denominator(&rhs)?;
        Ok(self.div_impl(&rhs))
    }

    /// `c / self` (reflected), with `c` lifted first.
    ///
    /// # Errors
    /// [`DualError::DivisionByZero`] if any element of `self`'s value is
    /// exactly zero.
    pub fn rdiv_scalar(&self, c: f64) -> DualResult<Self> {
        Self::check_denominator(self)?;
        Ok(self.lift(c).div_impl(self))
    }

    // ---- Ordering comparisons ----
    //
    // These compare value components only and return plain booleans (all
    // elements must satisfy the relation); they are not differentiable
    // operations. Scalar forms compare against the lifted constant.

    /// # Errors
    /// [`DualError::OperandShapeMismatch`] if the shapes differ.
    pub fn lt(&self, rhs: &Self) -> DualResult<bool> {
        self.check_operands(rhs)?;
        Ok(self.value.iter().zip(rhs.value.iter()).all(|(a, b)| a < b))
    }

    /// # Errors
    /// [`DualError::OperandShapeMismatch`] if the shapes differ.
    pub fn le(&self, rhs: &Self) -> DualResult<bool> {
        self.check_operands(rhs)?;
        Ok(self.value.iter().zip(rhs.value.iter()).all(|(a, b)| a <= b))
    }

    /// # Errors
    /// [`DualError::OperandShapeMismatch`] if the shapes differ.
    pub fn gt(&self, rhs: &Self) -> DualResult<bool> {
        self.check_operands(rhs)?;
        Ok(self.value.iter().zip(rhs.value.iter()).all(|(a, b)| a > b))
    }

    /// # Errors
    /// [`DualError::OperandShapeMismatch`] if the shapes differ.
    pub fn ge(&self, rhs: &Self) -> DualResult<bool> {
        self.check_operands(rhs)?;
        Ok(self.value.iter().zip(rhs.value.iter()).all(|(a, b)| a >= b))
    }

    pub fn lt_scalar(&self, c: f64) -> bool {
        self.value.iter().all(|&v| v < c)
    }

    pub fn le_scalar(&self, c: f64) -> bool {
        self.value.iter().all(|&v| v <= c)
    }

    pub fn gt_scalar(&self, c: f64) -> bool {
        self.value.iter().all(|&v| v > c)
    }

    pub fn ge_scalar(&self, c: f64) -> bool {
        self.value.iter().all(|&v| v >= c)
    }
}

impl std::fmt::Display for DualNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} + {} eps", self.value, self.derivative)
    }
}
