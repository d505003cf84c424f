//! Least-squares linear regression fitted by gradient descent.
use ndarray::{Array1, Array2};
use rand::Rng;

use crate::dual::errors::{DualError, DualResult};
use crate::dual::number::DualNumber;
use crate::models::errors::{ModelError, ModelResult};
use crate::models::traits::LossModel;
use crate::optimization::types::Point;

/// Linear model `y ≈ intercept + Σ slope_i·x_i` with a least-squares loss.
///
/// Parameter layout: `params[0]` is the intercept, `params[1..]` the slopes,
/// one per feature column. The loss is the original least-squares form
/// `sqrt(Σ_records (intercept + Σ slope_i·x_i − y)²)`, composed from dual
/// primitives so it is differentiable by construction.
///
/// Invariants (checked at construction):
/// - at least one record;
/// - one label per record;
/// - when supplied, `init_params.len() == n_features + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegression {
    x: Array2<f64>,
    y: Array1<f64>,
    init_params: Point,
}

impl LinearRegression {
    /// Build a regression problem from a feature table (`records × features`)
    /// and labels.
    ///
    /// Missing `init_params` are sampled uniformly from `[-1, 1)`, one value
    /// per feature plus the intercept.
    ///
    /// # Errors
    /// - [`ModelError::EmptyDataset`] if `x` has no rows.
    /// - [`ModelError::DataLengthMismatch`] if `y` disagrees with the row
    ///   count.
    /// - [`ModelError::InitParamsLengthMismatch`] if an explicit start
    ///   vector has the wrong length.
    pub fn new(x: Array2<f64>, y: Array1<f64>, init_params: Option<Point>) -> ModelResult<Self> {
        if x.nrows() == 0 {
            return Err(ModelError::EmptyDataset);
        }
        if x.nrows() != y.len() {
            return Err(ModelError::DataLengthMismatch { records: x.nrows(), labels: y.len() });
        }
        let expected = x.ncols() + 1;
        let init_params = match init_params {
            Some(params) => {
                if params.len() != expected {
                    return Err(ModelError::InitParamsLengthMismatch {
                        expected,
                        found: params.len(),
                    });
                }
                params
            }
            None => {
                let mut rng = rand::thread_rng();
                Point::from_shape_fn(expected, |_| rng.gen_range(-1.0..1.0))
            }
        };
        Ok(Self { x, y, init_params })
    }

    pub fn n_features(&self) -> usize {
        self.x.ncols()
    }
}

impl LossModel for LinearRegression {
    /// `sqrt(Σ_records (intercept + Σ slope_i·x_i − y)²)`.
    ///
    /// # Errors
    /// [`DualError::IndexOutOfBounds`] if the parameter slice is shorter
    /// than `n_features + 1` (the first missing coordinate is reported).
    fn loss(&self, params: &[DualNumber]) -> DualResult<DualNumber> {
        let expected = self.x.ncols() + 1;
        if params.len() != expected {
            return Err(DualError::IndexOutOfBounds {
                index: expected - 1,
                len: params.len(),
            });
        }
        let mut total = DualNumber::scalar(0.0, 0.0);
        for (row, &label) in self.x.rows().into_iter().zip(self.y.iter()) {
            let mut prediction = params[0].clone();
            for (slope, &feature) in params[1..].iter().zip(row.iter()) {
                prediction = prediction.add(&slope.mul_scalar(feature))?;
            }
            let residual = prediction.sub_scalar(label);
            total = total.add(&residual.powf(2.0))?;
        }
        Ok(total.powf(0.5))
    }

    fn init_params(&self) -> Point {
        self.init_params.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover construction validation, the default random start,
    // and hand-computed loss/gradient values. End-to-end fitting under each
    // learning-rate policy lives in the integration tests, where the data
    // carries noise so the loss has a smooth, strictly positive minimum.
    // -------------------------------------------------------------------------

    fn small_problem() -> LinearRegression {
        // y = 2x + 1 shifted: labels chosen so residuals at (1, 1) are -1, -2
        LinearRegression::new(
            array![[1.0], [2.0]],
            array![3.0, 5.0],
            Some(array![1.0, 1.0]),
        )
        .unwrap()
    }

    #[test]
    fn construction_validates_the_dataset() {
        assert_eq!(
            LinearRegression::new(Array2::zeros((0, 1)), Array1::zeros(0), None).unwrap_err(),
            ModelError::EmptyDataset
        );
        assert_eq!(
            LinearRegression::new(array![[1.0], [2.0]], array![1.0], None).unwrap_err(),
            ModelError::DataLengthMismatch { records: 2, labels: 1 }
        );
        assert_eq!(
            LinearRegression::new(array![[1.0]], array![1.0], Some(array![0.0])).unwrap_err(),
            ModelError::InitParamsLengthMismatch { expected: 2, found: 1 }
        );
    }

    #[test]
    fn default_init_params_cover_intercept_and_slopes() {
        let model =
            LinearRegression::new(array![[1.0, 2.0], [3.0, 4.0]], array![1.0, 2.0], None).unwrap();
        let params = model.init_params();
        assert_eq!(params.len(), 3);
        assert!(params.iter().all(|&p| (-1.0..1.0).contains(&p)));
    }

    #[test]
    // Purpose
    // -------
    // At params (1, 1) the residuals are (1 + 1·1 − 3, 1 + 1·2 − 5) =
    // (−1, −2), so the loss is sqrt(1 + 4) = sqrt(5).
    fn loss_matches_hand_computation() {
        let model = small_problem();
        let params = [DualNumber::scalar(1.0, 0.0), DualNumber::scalar(1.0, 0.0)];
        let loss = model.loss(&params).unwrap();
        assert_relative_eq!(loss.scalar_value().unwrap(), 5.0_f64.sqrt(), max_relative = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Seeding the intercept gives d(sqrt(SSE))/db0 = Σr / sqrt(SSE) = -3/√5;
    // seeding the slope gives Σ r·x / sqrt(SSE) = -5/√5.
    fn loss_gradient_matches_hand_computation() {
        let model = small_problem();
        let (value, grad) =
            crate::gradients::gradient(&array![1.0, 1.0], |p| model.loss(p)).unwrap();
        assert_relative_eq!(value, 5.0_f64.sqrt(), max_relative = 1e-12);
        assert_relative_eq!(grad[0], -3.0 / 5.0_f64.sqrt(), max_relative = 1e-12);
        assert_relative_eq!(grad[1], -5.0 / 5.0_f64.sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn loss_rejects_short_parameter_slices() {
        let model = small_problem();
        let params = [DualNumber::scalar(1.0, 0.0)];
        assert_eq!(
            model.loss(&params).unwrap_err(),
            DualError::IndexOutOfBounds { index: 1, len: 1 }
        );
    }
}
