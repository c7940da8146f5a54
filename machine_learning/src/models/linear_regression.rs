use log::debug;
use ml_core::{Learner, MlError, Predict, Result, Train, TrainWeighted, assert_data_consistency};
use ndarray::{Array1, Array2, ArrayView1, Axis, concatenate, s};

use crate::linalg;

/// Least squares linear regression with an intercept term.
///
/// The extra training argument is the ridge penalty `lambda` (`()` means no
/// penalty). The intercept is never penalized.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegression {
    coefficients: Array1<f64>,
    intercept: f64,
    lambda: f64,
}

impl LinearRegression {
    /// Fitted coefficients, one per feature.
    pub fn coefficients(&self) -> ArrayView1<'_, f64> {
        self.coefficients.view()
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// The ridge penalty the model was trained with.
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    fn fit(
        data: &Array2<f64>,
        labels: &Array1<f64>,
        weights: Option<ArrayView1<'_, f64>>,
        lambda: f64,
    ) -> Result<Self> {
        assert_data_consistency(data, labels)?;

        if !(lambda >= 0.0) {
            return Err(MlError::InvalidInput("lambda must be non-negative"));
        }

        let n_features = data.nrows();
        let n_points = data.ncols();

        // Design matrix with a trailing row of ones for the intercept.
        let ones = Array2::ones((1, n_points));
        let design = concatenate(Axis(0), &[data.view(), ones.view()])
            .map_err(|_| MlError::InvalidInput("could not build the design matrix"))?;

        let weighted_design = match weights {
            Some(w) => {
                if w.len() != n_points {
                    return Err(MlError::ShapeMismatch {
                        what: "weights",
                        got: w.len(),
                        expected: n_points,
                    });
                }

                if w.iter().any(|&w| !(w >= 0.0)) {
                    return Err(MlError::InvalidInput("weights must be non-negative"));
                }

                &design * &w
            }
            None => design.clone(),
        };

        let mut gram = weighted_design.dot(&design.t());
        let rhs = weighted_design.dot(labels);

        for i in 0..n_features {
            gram[[i, i]] += lambda;
        }

        let solution = linalg::solve(gram, rhs)?;
        debug!(features = n_features, points = n_points, lambda = lambda; "fitted linear regression");

        Ok(Self {
            coefficients: solution.slice(s![..n_features]).to_owned(),
            intercept: solution[n_features],
            lambda,
        })
    }
}

impl Learner for LinearRegression {
    type Data = Array2<f64>;
    type Labels = Array1<f64>;
}

impl Train<()> for LinearRegression {
    fn train(data: &Array2<f64>, labels: &Array1<f64>, _: ()) -> Result<Self> {
        Self::fit(data, labels, None, 0.0)
    }
}

impl Train<f64> for LinearRegression {
    fn train(data: &Array2<f64>, labels: &Array1<f64>, lambda: f64) -> Result<Self> {
        Self::fit(data, labels, None, lambda)
    }
}

impl TrainWeighted<()> for LinearRegression {
    fn train_weighted(
        data: &Array2<f64>,
        labels: &Array1<f64>,
        weights: ArrayView1<'_, f64>,
        _: (),
    ) -> Result<Self> {
        Self::fit(data, labels, Some(weights), 0.0)
    }
}

impl TrainWeighted<f64> for LinearRegression {
    fn train_weighted(
        data: &Array2<f64>,
        labels: &Array1<f64>,
        weights: ArrayView1<'_, f64>,
        lambda: f64,
    ) -> Result<Self> {
        Self::fit(data, labels, Some(weights), lambda)
    }
}

impl Predict for LinearRegression {
    fn predict(&self, data: &Array2<f64>) -> Result<Array1<f64>> {
        if data.nrows() != self.coefficients.len() {
            return Err(MlError::ShapeMismatch {
                what: "features",
                got: data.nrows(),
                expected: self.coefficients.len(),
            });
        }

        Ok(data.t().dot(&self.coefficients) + self.intercept)
    }
}
