use ml_core::{Metric, Predict, Result};
use ndarray::{Array1, Array2};

use super::assert_scorable;

/// Mean squared error of a regressor's predictions. Lower is better.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mse;

impl Mse {
    /// Returns a new `Mse`.
    pub fn new() -> Self {
        Self
    }
}

impl<M> Metric<M> for Mse
where
    M: Predict<Data = Array2<f64>, Labels = Array1<f64>>,
{
    fn evaluate(&self, model: &M, data: &M::Data, labels: &M::Labels) -> Result<f64> {
        let y_pred = model.predict(data)?;
        assert_scorable(y_pred.len(), labels.len())?;

        Ok((&y_pred - labels)
            .mapv(|x| x.powi(2))
            .mean()
            .unwrap_or_default())
    }

    fn higher_is_better(&self) -> bool {
        false
    }
}
