use ml_core::{MlError, Metric, Predict, Result};
use ndarray::{Array1, Array2};

use super::assert_scorable;

/// Coefficient of determination of a regressor's predictions. A perfect fit
/// scores 1.
#[derive(Debug, Default, Clone, Copy)]
pub struct R2Score;

impl<M> Metric<M> for R2Score
where
    M: Predict<Data = Array2<f64>, Labels = Array1<f64>>,
{
    fn evaluate(&self, model: &M, data: &M::Data, labels: &M::Labels) -> Result<f64> {
        let y_pred = model.predict(data)?;
        assert_scorable(y_pred.len(), labels.len())?;

        let mean = labels.mean().unwrap_or_default();
        let total: f64 = labels.iter().map(|y| (y - mean).powi(2)).sum();
        let residual: f64 = labels
            .iter()
            .zip(&y_pred)
            .map(|(y, p)| (y - p).powi(2))
            .sum();

        if total == 0.0 {
            return Err(MlError::InvalidInput("labels have zero variance"));
        }

        Ok(1.0 - residual / total)
    }
}
