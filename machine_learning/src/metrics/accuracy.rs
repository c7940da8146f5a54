use ml_core::{Metric, Predict, Result};
use ndarray::Array1;

use super::assert_scorable;

/// Fraction of points whose predicted label matches the true one.
#[derive(Debug, Default, Clone, Copy)]
pub struct Accuracy;

impl<M, T> Metric<M> for Accuracy
where
    M: Predict<Labels = Array1<T>>,
    T: PartialEq,
{
    fn evaluate(&self, model: &M, data: &M::Data, labels: &M::Labels) -> Result<f64> {
        let y_pred = model.predict(data)?;
        assert_scorable(y_pred.len(), labels.len())?;

        let hits = y_pred.iter().zip(labels).filter(|(p, y)| p == y).count();
        Ok(hits as f64 / labels.len() as f64)
    }
}
