use crate::{Learner, Result};

/// Scores a trained model against held-out data.
///
/// The meaning of the score, and whether higher or lower is better, is
/// defined by each metric.
pub trait Metric<M: Learner> {
    /// Computes the score of `model` over `data` and `labels`.
    ///
    /// # Errors
    /// Whatever the metric or the model's prediction reports.
    fn evaluate(&self, model: &M, data: &M::Data, labels: &M::Labels) -> Result<f64>;

    /// Whether a higher score means a better model.
    fn higher_is_better(&self) -> bool {
        true
    }
}
