use ndarray::ArrayView1;

use crate::{Columns, Result};

/// A model that can be fitted to a dataset.
///
/// A `Learner` only fixes the containers it is trained on. How it is
/// trained, and with which extra arguments, is expressed through `Train`
/// and `TrainWeighted`.
pub trait Learner: Sized {
    /// Column-major feature matrix, one column per data point.
    type Data: Columns;

    /// Targets aligned by column with `Data`.
    type Labels: Columns;
}

/// Training without per-point weights.
///
/// `Args` holds the extra training arguments forwarded untouched by
/// evaluation strategies. Use `()` when the learner needs none and a tuple
/// when it needs several.
pub trait Train<Args = ()>: Learner {
    /// Trains a new model.
    ///
    /// # Args
    /// * `data` - The training points.
    /// * `labels` - One target per training point.
    /// * `args` - Extra training arguments.
    ///
    /// # Errors
    /// Whatever the learner reports; callers pass it through unchanged.
    fn train(data: &Self::Data, labels: &Self::Labels, args: Args) -> Result<Self>;
}

/// Training with one non-negative weight per data point.
pub trait TrainWeighted<Args = ()>: Train<Args> {
    /// Trains a new model where each point contributes proportionally to its
    /// weight.
    ///
    /// # Errors
    /// Whatever the learner reports; callers pass it through unchanged.
    fn train_weighted(
        data: &Self::Data,
        labels: &Self::Labels,
        weights: ArrayView1<'_, f64>,
        args: Args,
    ) -> Result<Self>;
}

/// A trained model able to produce one prediction per data point.
pub trait Predict: Learner {
    /// Predicts a label for every column of `data`.
    ///
    /// # Errors
    /// `MlError::ShapeMismatch` if `data` doesn't have the dimensionality the
    /// model was trained with.
    fn predict(&self, data: &Self::Data) -> Result<Self::Labels>;
}
