use log::{debug, info, warn};
use ml_core::{
    Columns, DataArgs, Learner, Metric, MlError, Result, Train, TrainWeighted, Unweighted,
    WeightSlot, Weighted,
};
use ndarray::ArrayView1;

use crate::{SimpleCvConfig, split::training_points};

/// Hold-out validation over datasets with per-point weights.
pub type WeightedSimpleCv<M, Me> = SimpleCv<M, Me, Weighted>;

/// Hold-out validation: the dataset is split once into a training prefix and
/// a validation suffix, the model is trained on the former and scored on the
/// latter.
///
/// The split is computed on construction and never changes afterwards. Each
/// successful `evaluate` caches the freshly trained model, which can then be
/// accessed through `model` without retraining.
///
/// `W` is the weight storage, picked from the construction arguments:
/// `(data, labels)` builds an unweighted instance and
/// `(data, labels, weights)` a weighted one.
pub struct SimpleCv<M, Me, W = Unweighted>
where
    M: Learner,
{
    metric: Me,

    training_data: M::Data,
    training_labels: M::Labels,
    training_weights: W,

    validation_data: M::Data,
    validation_labels: M::Labels,

    model: Option<M>,
}

impl<M, Me, W> SimpleCv<M, Me, W>
where
    M: Learner,
    Me: Metric<M>,
    W: WeightSlot,
{
    /// Creates a new `SimpleCv` scoring with the default instance of its
    /// metric.
    ///
    /// # Args
    /// * `validation_size` - Fraction of the points held out for validation.
    /// * `data_args` - `(data, labels)` or `(data, labels, weights)`.
    ///
    /// # Errors
    /// `MlError::ShapeMismatch` if labels or weights don't match the amount of
    /// points, `MlError::InvalidInput` if the split can't leave both sets
    /// non-empty.
    pub fn new<A>(validation_size: f64, data_args: A) -> Result<Self>
    where
        Me: Default,
        A: DataArgs<M::Data, M::Labels, Weights = W>,
    {
        Self::with_metric(Me::default(), validation_size, data_args)
    }

    /// Creates a new `SimpleCv` from a configuration.
    ///
    /// # Errors
    /// Same as `new`.
    pub fn from_config<A>(config: &SimpleCvConfig, data_args: A) -> Result<Self>
    where
        Me: Default,
        A: DataArgs<M::Data, M::Labels, Weights = W>,
    {
        Self::new(config.validation_size, data_args)
    }

    /// Creates a new `SimpleCv` scoring with the given metric.
    ///
    /// # Errors
    /// Same as `new`.
    pub fn with_metric<A>(metric: Me, validation_size: f64, data_args: A) -> Result<Self>
    where
        A: DataArgs<M::Data, M::Labels, Weights = W>,
    {
        let (data, labels, weights) = data_args.extract()?;

        let n_cols = data.n_cols();
        let training = training_points(n_cols, validation_size)?;

        Ok(Self {
            metric,
            training_data: data.subset(0..training),
            training_labels: labels.subset(0..training),
            training_weights: weights.subset(0..training),
            validation_data: data.subset(training..n_cols),
            validation_labels: labels.subset(training..n_cols),
            model: None,
        })
    }

    /// Returns the model trained by the last successful `evaluate`.
    ///
    /// # Errors
    /// `MlError::UninitializedModel` if no model has been trained yet.
    pub fn model(&self) -> Result<&M> {
        self.model.as_ref().ok_or(MlError::UninitializedModel)
    }

    /// Mutable counterpart of `model`.
    ///
    /// # Errors
    /// `MlError::UninitializedModel` if no model has been trained yet.
    pub fn model_mut(&mut self) -> Result<&mut M> {
        self.model.as_mut().ok_or(MlError::UninitializedModel)
    }

    /// Consumes the validator, handing over its trained model.
    ///
    /// # Errors
    /// `MlError::UninitializedModel` if no model has been trained yet.
    pub fn into_model(self) -> Result<M> {
        self.model.ok_or(MlError::UninitializedModel)
    }

    pub fn metric(&self) -> &Me {
        &self.metric
    }

    pub fn training_data(&self) -> &M::Data {
        &self.training_data
    }

    pub fn training_labels(&self) -> &M::Labels {
        &self.training_labels
    }

    pub fn validation_data(&self) -> &M::Data {
        &self.validation_data
    }

    pub fn validation_labels(&self) -> &M::Labels {
        &self.validation_labels
    }

    /// Amount of points in the training set.
    pub fn training_size(&self) -> usize {
        self.training_data.n_cols()
    }

    /// Amount of points in the validation set.
    pub fn validation_size(&self) -> usize {
        self.validation_data.n_cols()
    }

    /// Caches a freshly trained model, dropping the previous one, and scores
    /// it over the validation set.
    fn score(&mut self, model: M) -> Result<f64> {
        if self.model.is_some() {
            info!("replacing previously trained model");
        }

        let model = self.model.insert(model);
        let score = self
            .metric
            .evaluate(model, &self.validation_data, &self.validation_labels)?;

        debug!(score = score, validation = self.validation_data.n_cols(); "scored trained model");
        Ok(score)
    }
}

impl<M, Me> SimpleCv<M, Me, Unweighted>
where
    M: Learner,
    Me: Metric<M>,
{
    /// Trains a new model over the training set and scores it over the
    /// validation set.
    ///
    /// The cached model is only replaced once training succeeds. If the
    /// metric fails afterwards the new model stays cached.
    ///
    /// # Args
    /// * `args` - Extra training arguments, forwarded to `M::train`.
    ///
    /// # Errors
    /// Whatever training or the metric report, unchanged.
    pub fn evaluate<Args>(&mut self, args: Args) -> Result<f64>
    where
        M: Train<Args>,
    {
        debug!(training = self.training_data.n_cols(); "training model");
        let model = M::train(&self.training_data, &self.training_labels, args)?;
        self.score(model)
    }
}

impl<M, Me> SimpleCv<M, Me, Weighted>
where
    M: Learner,
    Me: Metric<M>,
{
    /// Trains a new model over the weighted training set and scores it over
    /// the validation set.
    ///
    /// Falls back to unweighted training when there are no training weights.
    /// The cached model is only replaced once training succeeds.
    ///
    /// # Args
    /// * `args` - Extra training arguments, forwarded to the learner.
    ///
    /// # Errors
    /// Whatever training or the metric report, unchanged.
    pub fn evaluate<Args>(&mut self, args: Args) -> Result<f64>
    where
        M: TrainWeighted<Args>,
    {
        let model = if self.training_weights.is_empty() {
            warn!("no training weights available, training without weights");
            M::train(&self.training_data, &self.training_labels, args)?
        } else {
            debug!(training = self.training_data.n_cols(); "training weighted model");
            M::train_weighted(
                &self.training_data,
                &self.training_labels,
                self.training_weights.view(),
                args,
            )?
        };

        self.score(model)
    }

    /// Weights of the training points, aligned with `training_data`.
    pub fn training_weights(&self) -> ArrayView1<'_, f64> {
        self.training_weights.view()
    }
}
