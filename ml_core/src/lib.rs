mod data;
mod error;
mod metric;
mod model;

pub use data::{
    assert_data_consistency, assert_weights_consistency, Columns, DataArgs, Unweighted,
    WeightSlot, Weighted,
};
pub use error::{MlError, Result};
pub use metric::Metric;
pub use model::{Learner, Predict, Train, TrainWeighted};
