//! Hold-out validation of trainable models.
//!
//! A `SimpleCv` splits a dataset once into a contiguous training prefix and
//! a contiguous validation suffix, trains a model on the former and scores it
//! on the latter with a metric.
//!
//! ```ignore
//! use cv::SimpleCv;
//! use machine_learning::{LinearRegression, Mse};
//!
//! let mut cv = SimpleCv::<LinearRegression, Mse>::new(0.2, (xs, ys))?;
//! let mse = cv.evaluate(())?;
//! let model = cv.model()?;
//! ```

mod config;
mod simple_cv;
mod split;

pub use config::SimpleCvConfig;
pub use simple_cv::{SimpleCv, WeightedSimpleCv};
pub use split::training_points;
