mod linalg;
pub mod metrics;
pub mod models;

pub use metrics::{Accuracy, Mse, R2Score};
pub use models::{LinearRegression, NearestCentroid};
