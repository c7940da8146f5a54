mod linear_regression;
mod nearest_centroid;

pub use linear_regression::LinearRegression;
pub use nearest_centroid::NearestCentroid;
