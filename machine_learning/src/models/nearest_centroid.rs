use ml_core::{Learner, MlError, Predict, Result, Train, TrainWeighted, assert_data_consistency};
use ndarray::{Array1, Array2, ArrayView1, Axis};

/// Classifies each point as the class whose centroid is closest to it.
///
/// The extra training argument is the amount of classes. Without it, the
/// amount is inferred as one more than the largest training label.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestCentroid {
    /// One centroid per column.
    centroids: Array2<f64>,
    /// Total weight of the training points of each class.
    mass: Array1<f64>,
}

impl NearestCentroid {
    pub fn num_classes(&self) -> usize {
        self.centroids.ncols()
    }

    /// The centroid of `class`, or `None` if no training point of that class
    /// had a positive weight.
    pub fn centroid(&self, class: usize) -> Option<ArrayView1<'_, f64>> {
        if class >= self.num_classes() || self.mass[class] <= 0.0 {
            return None;
        }

        Some(self.centroids.column(class))
    }

    fn fit(
        data: &Array2<f64>,
        labels: &Array1<usize>,
        weights: Option<ArrayView1<'_, f64>>,
        num_classes: usize,
    ) -> Result<Self> {
        assert_data_consistency(data, labels)?;

        if let Some(w) = weights {
            if w.len() != labels.len() {
                return Err(MlError::ShapeMismatch {
                    what: "weights",
                    got: w.len(),
                    expected: labels.len(),
                });
            }

            if w.iter().any(|&w| !(w >= 0.0)) {
                return Err(MlError::InvalidInput("weights must be non-negative"));
            }
        }

        if labels.iter().any(|&label| label >= num_classes) {
            return Err(MlError::InvalidInput("found a label outside of num_classes"));
        }

        let mut centroids = Array2::zeros((data.nrows(), num_classes));
        let mut mass = Array1::zeros(num_classes);

        for (i, (point, &label)) in data.axis_iter(Axis(1)).zip(labels).enumerate() {
            let w = weights.map_or(1.0, |w| w[i]);
            centroids.column_mut(label).scaled_add(w, &point);
            mass[label] += w;
        }

        if mass.iter().all(|&m| m <= 0.0) {
            return Err(MlError::InvalidInput("no training point has a positive weight"));
        }

        for (mut centroid, &m) in centroids.axis_iter_mut(Axis(1)).zip(&mass) {
            if m > 0.0 {
                centroid /= m;
            }
        }

        Ok(Self { centroids, mass })
    }

    fn inferred_classes(labels: &Array1<usize>) -> usize {
        labels.iter().max().map_or(0, |max| max + 1)
    }
}

impl Learner for NearestCentroid {
    type Data = Array2<f64>;
    type Labels = Array1<usize>;
}

impl Train<()> for NearestCentroid {
    fn train(data: &Array2<f64>, labels: &Array1<usize>, _: ()) -> Result<Self> {
        Self::fit(data, labels, None, Self::inferred_classes(labels))
    }
}

impl Train<usize> for NearestCentroid {
    fn train(data: &Array2<f64>, labels: &Array1<usize>, num_classes: usize) -> Result<Self> {
        Self::fit(data, labels, None, num_classes)
    }
}

impl TrainWeighted<()> for NearestCentroid {
    fn train_weighted(
        data: &Array2<f64>,
        labels: &Array1<usize>,
        weights: ArrayView1<'_, f64>,
        _: (),
    ) -> Result<Self> {
        Self::fit(data, labels, Some(weights), Self::inferred_classes(labels))
    }
}

impl TrainWeighted<usize> for NearestCentroid {
    fn train_weighted(
        data: &Array2<f64>,
        labels: &Array1<usize>,
        weights: ArrayView1<'_, f64>,
        num_classes: usize,
    ) -> Result<Self> {
        Self::fit(data, labels, Some(weights), num_classes)
    }
}

impl Predict for NearestCentroid {
    fn predict(&self, data: &Array2<f64>) -> Result<Array1<usize>> {
        if data.nrows() != self.centroids.nrows() {
            return Err(MlError::ShapeMismatch {
                what: "features",
                got: data.nrows(),
                expected: self.centroids.nrows(),
            });
        }

        let predictions = data.map_axis(Axis(0), |point| {
            let mut best = (0, f64::INFINITY);

            for (class, centroid) in self.centroids.axis_iter(Axis(1)).enumerate() {
                if self.mass[class] <= 0.0 {
                    continue;
                }

                let dist: f64 = (&point - &centroid).mapv(|d| d * d).sum();
                if dist < best.1 {
                    best = (class, dist);
                }
            }

            best.0
        });

        Ok(predictions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn blobs() -> (Array2<f64>, Array1<usize>) {
        let xs = array![
            [0.0, 0.2, 5.0, 5.2, 0.1, 5.1],
            [0.0, 0.1, 5.0, 4.9, 0.2, 5.0]
        ];
        let ys = array![0, 0, 1, 1, 0, 1];
        (xs, ys)
    }

    #[test]
    fn separates_two_blobs() {
        let (xs, ys) = blobs();

        let model = NearestCentroid::train(&xs, &ys, ()).unwrap();

        assert_eq!(model.num_classes(), 2);
        assert_eq!(model.predict(&xs).unwrap(), ys);
    }

    #[test]
    fn absent_classes_are_never_predicted() {
        let (xs, ys) = blobs();

        let model = NearestCentroid::train(&xs, &ys, 4).unwrap();

        assert_eq!(model.num_classes(), 4);
        assert!(model.centroid(2).is_none());
        assert!(model.centroid(3).is_none());
        assert_eq!(model.predict(&array![[100.0], [100.0]]).unwrap(), array![1]);
    }

    #[test]
    fn weights_move_the_centroid() {
        let xs = array![[0.0, 1.0, 10.0]];
        let ys = array![0, 0, 1];
        let ws = array![3.0, 1.0, 1.0];

        let model = NearestCentroid::train_weighted(&xs, &ys, ws.view(), 2).unwrap();

        assert_eq!(model.centroid(0).unwrap(), array![0.25].view());
        assert_eq!(model.centroid(1).unwrap(), array![10.0].view());
    }

    #[test]
    fn labels_outside_num_classes_are_rejected() {
        let (xs, ys) = blobs();

        let err = NearestCentroid::train(&xs, &ys, 1).unwrap_err();

        assert_eq!(err, MlError::InvalidInput("found a label outside of num_classes"));
    }

    #[test]
    fn all_zero_weights_are_rejected() {
        let (xs, ys) = blobs();
        let ws = Array1::zeros(6);

        let err = NearestCentroid::train_weighted(&xs, &ys, ws.view(), ()).unwrap_err();

        assert_eq!(err, MlError::InvalidInput("no training point has a positive weight"));
    }
}
