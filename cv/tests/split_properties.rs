use cv::{SimpleCv, WeightedSimpleCv, training_points};
use ml_core::{Columns, Learner, Metric, MlError, Result, Train, TrainWeighted};
use ndarray::{Array1, Array2, ArrayView1, Axis, concatenate};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Remembers the points it was trained on.
struct Memorizer {
    labels: Array1<f64>,
    weights: Option<Array1<f64>>,
}

impl Learner for Memorizer {
    type Data = Array2<f64>;
    type Labels = Array1<f64>;
}

impl Train for Memorizer {
    fn train(_: &Array2<f64>, labels: &Array1<f64>, _: ()) -> Result<Self> {
        Ok(Self {
            labels: labels.clone(),
            weights: None,
        })
    }
}

impl TrainWeighted for Memorizer {
    fn train_weighted(
        _: &Array2<f64>,
        labels: &Array1<f64>,
        weights: ArrayView1<'_, f64>,
        _: (),
    ) -> Result<Self> {
        Ok(Self {
            labels: labels.clone(),
            weights: Some(weights.to_owned()),
        })
    }
}

/// Scores with the amount of training points.
#[derive(Default)]
struct TrainingCount;

impl Metric<Memorizer> for TrainingCount {
    fn evaluate(&self, model: &Memorizer, _: &Array2<f64>, _: &Array1<f64>) -> Result<f64> {
        Ok(model.labels.len() as f64)
    }
}

fn dataset(n: usize) -> (Array2<f64>, Array1<f64>, Array1<f64>) {
    let xs = Array2::from_shape_fn((3, n), |(r, c)| (c * 10 + r) as f64);
    let ys = Array1::from_shape_fn(n, |i| i as f64);
    let ws = Array1::from_shape_fn(n, |i| 1.0 + i as f64 / 2.0);
    (xs, ys, ws)
}

#[test]
fn valid_splits_partition_the_dataset() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..500 {
        let n = rng.random_range(2..200);
        let ratio: f64 = rng.random_range(0.0..1.0);
        let expected = (n as f64 * (1.0 - ratio)).round() as usize;

        let (xs, ys, _) = dataset(n);
        let res = SimpleCv::<Memorizer, TrainingCount>::new(ratio, (xs.clone(), ys.clone()));

        if expected == 0 || expected == n {
            assert!(matches!(res, Err(MlError::InvalidInput(_))), "n = {n}, ratio = {ratio}");
            continue;
        }

        let cv = res.unwrap();
        assert_eq!(cv.training_size(), expected);
        assert_eq!(cv.training_size() + cv.validation_size(), n);
        assert_eq!(training_points(n, ratio).unwrap(), expected);

        let joined = concatenate(
            Axis(1),
            &[cv.training_data().view(), cv.validation_data().view()],
        )
        .unwrap();
        assert_eq!(joined, xs);

        let joined = concatenate(
            Axis(0),
            &[cv.training_labels().view(), cv.validation_labels().view()],
        )
        .unwrap();
        assert_eq!(joined, ys);
    }
}

#[test]
fn training_weights_align_with_training_points() {
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..200 {
        let n = rng.random_range(2..100);
        let ratio: f64 = rng.random_range(0.05..0.95);
        let (xs, ys, ws) = dataset(n);

        let Ok(mut cv) = WeightedSimpleCv::<Memorizer, TrainingCount>::new(ratio, (xs, ys, ws.clone()))
        else {
            continue;
        };

        let t = cv.training_size();
        assert_eq!(cv.training_weights().len(), t);
        assert_eq!(cv.training_weights(), ws.subset(0..t).view());

        let score = cv.evaluate(()).unwrap();
        assert_eq!(score, t as f64);

        let model = cv.model().unwrap();
        assert_eq!(model.weights.as_ref().unwrap(), &ws.subset(0..t));
        assert_eq!(&model.labels, cv.training_labels());
    }
}

#[test]
fn single_point_datasets_are_always_rejected() {
    for ratio in [0.0, 0.2, 0.5, 0.8, 1.0] {
        let (xs, ys, _) = dataset(1);

        let res = SimpleCv::<Memorizer, TrainingCount>::new(ratio, (xs, ys));

        assert!(matches!(
            res,
            Err(MlError::InvalidInput("2 or more data points are expected"))
        ));
    }
}

#[test]
fn unweighted_model_never_sees_weights() {
    let (xs, ys, _) = dataset(10);

    let mut cv = SimpleCv::<Memorizer, TrainingCount>::new(0.2, (xs, ys)).unwrap();
    cv.evaluate(()).unwrap();

    assert!(cv.model().unwrap().weights.is_none());
}
