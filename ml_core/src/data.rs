use std::ops::Range;

use ndarray::{s, Array1, Array2, ArrayView1};

use crate::{MlError, Result};

/// A container whose points are laid out along columns.
///
/// Feature matrices are column-major: each column is a data point, so a
/// `(features, points)` shaped `Array2` has one column per point. Label and
/// weight sequences are one-dimensional and index points directly.
pub trait Columns: Sized {
    /// Returns the amount of points held by the container.
    fn n_cols(&self) -> usize;

    /// Copies the contiguous column range `cols` into a new container,
    /// preserving order.
    ///
    /// # Panics
    /// If `cols` falls outside of `0..self.n_cols()`.
    fn subset(&self, cols: Range<usize>) -> Self;
}

impl<T: Clone> Columns for Array2<T> {
    fn n_cols(&self) -> usize {
        self.ncols()
    }

    fn subset(&self, cols: Range<usize>) -> Self {
        self.slice(s![.., cols]).to_owned()
    }
}

impl<T: Clone> Columns for Array1<T> {
    fn n_cols(&self) -> usize {
        self.len()
    }

    fn subset(&self, cols: Range<usize>) -> Self {
        self.slice(s![cols]).to_owned()
    }
}

impl<T: Clone> Columns for Vec<T> {
    fn n_cols(&self) -> usize {
        self.len()
    }

    fn subset(&self, cols: Range<usize>) -> Self {
        self[cols].to_vec()
    }
}

/// Storage for the optional per-point weights of a dataset.
///
/// Whether a dataset carries weights is decided by the type, never by a
/// runtime flag: unweighted datasets use the zero-sized `Unweighted`.
pub trait WeightSlot: Sized {
    /// Copies the weights of the column range `cols`.
    fn subset(&self, cols: Range<usize>) -> Self;
}

/// The absence of weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unweighted;

impl WeightSlot for Unweighted {
    #[inline]
    fn subset(&self, _cols: Range<usize>) -> Self {
        Unweighted
    }
}

/// A sequence of non-negative per-point weights.
#[derive(Debug, Clone, PartialEq)]
pub struct Weighted(Array1<f64>);

impl Weighted {
    /// Creates a new `Weighted` from its raw weights.
    pub fn new(weights: Array1<f64>) -> Self {
        Self(weights)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn view(&self) -> ArrayView1<'_, f64> {
        self.0.view()
    }
}

impl WeightSlot for Weighted {
    fn subset(&self, cols: Range<usize>) -> Self {
        if self.is_empty() {
            return Self(Array1::zeros(0));
        }

        Self(self.0.subset(cols))
    }
}

/// The arguments describing a dataset: `(data, labels)` or
/// `(data, labels, weights)`.
///
/// Extraction asserts that every container holds the same amount of points
/// and picks the weight storage at compile time from the tuple's arity.
pub trait DataArgs<D, L> {
    /// The weight storage selected by these arguments.
    type Weights: WeightSlot;

    /// Splits the arguments into their components after asserting their
    /// consistency.
    ///
    /// # Errors
    /// `MlError::ShapeMismatch` if labels or weights don't have one entry per
    /// data point.
    fn extract(self) -> Result<(D, L, Self::Weights)>;
}

impl<D, L> DataArgs<D, L> for (D, L)
where
    D: Columns,
    L: Columns,
{
    type Weights = Unweighted;

    fn extract(self) -> Result<(D, L, Unweighted)> {
        let (data, labels) = self;
        assert_data_consistency(&data, &labels)?;
        Ok((data, labels, Unweighted))
    }
}

impl<D, L> DataArgs<D, L> for (D, L, Array1<f64>)
where
    D: Columns,
    L: Columns,
{
    type Weights = Weighted;

    fn extract(self) -> Result<(D, L, Weighted)> {
        let (data, labels, weights) = self;
        assert_data_consistency(&data, &labels)?;
        assert_weights_consistency(&data, &weights)?;
        Ok((data, labels, Weighted::new(weights)))
    }
}

/// Asserts that there is exactly one label per data point.
///
/// # Errors
/// `MlError::ShapeMismatch` otherwise.
pub fn assert_data_consistency<D, L>(data: &D, labels: &L) -> Result<()>
where
    D: Columns,
    L: Columns,
{
    let expected = data.n_cols();
    let got = labels.n_cols();

    if got != expected {
        return Err(MlError::ShapeMismatch {
            what: "labels",
            got,
            expected,
        });
    }

    Ok(())
}

/// Asserts that there is exactly one weight per data point.
///
/// # Errors
/// `MlError::ShapeMismatch` otherwise.
pub fn assert_weights_consistency<D: Columns>(data: &D, weights: &Array1<f64>) -> Result<()> {
    let expected = data.n_cols();
    let got = weights.len();

    if got != expected {
        return Err(MlError::ShapeMismatch {
            what: "weights",
            got,
            expected,
        });
    }

    Ok(())
}
