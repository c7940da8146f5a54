use ml_core::{MlError, Result};
use ndarray::{Array1, Array2, Axis};

const PIVOT_TOLERANCE: f64 = 1e-12;

/// Solves the square system `a * x = b` through gaussian elimination with
/// partial pivoting.
///
/// # Errors
/// `MlError::ShapeMismatch` if `a` isn't square or `b` doesn't match it,
/// `MlError::SingularSystem` if there's no unique solution.
pub fn solve(mut a: Array2<f64>, mut b: Array1<f64>) -> Result<Array1<f64>> {
    let n = a.nrows();

    if a.ncols() != n {
        return Err(MlError::ShapeMismatch {
            what: "system matrix columns",
            got: a.ncols(),
            expected: n,
        });
    }

    if b.len() != n {
        return Err(MlError::ShapeMismatch {
            what: "system right hand side",
            got: b.len(),
            expected: n,
        });
    }

    let scale = a.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if scale == 0.0 {
        return Err(MlError::SingularSystem);
    }

    for col in 0..n {
        let pivot = (col..n)
            .max_by(|&i, &j| a[[i, col]].abs().total_cmp(&a[[j, col]].abs()))
            .unwrap_or(col);

        if a[[pivot, col]].abs() <= PIVOT_TOLERANCE * scale {
            return Err(MlError::SingularSystem);
        }

        if pivot != col {
            for k in 0..n {
                a.swap([pivot, k], [col, k]);
            }
            b.swap(pivot, col);
        }

        for row in col + 1..n {
            let factor = a[[row, col]] / a[[col, col]];
            if factor == 0.0 {
                continue;
            }

            for k in col..n {
                a[[row, k]] -= factor * a[[col, k]];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = Array1::zeros(n);
    for row in (0..n).rev() {
        let tail: f64 = a
            .index_axis(Axis(0), row)
            .iter()
            .zip(x.iter())
            .skip(row + 1)
            .map(|(a, x)| a * x)
            .sum();

        x[row] = (b[row] - tail) / a[[row, row]];
    }

    Ok(x)
}
