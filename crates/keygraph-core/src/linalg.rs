//! Dense linear algebra used by the matrix-based solvers.
//!
//! Everything here works on small-to-medium dense `ndarray` matrices
//! (keyword graphs have hundreds of nodes, not millions), so the routines
//! favour clarity and numerical robustness over blocking or BLAS.
//!
//! | Routine | Method | Complexity |
//! |---------|--------|------------|
//! | [`invert`] | Gauss-Jordan, partial pivoting | O(N³) |
//! | [`laplacian_pseudo_inverse`] | (L + J/n)⁻¹ - J/n | O(N³) |
//! | [`spectral_radius`] | power iteration on A + I | O(N² × iterations) |

use crate::{Error, Result};
use ndarray::{Array1, Array2};

/// Per-dimension relative pivot threshold below which a matrix counts as
/// singular.
pub const PIVOT_EPSILON: f64 = f64::EPSILON;

/// Power iterations used by [`spectral_radius`].
const SPECTRAL_ITERATIONS: usize = 200;

/// Invert a square matrix.
///
/// Gauss-Jordan elimination with partial pivoting. A pivot whose magnitude
/// is at most `n × PIVOT_EPSILON` times the largest absolute entry of `m`
/// makes the matrix singular, i.e. only matrices whose condition number is
/// beyond what `f64` can resolve are rejected. Results for condition numbers
/// near `1/PIVOT_EPSILON` are correspondingly less accurate.
///
/// # Errors
///
/// - [`Error::SingularMatrix`] when no usable pivot exists for some column.
/// - [`Error::InvalidParameter`] when `m` is not square.
pub fn invert(m: &Array2<f64>) -> Result<Array2<f64>> {
    let (rows, cols) = m.dim();
    if rows != cols {
        return Err(Error::invalid(
            "matrix",
            format!("cannot invert a {rows}x{cols} matrix"),
        ));
    }
    let n = rows;
    let scale = m.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    let threshold = n as f64 * PIVOT_EPSILON * scale;

    let mut a = m.clone();
    let mut inv = Array2::<f64>::eye(n);

    for col in 0..n {
        let pivot_row = (col..n)
            .max_by(|&i, &j| a[[i, col]].abs().total_cmp(&a[[j, col]].abs()))
            .unwrap_or(col);
        let pivot = a[[pivot_row, col]];
        // Negated comparison so NaN pivots are rejected too.
        if !(pivot.abs() > threshold) {
            return Err(Error::SingularMatrix { pivot: col });
        }

        if pivot_row != col {
            for k in 0..n {
                a.swap([pivot_row, k], [col, k]);
                inv.swap([pivot_row, k], [col, k]);
            }
        }

        for k in 0..n {
            a[[col, k]] /= pivot;
            inv[[col, k]] /= pivot;
        }

        for row in 0..n {
            if row == col {
                continue;
            }
            let factor = a[[row, col]];
            if factor == 0.0 {
                continue;
            }
            for k in 0..n {
                a[[row, k]] -= factor * a[[col, k]];
                inv[[row, k]] -= factor * inv[[col, k]];
            }
        }
    }

    Ok(inv)
}

/// Moore-Penrose pseudo-inverse of the Laplacian of a connected graph.
///
/// The Laplacian is singular (the all-ones vector spans its kernel), so it
/// is never inverted directly. Shifting by `J/n` lifts the zero eigenvalue
/// to 1 while leaving every other eigenpair alone:
///
/// ```text
/// L⁺ = (L + J/n)⁻¹ - J/n
/// ```
///
/// The identity holds exactly when the graph is connected; callers check
/// connectivity first.
pub fn laplacian_pseudo_inverse(laplacian: &Array2<f64>) -> Result<Array2<f64>> {
    let n = laplacian.nrows();
    if n == 0 {
        return Ok(Array2::zeros((0, 0)));
    }
    let shift = 1.0 / n as f64;
    let shifted = laplacian.mapv(|v| v + shift);
    let inverse = invert(&shifted)?;
    Ok(inverse.mapv(|v| v - shift))
}

/// Estimate the spectral radius of a non-negative matrix.
///
/// Power iteration on `A + I`: for non-negative `A` the Perron root of
/// `A + I` is `ρ(A) + 1` and it strictly dominates, which avoids the
/// oscillation plain power iteration shows on periodic graphs (e.g. a
/// two-cycle).
pub fn spectral_radius(a: &Array2<f64>) -> f64 {
    let n = a.nrows();
    if n == 0 {
        return 0.0;
    }
    let mut x = Array1::from_elem(n, 1.0 / (n as f64).sqrt());
    let mut estimate = 1.0;
    for _ in 0..SPECTRAL_ITERATIONS {
        let y = a.dot(&x) + &x;
        let norm = y.dot(&y).sqrt();
        if !norm.is_finite() || norm == 0.0 {
            break;
        }
        estimate = norm;
        x = y / norm;
    }
    (estimate - 1.0).max(0.0)
}

/// Scale `values` so they sum to 1.
///
/// A total of exactly zero (e.g. every edge weight is 0) falls back to the
/// uniform distribution, keeping the unit-sum contract.
///
/// # Errors
///
/// [`Error::NonFiniteScores`] when the total is infinite or NaN.
pub fn normalize_unit_sum(values: Array1<f64>) -> Result<Array1<f64>> {
    let n = values.len();
    let total = values.sum();
    if !total.is_finite() {
        return Err(Error::NonFiniteScores { total });
    }
    if total == 0.0 {
        if n > 0 {
            tracing::warn!(nodes = n, "all raw scores are zero; falling back to uniform scores");
        }
        return Ok(Array1::from_elem(n, 1.0 / n as f64));
    }
    Ok(values / total)
}
