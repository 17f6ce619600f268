//! Linear algebra utilities.
//!
//! Dense helpers used by the NNLS solvers: least squares by Householder QR,
//! shifted solves on the range of a symmetric matrix, and norms.

use crate::error::{MathError, MathResult};
use nalgebra::{DMatrix, DVector};

/// Solves the least-squares problem `min ||A x - b||₂` by QR decomposition.
///
/// `A` must have at least as many rows as columns and full column rank.
///
/// # Returns
///
/// Solution vector x of length `A.ncols()`.
pub fn least_squares_qr(a: &DMatrix<f64>, b: &DVector<f64>) -> MathResult<DVector<f64>> {
    let (m, n) = a.shape();
    if m != b.len() {
        return Err(MathError::dimension_mismatch(m, n, b.len(), 1));
    }
    if n == 0 {
        return Ok(DVector::zeros(0));
    }
    if m < n {
        return Err(MathError::SingularMatrix);
    }

    let qr = a.clone().qr();
    let r = qr.r();

    // Rank check relative to the largest diagonal entry of R
    let max_diag = r.diagonal().amax();
    let threshold = f64::EPSILON * max_diag * m as f64;
    if max_diag == 0.0 || r.diagonal().iter().any(|d| d.abs() <= threshold) {
        return Err(MathError::SingularMatrix);
    }

    let qtb = qr.q().tr_mul(b);
    r.solve_upper_triangular(&qtb)
        .ok_or(MathError::SingularMatrix)
}

/// Solves `(G + shift·I) y = b` for a symmetric positive semidefinite `G`,
/// keeping only the part of `b` in the range of `G`.
///
/// Uses the eigendecomposition `G = V Λ Vᵀ`. Eigenvalues at the rounding level of
/// `G` count as zero and their directions are dropped, so the result stays bounded
/// as `shift → 0` even when `b` has a component in the null space of `G`.
pub fn shifted_range_solve(
    g: &DMatrix<f64>,
    b: &DVector<f64>,
    shift: f64,
) -> MathResult<DVector<f64>> {
    let n = g.nrows();
    if n != g.ncols() {
        return Err(MathError::invalid_input("Matrix must be square"));
    }
    if n != b.len() {
        return Err(MathError::dimension_mismatch(n, n, b.len(), 1));
    }
    if n == 0 {
        return Ok(DVector::zeros(0));
    }

    let eigen = g.clone().symmetric_eigen();
    let largest = eigen.eigenvalues.amax();
    let cutoff = 10.0 * f64::EPSILON * largest * n as f64;
    let coefficients = eigen.eigenvectors.tr_mul(b);

    let mut y = DVector::zeros(n);
    for (i, &lambda) in eigen.eigenvalues.iter().enumerate() {
        if lambda > cutoff {
            y.axpy(coefficients[i] / (lambda + shift), &eigen.eigenvectors.column(i), 1.0);
        }
    }
    Ok(y)
}

/// Returns the 1-norm of a matrix (maximum absolute column sum).
pub fn norm_1(a: &DMatrix<f64>) -> f64 {
    a.column_iter()
        .map(|col| col.iter().map(|v| v.abs()).sum::<f64>())
        .fold(0.0, f64::max)
}

/// Returns the Euclidean norm of the residual `A x - b`.
pub fn residual_norm(a: &DMatrix<f64>, x: &DVector<f64>, b: &DVector<f64>) -> MathResult<f64> {
    if a.ncols() != x.len() || a.nrows() != b.len() {
        return Err(MathError::dimension_mismatch(
            a.nrows(),
            a.ncols(),
            x.len(),
            1,
        ));
    }
    Ok((a * x - b).norm())
}
