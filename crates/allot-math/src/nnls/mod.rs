//! Non-negative least squares.
//!
//! This module provides the Lawson–Hanson active-set method for
//!
//! ```text
//! minimize ||A x - b||₂²   subject to x ≥ 0
//! ```
//!
//! - [`nnls`]: the plain problem, passive subproblems solved by QR
//! - [`damped_nnls`]: the Tikhonov-damped problem with `A` stacked on `ε·I` and `b`
//!   stacked on zeros, solved without forming the stacked matrix
//! - [`refine_support`]: removes the damping bias from a solution by re-solving the
//!   undamped problem on its support
//!
//! # Damped subproblems
//!
//! For a passive set `P` the damped subproblem `min ||A_P x - b||² + ε²||x||²`
//! has the closed form `x_P = A_Pᵀ (A_P A_Pᵀ + ε² I)⁻¹ b`. The system is only M×M
//! (one row per constraint), so each iteration stays cheap when there are many more
//! columns than rows.
//!
//! The M×M system is solved on the range of `A_P A_Pᵀ` only. The part of `b` outside
//! that range contributes nothing to `x_P` but would be scaled by `1/ε²`, so dropping
//! it keeps inconsistent systems accurate. For a consistent system the residual
//! `b - A_P x_P` is of order `ε²`, and identical columns receive bitwise identical
//! weights.
//!
//! # Example
//!
//! ```rust
//! use allot_math::nnls::{nnls, NnlsConfig};
//! use nalgebra::{DMatrix, DVector};
//!
//! let a = DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 0.0, 1.0]);
//! let b = DVector::from_vec(vec![1.0, -1.0]);
//!
//! let solution = nnls(&a, &b, &NnlsConfig::default()).unwrap();
//! assert!((solution.x[0] - 1.0).abs() < 1e-12);
//! assert_eq!(solution.x[1], 0.0);
//! ```

mod active_set;

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};
use crate::linear_algebra::{least_squares_qr, norm_1, residual_norm, shifted_range_solve};
use active_set::lawson_hanson;

/// Lower bound on the default iteration limit.
pub const MIN_ITERATIONS: u32 = 30;

/// Configuration for the NNLS solvers.
///
/// Both fields default to values derived from the problem when absent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NnlsConfig {
    /// Gradient tolerance. Defaults to `10 · eps · ||A||₁ · max(m, n)`.
    pub tolerance: Option<f64>,
    /// Iteration limit, counting inner steps. Defaults to `max(3n, 30)`.
    pub max_iterations: Option<u32>,
}

impl NnlsConfig {
    /// Creates a configuration with problem-derived defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the gradient tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Sets the iteration limit.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    fn resolve(&self, norm: f64, rows: usize, cols: usize) -> MathResult<(f64, u32)> {
        let tolerance = match self.tolerance {
            Some(t) if t.is_finite() && t >= 0.0 => t,
            Some(t) => return Err(MathError::invalid_input(format!("NNLS tolerance {t}"))),
            None => 10.0 * f64::EPSILON * norm * rows.max(cols) as f64,
        };
        let default_iterations = u32::try_from(cols.saturating_mul(3)).unwrap_or(u32::MAX);
        let max_iterations = self
            .max_iterations
            .unwrap_or_else(|| default_iterations.max(MIN_ITERATIONS));
        Ok((tolerance, max_iterations))
    }
}

/// Result of an NNLS solve.
#[derive(Debug, Clone, PartialEq)]
pub struct NnlsSolution {
    /// The solution vector, all entries ≥ 0.
    pub x: DVector<f64>,
    /// Number of active-set iterations (outer plus inner).
    pub iterations: u32,
    /// Number of strictly positive entries.
    pub passive: usize,
    /// Residual norm `||A x - b||₂` of the undamped system.
    pub residual: f64,
}

impl NnlsSolution {
    fn new(
        a: &DMatrix<f64>,
        b: &DVector<f64>,
        x: DVector<f64>,
        iterations: u32,
    ) -> MathResult<Self> {
        let residual = residual_norm(a, &x, b)?;
        let passive = x.iter().filter(|v| **v > 0.0).count();
        Ok(Self {
            x,
            iterations,
            passive,
            residual,
        })
    }
}

fn validate(a: &DMatrix<f64>, b: &DVector<f64>) -> MathResult<()> {
    if a.nrows() != b.len() {
        return Err(MathError::dimension_mismatch(
            a.nrows(),
            a.ncols(),
            b.len(),
            1,
        ));
    }
    if a.iter().chain(b.iter()).any(|v| !v.is_finite()) {
        return Err(MathError::invalid_input("NNLS input contains non-finite values"));
    }
    Ok(())
}

/// Solves `min ||A x - b||₂ subject to x ≥ 0`.
pub fn nnls(a: &DMatrix<f64>, b: &DVector<f64>, config: &NnlsConfig) -> MathResult<NnlsSolution> {
    validate(a, b)?;
    let (m, n) = a.shape();
    let (tolerance, max_iterations) = config.resolve(norm_1(a), m, n)?;

    let (x, iterations) = lawson_hanson(
        n,
        tolerance,
        max_iterations,
        |x| a.tr_mul(&(b - a * x)),
        |passive| least_squares_qr(&a.select_columns(passive), b),
    )?;

    log::debug!("nnls converged: {}x{}, {} iterations", m, n, iterations);
    NnlsSolution::new(a, b, x, iterations)
}

/// Solves the damped problem `min ||A x - b||₂² + ε²||x||₂² subject to x ≥ 0`.
///
/// This is the plain problem on `A` stacked with `ε·I` and `b` stacked with zeros.
/// The reported residual is that of the undamped system `A x - b`.
pub fn damped_nnls(
    a: &DMatrix<f64>,
    b: &DVector<f64>,
    damping: f64,
    config: &NnlsConfig,
) -> MathResult<NnlsSolution> {
    validate(a, b)?;
    if !damping.is_finite() || damping <= 0.0 {
        return Err(MathError::invalid_input(format!(
            "damping must be positive and finite, got {damping}"
        )));
    }

    let (m, n) = a.shape();
    let damping_sq = damping * damping;
    let (tolerance, max_iterations) = config.resolve(norm_1(a) + damping, m + n, n)?;

    let (x, iterations) = lawson_hanson(
        n,
        tolerance,
        max_iterations,
        |x| a.tr_mul(&(b - a * x)) - x * damping_sq,
        |passive| damped_subproblem(a, b, damping, passive),
    )?;

    log::debug!(
        "damped nnls converged: {}x{}, damping {:.1e}, {} iterations",
        m,
        n,
        damping,
        iterations
    );
    NnlsSolution::new(a, b, x, iterations)
}

fn damped_subproblem(
    a: &DMatrix<f64>,
    b: &DVector<f64>,
    damping: f64,
    passive: &[usize],
) -> MathResult<DVector<f64>> {
    let a_p = a.select_columns(passive);
    if a.nrows() == 0 {
        return Ok(DVector::zeros(passive.len()));
    }

    let gram = &a_p * a_p.transpose();
    let y = shifted_range_solve(&gram, b, damping * damping)?;
    Ok(a_p.tr_mul(&y))
}

/// Re-solves the undamped problem on the support of `solution`.
///
/// Takes the minimum-norm least-squares solution over the columns where
/// `solution.x` is positive, dropping columns that come out non-positive until
/// every remaining entry is positive. The refined solution replaces `solution`
/// only if its residual is no larger.
///
/// On a consistent system the damped residual `ε²·||y||` can exceed `ε²`; the
/// refined residual is at rounding level instead.
pub fn refine_support(
    a: &DMatrix<f64>,
    b: &DVector<f64>,
    solution: NnlsSolution,
) -> MathResult<NnlsSolution> {
    validate(a, b)?;
    if solution.x.len() != a.ncols() {
        return Err(MathError::dimension_mismatch(
            a.nrows(),
            a.ncols(),
            solution.x.len(),
            1,
        ));
    }

    let mut support: Vec<usize> = (0..a.ncols()).filter(|&j| solution.x[j] > 0.0).collect();
    while !support.is_empty() {
        let a_s = a.select_columns(&support);
        let gram = &a_s * a_s.transpose();
        let z = a_s.tr_mul(&shifted_range_solve(&gram, b, 0.0)?);

        if z.iter().all(|v| *v > 0.0) {
            let mut x = DVector::zeros(a.ncols());
            for (&j, &v) in support.iter().zip(z.iter()) {
                x[j] = v;
            }
            let refined = NnlsSolution::new(a, b, x, solution.iterations)?;
            log::debug!(
                "support refined: {} columns, residual {:.3e} -> {:.3e}",
                support.len(),
                solution.residual,
                refined.residual
            );
            return Ok(if refined.residual <= solution.residual {
                refined
            } else {
                solution
            });
        }

        support = support
            .iter()
            .zip(z.iter())
            .filter(|(_, v)| **v > 0.0)
            .map(|(&j, _)| j)
            .collect();
    }
    Ok(solution)
}

/// Residual error of a damped solve with the damping bias removed.
///
/// Returns `max(residual - ε², 0)`. The damped residual of a consistent system is
/// `ε²·||y||` with `y = (A_P A_Pᵀ + ε² I)⁻¹ b`, which passes `ε²` once `||y|| > 1`;
/// pass the residual of [`refine_support`] to get zero for every consistent system.
#[must_use]
pub fn residual_error(residual: f64, damping: f64) -> f64 {
    (residual - damping * damping).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_nnls_unconstrained_optimum_is_feasible() {
        let a = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
        let b = DVector::from_vec(vec![1.0, 2.0, 3.0]);

        let solution = nnls(&a, &b, &NnlsConfig::default()).unwrap();
        assert_relative_eq!(solution.x[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(solution.x[1], 2.0, epsilon = 1e-12);
        assert_eq!(solution.passive, 2);
        assert!(solution.residual < 1e-12);
    }

    #[test]
    fn test_nnls_active_constraint() {
        // Unconstrained optimum is (2, -1); the non-negative optimum is (1, 0).
        let a = DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 0.0, 1.0]);
        let b = DVector::from_vec(vec![1.0, -1.0]);

        let solution = nnls(&a, &b, &NnlsConfig::default()).unwrap();
        assert_relative_eq!(solution.x[0], 1.0, epsilon = 1e-12);
        assert_eq!(solution.x[1], 0.0);
        assert_relative_eq!(solution.residual, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_nnls_all_negative_target() {
        let a = DMatrix::identity(3, 3);
        let b = DVector::from_vec(vec![-1.0, -2.0, -3.0]);

        let solution = nnls(&a, &b, &NnlsConfig::default()).unwrap();
        assert!(solution.x.iter().all(|&v| v == 0.0));
        assert_eq!(solution.iterations, 0);
    }

    #[test]
    fn test_damped_symmetric_split() {
        // min (x1 + x2 - 1)² + ε²(x1² + x2²): x1 = x2 = 1 / (2 + ε²)
        let damping = 1e-3;
        let a = DMatrix::from_row_slice(1, 2, &[1.0, 1.0]);
        let b = DVector::from_vec(vec![1.0]);

        let solution = damped_nnls(&a, &b, damping, &NnlsConfig::default()).unwrap();
        let expected = 1.0 / (2.0 + damping * damping);
        assert_relative_eq!(solution.x[0], expected, epsilon = 1e-12);
        assert_relative_eq!(solution.x[1], expected, epsilon = 1e-12);
        assert_eq!(solution.iterations, 2);
    }

    #[test]
    fn test_damped_consistent_system_has_zero_error() {
        // Two overlapping partitions of four columns (2x2 grid), both asking for halves.
        let a = DMatrix::from_row_slice(
            4,
            4,
            &[
                1.0, 1.0, 0.0, 0.0, //
                0.0, 0.0, 1.0, 1.0, //
                1.0, 0.0, 1.0, 0.0, //
                0.0, 1.0, 0.0, 1.0,
            ],
        );
        let b = DVector::from_vec(vec![0.5, 0.5, 0.5, 0.5]);
        let damping = 1e-6;

        let solution = damped_nnls(&a, &b, damping, &NnlsConfig::default()).unwrap();
        assert!(solution.x.iter().all(|&v| v >= 0.0));
        let fitted = &a * &solution.x;
        for i in 0..4 {
            assert_relative_eq!(fitted[i], 0.5, epsilon = 1e-9);
        }
        assert_eq!(residual_error(solution.residual, damping), 0.0);
    }

    #[test]
    fn test_damped_inconsistent_system_has_positive_error() {
        // One column asked to be both 0.2 and 0.8.
        let a = DMatrix::from_row_slice(2, 1, &[1.0, 1.0]);
        let b = DVector::from_vec(vec![0.2, 0.8]);
        let damping = 1e-6;

        let solution = damped_nnls(&a, &b, damping, &NnlsConfig::default()).unwrap();
        assert_relative_eq!(solution.x[0], 0.5, epsilon = 1e-9);
        assert_relative_eq!(
            residual_error(solution.residual, damping),
            0.18_f64.sqrt(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_damped_without_constraints() {
        let a = DMatrix::zeros(0, 3);
        let b = DVector::zeros(0);

        let solution = damped_nnls(&a, &b, 1e-6, &NnlsConfig::default()).unwrap();
        assert_eq!(solution.x, DVector::zeros(3));
        assert_eq!(solution.residual, 0.0);
    }

    #[test]
    fn test_iteration_limit() {
        let a = DMatrix::from_row_slice(1, 2, &[1.0, 1.0]);
        let b = DVector::from_vec(vec![1.0]);
        let config = NnlsConfig::new().with_max_iterations(1);

        let result = damped_nnls(&a, &b, 1e-3, &config);
        assert!(matches!(
            result,
            Err(MathError::ConvergenceFailed { iterations: 1, .. })
        ));
    }

    #[test]
    fn test_invalid_inputs() {
        let a = DMatrix::from_row_slice(1, 2, &[1.0, 1.0]);
        let b = DVector::from_vec(vec![1.0, 2.0]);
        assert!(matches!(
            nnls(&a, &b, &NnlsConfig::default()),
            Err(MathError::DimensionMismatch { .. })
        ));

        let b = DVector::from_vec(vec![f64::NAN]);
        assert!(nnls(&a, &b, &NnlsConfig::default()).is_err());

        let b = DVector::from_vec(vec![1.0]);
        assert!(damped_nnls(&a, &b, 0.0, &NnlsConfig::default()).is_err());
        assert!(damped_nnls(&a, &b, f64::INFINITY, &NnlsConfig::default()).is_err());

        let config = NnlsConfig::new().with_tolerance(-1.0);
        assert!(nnls(&a, &b, &config).is_err());
    }

    #[test]
    fn test_config_serde() {
        let config = NnlsConfig::new().with_max_iterations(500);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"tolerance":null,"maxIterations":500}"#);

        let parsed: NnlsConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, NnlsConfig::default());
    }

    #[test]
    fn test_refine_removes_damping_bias() {
        let damping = 1e-3;
        let a = DMatrix::from_row_slice(1, 2, &[1.0, 1.0]);
        let b = DVector::from_vec(vec![1.0]);

        let damped = damped_nnls(&a, &b, damping, &NnlsConfig::default()).unwrap();
        let refined = refine_support(&a, &b, damped.clone()).unwrap();
        assert_relative_eq!(refined.x[0], 0.5, epsilon = 1e-14);
        assert_eq!(refined.x[0], refined.x[1]);
        assert!(refined.residual < damped.residual);
        assert_eq!(refined.iterations, damped.iterations);
    }

    #[test]
    fn test_refine_consistent_system_with_large_dual() {
        // Rows: Small {a}, NorthAmerica {a, b}, budget {a, b}. Here ||y|| ≈ 1.12, so the
        // damped residual ε²·||y|| exceeds ε² while the refined one is zero.
        let a = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 1.0]);
        let b = DVector::from_vec(vec![0.05, 1.0, 1.0]);
        let damping = 0.01;

        let damped = damped_nnls(&a, &b, damping, &NnlsConfig::default()).unwrap();
        assert!(residual_error(damped.residual, damping) > 0.0);

        let refined = refine_support(&a, &b, damped).unwrap();
        assert_relative_eq!(refined.x[0], 0.05, epsilon = 1e-12);
        assert_relative_eq!(refined.x[1], 0.95, epsilon = 1e-12);
        assert_eq!(residual_error(refined.residual, damping), 0.0);
    }

    #[test]
    fn test_refine_drops_non_positive_columns() {
        // Exact solution (1, 0); the second column leaves the support.
        let a = DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 0.0, 1.0]);
        let b = DVector::from_vec(vec![1.0, 0.0]);
        let start = NnlsSolution::new(&a, &b, DVector::from_vec(vec![0.9, 0.05]), 4).unwrap();

        let refined = refine_support(&a, &b, start).unwrap();
        assert_relative_eq!(refined.x[0], 1.0, epsilon = 1e-12);
        assert!(refined.x[1] >= 0.0 && refined.x[1] < 1e-12);
        assert!(refined.residual < 1e-12);
    }

    #[test]
    fn test_refine_keeps_better_damped_fit() {
        // Inconsistent: the refined fit equals the least-squares optimum, never worse.
        let a = DMatrix::from_row_slice(2, 1, &[1.0, 1.0]);
        let b = DVector::from_vec(vec![0.2, 0.8]);

        let damped = damped_nnls(&a, &b, 1e-6, &NnlsConfig::default()).unwrap();
        let refined = refine_support(&a, &b, damped.clone()).unwrap();
        assert!(refined.residual <= damped.residual);
        assert_relative_eq!(refined.x[0], 0.5, epsilon = 1e-12);

        let empty = NnlsSolution::new(&a, &b, DVector::zeros(1), 0).unwrap();
        assert_eq!(refine_support(&a, &b, empty.clone()).unwrap(), empty);
    }

    #[test]
    fn test_residual_error_floor() {
        assert_eq!(residual_error(5e-13, 1e-6), 0.0);
        assert_relative_eq!(residual_error(0.1, 1e-6), 0.1 - 1e-12);
    }
}
