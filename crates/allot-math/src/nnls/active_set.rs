//! Lawson–Hanson active-set iteration shared by the plain and damped solvers.

use nalgebra::DVector;

use crate::error::{MathError, MathResult};

/// Runs the Lawson–Hanson active-set loop.
///
/// * `gradient` returns the negative gradient `w` of the objective at `x`
/// * `solve_passive` returns the unconstrained least-squares solution restricted to
///   the given (sorted) passive columns, one entry per passive column
///
/// Returns the solution and the number of iterations (outer plus inner).
pub(super) fn lawson_hanson<G, S>(
    n: usize,
    tolerance: f64,
    max_iterations: u32,
    mut gradient: G,
    mut solve_passive: S,
) -> MathResult<(DVector<f64>, u32)>
where
    G: FnMut(&DVector<f64>) -> DVector<f64>,
    S: FnMut(&[usize]) -> MathResult<DVector<f64>>,
{
    let mut x = DVector::zeros(n);
    let mut passive = vec![false; n];
    // Columns whose trial solution came out non-positive since the last accepted step.
    let mut rejected = vec![false; n];
    let mut w = gradient(&x);
    let mut iterations = 0u32;

    loop {
        let candidate = (0..n)
            .filter(|&j| !passive[j] && !rejected[j] && w[j] > tolerance)
            .max_by(|&i, &j| w[i].total_cmp(&w[j]).then(j.cmp(&i)));
        let Some(t) = candidate else {
            break;
        };

        iterations += 1;
        if iterations > max_iterations {
            return Err(MathError::convergence_failed(max_iterations, w[t]));
        }
        passive[t] = true;
        log::trace!("nnls iteration {}: column {} enters (w = {:.3e})", iterations, t, w[t]);

        let mut first_pass = true;
        let accepted = loop {
            let indices: Vec<usize> = (0..n).filter(|&j| passive[j]).collect();
            let solved = solve_passive(&indices)?;
            let mut z = DVector::zeros(n);
            for (&j, &value) in indices.iter().zip(solved.iter()) {
                z[j] = value;
            }

            if first_pass && z[t] <= 0.0 {
                // Lawson–Hanson step 6: the entering column cannot carry weight.
                passive[t] = false;
                rejected[t] = true;
                break false;
            }
            first_pass = false;

            if indices.iter().all(|&j| z[j] > 0.0) {
                x = z;
                break true;
            }

            iterations += 1;
            if iterations > max_iterations {
                return Err(MathError::convergence_failed(max_iterations, w[t]));
            }

            // Step back along x -> z until the first passive entry reaches zero.
            let (blocking, alpha) = indices
                .iter()
                .filter(|&&j| z[j] <= 0.0)
                .map(|&j| {
                    let denominator = x[j] - z[j];
                    let alpha = if denominator > 0.0 {
                        x[j] / denominator
                    } else {
                        0.0
                    };
                    (j, alpha)
                })
                .min_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)))
                .unwrap_or((t, 0.0));

            let step = (&z - &x) * alpha;
            x += step;
            x[blocking] = 0.0;
            passive[blocking] = false;
            for &j in &indices {
                if x[j] <= tolerance {
                    x[j] = 0.0;
                    passive[j] = false;
                }
            }
            log::trace!(
                "nnls iteration {}: step {:.3e} blocked by column {}",
                iterations,
                alpha,
                blocking
            );
        };

        if accepted {
            w = gradient(&x);
            rejected.iter_mut().for_each(|r| *r = false);
        }
    }

    x.iter_mut().for_each(|v| {
        if *v < 0.0 {
            *v = 0.0;
        }
    });

    Ok((x, iterations))
}
