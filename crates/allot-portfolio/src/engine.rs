//! The allocation entry point.
//!
//! `compute` runs the full pipeline:
//!
//! 1. Validate instruments, options and configuration (no numerical work yet)
//! 2. Build the membership matrix and reduced targets
//! 3. Solve the damped NNLS problem for the excess weights, then re-solve
//!    undamped on the support found
//! 4. Apportion the ticks of the total by vote counts `round((x + minWeight) / ε)`
//! 5. Lift any instrument below the minimum and convert ticks to amounts
//!
//! The computation is pure and deterministic: identical inputs, including
//! instrument order, always give identical results.

use std::collections::HashSet;

use allot_math::nnls::{damped_nnls, refine_support, residual_error};

use crate::assembler::{assemble, enforce_floor, votes};
use crate::error::{ConfigurationError, EngineResult};
use crate::system::ConstraintSystem;
use crate::types::{
    AllocationDiagnostics, AllocationOptions, AllocationResult, ConstraintSet, EngineConfig,
    Instrument,
};

/// Allocates `options.total_amount` across `instruments` with the default
/// engine configuration.
///
/// # Example
///
/// ```rust
/// use allot_core::{Country, Size};
/// use allot_portfolio::{compute, AllocationOptions, ConstraintSet, Instrument};
/// use rust_decimal::Decimal;
///
/// let instruments = vec![
///     Instrument::new("a").with_country(Country::US).with_size(Size::Small),
///     Instrument::new("b").with_country(Country::DE).with_size(Size::Large),
/// ];
/// let constraints = ConstraintSet::from_labels([("NorthAmerica", 0.25), ("Eurozone", 0.75)])?;
/// let options = AllocationOptions::new(Decimal::from(1_000));
///
/// let result = compute(&instruments, &constraints, &options)?;
/// assert_eq!(result.amount("a"), Some(Decimal::from(250)));
/// assert_eq!(result.amount("b"), Some(Decimal::from(750)));
/// assert_eq!(result.rse, 0.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn compute(
    instruments: &[Instrument],
    constraints: &ConstraintSet,
    options: &AllocationOptions,
) -> EngineResult<AllocationResult> {
    compute_with_config(instruments, constraints, options, &EngineConfig::default())
}

/// Allocates `options.total_amount` across `instruments`.
pub fn compute_with_config(
    instruments: &[Instrument],
    constraints: &ConstraintSet,
    options: &AllocationOptions,
    config: &EngineConfig,
) -> EngineResult<AllocationResult> {
    validate_instruments(instruments)?;
    let ticks = options.ticks(instruments.len())?;
    config.validate()?;

    let min_weight = options.min_weight();
    let system = ConstraintSystem::build(instruments, constraints, min_weight)?;

    let damped = damped_nnls(
        system.matrix(),
        system.targets(),
        config.damping,
        &config.nnls,
    )?;
    let solution = refine_support(system.matrix(), system.targets(), damped)?;
    let rse = residual_error(solution.residual, config.damping);

    tracing::debug!(
        constraints = system.rows(),
        instruments = system.cols(),
        iterations = solution.iterations,
        passive = solution.passive,
        rse,
        "Constraint system solved"
    );
    if rse > 0.0 {
        tracing::warn!(rse, "Constraint system is infeasible, allocating the closest fit");
    }

    let votes = votes(&solution.x, min_weight, config.damping)?;
    let mut seats = options.algorithm.apportion(&votes, ticks.seats)?;
    let floor_repairs = enforce_floor(&mut seats, &votes, ticks.floor);
    if floor_repairs > 0 {
        tracing::debug!(
            floor_repairs,
            floor = ticks.floor,
            "Moved ticks to meet the minimum amount"
        );
    }

    let mut result = assemble(instruments, &seats, options.tick, rse);
    result.diagnostics = AllocationDiagnostics {
        constraints: system.rows(),
        iterations: solution.iterations,
        passive: solution.passive,
        total_votes: votes.iter().sum(),
        floor_repairs,
    };

    tracing::debug!(
        algorithm = %options.algorithm,
        seats = ticks.seats,
        "Allocation complete"
    );
    Ok(result)
}

fn validate_instruments(instruments: &[Instrument]) -> Result<(), ConfigurationError> {
    if instruments.is_empty() {
        return Err(ConfigurationError::NoInstruments);
    }
    let mut seen = HashSet::with_capacity(instruments.len());
    for instrument in instruments {
        if !seen.insert(instrument.id.as_str()) {
            return Err(ConfigurationError::DuplicateInstrument {
                id: instrument.id.clone(),
            });
        }
    }
    Ok(())
}
