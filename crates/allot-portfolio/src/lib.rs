//! # Allot Portfolio
//!
//! Constrained weight allocation: turns instruments, target proportions per
//! category and monetary options into exact per-instrument amounts.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: every call is stateless with explicit inputs
//! - **Exact money**: amounts are [`rust_decimal::Decimal`] multiples of the tick
//!   and always sum to the total
//! - **Deterministic**: instrument order decides every tie
//! - **Fail fast**: invalid inputs are rejected before any numerical work
//!
//! ## Pipeline
//!
//! ```text
//! classifier -> system -> damped NNLS -> apportionment -> assembler
//! ```
//!
//! The membership matrix `A` and reduced targets `b = p − minWeight · rowSum(A)`,
//! closed by a budget row over all instruments, are solved for non-negative excess
//! weights with a Tikhonov-damped NNLS and re-solved undamped on the support. Each
//! weight plus the minimum becomes an integer vote count, the ticks of the total
//! are apportioned by Sainte-Laguë/Schepers or Hare/Niemeyer, and any instrument
//! left below the minimum is topped up from the most over-represented one.
//!
//! The residual error `rse = max(‖A x − b‖ − ε², 0)` is zero when every constraint
//! can be met. An infeasible system is not an error: the closest allocation is
//! returned with a positive `rse`.
//!
//! ## Quick Start
//!
//! ```rust
//! use allot_core::{Country, Size};
//! use allot_portfolio::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let instruments = vec![
//!     Instrument::new("a").with_country(Country::US).with_size(Size::Small),
//!     Instrument::new("b").with_country(Country::DE).with_size(Size::Small),
//!     Instrument::new("c").with_country(Country::US).with_size(Size::Mid),
//!     Instrument::new("d").with_country(Country::US).with_size(Size::Large),
//!     Instrument::new("e").with_country(Country::DE).with_size(Size::Large),
//! ];
//! let constraints = ConstraintSet::from_labels([
//!     ("NorthAmerica", 0.4),
//!     ("Eurozone", 0.6),
//!     ("Small", 0.2),
//!     ("Mid", 0.3),
//!     ("Large", 0.5),
//! ])?;
//! let options = AllocationOptions::new(Decimal::from(100)).with_min_amount(Decimal::from(5));
//!
//! let result = compute(&instruments, &constraints, &options)?;
//! assert_eq!(result.total(), Decimal::from(100));
//! assert_eq!(result.rse, 0.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`classifier`] - Category membership of instruments
//! - [`system`] - Membership matrix and reduced targets
//! - [`assembler`] - Votes, floor repair and amounts
//! - [`engine`] - The `compute` entry point
//! - [`exposure`] - Realised exposures of a result
//! - [`types`] - Instruments, constraints, options, results and configuration

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod assembler;
pub mod classifier;
pub mod engine;
pub mod error;
pub mod exposure;
pub mod system;
pub mod types;

pub use error::{AllocationError, ConfigurationError, EngineResult};

pub use types::{
    AllocationDiagnostics, AllocationOptions, AllocationResult, ConstraintSet, EngineConfig,
    Instrument, WeightedInstrument, DEFAULT_DAMPING,
};

pub use classifier::{belongs_to, belongs_to_label};
pub use engine::{compute, compute_with_config};
pub use exposure::{
    amount_histogram, category_exposures, constraint_deviations, super_region_exposures,
    super_sector_exposures, weighted_stylebox, ConstraintDeviation,
};
pub use system::ConstraintSystem;

pub use allot_math::apportionment::ApportionmentMethod;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::engine::{compute, compute_with_config};
    pub use crate::error::{AllocationError, ConfigurationError, EngineResult};
    pub use crate::exposure::{category_exposures, constraint_deviations};
    pub use crate::types::{
        AllocationOptions, AllocationResult, ConstraintSet, EngineConfig, Instrument,
        WeightedInstrument,
    };
    pub use allot_core::{Category, Dimension};
    pub use allot_math::apportionment::ApportionmentMethod;
}
