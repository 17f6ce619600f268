//! Error types for portfolio allocation.
//!
//! Allocation errors fall into two families:
//!
//! - [`ConfigurationError`]: caller mistakes, detected before any numerical work
//! - [`MathError`]: failures of the solver, wrapped as [`AllocationError::Numerical`]
//!
//! An infeasible constraint system is not an error; it yields a positive RSE.

use allot_core::CoreError;
use allot_math::MathError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Result type for allocation operations.
pub type EngineResult<T> = Result<T, AllocationError>;

/// Invalid inputs to an allocation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// No instruments were supplied.
    #[error("At least one instrument is required")]
    NoInstruments,

    /// The total amount is zero or negative.
    #[error("Total amount must be positive, got {total}")]
    NonPositiveTotal {
        /// The total amount.
        total: Decimal,
    },

    /// The tick is zero or negative.
    #[error("Tick must be positive, got {tick}")]
    NonPositiveTick {
        /// The tick.
        tick: Decimal,
    },

    /// The minimum amount is negative.
    #[error("Minimum amount must not be negative, got {min}")]
    NegativeMinAmount {
        /// The minimum amount.
        min: Decimal,
    },

    /// The minimum amount exceeds the total.
    #[error("Minimum amount {min} exceeds total amount {total}")]
    MinAmountExceedsTotal {
        /// The minimum amount.
        min: Decimal,
        /// The total amount.
        total: Decimal,
    },

    /// The tick does not divide the total amount.
    #[error("Tick {tick} does not evenly divide total amount {total}")]
    TickDoesNotDivideTotal {
        /// The tick.
        tick: Decimal,
        /// The total amount.
        total: Decimal,
    },

    /// The total amount is too many ticks to apportion.
    #[error("Total amount {total} is more than {max} ticks of {tick}")]
    TooManyTicks {
        /// The total amount.
        total: Decimal,
        /// The tick.
        tick: Decimal,
        /// The largest supported tick count.
        max: u64,
    },

    /// Every instrument cannot receive the minimum amount.
    #[error("{count} instruments at a minimum of {floor} exceed total amount {total}")]
    MinimumInfeasible {
        /// Number of instruments.
        count: usize,
        /// The minimum amount rounded up to the tick.
        floor: Decimal,
        /// The total amount.
        total: Decimal,
    },

    /// Two instruments share an identifier.
    #[error("Duplicate instrument '{id}'")]
    DuplicateInstrument {
        /// The repeated identifier.
        id: String,
    },

    /// The damping constant is not a positive finite number.
    #[error("Damping must be positive and finite, got {damping}")]
    InvalidDamping {
        /// The damping constant.
        damping: f64,
    },

    /// The NNLS gradient tolerance is negative or not finite.
    #[error("NNLS tolerance must be finite and non-negative, got {tolerance}")]
    InvalidTolerance {
        /// The tolerance.
        tolerance: f64,
    },

    /// A constraint label names no known category.
    #[error("Unknown category '{label}'")]
    UnknownCategory {
        /// The unrecognised label.
        label: String,
    },

    /// A target proportion lies outside [0, 1].
    #[error("Proportion for '{label}' must lie in [0, 1], got {value}")]
    ProportionOutOfRange {
        /// The constraint label.
        label: String,
        /// The proportion.
        value: f64,
    },

    /// A constraint with a non-zero target matches no instrument.
    #[error("Constraint '{label}' targets {value} but matches no instrument")]
    UnreachableConstraint {
        /// The constraint label.
        label: String,
        /// The proportion.
        value: f64,
    },
}

impl From<CoreError> for ConfigurationError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownCategory { label } => Self::UnknownCategory { label },
            CoreError::UnknownIdentifier { id, .. } => Self::UnknownCategory { label: id },
        }
    }
}

/// Errors that can occur during an allocation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AllocationError {
    /// The inputs are invalid.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The numerical solve failed.
    #[error("Numerical error: {0}")]
    Numerical(#[from] MathError),
}

impl AllocationError {
    /// Returns true for caller mistakes.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Returns true for solver failures.
    #[must_use]
    pub fn is_numerical(&self) -> bool {
        matches!(self, Self::Numerical(_))
    }
}

impl From<CoreError> for AllocationError {
    fn from(err: CoreError) -> Self {
        Self::Configuration(err.into())
    }
}
