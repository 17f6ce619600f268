//! Constraint system construction.
//!
//! For `N` instruments and `M` constraints the system is the `(M+1)×N` membership
//! matrix `A` (`A[i][j] = 1` when instrument `j` falls into category `i`) and the
//! reduced target vector `b[i] = p_i − minWeight · rowSum(A[i])`.
//!
//! The last row is the budget: every instrument, with target `1 − N · minWeight`.
//! It keeps the weights summing to one when the constraints leave some
//! instruments uncovered.
//!
//! The reduction moves the minimum weight out of the unknowns: the solver finds
//! each instrument's excess weight above the floor, which only has to be
//! non-negative.

use allot_core::Category;
use nalgebra::{DMatrix, DVector};

use crate::classifier::belongs_to;
use crate::error::ConfigurationError;
use crate::types::{ConstraintSet, Instrument};

/// Membership matrix and reduced targets of an allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintSystem {
    categories: Vec<Category>,
    proportions: Vec<f64>,
    matrix: DMatrix<f64>,
    targets: DVector<f64>,
}

impl ConstraintSystem {
    /// Builds the system, one row per constraint in category order followed by
    /// the budget row.
    ///
    /// Fails if a proportion lies outside [0, 1] or a positive proportion matches
    /// no instrument.
    pub fn build(
        instruments: &[Instrument],
        constraints: &ConstraintSet,
        min_weight: f64,
    ) -> Result<Self, ConfigurationError> {
        let m = constraints.len();
        let n = instruments.len();
        let mut categories = Vec::with_capacity(m);
        let mut proportions = Vec::with_capacity(m);
        let mut matrix = DMatrix::zeros(m + 1, n);
        let mut targets = DVector::zeros(m + 1);

        for (row, (category, proportion)) in constraints.iter().enumerate() {
            if !(0.0..=1.0).contains(&proportion) {
                return Err(ConfigurationError::ProportionOutOfRange {
                    label: category.id().to_string(),
                    value: proportion,
                });
            }

            let mut row_sum = 0usize;
            for (col, instrument) in instruments.iter().enumerate() {
                if belongs_to(instrument, category) {
                    matrix[(row, col)] = 1.0;
                    row_sum += 1;
                }
            }
            if row_sum == 0 && proportion > 0.0 {
                return Err(ConfigurationError::UnreachableConstraint {
                    label: category.id().to_string(),
                    value: proportion,
                });
            }

            targets[row] = proportion - min_weight * row_sum as f64;
            categories.push(category);
            proportions.push(proportion);
        }

        matrix.row_mut(m).fill(1.0);
        targets[m] = 1.0 - min_weight * n as f64;

        Ok(Self {
            categories,
            proportions,
            matrix,
            targets,
        })
    }

    /// Constraint categories, one per constraint row.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Requested proportions, one per constraint row.
    #[must_use]
    pub fn proportions(&self) -> &[f64] {
        &self.proportions
    }

    /// The membership matrix `A`, budget row last.
    #[must_use]
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// The reduced target vector `b`.
    #[must_use]
    pub fn targets(&self) -> &DVector<f64> {
        &self.targets
    }

    /// Number of constraints, not counting the budget row.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.categories.len()
    }

    /// Number of instruments.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.matrix.ncols()
    }
}
