//! Realised exposures of an allocation.
//!
//! All functions pair `instruments` with `result.weighted_instruments` by
//! position, which is how [`compute`](crate::compute) returns them. Weights are
//! fractions of the allocated total.

use std::collections::BTreeMap;

use allot_core::{Category, SuperRegion, SuperSector};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{AllocationResult, ConstraintSet, Instrument};

/// Requested and realised proportion of one constraint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintDeviation {
    /// Constraint category.
    pub category: Category,
    /// Requested proportion.
    pub target: f64,
    /// Realised proportion.
    pub realised: f64,
    /// `realised - target`.
    pub deviation: f64,
}

/// Weight of each instrument, in input order.
fn weights<'a>(
    instruments: &'a [Instrument],
    result: &'a AllocationResult,
) -> impl Iterator<Item = (&'a Instrument, f64)> + 'a {
    let total = result.total();
    instruments
        .iter()
        .zip(&result.weighted_instruments)
        .map(move |(instrument, weighted)| {
            let weight = if total.is_zero() {
                0.0
            } else {
                (weighted.amount / total).to_f64().unwrap_or(0.0)
            };
            (instrument, weight)
        })
}

/// Realised proportion of every category held by at least one instrument.
#[must_use]
pub fn category_exposures(
    instruments: &[Instrument],
    result: &AllocationResult,
) -> BTreeMap<Category, f64> {
    let mut exposures = BTreeMap::new();
    for (instrument, weight) in weights(instruments, result) {
        for category in instrument.categories() {
            *exposures.entry(category).or_insert(0.0) += weight;
        }
    }
    exposures
}

/// Realised proportion per super region.
#[must_use]
pub fn super_region_exposures(
    instruments: &[Instrument],
    result: &AllocationResult,
) -> BTreeMap<SuperRegion, f64> {
    let mut exposures = BTreeMap::new();
    for (instrument, weight) in weights(instruments, result) {
        if let Some(region) = instrument.region() {
            *exposures.entry(region.super_region()).or_insert(0.0) += weight;
        }
    }
    exposures
}

/// Realised proportion per super sector.
#[must_use]
pub fn super_sector_exposures(
    instruments: &[Instrument],
    result: &AllocationResult,
) -> BTreeMap<SuperSector, f64> {
    let mut exposures = BTreeMap::new();
    for (instrument, weight) in weights(instruments, result) {
        if let Some(sector) = instrument.sector() {
            *exposures.entry(sector.super_sector()).or_insert(0.0) += weight;
        }
    }
    exposures
}

/// Realised weight in each cell of the 3×3 style box.
///
/// Rows are sizes (large to small), columns styles (value to growth). Instruments
/// without both a size and a style are left out.
#[must_use]
pub fn weighted_stylebox(instruments: &[Instrument], result: &AllocationResult) -> [[f64; 3]; 3] {
    let mut grid = [[0.0; 3]; 3];
    for (instrument, weight) in weights(instruments, result) {
        if let (Some(size), Some(style)) = (instrument.size, instrument.style) {
            grid[size.row()][style.column()] += weight;
        }
    }
    grid
}

/// Requested against realised proportion for every constraint, in category order.
#[must_use]
pub fn constraint_deviations(
    instruments: &[Instrument],
    constraints: &ConstraintSet,
    result: &AllocationResult,
) -> Vec<ConstraintDeviation> {
    let exposures = category_exposures(instruments, result);
    constraints
        .iter()
        .map(|(category, target)| {
            let realised = exposures.get(&category).copied().unwrap_or(0.0);
            ConstraintDeviation {
                category,
                target,
                realised,
                deviation: realised - target,
            }
        })
        .collect()
}

/// Number of instruments receiving each distinct amount.
#[must_use]
pub fn amount_histogram(result: &AllocationResult) -> BTreeMap<Decimal, usize> {
    let mut histogram = BTreeMap::new();
    for weighted in &result.weighted_instruments {
        // Keys print without trailing zeros.
        *histogram.entry(weighted.amount.normalize()).or_insert(0) += 1;
    }
    histogram
}
