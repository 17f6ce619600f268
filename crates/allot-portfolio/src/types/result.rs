//! Allocation output.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Amount allocated to one instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedInstrument {
    /// Instrument identifier.
    pub id: String,
    /// Allocated amount, a non-negative multiple of the tick.
    pub amount: Decimal,
}

/// Solver statistics of an allocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationDiagnostics {
    /// Number of constraint rows.
    pub constraints: usize,
    /// Active-set iterations of the NNLS solve.
    pub iterations: u32,
    /// Instruments with a positive excess weight.
    pub passive: usize,
    /// Sum of the vote counts handed to apportionment.
    pub total_votes: u64,
    /// Ticks moved to lift instruments to the minimum after apportionment.
    pub floor_repairs: u64,
}

/// Result of an allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationResult {
    /// Amounts in instrument input order.
    pub weighted_instruments: Vec<WeightedInstrument>,
    /// Residual error; zero when every constraint is met.
    pub rse: f64,
    /// Solver statistics.
    #[serde(default)]
    pub diagnostics: AllocationDiagnostics,
}

impl AllocationResult {
    /// Sum of all amounts.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.weighted_instruments.iter().map(|w| w.amount).sum()
    }

    /// Amount allocated to an instrument.
    #[must_use]
    pub fn amount(&self, id: &str) -> Option<Decimal> {
        self.weighted_instruments
            .iter()
            .find(|w| w.id == id)
            .map(|w| w.amount)
    }

    /// Returns true if every constraint is met.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.rse == 0.0
    }
}
