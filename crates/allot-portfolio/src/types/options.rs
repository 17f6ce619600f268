//! Monetary parameters of an allocation.

use allot_math::apportionment::{ApportionmentMethod, MAX_SEATS};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

fn default_tick() -> Decimal {
    Decimal::ONE
}

/// Monetary parameters of an allocation.
///
/// Money is held as [`Decimal`] so that the output invariants (exact total,
/// multiples of the tick) are checked without rounding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationOptions {
    /// Amount to distribute.
    pub total_amount: Decimal,

    /// Smallest amount any instrument receives.
    #[serde(default)]
    pub min_amount: Decimal,

    /// Rounding increment; must evenly divide the total amount.
    #[serde(default = "default_tick")]
    pub tick: Decimal,

    /// Apportionment method used to round weights to ticks.
    #[serde(default, alias = "proportionalRepresentationAlgorithm")]
    pub algorithm: ApportionmentMethod,
}

impl AllocationOptions {
    /// Creates options with no minimum, a tick of one and the default method.
    #[must_use]
    pub fn new(total_amount: Decimal) -> Self {
        Self {
            total_amount,
            min_amount: Decimal::ZERO,
            tick: default_tick(),
            algorithm: ApportionmentMethod::default(),
        }
    }

    /// Sets the minimum amount.
    #[must_use]
    pub fn with_min_amount(mut self, min_amount: Decimal) -> Self {
        self.min_amount = min_amount;
        self
    }

    /// Sets the tick.
    #[must_use]
    pub fn with_tick(mut self, tick: Decimal) -> Self {
        self.tick = tick;
        self
    }

    /// Sets the apportionment method.
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: ApportionmentMethod) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Minimum amount as a fraction of the total.
    ///
    /// Zero when the total is not positive.
    #[must_use]
    pub fn min_weight(&self) -> f64 {
        if self.total_amount <= Decimal::ZERO {
            return 0.0;
        }
        (self.min_amount / self.total_amount).to_f64().unwrap_or(0.0)
    }

    /// Checks the options for `count` instruments and converts them to ticks.
    pub(crate) fn ticks(&self, count: usize) -> Result<Ticks, ConfigurationError> {
        let total = self.total_amount;
        let tick = self.tick;
        let min = self.min_amount;

        if total <= Decimal::ZERO {
            return Err(ConfigurationError::NonPositiveTotal { total });
        }
        if tick <= Decimal::ZERO {
            return Err(ConfigurationError::NonPositiveTick { tick });
        }
        if min < Decimal::ZERO {
            return Err(ConfigurationError::NegativeMinAmount { min });
        }
        if min > total {
            return Err(ConfigurationError::MinAmountExceedsTotal { min, total });
        }
        if !(total % tick).is_zero() {
            return Err(ConfigurationError::TickDoesNotDivideTotal { tick, total });
        }

        let seats = (total / tick)
            .to_u64()
            .filter(|&s| s <= MAX_SEATS)
            .ok_or(ConfigurationError::TooManyTicks {
                total,
                tick,
                max: MAX_SEATS,
            })?;
        // min ≤ total, so the floor never exceeds the seat total.
        let floor = (min / tick).ceil().to_u64().unwrap_or(seats);

        let required = u128::from(floor) * count as u128;
        if required > u128::from(seats) {
            return Err(ConfigurationError::MinimumInfeasible {
                count,
                floor: Decimal::from(floor) * tick,
                total,
            });
        }

        Ok(Ticks { seats, floor })
    }
}

/// The total and the minimum expressed in ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Ticks {
    /// Number of ticks in the total amount.
    pub seats: u64,
    /// Minimum number of ticks per instrument.
    pub floor: u64,
}
