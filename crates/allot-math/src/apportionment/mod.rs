//! Seat apportionment.
//!
//! Converts non-negative integer vote counts into integer seat counts that sum
//! exactly to a given total:
//!
//! - [`SainteLague`]: Sainte-Laguë/Schepers divisor method (odd divisors 1, 3, 5, ...)
//! - [`HareNiemeyer`]: Hare/Niemeyer largest remainder method
//!
//! All arithmetic is exact (`u128` cross-multiplication), and every tie is broken in
//! favour of the lower input index.
//!
//! When all votes are zero, seats are split as evenly as possible in input order:
//! every entry receives `seats / n` and the first `seats % n` entries one more.
//!
//! # Example
//!
//! ```rust
//! use allot_math::apportionment::{apportion, ApportionmentMethod};
//!
//! let votes = [5_000, 3_000, 2_000];
//! let seats = apportion(&votes, 7, ApportionmentMethod::HareNiemeyer).unwrap();
//! assert_eq!(seats, vec![4, 2, 1]);
//! ```

mod hare_niemeyer;
mod sainte_lague;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};

pub use hare_niemeyer::HareNiemeyer;
pub use sainte_lague::SainteLague;

/// Largest seat total accepted, keeping every cross product within `u128`.
pub const MAX_SEATS: u64 = 1 << 62;

/// Selects an apportionment method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ApportionmentMethod {
    /// Sainte-Laguë/Schepers divisor method.
    #[default]
    SainteLague,
    /// Hare/Niemeyer largest remainder method.
    HareNiemeyer,
}

impl ApportionmentMethod {
    /// All methods.
    pub const ALL: [ApportionmentMethod; 2] = [
        ApportionmentMethod::SainteLague,
        ApportionmentMethod::HareNiemeyer,
    ];

    /// Returns the wire identifier (`"sainteLague"` or `"hareNiemeyer"`).
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            ApportionmentMethod::SainteLague => "sainteLague",
            ApportionmentMethod::HareNiemeyer => "hareNiemeyer",
        }
    }

    /// Returns the conventional name of the method.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ApportionmentMethod::SainteLague => "Sainte-Laguë/Schepers",
            ApportionmentMethod::HareNiemeyer => "Hare/Niemeyer",
        }
    }

    /// Apportions `seats` among `votes` with this method.
    pub fn apportion(self, votes: &[u64], seats: u64) -> MathResult<Vec<u64>> {
        match self {
            ApportionmentMethod::SainteLague => SainteLague.apportion(votes, seats),
            ApportionmentMethod::HareNiemeyer => HareNiemeyer.apportion(votes, seats),
        }
    }
}

impl fmt::Display for ApportionmentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ApportionmentMethod {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "saintelague" | "schepers" | "saintelagueschepers" => {
                Ok(ApportionmentMethod::SainteLague)
            }
            "hareniemeyer" | "hare" | "largestremainder" => Ok(ApportionmentMethod::HareNiemeyer),
            _ => Err(MathError::invalid_input(format!(
                "unknown apportionment method '{s}'"
            ))),
        }
    }
}

/// Trait for apportionment methods.
pub trait Apportionment: Send + Sync {
    /// Distributes exactly `seats` seats among the entries of `votes`.
    ///
    /// The result has one entry per vote count, in input order.
    fn apportion(&self, votes: &[u64], seats: u64) -> MathResult<Vec<u64>>;

    /// Returns the name of the method.
    fn name(&self) -> &'static str;
}

/// Apportions `seats` among `votes` with the given method.
pub fn apportion(votes: &[u64], seats: u64, method: ApportionmentMethod) -> MathResult<Vec<u64>> {
    method.apportion(votes, seats)
}

/// Outcome of the checks shared by every method.
enum Prepared {
    /// The result is already determined.
    Done(Vec<u64>),
    /// Votes are valid and their total is positive.
    Proceed { total_votes: u128 },
}

fn prepare(votes: &[u64], seats: u64) -> MathResult<Prepared> {
    if seats > MAX_SEATS {
        return Err(MathError::invalid_input(format!(
            "seat total {seats} exceeds {MAX_SEATS}"
        )));
    }
    if votes.is_empty() {
        return if seats == 0 {
            Ok(Prepared::Done(Vec::new()))
        } else {
            Err(MathError::insufficient_data(1, 0))
        };
    }

    let total_votes: u128 = votes.iter().map(|&v| u128::from(v)).sum();
    if total_votes > u128::from(u64::MAX) {
        return Err(MathError::invalid_input("vote total exceeds u64::MAX"));
    }
    if total_votes == 0 {
        return Ok(Prepared::Done(even_split(votes.len(), seats)));
    }
    Ok(Prepared::Proceed { total_votes })
}

/// Splits seats as evenly as possible, extra seats going to the first entries.
fn even_split(n: usize, seats: u64) -> Vec<u64> {
    let n_u64 = n as u64;
    let base = seats / n_u64;
    let extra = seats % n_u64;
    (0..n_u64)
        .map(|i| if i < extra { base + 1 } else { base })
        .collect()
}
