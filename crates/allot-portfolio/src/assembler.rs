//! Conversion of continuous weights into exact amounts.
//!
//! Weights become integer vote counts at the resolution of the damping
//! constant, votes become ticks through apportionment, and ticks become amounts.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use allot_math::{MathError, MathResult};
use nalgebra::DVector;
use rust_decimal::Decimal;

use crate::types::{AllocationDiagnostics, AllocationResult, Instrument, WeightedInstrument};

/// Vote counts `round((x_j + minWeight) / ε)` for apportionment.
pub fn votes(excess: &DVector<f64>, min_weight: f64, damping: f64) -> MathResult<Vec<u64>> {
    excess
        .iter()
        .map(|&x| {
            let scaled = ((x + min_weight) / damping).round();
            if scaled.is_finite() && scaled >= 0.0 && scaled < u64::MAX as f64 {
                Ok(scaled as u64)
            } else {
                Err(MathError::invalid_input(format!(
                    "weight {x} does not convert to a vote count"
                )))
            }
        })
        .collect()
}

/// An instrument holding ticks above the floor.
#[derive(Debug, PartialEq, Eq)]
struct Donor {
    /// `seats · V − S · votes`: seats held beyond the exact quota, scaled by `V`.
    excess: i128,
    index: usize,
}

impl Ord for Donor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.excess
            .cmp(&other.excess)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for Donor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lifts every entry of `seats` to at least `floor`.
///
/// Each missing seat is taken from the instrument furthest above its exact
/// quota that still holds more than `floor`, equal excesses going to the lower
/// index. The seat total is unchanged. Returns the number of seats moved.
///
/// Requires `seats.len() · floor ≤ Σ seats`.
pub fn enforce_floor(seats: &mut [u64], votes: &[u64], floor: u64) -> u64 {
    let total_seats: u64 = seats.iter().sum();
    let total_votes: u128 = votes.iter().map(|&v| u128::from(v)).sum();
    let excess = |seats: u64, votes: u64| {
        // Both products stay below 2^126.
        (u128::from(seats) * total_votes) as i128
            - (u128::from(total_seats) * u128::from(votes)) as i128
    };

    let mut donors: BinaryHeap<Donor> = seats
        .iter()
        .zip(votes)
        .enumerate()
        .filter(|(_, (s, _))| **s > floor)
        .map(|(index, (&s, &v))| Donor {
            excess: excess(s, v),
            index,
        })
        .collect();

    let mut moved = 0;
    for index in 0..seats.len() {
        while seats[index] < floor {
            let Some(donor) = donors.pop() else {
                return moved;
            };
            seats[donor.index] -= 1;
            seats[index] += 1;
            moved += 1;
            if seats[donor.index] > floor {
                donors.push(Donor {
                    excess: excess(seats[donor.index], votes[donor.index]),
                    index: donor.index,
                });
            }
        }
    }
    moved
}

/// Pairs instruments with `seats · tick`, in input order.
pub fn assemble(
    instruments: &[Instrument],
    seats: &[u64],
    tick: Decimal,
    rse: f64,
) -> AllocationResult {
    let weighted_instruments = instruments
        .iter()
        .zip(seats)
        .map(|(instrument, &s)| WeightedInstrument {
            id: instrument.id.clone(),
            amount: Decimal::from(s) * tick,
        })
        .collect();

    AllocationResult {
        weighted_instruments,
        rse,
        diagnostics: AllocationDiagnostics::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_votes() {
        let x = DVector::from_vec(vec![0.0, 0.1, 0.25]);
        let votes = votes(&x, 0.05, 1e-6).unwrap();
        assert_eq!(votes, vec![50_000, 150_000, 300_000]);

        let bad = DVector::from_vec(vec![f64::NAN]);
        assert!(super::votes(&bad, 0.0, 1e-6).is_err());
    }

    #[test]
    fn test_floor_already_met() {
        let mut seats = vec![5, 15, 30, 5, 45];
        let votes = [5, 15, 30, 5, 45];
        assert_eq!(enforce_floor(&mut seats, &votes, 5), 0);
        assert_eq!(seats, vec![5, 15, 30, 5, 45]);
    }

    #[test]
    fn test_floor_takes_from_most_over_represented() {
        // Quotas 0, 7 and 3 of 10 seats.
        let mut seats = vec![0, 7, 3];
        let votes = [0, 70, 30];
        assert_eq!(enforce_floor(&mut seats, &votes, 2), 2);
        assert_eq!(seats, vec![2, 6, 2]);
        assert_eq!(seats.iter().sum::<u64>(), 10);
    }

    #[test]
    fn test_floor_tie_goes_to_lower_index() {
        let mut seats = vec![0, 5, 5];
        let votes = [0, 1, 1];
        assert_eq!(enforce_floor(&mut seats, &votes, 1), 1);
        assert_eq!(seats, vec![1, 4, 5]);
    }

    #[test]
    fn test_assemble() {
        let instruments = vec![Instrument::new("a"), Instrument::new("b")];
        let result = assemble(&instruments, &[3, 7], dec!(0.25), 0.0);
        assert_eq!(result.weighted_instruments[0].amount, dec!(0.75));
        assert_eq!(result.weighted_instruments[1].amount, dec!(1.75));
        assert_eq!(result.weighted_instruments[1].id, "b");
        assert_eq!(result.total(), dec!(2.5));
    }
}
