//! Sainte-Laguë/Schepers divisor method.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::{prepare, Apportionment, Prepared};
use crate::error::MathResult;

/// Sainte-Laguë/Schepers divisor method.
///
/// Seats are awarded one at a time to the entry with the highest quotient
/// `votes / (2·seats + 1)`; equal quotients go to the lower index.
///
/// When there are more seats than entries, the award starts from the state the
/// sequential process reaches once every quotient above `V / (2(S - n))` has been
/// served (`V` total votes, `S` seats, `n` entries). That state is a prefix of the
/// sequential process and holds at most `S` seats, so the result is identical to
/// awarding every seat one at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SainteLague;

/// An entry competing for the next seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Contender {
    votes: u64,
    seats: u64,
    index: usize,
}

impl Ord for Contender {
    fn cmp(&self, other: &Self) -> Ordering {
        // votes_a / (2s_a + 1) against votes_b / (2s_b + 1), cross-multiplied.
        let lhs = u128::from(self.votes) * (2 * u128::from(other.seats) + 1);
        let rhs = u128::from(other.votes) * (2 * u128::from(self.seats) + 1);
        lhs.cmp(&rhs).then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for Contender {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Seats held once every quotient strictly above `V / (2(S - n))` is served.
///
/// Counts the odd divisors `d` with `d · V < 2 · v · (S - n)`.
fn initial_seats(votes: u64, total_votes: u128, surplus: u128) -> u64 {
    let p = 2 * u128::from(votes) * surplus;
    if p <= total_votes {
        return 0;
    }
    let largest_divisor = (p - 1) / total_votes;
    // Bounded by the seat total, which fits in u64.
    ((largest_divisor + 1) / 2) as u64
}

impl Apportionment for SainteLague {
    fn apportion(&self, votes: &[u64], seats: u64) -> MathResult<Vec<u64>> {
        let total_votes = match prepare(votes, seats)? {
            Prepared::Done(result) => return Ok(result),
            Prepared::Proceed { total_votes } => total_votes,
        };

        let n = votes.len() as u64;
        let mut result: Vec<u64> = if seats > n {
            let surplus = u128::from(seats - n);
            votes
                .iter()
                .map(|&v| initial_seats(v, total_votes, surplus))
                .collect()
        } else {
            vec![0; votes.len()]
        };

        let awarded: u64 = result.iter().sum();
        let remaining = seats - awarded;
        log::trace!(
            "sainte-lague: {} seats pre-awarded, {} awarded sequentially",
            awarded,
            remaining
        );

        let mut heap: BinaryHeap<Contender> = votes
            .iter()
            .zip(&result)
            .enumerate()
            .map(|(index, (&votes, &seats))| Contender {
                votes,
                seats,
                index,
            })
            .collect();

        for _ in 0..remaining {
            let Some(mut winner) = heap.pop() else {
                break;
            };
            winner.seats += 1;
            result[winner.index] = winner.seats;
            heap.push(winner);
        }

        Ok(result)
    }

    fn name(&self) -> &'static str {
        "Sainte-Laguë/Schepers"
    }
}
