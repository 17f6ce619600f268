//! Hare/Niemeyer largest remainder method.

use super::{prepare, Apportionment, Prepared};
use crate::error::MathResult;

/// Hare/Niemeyer largest remainder method.
///
/// Each entry first receives the integer part of its quota `S · v / V`. The seats
/// left over go one each to the entries with the largest remainders, equal
/// remainders going to the lower index. Since every quota shares the denominator
/// `V`, remainders are compared as exact integers `S · v mod V`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HareNiemeyer;

impl Apportionment for HareNiemeyer {
    fn apportion(&self, votes: &[u64], seats: u64) -> MathResult<Vec<u64>> {
        let total_votes = match prepare(votes, seats)? {
            Prepared::Done(result) => return Ok(result),
            Prepared::Proceed { total_votes } => total_votes,
        };

        let seats_wide = u128::from(seats);
        let mut result = Vec::with_capacity(votes.len());
        let mut remainders = Vec::with_capacity(votes.len());
        for (index, &v) in votes.iter().enumerate() {
            let product = seats_wide * u128::from(v);
            // Quota floor is at most the seat total.
            result.push((product / total_votes) as u64);
            remainders.push((product % total_votes, index));
        }

        let awarded: u64 = result.iter().sum();
        let remaining = (seats - awarded) as usize;
        remainders.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        for &(_, index) in remainders.iter().take(remaining) {
            result[index] += 1;
        }

        Ok(result)
    }

    fn name(&self) -> &'static str {
        "Hare/Niemeyer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_largest_remainders_win() {
        // Quotas 3.5, 2.1, 1.4
        let seats = HareNiemeyer.apportion(&[5_000, 3_000, 2_000], 7).unwrap();
        assert_eq!(seats, vec![4, 2, 1]);
    }

    #[test]
    fn test_tie_goes_to_lower_index() {
        // Quotas 2.5 each
        assert_eq!(HareNiemeyer.apportion(&[1, 1, 1, 1], 10).unwrap(), vec![3, 3, 2, 2]);
    }

    #[test]
    fn test_alabama_paradox() {
        // The classic example: one entry loses a seat when the house grows.
        let votes = [6, 6, 2];
        assert_eq!(HareNiemeyer.apportion(&votes, 10).unwrap(), vec![4, 4, 2]);
        assert_eq!(HareNiemeyer.apportion(&votes, 11).unwrap(), vec![5, 5, 1]);
    }

    #[test]
    fn test_differs_from_divisor_method() {
        let votes = [53_000, 24_000, 23_000];
        assert_eq!(HareNiemeyer.apportion(&votes, 7).unwrap(), vec![4, 2, 1]);
        assert_eq!(HareNiemeyer.name(), "Hare/Niemeyer");
    }
}
