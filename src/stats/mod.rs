//! Aggregate statistics over classified packages.
//!
//! - [`tally`]: occurrence counting with a stable ranking
//! - [`directory`]: per-directory roll-up of package results
//! - [`series`]: per-version and cross-version statistics

pub mod directory;
pub mod series;
pub mod tally;

pub use directory::{aggregate, DirectoryStats};
pub use series::{aggregate_series, VersionPattern, VersionReport};
pub use tally::{RankedCount, Tally};

/// Rounds `value` to `places` decimals the way decimal formatting does:
/// from the exact binary value, with true ties going to the even digit.
///
/// Scaling first (`value * 10^places`) can land on a spurious tie, so
/// `0.05000000000000000277` would round down; formatting keeps it at `0.1`.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{:.*}", places, value).parse().unwrap_or(value)
}

/// `part / whole * 100`, or `0.0` when `whole` is zero.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

/// Arithmetic mean; `0.0` for an empty sample.
pub fn mean(values: &[usize]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<usize>() as f64 / values.len() as f64
}

/// Median; averages the two middle values for an even-length sample and
/// returns `0.0` for an empty one.
pub fn median(values: &[usize]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid] as f64
    } else {
        (sorted[mid - 1] + sorted[mid]) as f64 / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(75.0, 2), 75.0);
        assert_eq!(round_to(100.0 * 2.0 / 3.0, 2), 66.67);
        assert_eq!(round_to(100.0 / 3.0, 1), 33.3);
        // exact ties go to the even neighbour
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(12.5, 0), 12.0);
    }

    #[test]
    fn test_round_to_uses_exact_binary_value() {
        // 1/2000 * 100 is slightly above 0.05
        assert_eq!(round_to(percentage(1, 2000), 1), 0.1);
        // 2.675 is stored slightly below the tie
        assert_eq!(round_to(2.675, 2), 2.67);
        assert_eq!(round_to(percentage(1, 8), 1), 12.5);
    }

    #[test]
    fn test_percentage_zero_denominator() {
        assert_eq!(percentage(3, 4), 75.0);
        assert_eq!(percentage(3, 0), 0.0);
    }

    #[test]
    fn test_mean_and_median() {
        assert_eq!(mean(&[1, 2, 3, 4]), 2.5);
        assert_eq!(median(&[4, 1, 3]), 3.0);
        assert_eq!(median(&[4, 1, 3, 2]), 2.5);
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(median(&[]), 0.0);
    }
}
