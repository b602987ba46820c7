//! Occurrence counter with a deterministic ranking.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One ranked identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedCount {
    pub permission: String,
    pub count: usize,
}

/// Counts identifier occurrences while remembering first-seen order.
///
/// [`Tally::ranked`] sorts by count descending; identifiers with equal counts
/// keep the order in which they were first added.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    index: HashMap<String, usize>,
    counts: Vec<(String, usize)>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.counts.len());
                self.counts.push((key.to_string(), 1));
            }
        }
    }

    pub fn extend<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for key in keys {
            self.add(key.as_ref());
        }
    }

    pub fn get(&self, key: &str) -> usize {
        self.index.get(key).map_or(0, |&slot| self.counts[slot].1)
    }

    /// Number of distinct identifiers.
    pub fn unique(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// All identifiers, most frequent first.
    pub fn ranked(&self) -> Vec<RankedCount> {
        let mut ranked: Vec<RankedCount> = self
            .counts
            .iter()
            .map(|(permission, count)| RankedCount {
                permission: permission.clone(),
                count: *count,
            })
            .collect();
        // sort_by is stable: ties stay in first-seen order
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }

    /// The `n` most frequent identifiers.
    pub fn top(&self, n: usize) -> Vec<RankedCount> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(ranked: &[RankedCount]) -> Vec<&str> {
        ranked.iter().map(|r| r.permission.as_str()).collect()
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let mut tally = Tally::new();
        // A, C, B first appear in that order; A and B end up tied at 3
        tally.extend(["A", "C", "B", "A", "B", "A", "B"]);

        let ranked = tally.ranked();
        assert_eq!(names(&ranked), vec!["A", "B", "C"]);
        assert_eq!(ranked[0].count, 3);
        assert_eq!(ranked[1].count, 3);
        assert_eq!(ranked[2].count, 1);
    }

    #[test]
    fn test_later_first_seen_loses_tie() {
        let mut tally = Tally::new();
        tally.extend(["B", "A", "A", "B"]);
        assert_eq!(names(&tally.ranked()), vec!["B", "A"]);
    }

    #[test]
    fn test_totals_and_top() {
        let mut tally = Tally::new();
        tally.extend(["X", "Y", "X", "Z", "X", "Y"]);

        assert_eq!(tally.unique(), 3);
        assert_eq!(tally.total(), 6);
        assert_eq!(tally.get("X"), 3);
        assert_eq!(tally.get("missing"), 0);
        assert_eq!(names(&tally.top(2)), vec!["X", "Y"]);
        assert_eq!(tally.top(10).len(), 3);
    }
}
