//! Frequency tables built from tallied outcomes

use super::sample_space::{Outcome, SampleSpace};
use serde::{Deserialize, Serialize};

/// Observed count and relative frequency of one outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyRow {
    /// The outcome
    pub outcome: Outcome,
    /// Display label of the outcome
    pub label: String,
    /// Number of trials that produced it
    pub count: u64,
    /// count / trials
    pub relative_frequency: f64,
}

impl FrequencyRow {
    /// Signed distance of the observed frequency from the theoretical one
    #[must_use]
    pub fn deviation(&self, space: SampleSpace) -> f64 {
        self.relative_frequency - space.probability()
    }
}

/// Result of a frequency simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyTable {
    /// Experiment that was run
    pub space: SampleSpace,
    /// Total number of trials
    pub trials: u64,
    /// One row per outcome of the space, zero counts included
    pub rows: Vec<FrequencyRow>,
}

impl FrequencyTable {
    /// Row for `outcome`
    #[must_use]
    pub fn row(&self, outcome: Outcome) -> Option<&FrequencyRow> {
        self.rows.iter().find(|r| r.outcome == outcome)
    }

    /// Sum of all counts; equals `trials`
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.rows.iter().map(|r| r.count).sum()
    }

    /// Largest absolute deviation from the theoretical probability
    #[must_use]
    pub fn max_deviation(&self) -> f64 {
        self.rows
            .iter()
            .map(|r| r.deviation(self.space).abs())
            .fold(0.0, f64::max)
    }
}

/// Running outcome counter for one sample space
///
/// Remembers the order in which outcomes were first seen so coin tables can
/// list them in draw order.
#[derive(Debug, Clone)]
pub(crate) struct Tally {
    space: SampleSpace,
    counts: Vec<u64>,
    first_seen: Vec<usize>,
}

impl Tally {
    pub(crate) fn new(space: SampleSpace) -> Self {
        Self {
            space,
            counts: vec![0; space.len()],
            first_seen: Vec::with_capacity(space.len()),
        }
    }

    pub(crate) fn record(&mut self, outcome: Outcome) {
        // Outcomes come from `space.draw`, so the index always exists
        if let Some(idx) = self.space.index_of(outcome) {
            if self.counts[idx] == 0 {
                self.first_seen.push(idx);
            }
            self.counts[idx] += 1;
        }
    }

    /// Die rows ascend by face; coin rows follow first-seen order with
    /// unseen outcomes appended in canonical order
    pub(crate) fn into_table(self) -> FrequencyTable {
        let trials: u64 = self.counts.iter().sum();
        let outcomes = self.space.outcomes();

        let order: Vec<usize> = match self.space {
            SampleSpace::Die => (0..outcomes.len()).collect(),
            SampleSpace::Coin => {
                let mut order = self.first_seen.clone();
                order.extend((0..outcomes.len()).filter(|i| !self.first_seen.contains(i)));
                order
            }
        };

        let rows = order
            .into_iter()
            .map(|idx| {
                let count = self.counts[idx];
                let relative_frequency = if trials == 0 {
                    0.0
                } else {
                    count as f64 / trials as f64
                };
                FrequencyRow {
                    outcome: outcomes[idx],
                    label: outcomes[idx].label(),
                    count,
                    relative_frequency,
                }
            })
            .collect();

        FrequencyTable {
            space: self.space,
            trials,
            rows,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_die_ascending_with_zeros() {
        let mut tally = Tally::new(SampleSpace::Die);
        for face in [6, 2, 6, 6] {
            tally.record(Outcome::Face(face));
        }
        let table = tally.into_table();
        let labels: Vec<_> = table.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["1", "2", "3", "4", "5", "6"]);
        assert_eq!(table.row(Outcome::Face(6)).unwrap().count, 3);
        assert_eq!(table.row(Outcome::Face(1)).unwrap().relative_frequency, 0.0);
        assert_eq!(table.trials, 4);
    }

    #[test]
    fn test_tally_coin_first_seen_order() {
        let mut tally = Tally::new(SampleSpace::Coin);
        tally.record(Outcome::Tails);
        tally.record(Outcome::Heads);
        tally.record(Outcome::Tails);
        let table = tally.into_table();
        assert_eq!(table.rows[0].outcome, Outcome::Tails);
        assert_eq!(table.rows[1].outcome, Outcome::Heads);
        assert!((table.rows[0].relative_frequency - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_tally_coin_unseen_outcome_appended() {
        let mut tally = Tally::new(SampleSpace::Coin);
        tally.record(Outcome::Tails);
        let table = tally.into_table();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1].outcome, Outcome::Heads);
        assert_eq!(table.rows[1].count, 0);
    }

    #[test]
    fn test_tally_ignores_foreign_outcome() {
        let mut tally = Tally::new(SampleSpace::Coin);
        tally.record(Outcome::Face(3));
        assert_eq!(tally.into_table().trials, 0);
    }

    #[test]
    fn test_deviation() {
        let row = FrequencyRow {
            outcome: Outcome::Heads,
            label: "heads".into(),
            count: 6,
            relative_frequency: 0.6,
        };
        assert!((row.deviation(SampleSpace::Coin) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_total_count_and_max_deviation() {
        let mut tally = Tally::new(SampleSpace::Coin);
        for _ in 0..3 {
            tally.record(Outcome::Heads);
        }
        tally.record(Outcome::Tails);
        let table = tally.into_table();
        assert_eq!(table.total_count(), 4);
        assert!((table.max_deviation() - 0.25).abs() < 1e-12);
    }
}
