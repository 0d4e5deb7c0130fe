//! Finite sample spaces and their outcomes

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Experiment to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleSpace {
    /// Fair coin: heads, tails
    Coin,
    /// Fair six-sided die: 1..=6
    Die,
}

impl SampleSpace {
    /// Every outcome, in canonical order
    #[must_use]
    pub fn outcomes(self) -> Vec<Outcome> {
        match self {
            Self::Coin => vec![Outcome::Heads, Outcome::Tails],
            Self::Die => (1..=6).map(Outcome::Face).collect(),
        }
    }

    /// Number of outcomes
    #[must_use]
    pub const fn len(self) -> usize {
        match self {
            Self::Coin => 2,
            Self::Die => 6,
        }
    }

    /// Always false; present for API symmetry with `len`
    #[must_use]
    pub const fn is_empty(self) -> bool {
        false
    }

    /// Theoretical probability of each outcome
    #[must_use]
    pub fn probability(self) -> f64 {
        1.0 / self.len() as f64
    }

    /// Position of `outcome` in [`Self::outcomes`], if it belongs here
    #[must_use]
    pub fn index_of(self, outcome: Outcome) -> Option<usize> {
        match (self, outcome) {
            (Self::Coin, Outcome::Heads) => Some(0),
            (Self::Coin, Outcome::Tails) => Some(1),
            (Self::Die, Outcome::Face(n @ 1..=6)) => Some(usize::from(n - 1)),
            _ => None,
        }
    }

    /// Draws one outcome uniformly at random
    pub fn draw<R: Rng + ?Sized>(self, rng: &mut R) -> Outcome {
        match self {
            Self::Coin => {
                if rng.random_bool(0.5) {
                    Outcome::Heads
                } else {
                    Outcome::Tails
                }
            }
            Self::Die => Outcome::Face(rng.random_range(1..=6)),
        }
    }

    /// Lowercase name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Coin => "coin",
            Self::Die => "die",
        }
    }
}

impl std::fmt::Display for SampleSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One trial result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Coin heads
    Heads,
    /// Coin tails
    Tails,
    /// Die face 1..=6
    Face(u8),
}

impl Outcome {
    /// Display label
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Heads => "heads".to_string(),
            Self::Tails => "tails".to_string(),
            Self::Face(n) => n.to_string(),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}
