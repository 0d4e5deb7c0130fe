//! Frequency simulator
//!
//! Draws independent uniform trials from a coin or die and tallies how often
//! each outcome occurred.

mod sample_space;
mod table;

pub use sample_space::{Outcome, SampleSpace};
pub use table::{FrequencyRow, FrequencyTable};

use rand::Rng;
use serde::{Deserialize, Serialize};
use table::Tally;
use thiserror::Error;

/// Result type for simulations
pub type SimulationResult<T> = Result<T, SimulationError>;

/// Simulation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// Trial count outside the configured bounds
    #[error("trial count {requested} is outside {min}..={max}")]
    TrialsOutOfRange {
        /// Requested trial count
        requested: u64,
        /// Lowest accepted count
        min: u64,
        /// Highest accepted count
        max: u64,
    },

    /// Bounds themselves are unusable
    #[error("invalid trial bounds {min}..={max}")]
    InvalidBounds {
        /// Proposed minimum
        min: u64,
        /// Proposed maximum
        max: u64,
    },
}

impl SimulationError {
    /// Symbolic error code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::TrialsOutOfRange { .. } => "TRIALS_OUT_OF_RANGE",
            Self::InvalidBounds { .. } => "INVALID_BOUNDS",
        }
    }
}

/// Accepted range of trial counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTrialBounds")]
pub struct TrialBounds {
    min: u64,
    max: u64,
}

impl Default for TrialBounds {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}

impl TrialBounds {
    /// Default lowest trial count
    pub const DEFAULT_MIN: u64 = 1;
    /// Default highest trial count
    pub const DEFAULT_MAX: u64 = 100_000;

    /// Custom bounds inside `1..=100 000`; `min` must not be above `max`
    pub fn new(min: u64, max: u64) -> SimulationResult<Self> {
        if min < Self::DEFAULT_MIN || max > Self::DEFAULT_MAX || min > max {
            return Err(SimulationError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lowest accepted trial count
    #[must_use]
    pub const fn min(&self) -> u64 {
        self.min
    }

    /// Highest accepted trial count
    #[must_use]
    pub const fn max(&self) -> u64 {
        self.max
    }

    /// Checks `trials` against the bounds
    pub fn check(&self, trials: u64) -> SimulationResult<()> {
        if (self.min..=self.max).contains(&trials) {
            Ok(())
        } else {
            Err(SimulationError::TrialsOutOfRange {
                requested: trials,
                min: self.min,
                max: self.max,
            })
        }
    }
}

#[derive(Deserialize)]
struct RawTrialBounds {
    min: u64,
    max: u64,
}

impl TryFrom<RawTrialBounds> for TrialBounds {
    type Error = SimulationError;

    fn try_from(raw: RawTrialBounds) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

/// Runs frequency simulations within fixed trial bounds
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulator {
    bounds: TrialBounds,
}

impl Simulator {
    /// Simulator with default bounds (1..=100 000)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulator with custom bounds
    #[must_use]
    pub const fn with_bounds(bounds: TrialBounds) -> Self {
        Self { bounds }
    }

    /// Configured bounds
    #[must_use]
    pub const fn bounds(&self) -> TrialBounds {
        self.bounds
    }

    /// Draws `trials` outcomes from `space` using `rng` and tallies them
    ///
    /// The trial count is validated before any draw happens.
    pub fn run<R: Rng + ?Sized>(
        &self,
        space: SampleSpace,
        trials: u64,
        rng: &mut R,
    ) -> SimulationResult<FrequencyTable> {
        self.bounds.check(trials)?;
        tracing::debug!(%space, trials, "running frequency simulation");

        let mut tally = Tally::new(space);
        for _ in 0..trials {
            tally.record(space.draw(rng));
        }
        Ok(tally.into_table())
    }

    /// Same as [`Self::run`] with the thread-local, unseeded generator
    pub fn run_unseeded(
        &self,
        space: SampleSpace,
        trials: u64,
    ) -> SimulationResult<FrequencyTable> {
        self.run(space, trials, &mut rand::rng())
    }
}
