//! multimath - calculator, probability simulator and population ranges
//!
//! Three independent, stateless computations:
//!
//! - [`calc`]: four-function arithmetic, floor-convention modulo, exponent
//!   and logarithms, with typed errors and a per-session display.
//! - [`simulate`]: coin and die frequency simulation.
//! - [`classify`] and [`population`]: binning numeric columns into labelled
//!   ranges for a choropleth map.
//!
//! # Example
//!
//! ```rust
//! use multimath::prelude::*;
//!
//! let request: OperationRequest = "mod -7 3".parse().unwrap();
//! let (session, outcome) = Session::new().apply(&request);
//! assert_eq!(outcome, Ok(Value::Integer(2)));
//! assert_eq!(session.display(), "-7 mod 3 = 2");
//!
//! let table = Simulator::new().run_unseeded(SampleSpace::Die, 600).unwrap();
//! assert_eq!(table.total_count(), 600);
//!
//! assert_eq!(RangeClassifier::population().classify(1e7), Ok("10M–50M"));
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod calc;
pub mod classify;
pub mod population;
pub mod simulate;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::calc::history::{History, HistoryEntry};
    pub use crate::calc::session::Session;
    pub use crate::calc::{
        CalcError, CalcResult, Calculator, DomainViolation, LogKind, Operand, Operation,
        OperationRequest, Value,
    };
    pub use crate::classify::{Bin, ClassifyError, ClassifyResult, RangeClassifier};
    pub use crate::population::{
        ChoroplethLayer, LegendEntry, PopulationError, PopulationResult, PopulationTable, Region,
    };
    pub use crate::simulate::{
        FrequencyRow, FrequencyTable, Outcome, SampleSpace, SimulationError, SimulationResult,
        Simulator, TrialBounds,
    };
}
