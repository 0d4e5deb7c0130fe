//! Command handlers, kept out of main.rs for testability
//!
//! Each handler writes its results to a caller-supplied writer and returns
//! the value it rendered, so tests can check both.

pub mod calc;
pub mod population;
pub mod session;
pub mod simulate;

pub use calc::execute_calc;
pub use population::{build_layer, execute_population, missing_column_hint};
pub use session::{execute_session, run_session, SessionCommand};
pub use simulate::{execute_simulate, resolve_bounds, run_simulation};
