//! Simulate command handler

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{render_frequency_table, render_json, OutputFormat};
use crate::SimulateArgs;
use multimath::simulate::{FrequencyTable, SampleSpace, Simulator, TrialBounds};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;

/// Trial bounds after applying `--max-trials`
///
/// The override may lower the ceiling but never raise it past 100 000.
pub fn resolve_bounds(config: &CliConfig, args: &SimulateArgs) -> CliResult<TrialBounds> {
    match args.max_trials {
        Some(max) => Ok(TrialBounds::new(config.trial_bounds.min(), max)?),
        None => Ok(config.trial_bounds),
    }
}

/// Runs the simulation, seeded when `--seed` is given
pub fn run_simulation(config: &CliConfig, args: &SimulateArgs) -> CliResult<FrequencyTable> {
    let simulator = Simulator::with_bounds(resolve_bounds(config, args)?);
    let space = SampleSpace::from(args.space);
    let table = match args.seed {
        Some(seed) => simulator.run(space, args.trials, &mut StdRng::seed_from_u64(seed))?,
        None => simulator.run_unseeded(space, args.trials)?,
    };
    tracing::info!(
        %space,
        trials = table.trials,
        max_deviation = table.max_deviation(),
        "simulation complete"
    );
    Ok(table)
}

/// Execute the simulate command
pub fn execute_simulate<W: Write>(
    config: &CliConfig,
    args: &SimulateArgs,
    out: &mut W,
) -> CliResult<FrequencyTable> {
    let table = run_simulation(config, args)?;
    match config.format {
        OutputFormat::Text => write!(out, "{}", render_frequency_table(&table, config.use_color()))?,
        OutputFormat::Json => writeln!(out, "{}", render_json(&table)?)?,
    }
    Ok(table)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::commands::SpaceArg;
    use crate::config::ColorChoice;

    fn args(space: SpaceArg, trials: u64, seed: Option<u64>) -> SimulateArgs {
        SimulateArgs {
            space,
            trials,
            seed,
            max_trials: None,
        }
    }

    fn plain() -> CliConfig {
        CliConfig::new().with_color(ColorChoice::Never)
    }

    // ===== Bounds =====

    #[test]
    fn test_default_bounds() {
        let bounds = resolve_bounds(&plain(), &args(SpaceArg::Coin, 10, None)).unwrap();
        assert_eq!(bounds, TrialBounds::default());
    }

    #[test]
    fn test_max_trials_override() {
        let mut a = args(SpaceArg::Coin, 10, None);
        a.max_trials = Some(500);
        assert_eq!(resolve_bounds(&plain(), &a).unwrap().max(), 500);
    }

    #[test]
    fn test_zero_max_trials_rejected() {
        let mut a = args(SpaceArg::Coin, 10, None);
        a.max_trials = Some(0);
        assert_eq!(resolve_bounds(&plain(), &a).unwrap_err().code(), "INVALID_BOUNDS");
    }

    #[test]
    fn test_max_trials_cannot_raise_ceiling() {
        let mut a = args(SpaceArg::Die, 200_000, None);
        a.max_trials = Some(1_000_000);
        assert_eq!(run_simulation(&plain(), &a).unwrap_err().code(), "INVALID_BOUNDS");
    }

    #[test]
    fn test_trials_above_default_ceiling_rejected() {
        let err = run_simulation(&plain(), &args(SpaceArg::Coin, 100_001, None)).unwrap_err();
        assert_eq!(err.code(), "TRIALS_OUT_OF_RANGE");
    }

    #[test]
    fn test_trials_above_override_rejected() {
        let mut a = args(SpaceArg::Die, 600, None);
        a.max_trials = Some(500);
        let err = run_simulation(&plain(), &a).unwrap_err();
        assert_eq!(err.code(), "TRIALS_OUT_OF_RANGE");
    }

    #[test]
    fn test_zero_trials_rejected() {
        let err = run_simulation(&plain(), &args(SpaceArg::Coin, 0, None)).unwrap_err();
        assert_eq!(err.code(), "TRIALS_OUT_OF_RANGE");
    }

    // ===== Runs =====

    #[test]
    fn test_seeded_runs_repeat() {
        let a = args(SpaceArg::Die, 500, Some(42));
        let first = run_simulation(&plain(), &a).unwrap();
        let second = run_simulation(&plain(), &a).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unseeded_run_counts_all_trials() {
        let table = run_simulation(&plain(), &args(SpaceArg::Coin, 250, None)).unwrap();
        assert_eq!(table.total_count(), 250);
    }

    #[test]
    fn test_text_output() {
        let mut out = Vec::new();
        execute_simulate(&plain(), &args(SpaceArg::Coin, 100, Some(7)), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("coin simulation, 100 trials"));
        assert!(text.contains("heads"));
        assert!(text.contains("tails"));
    }

    #[test]
    fn test_json_output() {
        let config = plain().with_format(OutputFormat::Json);
        let mut out = Vec::new();
        execute_simulate(&config, &args(SpaceArg::Die, 60, Some(7)), &mut out).unwrap();
        let table: FrequencyTable = serde_json::from_slice(&out).unwrap();
        assert_eq!(table.trials, 60);
        assert_eq!(table.rows.len(), 6);
    }
}
