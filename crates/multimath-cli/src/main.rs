//! multimath: calculator, frequency simulator and world population ranges
//!
//! ## Usage
//!
//! ```bash
//! multimath calc mod -7 3                 # -7 mod 3 = 2
//! multimath calc log 8 2                  # log₍2.0₎(8.0) = 3.0
//! multimath session < commands.txt        # one calculation per line
//! multimath simulate die -n 10000 --seed 7
//! multimath population --data world_population.csv --year 1990
//! ```

use clap::Parser;
use multimath_cli::{
    handlers, logging, Cli, CliConfig, CliError, CliResult, ColorChoice, Commands, Reporter,
    Verbosity,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = build_config(&cli);
    logging::init_logging(config.verbosity);

    match run(&config, &cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&config, &e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &CliConfig, command: &Commands) -> CliResult<()> {
    let mut stdout = std::io::stdout().lock();
    match command {
        Commands::Calc(args) => handlers::execute_calc(config, args, &mut stdout),
        Commands::Session(args) => {
            handlers::execute_session(config, args, &mut stdout).map(|_| ())
        }
        Commands::Simulate(args) => {
            handlers::execute_simulate(config, args, &mut stdout).map(|_| ())
        }
        Commands::Population(args) => {
            handlers::execute_population(config, args, &mut stdout).map(|_| ())
        }
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.clone().into();

    CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(color)
        .with_format(cli.format.into())
}

fn report_error(config: &CliConfig, err: &CliError) {
    let reporter = Reporter::new(config.use_color(), config.verbosity.is_quiet());
    reporter.failure(&format!("[{}] {err}", err.code()));
}
