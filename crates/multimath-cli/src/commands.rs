//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use multimath::calc::{LogKind, Operation};
use multimath::population::DEFAULT_YEAR;
use multimath::simulate::SampleSpace;
use std::path::PathBuf;

/// multimath: calculator, probability simulator and world population ranges
#[derive(Parser, Debug)]
#[command(name = "multimath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Output format for results
    #[arg(long, default_value = "text", global = true)]
    pub format: FormatArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate one calculation
    Calc(CalcArgs),

    /// Evaluate calculations read line by line, keeping a display and history
    Session(SessionArgs),

    /// Simulate coin or die throws and report relative frequencies
    Simulate(SimulateArgs),

    /// Classify world population data into map ranges
    Population(PopulationArgs),
}

/// Arguments for the calc command
#[derive(Parser, Debug)]
pub struct CalcArgs {
    /// Operation to perform
    #[arg(value_enum)]
    pub op: OpArg,

    /// Operands: two for most operations, one for log10/ln, one or two for log
    #[arg(required = true, num_args = 1..=2, allow_negative_numbers = true)]
    pub operands: Vec<String>,
}

/// Calculator operation
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpArg {
    /// a + b
    Add,
    /// a - b
    Sub,
    /// a × b
    Mul,
    /// a ÷ b
    Div,
    /// a mod n (integers, result takes the sign of n)
    Mod,
    /// a ^ b
    Pow,
    /// log₁₀ x
    Log10,
    /// ln x
    Ln,
    /// log_b x (base 10 when b is omitted)
    Log,
}

impl From<OpArg> for Operation {
    fn from(arg: OpArg) -> Self {
        match arg {
            OpArg::Add => Self::Add,
            OpArg::Sub => Self::Subtract,
            OpArg::Mul => Self::Multiply,
            OpArg::Div => Self::Divide,
            OpArg::Mod => Self::Modulo,
            OpArg::Pow => Self::Power,
            OpArg::Log10 => Self::Log(LogKind::Common),
            OpArg::Ln => Self::Log(LogKind::Natural),
            OpArg::Log => Self::Log(LogKind::Custom),
        }
    }
}

/// Arguments for the session command
#[derive(Parser, Debug)]
pub struct SessionArgs {
    /// Read commands from a file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Number of calculations kept in history
    #[arg(long, default_value = "100")]
    pub history: usize,
}

/// Arguments for the simulate command
#[derive(Parser, Debug)]
pub struct SimulateArgs {
    /// Experiment to run
    #[arg(value_enum)]
    pub space: SpaceArg,

    /// Number of trials
    #[arg(short = 'n', long, default_value = "1000")]
    pub trials: u64,

    /// Seed for a reproducible run (unseeded by default)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Highest accepted trial count
    #[arg(long, env = "MULTIMATH_MAX_TRIALS")]
    pub max_trials: Option<u64>,
}

/// Sample space selector
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpaceArg {
    /// Heads or tails
    Coin,
    /// Faces 1 to 6
    Die,
}

impl From<SpaceArg> for SampleSpace {
    fn from(arg: SpaceArg) -> Self {
        match arg {
            SpaceArg::Coin => Self::Coin,
            SpaceArg::Die => Self::Die,
        }
    }
}

/// Arguments for the population command
#[derive(Parser, Debug)]
pub struct PopulationArgs {
    /// CSV file with `code`, `Country`, year and share columns
    #[arg(
        short,
        long,
        env = "MULTIMATH_DATA",
        default_value = "world_population.csv"
    )]
    pub data: PathBuf,

    /// Year whose population column is classified
    #[arg(short, long, default_value_t = DEFAULT_YEAR)]
    pub year: u16,

    /// Classify share of world population instead of a year's population
    #[arg(long)]
    pub share: bool,

    /// List every region, not just the legend
    #[arg(long)]
    pub regions: bool,
}

/// Color choice argument
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum FormatArg {
    /// Human-readable text
    #[default]
    Text,
    /// JSON
    Json,
}

impl From<FormatArg> for crate::output::OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}
