//! Population command handler

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{render_json, render_layer, OutputFormat, Reporter};
use crate::PopulationArgs;
use multimath::population::{ChoroplethLayer, PopulationError, PopulationTable, AVAILABLE_YEARS};
use std::io::Write;

/// Loads the CSV and builds the requested layer
pub fn build_layer(args: &PopulationArgs) -> CliResult<ChoroplethLayer> {
    let table = PopulationTable::from_path(&args.data)?;
    tracing::info!(path = %args.data.display(), rows = table.len(), "population data loaded");

    let layer = if args.share {
        table.share_layer()?
    } else {
        table.population_layer(args.year)?
    };
    Ok(layer)
}

/// Hint shown when the requested column is absent
#[must_use]
pub fn missing_column_hint(args: &PopulationArgs) -> Option<String> {
    if args.share || AVAILABLE_YEARS.contains(&args.year) {
        return None;
    }
    let years = AVAILABLE_YEARS
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    Some(format!("population columns exist for {years}"))
}

/// Execute the population command
pub fn execute_population<W: Write>(
    config: &CliConfig,
    args: &PopulationArgs,
    out: &mut W,
) -> CliResult<ChoroplethLayer> {
    let reporter = Reporter::new(config.use_color(), config.verbosity.is_quiet());
    let layer = match build_layer(args) {
        Ok(layer) => layer,
        Err(err) => {
            if matches!(
                err,
                crate::CliError::Population(PopulationError::MissingColumn { .. })
            ) {
                if let Some(hint) = missing_column_hint(args) {
                    reporter.info(&hint);
                }
            }
            return Err(err);
        }
    };

    if layer.unclassified() > 0 {
        reporter.warning(&format!(
            "{} regions have no value in range and stay uncoloured",
            layer.unclassified()
        ));
    }

    match config.format {
        OutputFormat::Text => write!(
            out,
            "{}",
            render_layer(&layer, args.regions, config.use_color())
        )?,
        OutputFormat::Json => writeln!(out, "{}", render_json(&layer)?)?,
    }
    Ok(layer)
}
