//! Calc command handler

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::CalcReport;
use crate::CalcArgs;
use multimath::calc::session::Session;
use multimath::calc::{Operation, OperationRequest};
use std::io::Write;

/// Evaluates one calculation and writes its display line
///
/// A rejected calculation still writes its sentinel before the error is
/// returned, so the display is always visible. `log` with a single operand
/// falls back to the common logarithm.
pub fn execute_calc<W: Write>(config: &CliConfig, args: &CalcArgs, out: &mut W) -> CliResult<()> {
    let operation = Operation::from(args.op);
    let (display, outcome) = match OperationRequest::from_tokens(operation.name(), &args.operands)
    {
        Ok(request) => {
            let (session, outcome) = Session::new().apply(&request);
            (session.display().to_string(), outcome)
        }
        Err(err) => (err.sentinel().to_string(), Err(err)),
    };

    CalcReport::new(&display, &outcome).write_to(config.format, out)?;
    outcome.map(|_| ()).map_err(Into::into)
}
