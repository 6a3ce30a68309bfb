use anyhow::Result;

use super::super::{args::CheckCommand, context::GenerateContext, exit_status::ExitStatus, report};
use crate::core::generate;

/// Run the pipeline without touching the output directory.
pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let ctx = GenerateContext::new(&cmd.args.common)?;

    let scan = ctx.scan()?;
    report::print_scan_warnings(&scan, ctx.verbose);
    let values = ctx.read_value_tables(&scan.files)?;

    let generation = match generate(&scan.files, &values, &ctx.options) {
        Ok(generation) => generation,
        Err(err) => {
            report::print_generate_error(&err);
            return Ok(ExitStatus::Failure);
        }
    };
    report::print_skipped(&generation.skipped, ctx.verbose);

    report::print_types(&generation);
    report::print_checked(&generation);

    Ok(ExitStatus::Success)
}
