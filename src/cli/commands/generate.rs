use anyhow::Result;

use super::super::{
    args::GenerateCommand, context::GenerateContext, exit_status::ExitStatus, report,
};
use crate::core::{generate as run_pipeline, writer::write_output};

/// Scan, generate and write the accessor modules.
///
/// Nothing is written unless the whole pipeline succeeds.
pub fn generate(cmd: GenerateCommand) -> Result<ExitStatus> {
    let ctx = GenerateContext::new(&cmd.args.common)?;

    let scan = ctx.scan()?;
    report::print_scan_warnings(&scan, ctx.verbose);
    let values = ctx.read_value_tables(&scan.files)?;

    let generation = match run_pipeline(&scan.files, &values, &ctx.options) {
        Ok(generation) => generation,
        Err(err) => {
            report::print_generate_error(&err);
            return Ok(ExitStatus::Failure);
        }
    };
    report::print_skipped(&generation.skipped, ctx.verbose);

    let summary = write_output(&ctx.output_dir, &generation.files)?;

    if ctx.verbose {
        report::print_types(&generation);
    }
    report::print_generated(&generation, &ctx.output_dir, &summary);

    Ok(ExitStatus::Success)
}
