//! Report formatting and printing utilities.
//!
//! Results go to stdout, diagnostics to stderr. Kept apart from the core so
//! that resgen can be used as a library without terminal output.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use crate::{
    core::{
        Generation,
        collector::{SkipReason, SkippedFile},
        scanner::ScanResult,
        writer::WriteSummary,
    },
    error::GenerateError,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a generation error to stderr.
pub fn print_generate_error(err: &GenerateError) {
    print_generate_error_to(err, &mut io::stderr().lock());
}

pub fn print_generate_error_to<W: Write>(err: &GenerateError, writer: &mut W) {
    let _ = writeln!(writer, "{}: {}", "error".bold().red(), err);
    let _ = writeln!(
        writer,
        "\n{} {}",
        FAILURE_MARK.red(),
        "Generation aborted, no files were written".red()
    );
}

/// Print warnings about the scan itself: unreadable entries and files
/// excluded by `ignores`.
pub fn print_scan_warnings(scan: &ScanResult, verbose: bool) {
    print_scan_warnings_to(scan, verbose, &mut io::stderr().lock());
}

pub fn print_scan_warnings_to<W: Write>(scan: &ScanResult, verbose: bool, writer: &mut W) {
    if scan.skipped_count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} path(s) skipped due to access errors (use {} for details)",
            "warning:".bold().yellow(),
            scan.skipped_count,
            "-v".cyan()
        );
    }
    if scan.ignored_count > 0 {
        let _ = writeln!(
            writer,
            "{} {} file(s) excluded by 'ignores' patterns{}",
            "note:".bold().cyan(),
            scan.ignored_count,
            details_hint(verbose)
        );
    }
}

/// Print files that took no part in generation.
///
/// Raw files are expected and only listed in verbose mode.
pub fn print_skipped(skipped: &[SkippedFile], verbose: bool) {
    print_skipped_to(skipped, verbose, &mut io::stderr().lock());
}

pub fn print_skipped_to<W: Write>(skipped: &[SkippedFile], verbose: bool, writer: &mut W) {
    if !verbose {
        return;
    }
    for file in skipped {
        let reason = match file.reason {
            SkipReason::RawFile => "raw file, no accessor",
        };
        let _ = writeln!(
            writer,
            "{} Skipping {} ({})",
            "note:".bold().cyan(),
            file.path,
            reason
        );
    }
}

/// Print the per-type breakdown of a generation.
pub fn print_types(generation: &Generation) {
    print_types_to(generation, &mut io::stdout().lock());
}

pub fn print_types_to<W: Write>(generation: &Generation, writer: &mut W) {
    for summary in &generation.types {
        let _ = writeln!(
            writer,
            "  {:<10} {} {} in {} {}",
            summary.resource_type.to_string().bold(),
            summary.resource_count,
            plural(summary.resource_count, "resource", "resources"),
            summary.shard_count,
            plural(summary.shard_count, "shard", "shards"),
        );
    }
}

/// Print the result of `generate`.
pub fn print_generated(generation: &Generation, output_dir: &Path, summary: &WriteSummary) {
    print_generated_to(
        generation,
        output_dir,
        summary,
        &mut io::stdout().lock(),
    );
}

pub fn print_generated_to<W: Write>(
    generation: &Generation,
    output_dir: &Path,
    summary: &WriteSummary,
    writer: &mut W,
) {
    let msg = format!(
        "Generated {} {} in {} {} into {}",
        generation.resource_count(),
        plural(generation.resource_count(), "resource", "resources"),
        generation.shard_count(),
        plural(generation.shard_count(), "shard", "shards"),
        output_dir.display()
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
    let _ = writeln!(
        writer,
        "  {} written, {} unchanged, {} removed",
        summary.written.len(),
        summary.unchanged.len(),
        summary.removed.len()
    );
}

/// Print the result of `check`.
pub fn print_checked(generation: &Generation) {
    print_checked_to(generation, &mut io::stdout().lock());
}

pub fn print_checked_to<W: Write>(generation: &Generation, writer: &mut W) {
    let msg = format!(
        "Checked {} {} - no issues found",
        generation.resource_count(),
        plural(generation.resource_count(), "resource", "resources"),
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

/// Print the refusal of `init` to replace an existing config file.
pub fn print_config_exists(path: &Path) {
    print_config_exists_to(path, &mut io::stderr().lock());
}

pub fn print_config_exists_to<W: Write>(path: &Path, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{}: {} already exists",
        "error".bold().red(),
        path.display()
    );
    let _ = writeln!(
        writer,
        "  {} edit it directly, or delete it to start over from the defaults",
        "= help:".bold().cyan()
    );
}

pub fn print_config_created(path: &Path) {
    print_config_created_to(path, &mut io::stdout().lock());
}

pub fn print_config_created_to<W: Write>(path: &Path, writer: &mut W) {
    let msg = format!("Created {}", path.display());
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

// ============================================================
// Internal Functions
// ============================================================

fn details_hint(verbose: bool) -> String {
    if verbose {
        String::new()
    } else {
        format!(" (use {} for details)", "-v".cyan())
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
