//! Terminal output for listings and transfer summaries
//!
//! This module provides:
//! - Show-only listing of matching files with their owning versions
//! - Aggregate transfer report with per-file failures

use crate::error::TransferError;
use crate::filter::SelectedFile;
use crate::transfer::TransferOutcome;
use colored::Colorize;
use std::io::Write;

/// Print the show-only listing: one line per matching file
pub fn print_listing(files: &[SelectedFile], out: &mut impl Write) -> std::io::Result<()> {
    for selected in files {
        writeln!(
            out,
            "{}  {}",
            selected.version.raw().green(),
            selected.file.filename
        )?;
    }
    Ok(())
}

/// Print the notice for an empty filtered file set
pub fn print_empty_notice(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(
        out,
        "{} no files matched the extension/substring filters",
        "notice:".yellow()
    )
}

/// Print the aggregate transfer report. Returns true when every transfer
/// succeeded.
pub fn print_transfer_report(
    outcomes: &[TransferOutcome],
    errors: &[TransferError],
    out: &mut impl Write,
) -> std::io::Result<bool> {
    let downloaded = outcomes
        .iter()
        .filter(|o| matches!(o, TransferOutcome::Downloaded { .. }))
        .count();
    let skipped = outcomes
        .iter()
        .filter(|o| matches!(o, TransferOutcome::Skipped { .. }))
        .count();

    writeln!(
        out,
        "{} {} downloaded, {} skipped, {} failed",
        "done:".bold(),
        downloaded.to_string().green(),
        skipped,
        if errors.is_empty() {
            "0".to_string()
        } else {
            errors.len().to_string().red().to_string()
        }
    )?;

    for error in errors {
        writeln!(out, "  {} {}", "error:".red(), error)?;
    }

    Ok(errors.is_empty())
}
