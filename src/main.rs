//! pipget - download distribution files for a PyPI package
//!
//! Pipeline: parse the package spec, fetch the package index, select
//! releases by constraint, filter files by extension/substring, then list
//! or download the matches.

use clap::Parser;
use pipget::cli::CliArgs;
use pipget::error::AppError;
use pipget::filter::FileFilter;
use pipget::output;
use pipget::progress::Progress;
use pipget::registry::{HttpClient, PyPIAdapter};
use pipget::select::select_releases;
use pipget::spec::parse_package_spec;
use pipget::transfer::download_batch;
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Duration;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    // Spec parsing happens before any network I/O
    let spec = parse_package_spec(&args.package_spec, args.version_condition.as_deref())
        .map_err(AppError::from)?;

    if args.verbose {
        eprintln!("pipget v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Package: {}", spec.name);
        if let Some(ref constraint) = spec.constraint {
            eprintln!("Constraint: {}", constraint);
        }
        eprintln!("Index: {}", args.index_url);
    }

    let client =
        HttpClient::with_timeout(Duration::from_secs(args.timeout)).map_err(AppError::from)?;
    let adapter = PyPIAdapter::with_base_url(client.clone(), &args.index_url);

    let mut progress = Progress::new(!args.quiet);
    progress.spinner(&format!("Fetching metadata for {}...", spec.name));
    let index = adapter.fetch_index(&spec.name).await;
    progress.finish_and_clear();
    let index = index.map_err(AppError::from)?;

    let releases =
        select_releases(&index, spec.constraint.as_ref(), args.latest).map_err(AppError::from)?;

    let filter = FileFilter::new()
        .with_extensions(args.ext.clone())
        .with_substrings(args.filter.clone());
    let files = filter.apply(&releases);

    let mut stdout = io::stdout().lock();

    if files.is_empty() {
        // Valid selection, filters were just too strict. Not an error.
        output::print_empty_notice(&mut stdout)?;
        stdout.flush()?;
        return Ok(ExitCode::SUCCESS);
    }

    if args.show_only {
        output::print_listing(&files, &mut stdout)?;
        stdout.flush()?;
        return Ok(ExitCode::SUCCESS);
    }

    let result = download_batch(&client, &files, &args.dest, !args.quiet).await?;
    let all_ok = output::print_transfer_report(&result.outcomes, &result.errors, &mut stdout)?;
    stdout.flush()?;

    if all_ok {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
