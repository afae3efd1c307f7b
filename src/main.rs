use clap::Parser;
use locale_renamer::cli::Args;
use locale_renamer::output::{display_dry_run, display_execution_result};
use locale_renamer::progress::{should_use_colors, Progress};
use locale_renamer::{logging, rename_files, AppError, BatchOutcome};
use tracing::{error, info};

fn main() {
    let args = Args::parse();

    logging::init(args.verbose);

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("\nError: {}", e.detailed_message());
        std::process::exit(e.exit_code().into());
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let mut progress = Progress::new_with_ui(args.verbose > 0, should_use_colors());
    let options = args.rename_options();

    let report = rename_files(&args.source_dir, &options, &mut progress)?;

    match report.outcome() {
        BatchOutcome::Renamed => info!(
            "Renamed {} of {} files into {:?}",
            report.succeeded(),
            report.total(),
            report.destination_dir
        ),
        BatchOutcome::NothingFound => info!("No files found to rename in {:?}", args.source_dir),
    }

    if options.dry_run {
        display_dry_run(&report, &mut std::io::stdout())
            .map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;
    } else {
        display_execution_result(&report, &mut std::io::stdout())
            .map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;
    }

    if report.has_failures() {
        return Err(AppError::RenameFailures {
            failed: report.failed(),
            total: report.total(),
        });
    }

    Ok(())
}
