use crate::rename::{BatchOutcome, BatchReport, RenameOutcome};
use std::io::{self, Write};

/// Display the log lines and summary of a completed run
pub fn display_execution_result(report: &BatchReport, writer: &mut impl Write) -> io::Result<()> {
    for record in &report.records {
        writeln!(writer, "{}", record.log_line())?;
    }

    if report.outcome() == BatchOutcome::NothingFound {
        writeln!(writer, "No files found to rename.")?;
        return Ok(());
    }

    writeln!(writer)?;
    writeln!(writer, "Total files found: {}", report.total())?;
    writeln!(writer, "Successfully renamed: {}", report.succeeded())?;
    writeln!(writer, "Failed to rename: {}", report.failed())?;
    writeln!(writer, "New directory: {}", report.destination_dir.display())?;
    writeln!(writer, "Process completed.")?;

    Ok(())
}

/// Display dry run results in a formatted output
pub fn display_dry_run(report: &BatchReport, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "========================================")?;
    writeln!(writer, "              DRY RUN")?;
    writeln!(writer, "========================================")?;
    writeln!(writer)?;
    writeln!(writer, "Source:      {}", report.source_dir.display())?;
    writeln!(writer, "Destination: {}", report.destination_dir.display())?;
    writeln!(writer)?;

    if report.outcome() == BatchOutcome::NothingFound {
        writeln!(writer, "No files found to rename.")?;
        return Ok(());
    }

    writeln!(writer, "Planned changes:")?;
    writeln!(writer)?;

    for record in &report.records {
        match &record.outcome {
            RenameOutcome::Success => writeln!(
                writer,
                "  Would rename '{}' to '{}'",
                record.source_name, record.destination_name
            )?,
            RenameOutcome::Failure { reason } => writeln!(
                writer,
                "  Would fail '{}': {}",
                record.source_name, reason
            )?,
        }
    }

    writeln!(writer)?;
    writeln!(writer, "----------------------------------------")?;
    writeln!(writer, "Summary:")?;
    writeln!(writer, "  {} files would be renamed", report.succeeded())?;
    writeln!(writer)?;
    writeln!(writer, "Run without --dry to apply these changes.")?;

    Ok(())
}
