use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};
use thiserror::Error;
use tracing::{debug, info};

use crate::progress::Progress;
use crate::scanner::{scan_files, ScannerError};

use super::name_builder::{output_dir_name, transform_filename_in};
use super::types::{BatchReport, RenameRecord};

/// Errors that abort a whole batch
#[derive(Error, Debug)]
pub enum RenameError {
    #[error(transparent)]
    Scan(#[from] ScannerError),
}

/// Options for a batch run
#[derive(Debug, Clone, Default)]
pub struct RenameOptions {
    pub dry_run: bool,
}

/// Rename every file in `source_dir` into a new timestamped directory
pub fn rename_files(
    source_dir: &Path,
    options: &RenameOptions,
    progress: &mut Progress,
) -> Result<BatchReport, RenameError> {
    rename_files_at(source_dir, &Local::now(), options, progress)
}

/// Same as [`rename_files`] with an explicit start time for the directory name
pub fn rename_files_at(
    source_dir: &Path,
    started_at: &DateTime<Local>,
    options: &RenameOptions,
    progress: &mut Progress,
) -> Result<BatchReport, RenameError> {
    progress.scan_start(source_dir);
    let entries = scan_files(source_dir)?;
    progress.scan_complete(entries.len());

    let destination_dir = source_dir.join(output_dir_name(started_at));
    let mut report = BatchReport::new(
        source_dir.to_path_buf(),
        destination_dir.clone(),
        options.dry_run,
    );

    if entries.is_empty() {
        info!("No files found in {:?}", source_dir);
        return Ok(report);
    }

    let mut taken = existing_names(&destination_dir);
    let total = entries.len();

    info!(
        "Preparing to rename {} files into {:?}",
        total, destination_dir
    );
    progress.rename_start(total, &destination_dir);

    for (i, entry) in entries.into_iter().enumerate() {
        let destination_name = transform_filename_in(&entry.name, &taken, &destination_dir);
        debug!(from = %entry.name, to = %destination_name, "Computed new name");

        let record = RenameRecord::new(entry.path, &destination_dir, destination_name);

        let record = if options.dry_run {
            report.destination_created = true;
            record
        } else {
            move_file(record, &mut report)
        };

        if record.is_success() {
            taken.insert(record.destination_name.clone());
            progress.rename_progress(i + 1, total, &record.source_name, &record.destination_name);
        } else {
            let reason = record.failure_reason().unwrap_or_default();
            info!("Failed to rename {:?}: {}", record.source_name, reason);
            progress.rename_failed(i + 1, total, &record.source_name, reason);
        }

        report.add_record(record);
    }

    progress.rename_complete(report.succeeded(), report.failed(), options.dry_run);

    Ok(report)
}

/// Create the output directory on first use, then move the file into it
fn move_file(record: RenameRecord, report: &mut BatchReport) -> RenameRecord {
    if !report.destination_created {
        if let Err(e) = fs::create_dir_all(&report.destination_dir) {
            return record.failed(format!(
                "Failed to create directory {}: {}",
                report.destination_dir.display(),
                e
            ));
        }
        info!("Created output directory {:?}", report.destination_dir);
        report.destination_created = true;
    }

    // Taken names are skipped when picking a name, so this only trips on a write
    // racing between that check and the move
    if record.destination_path.symlink_metadata().is_ok() {
        let reason = format!("Destination already exists: {}", record.destination_name);
        return record.failed(reason);
    }

    match fs::rename(&record.source_path, &record.destination_path) {
        Ok(()) => {
            info!("Renamed: {} -> {}", record.source_name, record.destination_name);
            record
        }
        Err(e) => record.failed(e.to_string()),
    }
}

/// File names already present in the output directory, if it exists
fn existing_names(destination_dir: &Path) -> HashSet<String> {
    let read_dir = match fs::read_dir(destination_dir) {
        Ok(read_dir) => read_dir,
        Err(_) => return HashSet::new(),
    };

    let names: HashSet<String> = read_dir
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .collect();

    debug!(count = names.len(), "Output directory already has entries");
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rename::BatchOutcome;
    use chrono::TimeZone;
    use tempfile::tempdir;

    fn started_at() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
    }

    const OUTPUT_DIR: &str = "renamed_files_20240102_030405";

    fn run(dir: &Path, dry_run: bool) -> BatchReport {
        let options = RenameOptions { dry_run };
        rename_files_at(dir, &started_at(), &options, &mut Progress::silent()).unwrap()
    }

    fn output_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir.join(OUTPUT_DIR))
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_renames_into_timestamped_directory() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("123_CH_report.docx"), "a").unwrap();
        fs::write(dir.path().join("7_GB_IE_StyleB.txt"), "b").unwrap();

        let report = run(dir.path(), false);

        assert_eq!(report.outcome(), BatchOutcome::Renamed);
        assert_eq!(report.total(), 2);
        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.failed(), 0);
        assert_eq!(report.destination_dir, dir.path().join(OUTPUT_DIR));
        assert_eq!(
            output_names(dir.path()),
            vec!["123_CH_DE_FR_IT.pdf", "7_EN_StyleB.pdf"]
        );
        assert!(!dir.path().join("123_CH_report.docx").exists());
    }

    #[test]
    fn test_collisions_get_numbered_suffixes() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("1_GB.txt"), "one").unwrap();
        fs::write(dir.path().join("1_IE.txt"), "two").unwrap();
        fs::write(dir.path().join("1_NI.txt"), "three").unwrap();

        let report = run(dir.path(), false);

        assert_eq!(report.succeeded(), 3);
        assert_eq!(
            output_names(dir.path()),
            vec!["1_EN.pdf", "1_EN_1.pdf", "1_EN_2.pdf"]
        );

        // No content lost
        let mut contents: Vec<String> = output_names(dir.path())
            .iter()
            .map(|n| fs::read_to_string(dir.path().join(OUTPUT_DIR).join(n)).unwrap())
            .collect();
        contents.sort();
        assert_eq!(contents, vec!["one", "three", "two"]);
    }

    #[test]
    fn test_existing_output_names_are_respected() {
        let dir = tempdir().unwrap();
        let output = dir.path().join(OUTPUT_DIR);
        fs::create_dir(&output).unwrap();
        fs::write(output.join("5_EN.pdf"), "old").unwrap();
        fs::write(dir.path().join("5_GB.txt"), "new").unwrap();

        let report = run(dir.path(), false);

        assert_eq!(report.records[0].destination_name, "5_EN_1.pdf");
        assert_eq!(fs::read_to_string(output.join("5_EN.pdf")).unwrap(), "old");
        assert_eq!(fs::read_to_string(output.join("5_EN_1.pdf")).unwrap(), "new");
    }

    #[test]
    fn test_only_subdirectories_is_nothing_found() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("sub1")).unwrap();
        fs::create_dir(dir.path().join("sub2")).unwrap();
        fs::write(dir.path().join("sub1").join("1_GB.txt"), "x").unwrap();

        let report = run(dir.path(), false);

        assert_eq!(report.outcome(), BatchOutcome::NothingFound);
        assert_eq!(report.total(), 0);
        assert!(!dir.path().join(OUTPUT_DIR).exists());
        assert!(dir.path().join("sub1").join("1_GB.txt").exists());
    }

    #[test]
    fn test_empty_directory_is_nothing_found() {
        let dir = tempdir().unwrap();

        let report = run(dir.path(), false);

        assert_eq!(report.outcome(), BatchOutcome::NothingFound);
        assert!(!dir.path().join(OUTPUT_DIR).exists());
    }

    #[test]
    fn test_dry_run_touches_nothing() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("1_GB.txt"), "a").unwrap();
        fs::write(dir.path().join("1_IE.txt"), "b").unwrap();

        let report = run(dir.path(), true);

        assert!(report.dry_run);
        assert_eq!(report.outcome(), BatchOutcome::Renamed);
        assert_eq!(report.succeeded(), 2);
        assert!(!dir.path().join(OUTPUT_DIR).exists());
        assert!(dir.path().join("1_GB.txt").exists());
        assert!(dir.path().join("1_IE.txt").exists());

        let mut planned: Vec<&str> = report
            .records
            .iter()
            .map(|r| r.destination_name.as_str())
            .collect();
        planned.sort();
        assert_eq!(planned, vec!["1_EN.pdf", "1_EN_1.pdf"]);
    }

    #[test]
    fn test_missing_source_is_fatal() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");

        let result = rename_files(&missing, &RenameOptions::default(), &mut Progress::silent());

        assert!(matches!(
            result,
            Err(RenameError::Scan(ScannerError::PathNotFound(_)))
        ));
    }

    #[test]
    fn test_destination_creation_failure_is_per_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("1_GB.txt"), "a").unwrap();
        fs::write(dir.path().join("2_GB.txt"), "b").unwrap();
        // A regular file squatting on the output directory name
        fs::write(dir.path().join(OUTPUT_DIR), "blocker").unwrap();

        let report = run(dir.path(), false);

        // The blocker itself is scanned as a file too, so every entry fails
        assert_eq!(report.total(), 3);
        assert_eq!(report.failed(), 3);
        assert_eq!(report.outcome(), BatchOutcome::NothingFound);
        for record in &report.records {
            assert!(record
                .failure_reason()
                .unwrap()
                .contains("Failed to create directory"));
        }
        assert!(dir.path().join("1_GB.txt").exists());
    }

    /// Valid input name whose expanded output exceeds the 255-byte name limit
    fn overlong_output_name() -> String {
        let codes: String = "QXZJV"
            .chars()
            .flat_map(|a| ('A'..='Z').map(move |b| format!("{}{}", a, b)))
            .take(120)
            .collect();
        format!("1_{}.txt", codes)
    }

    #[test]
    fn test_move_failure_does_not_stop_batch() {
        let dir = tempdir().unwrap();
        let overlong = overlong_output_name();
        fs::write(dir.path().join("1_GB.txt"), "one").unwrap();
        fs::write(dir.path().join(&overlong), "long").unwrap();
        fs::write(dir.path().join("2_CH.txt"), "two").unwrap();

        let report = run(dir.path(), false);

        assert_eq!(report.outcome(), BatchOutcome::Renamed);
        assert_eq!(report.total(), 3);
        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.failed(), 1);

        let failed: Vec<&RenameRecord> = report.records.iter().filter(|r| !r.is_success()).collect();
        assert_eq!(failed[0].source_name, overlong);
        assert!(dir.path().join(&overlong).exists());

        assert_eq!(output_names(dir.path()), vec!["1_EN.pdf", "2_CH_DE_FR_IT.pdf"]);
        assert!(!dir.path().join("1_GB.txt").exists());
        assert!(!dir.path().join("2_CH.txt").exists());
    }

    #[test]
    fn test_move_file_records_failure_then_success() {
        let dir = tempdir().unwrap();
        let destination = dir.path().join(OUTPUT_DIR);
        fs::write(dir.path().join("2_GB.txt"), "present").unwrap();
        let mut report = BatchReport::new(dir.path().to_path_buf(), destination.clone(), false);

        let missing = RenameRecord::new(dir.path().join("1_GB.txt"), &destination, "1_EN.pdf".to_string());
        let record = move_file(missing, &mut report);
        assert!(!record.is_success());
        assert!(record.log_line().starts_with("Failed to rename '1_GB.txt': "));
        assert!(report.destination_created);
        report.add_record(record);

        let present = RenameRecord::new(dir.path().join("2_GB.txt"), &destination, "2_EN.pdf".to_string());
        let record = move_file(present, &mut report);
        assert!(record.is_success());
        report.add_record(record);

        assert_eq!(report.succeeded(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(fs::read_to_string(destination.join("2_EN.pdf")).unwrap(), "present");
    }

    #[test]
    fn test_move_file_never_overwrites() {
        let dir = tempdir().unwrap();
        let destination = dir.path().join(OUTPUT_DIR);
        fs::create_dir(&destination).unwrap();
        fs::write(destination.join("1_EN.pdf"), "existing").unwrap();
        fs::write(dir.path().join("1_GB.txt"), "incoming").unwrap();
        let mut report = BatchReport::new(dir.path().to_path_buf(), destination.clone(), false);

        let record = RenameRecord::new(dir.path().join("1_GB.txt"), &destination, "1_EN.pdf".to_string());
        let record = move_file(record, &mut report);

        assert_eq!(record.failure_reason(), Some("Destination already exists: 1_EN.pdf"));
        assert_eq!(fs::read_to_string(destination.join("1_EN.pdf")).unwrap(), "existing");
        assert!(dir.path().join("1_GB.txt").exists());
    }
}
