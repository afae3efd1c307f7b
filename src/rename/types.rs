use std::path::{Path, PathBuf};

/// Result of moving one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    Success,
    Failure { reason: String },
}

/// A single rename, performed or planned
#[derive(Debug, Clone)]
pub struct RenameRecord {
    /// Full path to the source file
    pub source_path: PathBuf,
    /// Original filename
    pub source_name: String,
    /// Full path inside the output directory
    pub destination_path: PathBuf,
    /// New filename
    pub destination_name: String,
    pub outcome: RenameOutcome,
}

impl RenameRecord {
    pub fn new(source_path: PathBuf, destination_dir: &Path, destination_name: String) -> Self {
        let source_name = source_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let destination_path = destination_dir.join(&destination_name);

        Self {
            source_path,
            source_name,
            destination_path,
            destination_name,
            outcome: RenameOutcome::Success,
        }
    }

    pub fn failed(mut self, reason: impl Into<String>) -> Self {
        self.outcome = RenameOutcome::Failure {
            reason: reason.into(),
        };
        self
    }

    pub fn is_success(&self) -> bool {
        self.outcome == RenameOutcome::Success
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match &self.outcome {
            RenameOutcome::Success => None,
            RenameOutcome::Failure { reason } => Some(reason.as_str()),
        }
    }

    /// Human-readable log line for this record
    pub fn log_line(&self) -> String {
        match &self.outcome {
            RenameOutcome::Success => {
                format!("Renamed '{}' to '{}'", self.source_name, self.destination_name)
            }
            RenameOutcome::Failure { reason } => {
                format!("Failed to rename '{}': {}", self.source_name, reason)
            }
        }
    }
}

/// Overall outcome of a batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    /// The output directory was created and files were moved into it
    Renamed,
    /// Nothing qualified; no output directory exists
    NothingFound,
}

/// Result of renaming every file in a directory
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub source_dir: PathBuf,
    pub destination_dir: PathBuf,
    /// Whether the output directory was created (or would be, in a dry run)
    pub destination_created: bool,
    pub records: Vec<RenameRecord>,
    pub dry_run: bool,
}

impl BatchReport {
    pub fn new(source_dir: PathBuf, destination_dir: PathBuf, dry_run: bool) -> Self {
        Self {
            source_dir,
            destination_dir,
            destination_created: false,
            records: Vec::new(),
            dry_run,
        }
    }

    pub fn add_record(&mut self, record: RenameRecord) {
        self.records.push(record);
    }

    pub fn outcome(&self) -> BatchOutcome {
        if self.destination_created {
            BatchOutcome::Renamed
        } else {
            BatchOutcome::NothingFound
        }
    }

    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn succeeded(&self) -> usize {
        self.records.iter().filter(|r| r.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }
}
