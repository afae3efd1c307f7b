pub mod cli;
pub mod error;
pub mod logging;
pub mod output;
pub mod parser;
pub mod progress;
pub mod rename;
pub mod scanner;

pub use error::{AppError, ExitCode};
pub use parser::{
    expand_country_codes, lookup_country_code, parse_filename, FilenameTokens, UNKNOWN_ID,
};
pub use progress::Progress;
pub use rename::{
    rename_files, transform_filename, BatchOutcome, BatchReport, RenameError, RenameOptions,
    RenameOutcome, RenameRecord,
};
pub use scanner::{scan_files, FileEntry, ScannerError};
