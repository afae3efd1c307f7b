use clap::Parser;
use std::path::PathBuf;

use crate::rename::RenameOptions;

#[derive(Parser, Debug)]
#[command(name = "locale-renamer")]
#[command(author, version, about, long_about = None)]
#[command(about = "Rename files by id, country codes and style tag into a timestamped directory")]
pub struct Args {
    /// Directory containing the files to rename
    pub source_dir: PathBuf,

    /// Simulate changes without modifying the filesystem
    #[arg(short, long)]
    pub dry: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn rename_options(&self) -> RenameOptions {
        RenameOptions { dry_run: self.dry }
    }
}
