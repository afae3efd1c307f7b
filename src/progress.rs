//! Progress output for user-facing status updates.
//!
//! Status lines go to stderr while a batch runs. In verbose mode output is
//! suppressed since tracing handles everything.

use colored::Colorize;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// Progress reporter for user-facing output
pub struct Progress {
    writer: Box<dyn Write>,
    /// When true, all output is suppressed (verbose mode uses tracing instead)
    silent: bool,
    /// When true, output is colorized
    colors_enabled: bool,
}

/// Check if we should use colors in output
pub fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    io::stderr().is_terminal()
}

impl Progress {
    /// Create a progress reporter that respects UI mode
    /// When verbose=true, output is suppressed (tracing handles it)
    pub fn new_with_ui(verbose: bool, colors_enabled: bool) -> Self {
        if !colors_enabled {
            colored::control::set_override(false);
        }

        Self {
            writer: Box::new(io::stderr()),
            silent: verbose,
            colors_enabled,
        }
    }

    /// Create a progress reporter with a custom writer (for testing)
    #[cfg(test)]
    pub fn with_writer(writer: Box<dyn Write>) -> Self {
        Self {
            writer,
            silent: false,
            colors_enabled: false,
        }
    }

    /// Create a silent progress reporter
    pub fn silent() -> Self {
        Self {
            writer: Box::new(io::sink()),
            silent: true,
            colors_enabled: false,
        }
    }

    pub fn scan_start(&mut self, dir: &Path) {
        if self.silent {
            return;
        }
        let msg = format!("Scanning {}...", dir.display());
        if self.colors_enabled {
            let _ = write!(self.writer, "{}", msg.dimmed());
        } else {
            let _ = write!(self.writer, "{}", msg);
        }
        let _ = self.writer.flush();
    }

    /// Finish the scan line with the number of files found
    pub fn scan_complete(&mut self, count: usize) {
        if self.silent {
            return;
        }
        let msg = format!("{} files", count);
        if self.colors_enabled {
            let _ = writeln!(self.writer, " {}", msg.green());
        } else {
            let _ = writeln!(self.writer, " {}", msg);
        }
    }

    pub fn rename_start(&mut self, total: usize, destination: &Path) {
        if self.silent {
            return;
        }
        let msg = format!("Renaming {} files into {}", total, destination.display());
        let _ = writeln!(self.writer);
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{}", msg.bold());
        } else {
            let _ = writeln!(self.writer, "{}", msg);
        }
    }

    /// Report progress on a single rename
    pub fn rename_progress(&mut self, current: usize, total: usize, from: &str, to: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let counter = format!("[{}/{}]", current, total);
            let _ = writeln!(
                self.writer,
                "{} {} {} {}",
                counter.cyan(),
                from.dimmed(),
                "→".cyan(),
                to
            );
        } else {
            let _ = writeln!(self.writer, "[{}/{}] {} -> {}", current, total, from, to);
        }
    }

    /// Report a file that could not be moved (non-fatal)
    pub fn rename_failed(&mut self, current: usize, total: usize, from: &str, reason: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let counter = format!("[{}/{}]", current, total);
            let _ = writeln!(
                self.writer,
                "{} {} {} {}",
                counter.cyan(),
                "✗".red().bold(),
                from,
                reason.red()
            );
        } else {
            let _ = writeln!(self.writer, "[{}/{}] X {}: {}", current, total, from, reason);
        }
    }

    pub fn rename_complete(&mut self, succeeded: usize, failed: usize, dry_run: bool) {
        if self.silent {
            return;
        }
        let _ = writeln!(self.writer);
        if dry_run {
            let msg = format!("Dry run complete. {} files would be renamed.", succeeded);
            if self.colors_enabled {
                let _ = writeln!(self.writer, "{}", msg.dimmed());
            } else {
                let _ = writeln!(self.writer, "{}", msg);
            }
        } else if failed > 0 {
            let msg = format!("{} files renamed, {} failed", succeeded, failed);
            if self.colors_enabled {
                let _ = writeln!(self.writer, "{} {}", "!".yellow().bold(), msg.yellow());
            } else {
                let _ = writeln!(self.writer, "Warning: {}", msg);
            }
        } else if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "{} {}",
                "✓".green().bold(),
                format!("{} files renamed", succeeded).green()
            );
        } else {
            let _ = writeln!(self.writer, "Rename complete. {} files renamed.", succeeded);
        }
    }
}
