use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Local};

use crate::parser::{parse_filename, FilenameTokens};

/// Extension written for every output file, whatever the source extension was
pub const OUTPUT_EXTENSION: &str = "pdf";

/// Prefix of the timestamped output directory
pub const OUTPUT_DIR_PREFIX: &str = "renamed_files";

/// Build the base name (no extension): `{id}_{locales}[_{style}]`
///
/// With no locale tokens the result keeps a trailing underscore, e.g. `12_`.
pub fn build_base_name(tokens: &FilenameTokens) -> String {
    let mut name = format!("{}_{}", tokens.leading_id, tokens.locales.join("_"));

    if let Some(style) = tokens.style() {
        name.push('_');
        name.push_str(style);
    }

    name
}

/// Build the full output filename without collision handling
pub fn build_file_name(tokens: &FilenameTokens) -> String {
    with_extension(&build_base_name(tokens))
}

/// Pick the first free name among `base.pdf`, `base_1.pdf`, `base_2.pdf`, ...
pub fn resolve_collision(base: &str, taken: &HashSet<String>) -> String {
    resolve_collision_with(base, |candidate| taken.contains(candidate))
}

/// Same as [`resolve_collision`] with a caller-supplied check for taken names
pub fn resolve_collision_with<F>(base: &str, is_taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    let candidate = with_extension(base);
    if !is_taken(candidate.as_str()) {
        return candidate;
    }

    (1usize..)
        .map(|n| with_extension(&format!("{}_{}", base, n)))
        .find(|candidate| !is_taken(candidate.as_str()))
        .unwrap_or_default()
}

/// Compute the destination filename for `name` given the names already taken
pub fn transform_filename(name: &str, taken: &HashSet<String>) -> String {
    let tokens = parse_filename(name);
    resolve_collision(&build_base_name(&tokens), taken)
}

/// Compute the destination filename, also skipping anything already on disk in
/// `destination_dir` (outside writes, case-insensitive filesystems)
pub fn transform_filename_in(
    name: &str,
    taken: &HashSet<String>,
    destination_dir: &Path,
) -> String {
    let tokens = parse_filename(name);
    resolve_collision_with(&build_base_name(&tokens), |candidate| {
        taken.contains(candidate) || destination_dir.join(candidate).symlink_metadata().is_ok()
    })
}

/// Output directory name for a run started at `started_at`
pub fn output_dir_name(started_at: &DateTime<Local>) -> String {
    format!(
        "{}_{}",
        OUTPUT_DIR_PREFIX,
        started_at.format("%Y%m%d_%H%M%S")
    )
}

fn with_extension(base: &str) -> String {
    format!("{}.{}", base, OUTPUT_EXTENSION)
}
