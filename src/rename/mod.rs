mod batch;
mod name_builder;
mod types;

pub use batch::{rename_files, rename_files_at, RenameError, RenameOptions};
pub use name_builder::{
    build_base_name, build_file_name, output_dir_name, resolve_collision,
    resolve_collision_with, transform_filename, transform_filename_in,
    OUTPUT_DIR_PREFIX, OUTPUT_EXTENSION,
};
pub use types::{BatchOutcome, BatchReport, RenameOutcome, RenameRecord};
