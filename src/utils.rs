pub mod helpers;

pub use helpers::{
    ensure_directory_exists,
    list_files_with_extension,
    output_path_for,
    write_to_file,
};
