// This file contains file-system helpers used by the batch conversion layer.

use std::path::{Path, PathBuf};
use std::io::{self, Write};
use std::fs::{self, File};

/// Creates a directory if it doesn't exist
pub fn ensure_directory_exists<P: AsRef<Path>>(path: P) -> io::Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Writes content to a file, creating parent directories if needed
pub fn write_to_file<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, content: C) -> io::Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        ensure_directory_exists(parent)?;
    }

    let mut file = File::create(path)?;
    file.write_all(content.as_ref())?;
    Ok(())
}

/// Lists regular files directly inside `dir` whose extension is `extension`, sorted by path.
///
/// The extension may be given with or without its leading dot and is compared case-sensitively.
pub fn list_files_with_extension<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<PathBuf>> {
    let extension = extension.trim_start_matches('.');
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) == Some(extension) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Destination for a converted input: `output_dir/<input stem>.<extension>`
pub fn output_path_for<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output_dir: Q, extension: &str) -> PathBuf {
    let file_name = input
        .as_ref()
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("collection"));

    output_dir
        .as_ref()
        .join(file_name)
        .with_extension(extension.trim_start_matches('.'))
}
