use super::error::FileSystemError;
use log::error;
use std::fs::{metadata, read};
use std::path::Path;

/// Check if the provided path is a file
pub fn is_file(path: &str) -> bool {
    let file = Path::new(path);
    if file.is_file() {
        return true;
    }
    false
}

/// Read a file that is less than 2GB in size
pub fn read_file(path: &str) -> Result<Vec<u8>, FileSystemError> {
    if !is_file(path) {
        return Err(FileSystemError::NotFile);
    }
    if file_too_large(path) {
        return Err(FileSystemError::LargeFile);
    }

    let read_result = read(path);
    match read_result {
        Ok(results) => Ok(results),
        Err(err) => {
            error!("[core] Failed to read file {path}: {err:?}");
            Err(FileSystemError::ReadFile)
        }
    }
}

/// Check whether a file is larger than the 2GB read limit
fn file_too_large(path: &str) -> bool {
    let max_size = 2147483648;
    let meta_result = metadata(path);
    match meta_result {
        Ok(results) => results.len() > max_size,
        Err(_err) => false,
    }
}
