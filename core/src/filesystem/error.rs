use std::fmt;

#[derive(Debug, PartialEq)]
pub enum FileSystemError {
    NotFile,
    LargeFile,
    ReadFile,
}

impl std::error::Error for FileSystemError {}

impl fmt::Display for FileSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileSystemError::NotFile => write!(f, "Not a file"),
            FileSystemError::LargeFile => write!(f, "File larger than 2GB"),
            FileSystemError::ReadFile => write!(f, "Could not read file"),
        }
    }
}
