use std::fmt;

#[derive(Debug, PartialEq)]
pub enum ProcessError {
    Command,
    BadOutput,
}

impl std::error::Error for ProcessError {}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Command => write!(f, "Could not run the process listing command"),
            ProcessError::BadOutput => write!(f, "Process listing output was not parseable CSV"),
        }
    }
}
