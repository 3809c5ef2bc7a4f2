use serde::{Deserialize, Serialize};

/// A user-configured service backed by a shortcut file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDef {
    /// Display name shown on the status page
    pub name: String,
    /// Executable name to filter the process listing with (ex: `notes.exe`)
    pub process_exe: String,
    /// Full path to the `lnk` file that launches the service
    pub target: String,
}
