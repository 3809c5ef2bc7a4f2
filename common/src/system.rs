use serde::Serialize;

/// One entry from the Windows process listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WinProcess {
    /// Executable name as reported by `win32_process`
    pub caption: String,
    /// Process ID. Kept as reported, wmic emits it as text
    pub process_id: String,
    /// Full command line the process was started with
    pub command_line: String,
}
