use serde::Serialize;
use std::collections::HashMap;

/// Decoded contents of a Windows `Shortcut` (`lnk`) file
#[derive(Debug, PartialEq, Serialize)]
pub struct ParsedShortcut {
    /// Resolved execution target. Local base path concatenated with the common path suffix
    pub target_path: String,
    /// Optional StringData values keyed by field name:
    /// `description`, `relative_path`, `working_dir`, `command_line_arguments`
    pub additional_data: HashMap<String, String>,
}

/// LinkFlags bits modeled by the decoder. A shortcut file may have multiple flags
#[derive(Debug, PartialEq, Serialize)]
pub enum LinkFlags {
    HasTargetIdList,
    HasLinkInfo,
    HasName,
    HasRelativePath,
    HasWorkingDirectory,
    HasArguments,
    HasIconLocation,
    IsUnicode,
}
