/**
 * Get a Windows process listing by running `wmic` and parsing its CSV output.
 * The listing can be filtered to a single executable name, which keeps the
 * output small when only one service is being checked
 */
use super::error::ProcessError;
use crate::utils::strings::extract_codepage_string;
use common::system::WinProcess;
use csv::ReaderBuilder;
use log::{error, warn};
use serde::Deserialize;
use std::process::Command;

/// One row of `wmic /format:csv` output. Columns are emitted in alphabetical
/// order and keyed by header. The Node column (host name) is dropped
#[derive(Debug, Deserialize)]
struct WmicRow {
    #[serde(rename = "Caption")]
    caption: String,
    #[serde(rename = "CommandLine")]
    command_line: String,
    #[serde(rename = "ProcessId")]
    process_id: String,
}

/// Get the process listing, optionally filtered to one executable name
pub fn process_listing(process_name: Option<&str>) -> Result<Vec<WinProcess>, ProcessError> {
    let mut args = vec![String::from("path"), String::from("win32_process")];
    if let Some(name) = process_name {
        args.push(String::from("where"));
        args.push(format!("name like '{name}'"));
    }
    args.push(String::from("get"));
    args.push(String::from("caption,processid,commandline"));
    args.push(String::from("/format:csv"));

    let output_result = Command::new("wmic").args(&args).output();
    let output = match output_result {
        Ok(results) => results,
        Err(err) => {
            error!("[processes] Could not run wmic: {err:?}");
            return Err(ProcessError::Command);
        }
    };
    if !output.status.success() {
        error!(
            "[processes] wmic returned non-zero status: {:?}",
            output.status.code()
        );
        return Err(ProcessError::Command);
    }

    // wmic writes its CSV in the legacy codepage, not UTF8
    parse_wmic_csv(&extract_codepage_string(&output.stdout))
}

/// Parse wmic CSV text. The output starts with blank lines before the header
/// row, and a filter matching nothing produces no output at all
pub(crate) fn parse_wmic_csv(text: &str) -> Result<Vec<WinProcess>, ProcessError> {
    // wmic terminates lines with \r\r\n
    let cleaned = text.replace("\r\r\n", "\r\n");
    let trimmed = cleaned.trim_start_matches(['\u{feff}', '\r', '\n']);
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    // wmic never quotes fields, so quote characters in command lines are literal
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .quoting(false)
        .from_reader(trimmed.as_bytes());

    let headers_result = reader.headers();
    match headers_result {
        Ok(headers) => {
            let required = ["Caption", "CommandLine", "ProcessId"];
            for column in required {
                if !headers.iter().any(|header| header == column) {
                    error!("[processes] Listing output is missing the {column} column");
                    return Err(ProcessError::BadOutput);
                }
            }
        }
        Err(err) => {
            error!("[processes] Could not read the listing header row: {err:?}");
            return Err(ProcessError::BadOutput);
        }
    }

    let mut processes = Vec::new();
    for row in reader.deserialize() {
        let record: WmicRow = match row {
            Ok(results) => results,
            Err(err) => {
                warn!("[processes] Skipping unreadable listing row: {err:?}");
                continue;
            }
        };
        processes.push(WinProcess {
            caption: record.caption,
            process_id: record.process_id,
            command_line: record.command_line,
        });
    }
    Ok(processes)
}

#[cfg(test)]
mod tests {
    use super::parse_wmic_csv;
    use crate::artifacts::os::processes::error::ProcessError;

    #[test]
    fn test_parse_wmic_csv() {
        let test = "\r\r\n\r\r\nNode,Caption,CommandLine,ProcessId\r\r\nDESKTOP-EIS938N,notes.exe,C:\\Tools\\notes.exe --tray,4242\r\r\n";
        let result = parse_wmic_csv(test).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].caption, "notes.exe");
        assert_eq!(result[0].command_line, "C:\\Tools\\notes.exe --tray");
        assert_eq!(result[0].process_id, "4242");
    }

    #[test]
    fn test_parse_wmic_csv_quoted_command_line() {
        let test = "\r\nNode,Caption,CommandLine,ProcessId\r\nHOST,app.exe,\"C:\\Program Files\\app.exe\" --tray,100\r\n";
        let result = parse_wmic_csv(test).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(
            result[0].command_line,
            "\"C:\\Program Files\\app.exe\" --tray"
        );
    }

    #[test]
    fn test_parse_wmic_csv_empty() {
        let result = parse_wmic_csv("").unwrap();
        assert!(result.is_empty());

        let result = parse_wmic_csv("\r\r\n\r\r\n").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_parse_wmic_csv_missing_columns() {
        let test = "Node,Caption\r\nHOST,app.exe\r\n";
        let result = parse_wmic_csv(test);
        assert_eq!(result.unwrap_err(), ProcessError::BadOutput);
    }
}
