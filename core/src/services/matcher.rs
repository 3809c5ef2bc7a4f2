/**
 * Tie the shortcut decoder and the process listing together: a service is
 * considered running when the command line its shortcut would launch exactly
 * matches the command line of a live process
 */
use super::error::ServiceError;
use crate::artifacts::os::processes::wmic::process_listing;
use crate::artifacts::os::windows::shortcuts::parser::decode_lnk_file;
use common::{server::ServiceDef, system::WinProcess, windows::ParsedShortcut};
use log::error;

/// StringData key holding the launch arguments
const ARGS_KEY: &str = "command_line_arguments";

/// Build the command line the shortcut target would be started with
pub fn expected_command_line(shortcut: &ParsedShortcut) -> String {
    match shortcut.additional_data.get(ARGS_KEY) {
        Some(arguments) => format!("{} {arguments}", shortcut.target_path),
        None => shortcut.target_path.clone(),
    }
}

/// Exact string equality. Case and whitespace both count
pub fn command_line_matches(expected: &str, actual: &str) -> bool {
    expected == actual
}

/// Determine whether the service's expected command line is currently running.
/// A decode or listing failure is an error, never a guessed status
pub fn is_running(service: &ServiceDef) -> Result<bool, ServiceError> {
    let shortcut = decode_shortcut_target(service)?;
    let expected = expected_command_line(&shortcut);

    let listing_result = process_listing(Some(&service.process_exe));
    let listing = match listing_result {
        Ok(results) => results,
        Err(err) => {
            error!(
                "[services] Could not get a process listing for {}: {err:?}",
                service.name
            );
            return Err(ServiceError::ProcessListing);
        }
    };
    Ok(search_listing(&expected, &listing))
}

/// Scan a process listing for an exact command line match
pub(crate) fn search_listing(expected: &str, listing: &[WinProcess]) -> bool {
    listing
        .iter()
        .any(|process| command_line_matches(expected, &process.command_line))
}

/// Decode the shortcut the service points at. Only `lnk` targets are understood
pub(crate) fn decode_shortcut_target(service: &ServiceDef) -> Result<ParsedShortcut, ServiceError> {
    if !is_lnk_target(&service.target) {
        error!(
            "[services] Target {} for service {} is not a shortcut file",
            service.target, service.name
        );
        return Err(ServiceError::UnsupportedTarget);
    }

    let decode_result = decode_lnk_file(&service.target);
    match decode_result {
        Ok(results) => Ok(results),
        Err(err) => {
            error!(
                "[services] Could not decode the shortcut for {}: {err:?}",
                service.name
            );
            Err(ServiceError::BadShortcut)
        }
    }
}

/// Check the target extension for `lnk`, ignoring case
pub(crate) fn is_lnk_target(target: &str) -> bool {
    match target.rsplit_once('.') {
        Some((_, extension)) => extension.eq_ignore_ascii_case("lnk"),
        None => false,
    }
}
