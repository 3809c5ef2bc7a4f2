use super::error::ShortcutError;
use crate::utils::nom_helper::{Endian, nom_data, nom_unsigned_two_bytes};
use crate::utils::strings::{extract_codepage_string, extract_utf16_string};
use common::windows::LinkFlags;
use log::error;

/// StringData entries in their fixed wire order, each gated by a LinkFlags bit.
/// The whole sequence is walked exactly once
pub(crate) const STRING_DATA_ORDER: [(LinkFlags, &str); 4] = [
    (LinkFlags::HasName, "description"),
    (LinkFlags::HasRelativePath, "relative_path"),
    (LinkFlags::HasWorkingDirectory, "working_dir"),
    (LinkFlags::HasArguments, "command_line_arguments"),
];

/// Extract one StringData entry. The prefix counts characters, not bytes, so
/// the byte length depends on the unicode flag
pub(crate) fn extract_string(
    data: &[u8],
    is_unicode: bool,
) -> Result<(&[u8], String), ShortcutError> {
    let count_result = nom_unsigned_two_bytes(data, Endian::Le);
    let (input, count) = match count_result {
        Ok(results) => results,
        Err(_err) => {
            error!("[shortcuts] StringData entry is missing its character count");
            return Err(ShortcutError::TruncatedBuffer);
        }
    };

    // Two (2) bytes per character for UTF16, one (1) for the legacy codepage
    let char_size: u64 = if is_unicode { 2 } else { 1 };
    let string_result = nom_data(input, count as u64 * char_size);
    let (input, string_data) = match string_result {
        Ok(results) => results,
        Err(_err) => {
            error!("[shortcuts] StringData length {count} runs past the end of the buffer");
            return Err(ShortcutError::InvalidLength);
        }
    };

    let value = if is_unicode {
        extract_utf16_string(string_data)
    } else {
        extract_codepage_string(string_data)
    };
    Ok((input, value))
}

#[cfg(test)]
mod tests {
    use super::extract_string;
    use crate::artifacts::os::windows::shortcuts::error::ShortcutError;

    #[test]
    fn test_extract_string() {
        let mut test = vec![12, 0];
        test.extend(b"--flag value");
        test.extend(b"trailing");

        let (remaining, result) = extract_string(&test, false).unwrap();
        assert_eq!(result, "--flag value");
        assert_eq!(remaining, b"trailing");
    }

    #[test]
    fn test_extract_string_utf16() {
        let test = [4, 0, 82, 0, 117, 0, 115, 0, 116, 0];
        let (remaining, result) = extract_string(&test, true).unwrap();
        assert_eq!(result, "Rust");
        assert!(remaining.is_empty());
    }

    #[test]
    fn test_extract_string_missing_count() {
        let test = [12];
        let result = extract_string(&test, false);
        assert_eq!(result.unwrap_err(), ShortcutError::TruncatedBuffer);
    }

    #[test]
    fn test_extract_string_oversized_count() {
        let mut test = vec![200, 0];
        test.extend(b"short");
        let result = extract_string(&test, false);
        assert_eq!(result.unwrap_err(), ShortcutError::InvalidLength);

        // Same count fits in codepage terms but not doubled for UTF16
        let mut test = vec![5, 0];
        test.extend(b"short");
        let result = extract_string(&test, true);
        assert_eq!(result.unwrap_err(), ShortcutError::InvalidLength);
    }
}
