use encoding_rs::{UTF_16LE, WINDOWS_1252};

/// Get a string from legacy codepage (windows-1252) bytes. Every byte maps to a character, decoding cannot fail
pub(crate) fn extract_codepage_string(data: &[u8]) -> String {
    let (value, _, _) = WINDOWS_1252.decode(data);
    value.into_owned()
}

/// Get a string from UTF16 little-endian bytes. Unpaired surrogates become replacement characters
pub(crate) fn extract_utf16_string(data: &[u8]) -> String {
    let (value, _, _) = UTF_16LE.decode(data);
    value.into_owned()
}

#[cfg(test)]
mod tests {
    use super::{extract_codepage_string, extract_utf16_string};

    #[test]
    fn test_extract_codepage_string() {
        let test = [67, 58, 92, 84, 111, 111, 108, 115];
        assert_eq!(extract_codepage_string(&test), "C:\\Tools");

        // 0xe9 is e-acute in windows-1252
        let test = [67, 97, 102, 0xe9];
        assert_eq!(extract_codepage_string(&test), "Café");
    }

    #[test]
    fn test_extract_utf16_string() {
        let test = [82, 0, 117, 0, 115, 0, 116, 0];
        assert_eq!(extract_utf16_string(&test), "Rust");
    }
}
