use std::fmt;

#[derive(Debug, PartialEq)]
pub enum ShortcutError {
    /// A fixed or computed read would run past the end of the buffer
    TruncatedBuffer,
    /// A declared block or string length does not fit the buffer
    InvalidLength,
    /// Reserved for flag combinations declaring encodings this decoder does not model
    UnsupportedEncoding,
    /// Header size marker or class ID did not match shortcut data
    NotShortcutData,
    ReadFile,
}

impl std::error::Error for ShortcutError {}

impl fmt::Display for ShortcutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShortcutError::TruncatedBuffer => {
                write!(f, "Shortcut data ended before a required field")
            }
            ShortcutError::InvalidLength => {
                write!(f, "Declared length runs past the end of the shortcut data")
            }
            ShortcutError::UnsupportedEncoding => write!(f, "Unsupported string encoding"),
            ShortcutError::NotShortcutData => write!(f, "Not shortcut data"),
            ShortcutError::ReadFile => write!(f, "Could not read lnk file"),
        }
    }
}
