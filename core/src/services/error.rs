use std::fmt;

#[derive(Debug, PartialEq)]
pub enum ServiceError {
    ReadConfig,
    BadConfig,
    /// Only `lnk` targets are understood
    UnsupportedTarget,
    BadShortcut,
    ProcessListing,
    Launch,
}

impl std::error::Error for ServiceError {}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::ReadConfig => write!(f, "Could not read the service config file"),
            ServiceError::BadConfig => write!(f, "Service config is not a JSON service list"),
            ServiceError::UnsupportedTarget => {
                write!(f, "Do not know how to handle this target type")
            }
            ServiceError::BadShortcut => write!(f, "Could not decode the service shortcut"),
            ServiceError::ProcessListing => write!(f, "Could not get the process listing"),
            ServiceError::Launch => write!(f, "Could not launch the service target"),
        }
    }
}
