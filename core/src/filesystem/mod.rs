pub mod error;
pub mod files;
