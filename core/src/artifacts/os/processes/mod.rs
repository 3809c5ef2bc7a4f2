pub mod error;
pub mod wmic;
