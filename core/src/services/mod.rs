pub mod config;
pub mod error;
pub mod launcher;
pub mod matcher;
