pub mod artifacts;
pub mod filesystem;
pub mod services;
pub(crate) mod utils;
