pub mod error;
mod header;
mod location;
pub mod parser;
mod strings;
