pub mod processes;
pub mod windows;
