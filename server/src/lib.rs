mod frontend;
mod routes;
pub mod server;
