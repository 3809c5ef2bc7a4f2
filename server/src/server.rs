use crate::routes;
use common::server::ServiceDef;
use hermes_core::services::config::load_service_defs;
use log::error;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

#[derive(Debug, Clone)]
pub(crate) struct ServerState {
    pub(crate) services: Vec<ServiceDef>,
}

#[tokio::main]
pub async fn start(path: &str) {
    let config_result = load_service_defs(path);
    let services = match config_result {
        Ok(result) => result,
        Err(err) => {
            error!("[server] Could not read service config at {path}. Cannot start server without a config file: {err:?}");
            return;
        }
    };

    let server_state = ServerState { services };

    let app = routes::setup_routes().with_state(server_state);
    let address = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)), 8888);

    let status = axum::Server::bind(&address)
        .serve(app.into_make_service())
        .await;

    if status.is_err() {
        error!(
            "[server] Failed to start hermes server: {:?}",
            status.unwrap_err()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::start;
    use std::path::PathBuf;

    #[test]
    #[ignore = "Spawns server"]
    fn test_start() {
        let mut test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        test_location.push("tests/test_data/services.json");
        let config_path = test_location.display().to_string();
        start(&config_path)
    }
}
