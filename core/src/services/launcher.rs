use super::error::ServiceError;
use super::matcher::is_lnk_target;
use common::server::ServiceDef;
use log::{error, info};
use std::process::Command;

/// Shell-open the service's shortcut target. The shortcut carries its own
/// working directory and arguments, so the shell does the rest
pub fn start_service(service: &ServiceDef) -> Result<(), ServiceError> {
    if !is_lnk_target(&service.target) {
        error!(
            "[services] Do not know how to start target {} for service {}",
            service.target, service.name
        );
        return Err(ServiceError::UnsupportedTarget);
    }

    // The empty string is the window title, otherwise start treats a quoted path as one
    let spawn_result = Command::new("cmd")
        .args(["/C", "start", "", &service.target])
        .spawn();
    match spawn_result {
        Ok(_child) => {
            info!("[services] Started service {}", service.name);
            Ok(())
        }
        Err(err) => {
            error!("[services] Could not start service {}: {err:?}", service.name);
            Err(ServiceError::Launch)
        }
    }
}
