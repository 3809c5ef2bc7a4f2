use super::error::ServiceError;
use crate::filesystem::files::read_file;
use common::server::ServiceDef;
use log::error;

/// Load the list of service definitions from a JSON file
pub fn load_service_defs(path: &str) -> Result<Vec<ServiceDef>, ServiceError> {
    let buffer_result = read_file(path);
    let buffer = match buffer_result {
        Ok(results) => results,
        Err(err) => {
            error!("[services] Could not read service config {path}: {err:?}");
            return Err(ServiceError::ReadConfig);
        }
    };

    let defs_result = serde_json::from_slice(&buffer);
    match defs_result {
        Ok(results) => Ok(results),
        Err(err) => {
            error!("[services] Service config {path} is not a JSON service list: {err:?}");
            Err(ServiceError::BadConfig)
        }
    }
}
