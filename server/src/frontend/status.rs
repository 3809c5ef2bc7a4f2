use crate::server::ServerState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use common::server::ServiceDef;
use hermes_core::services::{error::ServiceError, launcher::start_service, matcher::is_running};
use log::error;
use tokio::task::spawn_blocking;

const PAGE_TEMPLATE: &str = "<!DOCTYPE html>
<html>
<head><title>hermes</title></head>
<body>
<h1>Services</h1>
<table>
<tr><th>Service</th><th>Status</th></tr>
{{rows}}
</table>
</body>
</html>";

const ROW_TEMPLATE: &str = "<tr><td>{{name}}</td><td>{{status}}</td></tr>";

/// Render the status page. Each service gets a row with either its running
/// state or a start link
pub(crate) async fn status_page(State(state): State<ServerState>) -> Html<String> {
    let mut rows = String::new();
    for (id, service) in state.services.iter().enumerate() {
        let status = service_status(id, service).await;
        let row = ROW_TEMPLATE
            .replace("{{name}}", &service.name)
            .replace("{{status}}", &status);
        rows.push_str(&row);
        rows.push('\n');
    }

    Html(PAGE_TEMPLATE.replace("{{rows}}", &rows))
}

/// Check one service. The check shells out to the process lister, so it runs
/// on the blocking pool
async fn service_status(id: usize, service: &ServiceDef) -> String {
    let check = service.clone();
    let status_result = spawn_blocking(move || is_running(&check)).await;
    let status = match status_result {
        Ok(result) => result,
        Err(err) => {
            error!(
                "[server] Status task for {} did not finish: {err:?}",
                service.name
            );
            return String::from("Status unknown");
        }
    };
    if let Err(err) = &status {
        error!(
            "[server] Could not determine status for {}: {err:?}",
            service.name
        );
    }
    status_label(id, status)
}

/// Text shown in a service's status cell. A stopped service gets its start link
fn status_label(id: usize, status: Result<bool, ServiceError>) -> String {
    match status {
        Ok(true) => String::from("Running"),
        Ok(false) => format!("Not running <a href=\"/start/{id}\">Start</a>"),
        Err(_err) => String::from("Status unknown"),
    }
}

/// Launch the service with the given id and send the browser back to the
/// status page. Ids outside the configured list are a 404
pub(crate) async fn start_service_route(
    Path(id): Path<usize>,
    State(state): State<ServerState>,
) -> Response {
    let service = match state.services.get(id) {
        Some(result) => result.clone(),
        None => return StatusCode::NOT_FOUND.into_response(),
    };

    let running = spawn_blocking({
        let check = service.clone();
        move || is_running(&check)
    })
    .await;
    if let Ok(Ok(true)) = running {
        return Redirect::temporary("/").into_response();
    }

    let start_result = spawn_blocking(move || start_service(&service)).await;
    match start_result {
        Ok(Ok(())) => Redirect::temporary("/").into_response(),
        Ok(Err(err)) => {
            error!("[server] Could not start service {id}: {err:?}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
        Err(err) => {
            error!("[server] Start task for service {id} did not finish: {err:?}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
