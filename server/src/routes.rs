use crate::{
    frontend::status::{start_service_route, status_page},
    server::ServerState,
};
use axum::{routing::get, Router};

/// Setup all the server routes. Anything else is a 404
pub(crate) fn setup_routes() -> Router<ServerState> {
    let mut app = Router::new();

    app = app.route("/", get(status_page));
    app = app.route("/start/:id", get(start_service_route));
    app
}
