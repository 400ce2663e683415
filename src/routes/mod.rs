pub mod submit;

use axum::routing::post;
use axum::Router;

use crate::state::SharedState;

pub fn form_routes() -> Router<SharedState> {
    Router::new().route("/submit", post(submit::submit))
}
