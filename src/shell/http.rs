use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::registration::use_cases::manage_page::inbound::http as page_http;
use crate::modules::registration::use_cases::submit_registration::inbound::http as submit_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/registration", get(page_http::snapshot))
        .route("/registration/open", post(page_http::open))
        .route("/registration/close", post(page_http::close))
        .route("/registration/overlay-click", post(page_http::overlay_click))
        .route("/registration/keydown", post(page_http::key_down))
        .route("/registration/input", post(page_http::input))
        .route("/registration/submit", post(submit_http::handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
