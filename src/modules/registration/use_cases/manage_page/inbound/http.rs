// Inbound adapters for the page interactions that are not a submit:
// opening and dismissing the modal, typing into a field, reading the page.

use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::registration::core::fields::Field;
use crate::modules::registration::core::modal::ClickTarget;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct OverlayClickBody {
    pub target: ClickTarget,
}

#[derive(Deserialize)]
pub struct KeyDownBody {
    pub key: String,
}

#[derive(Deserialize)]
pub struct InputBody {
    pub field: Field,
    pub value: String,
}

#[derive(Serialize)]
pub struct ClosedResponse {
    pub closed: bool,
}

pub async fn snapshot(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.workflow.snapshot().await)
}

pub async fn open(State(state): State<AppState>) -> impl IntoResponse {
    state.workflow.open().await;
    StatusCode::NO_CONTENT
}

pub async fn close(State(state): State<AppState>) -> impl IntoResponse {
    state.workflow.close().await;
    StatusCode::NO_CONTENT
}

pub async fn overlay_click(
    State(state): State<AppState>,
    body: Result<Json<OverlayClickBody>, JsonRejection>,
) -> impl IntoResponse {
    let Ok(Json(body)) = body else {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    };
    let closed = state.workflow.overlay_click(body.target).await;
    Json(ClosedResponse { closed }).into_response()
}

pub async fn key_down(
    State(state): State<AppState>,
    body: Result<Json<KeyDownBody>, JsonRejection>,
) -> impl IntoResponse {
    let Ok(Json(body)) = body else {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    };
    let closed = state.workflow.key_down(&body.key).await;
    Json(ClosedResponse { closed }).into_response()
}

pub async fn input(
    State(state): State<AppState>,
    body: Result<Json<InputBody>, JsonRejection>,
) -> impl IntoResponse {
    let Ok(Json(body)) = body else {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    };
    state.workflow.input(body.field, body.value).await;
    StatusCode::NO_CONTENT.into_response()
}

#[cfg(test)]
mod manage_page_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::registration::workflow::RegistrationWorkflow;
    use crate::shared::config::RegistrationConfig;
    use crate::shared::infrastructure::submission_transport::in_memory::InMemoryTransport;
    use crate::shell::http::router;
    use crate::shell::state::AppState;

    fn app() -> Router {
        let workflow = Arc::new(RegistrationWorkflow::new(
            RegistrationConfig::default(),
            Arc::new(InMemoryTransport::new()),
        ));
        router(AppState { workflow })
    }

    fn post(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_json(app: &Router, uri: &str) -> serde_json::Value {
        let response = app
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn it_should_open_the_modal_and_lock_scrolling() {
        let app = app();

        let response = app.clone().oneshot(post("/registration/open", "")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let page = read_json(&app, "/registration").await;
        assert_eq!(page["modal"], "open");
        assert_eq!(page["scroll_locked"], true);
    }

    #[tokio::test]
    async fn it_should_close_on_escape() {
        let app = app();
        app.clone().oneshot(post("/registration/open", "")).await.unwrap();

        let response = app
            .clone()
            .oneshot(post("/registration/keydown", r#"{"key":"Escape"}"#))
            .await
            .unwrap();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(json["closed"], true);
        assert_eq!(read_json(&app, "/registration").await["modal"], "closed");
    }

    #[tokio::test]
    async fn it_should_keep_the_modal_open_on_content_clicks() {
        let app = app();
        app.clone().oneshot(post("/registration/open", "")).await.unwrap();

        let response = app
            .clone()
            .oneshot(post("/registration/overlay-click", r#"{"target":"content"}"#))
            .await
            .unwrap();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(json["closed"], false);
        assert_eq!(read_json(&app, "/registration").await["modal"], "open");
    }

    #[tokio::test]
    async fn it_should_store_typed_values_and_wipe_them_on_close() {
        let app = app();
        app.clone().oneshot(post("/registration/open", "")).await.unwrap();
        app.clone()
            .oneshot(post(
                "/registration/input",
                r#"{"field":"teamName","value":"Null Pointers"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(
            read_json(&app, "/registration").await["values"]["teamName"],
            "Null Pointers"
        );

        app.clone().oneshot(post("/registration/close", "")).await.unwrap();

        assert_eq!(read_json(&app, "/registration").await["values"]["teamName"], "");
    }

    #[tokio::test]
    async fn it_should_return_422_for_an_unknown_field() {
        let response = app()
            .oneshot(post("/registration/input", r#"{"field":"address","value":"x"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
