pub mod chat;
pub mod generate;
pub mod health;

use crate::AppState;
use axum::http::header::{HeaderName, AUTHORIZATION, CONTENT_TYPE};
use axum::http::Method;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;

/// Browser clients call the generator cross-origin from the chat UI.
pub fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            CONTENT_TYPE,
        ])
}

/// All routes with CORS applied. Request tracing is layered on in `main`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(generate::router())
        .merge(chat::router())
        .merge(health::router())
        .with_state(state)
        .layer(cors())
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(info(title = "meggie-server", description = "Meggie's hostel recipe generator"))]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    let modules: Vec<utoipa::openapi::OpenApi> = vec![
        generate::ApiDoc::openapi(),
        chat::ApiDoc::openapi(),
        health::ApiDoc::openapi(),
    ];

    for module_spec in modules {
        spec.merge(module_spec);
    }

    spec
}
