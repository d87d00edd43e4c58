pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::editor::handlers as editor;
use crate::parsing::handlers as parsing;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.max_upload_bytes;
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/upload-resume", post(parsing::handle_upload))
        // Editor session API
        .route("/api/v1/editor", post(editor::handle_create_session))
        .route("/api/v1/editor/:sid/preview", get(editor::handle_preview))
        .route(
            "/api/v1/editor/:sid/sections",
            post(editor::handle_add_section),
        )
        .route(
            "/api/v1/editor/:sid/sections/:id",
            patch(editor::handle_update_section),
        )
        .route(
            "/api/v1/editor/:sid/sections/:id/entries",
            post(editor::handle_add_entry),
        )
        .route(
            "/api/v1/editor/:sid/entries/:id",
            patch(editor::handle_update_entry),
        )
        .route(
            "/api/v1/editor/:sid/entries/:id/points",
            post(editor::handle_add_point),
        )
        .route(
            "/api/v1/editor/:sid/points/:id",
            patch(editor::handle_update_point),
        )
        .route(
            "/api/v1/editor/:sid/nodes/:id",
            delete(editor::handle_delete_node),
        )
        .route(
            "/api/v1/editor/:sid/personal",
            patch(editor::handle_update_personal),
        )
        .route(
            "/api/v1/editor/:sid/populate",
            post(editor::handle_populate),
        )
        .layer(DefaultBodyLimit::max(max_upload))
        .with_state(state)
}
