mod handlers;
mod models;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::AppState;

pub use handlers::{not_found, page, snapshot, submit};
pub use models::{
    ErrorResponse, FormSnapshot, QueryInput, QueryRequest, RecipeDetails, RecipeResponse,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page).post(submit))
        .route("/state", get(snapshot))
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
