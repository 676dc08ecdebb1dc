use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use tracing::{error, warn};

use crate::{view::render_page, AppState};

use super::models::{ErrorResponse, FormSnapshot, QueryInput};

pub async fn page(State(state): State<AppState>) -> Response {
    render(&state.form.snapshot())
}

/// Form submission. A post that arrives while a call is outstanding only
/// updates the query, the same as pressing a disabled button.
pub async fn submit(State(state): State<AppState>, Form(input): Form<QueryInput>) -> Response {
    state.form.update_query(input.query);

    if state.form.try_submit().await.is_none() {
        warn!("submission ignored while a recipe query is in flight");
    }

    render(&state.form.snapshot())
}

pub async fn snapshot(State(state): State<AppState>) -> Json<FormSnapshot> {
    Json(state.form.snapshot())
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
        .into_response()
}

fn render(snapshot: &FormSnapshot) -> Response {
    match render_page(snapshot) {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            error!(error = %err, "failed to render page");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "failed to render page".to_string(),
                }),
            )
                .into_response()
        }
    }
}
