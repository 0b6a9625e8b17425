use crate::{error::AppError, AppState};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// /:code, any method
///
/// 302 to the stored target, or 404 when the code was never minted.
pub async fn redirect(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Response, AppError> {
    let Some(target_url) = state.store.get(&code) else {
        tracing::debug!("Unknown short code '{}'", code);
        return Err(AppError::NotFound);
    };

    Ok((StatusCode::FOUND, [(header::LOCATION, target_url)]).into_response())
}

/// Any path that matches no route.
pub async fn not_found() -> AppError {
    AppError::NotFound
}
