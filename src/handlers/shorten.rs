use crate::{error::AppError, AppState};
use axum::{
    extract::{rejection::QueryRejection, Form, FromRequest, Multipart, Query, Request, State},
    http::{header, HeaderValue},
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct ShortenForm {
    url: Option<String>,
}

/// POST /shorten
///
/// Mints a fresh code, stores `code -> url` and answers with the public short
/// URL. `url` is read from a urlencoded or multipart body first, then from the
/// query string.
pub async fn shorten(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ShortenForm>, QueryRejection>,
    request: Request,
) -> Result<String, AppError> {
    let from_query = match query {
        Ok(Query(form)) => form.url,
        Err(rejection) => {
            tracing::debug!("Unreadable shorten query: {}", rejection);
            None
        }
    };
    let url = url_from_body(request, &state).await.or(from_query);
    let url = validate_url(url)?;

    let code = state.codes.generate();
    state.store.put(&code, &url);

    let short_url = state.config.short_url(&code);
    tracing::info!("Shortened {} -> {}", short_url, url);

    Ok(format!("shortened URL: {short_url}\n"))
}

/// Any method other than POST on /shorten.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// The `url` field of a urlencoded or multipart body. An unreadable body
/// counts as having no field.
async fn url_from_body(request: Request, state: &Arc<AppState>) -> Option<String> {
    let is_multipart = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("multipart/form-data"));

    if is_multipart {
        let mut multipart = match Multipart::from_request(request, state).await {
            Ok(m) => m,
            Err(rejection) => {
                tracing::debug!("Unreadable multipart body: {}", rejection);
                return None;
            }
        };
        while let Ok(Some(field)) = multipart.next_field().await {
            if field.name() == Some("url") {
                return field.text().await.ok();
            }
        }
        return None;
    }

    match Form::<ShortenForm>::from_request(request, state).await {
        Ok(Form(form)) => form.url,
        Err(rejection) => {
            tracing::debug!("Unreadable shorten form: {}", rejection);
            None
        }
    }
}

/// Any non-empty text is accepted as long as it can later be sent back
/// verbatim in a `Location` header. The value is stored exactly as submitted.
fn validate_url(url: Option<String>) -> Result<String, AppError> {
    let url = url.unwrap_or_default();
    if url.is_empty() {
        return Err(AppError::Validation("URL is required".into()));
    }
    if HeaderValue::from_str(&url).is_err() {
        return Err(AppError::Validation(
            "URL contains characters that cannot be redirected to".into(),
        ));
    }
    Ok(url)
}
