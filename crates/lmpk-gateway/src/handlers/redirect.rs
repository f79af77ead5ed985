use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use tracing::{debug, warn};

use crate::error::{AppError, Result};
use crate::state::AppState;

pub async fn index_handler(State(state): State<AppState>) -> Result<Html<String>> {
    let path = &state.config().template_path;
    let page = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| AppError::Template {
            path: path.clone(),
            source,
        })?;
    Ok(Html(page))
}

/// Resolves the first path segment as a redirect name.
///
/// Unknown names go to the default link; every branch answers with exactly
/// one `307 Temporary Redirect`. A path that does not decode to UTF-8 can
/// never name a record and goes to the default link as well.
pub async fn redirect_handler(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> Result<Response> {
    let link = match path {
        Ok(Path(path)) => {
            let name = path.split('/').next().unwrap_or_default();
            if name.is_empty() {
                return Ok(index_handler(State(state)).await?.into_response());
            }
            let link = state.store().lookup(name).await?;
            if link.is_none() {
                debug!(name = %name, "name not found, redirecting to default link");
            }
            link
        }
        Err(rejection) => {
            debug!(error = %rejection, "undecodable path, redirecting to default link");
            None
        }
    };

    let default_link = &state.config().default_link;
    let location = match link {
        Some(link) => HeaderValue::from_str(&link).or_else(|_| {
            warn!(link = %link, "stored link is not a valid Location, using default");
            HeaderValue::from_str(default_link)
        }),
        None => HeaderValue::from_str(default_link),
    }
    .map_err(|_| AppError::InvalidLocation(default_link.clone()))?;

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
}
