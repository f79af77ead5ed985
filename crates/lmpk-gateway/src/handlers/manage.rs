use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;
use tracing::{debug, warn};

use crate::auth;
use crate::error::Result;
use crate::model::ResponseCode;
use crate::state::AppState;

/// Raw query pairs, so a malformed or repeated parameter never fails
/// extraction before the auth check runs.
type QueryPairs = Vec<(String, String)>;

/// First value of `key`; an empty value counts as absent.
fn param<'a>(pairs: &'a QueryPairs, key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .filter(|v| !v.is_empty())
}

fn require_name(pairs: &QueryPairs) -> std::result::Result<&str, ResponseCode> {
    param(pairs, "name").ok_or(ResponseCode::NO_NAME)
}

fn require_name_and_link(pairs: &QueryPairs) -> std::result::Result<(&str, &str), ResponseCode> {
    let name = require_name(pairs)?;
    let link = param(pairs, "link").ok_or(ResponseCode::NO_LINK)?;
    Ok((name, link))
}

pub async fn create_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<QueryPairs>,
) -> Result<Json<ResponseCode>> {
    let checked = auth::check(&headers, &state.config().auth_token)
        .and_then(|()| require_name_and_link(&params));
    let (name, link) = match checked {
        Ok(input) => input,
        Err(code) => {
            debug!(code = code.code, "create refused");
            return Ok(Json(code));
        }
    };

    let outcome = state.store().create(name, link).await?;
    Ok(Json(outcome.into()))
}

pub async fn delete_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<QueryPairs>,
) -> Result<Json<ResponseCode>> {
    let checked =
        auth::check(&headers, &state.config().auth_token).and_then(|()| require_name(&params));
    let name = match checked {
        Ok(name) => name,
        Err(code) => {
            debug!(code = code.code, "delete refused");
            return Ok(Json(code));
        }
    };

    let outcome = state.store().delete(name).await?;
    Ok(Json(outcome.into()))
}

pub async fn modify_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<QueryPairs>,
) -> Result<Json<ResponseCode>> {
    let checked = auth::check(&headers, &state.config().auth_token)
        .and_then(|()| require_name_and_link(&params));
    let (name, link) = match checked {
        Ok(input) => input,
        Err(code) => {
            debug!(code = code.code, "modify refused");
            return Ok(Json(code));
        }
    };

    let outcome = state.store().modify(name, link).await?;
    if let lmpk_core::ModifyOutcome::RollbackFailed { rejected, error } = &outcome {
        warn!(name = %name, ?rejected, error = %error, "modify lost the previous record");
    }
    Ok(Json((&outcome).into()))
}
