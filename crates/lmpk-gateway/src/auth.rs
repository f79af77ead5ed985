use axum::http::HeaderMap;
use subtle::ConstantTimeEq;

use crate::model::ResponseCode;

/// Header names are case-insensitive; clients send `Auth`.
pub const AUTH_HEADER: &str = "auth";

/// Checks the `Auth` header against the configured token.
///
/// Returns the refusal code when the request must not proceed. An empty
/// header counts as missing.
pub fn check(headers: &HeaderMap, token: &str) -> Result<(), ResponseCode> {
    let Some(value) = headers.get(AUTH_HEADER) else {
        return Err(ResponseCode::NO_AUTH);
    };

    if value.is_empty() {
        return Err(ResponseCode::NO_AUTH);
    }

    if constant_time_eq(value.as_bytes(), token.as_bytes()) {
        Ok(())
    } else {
        Err(ResponseCode::WRONG_AUTH)
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}
