use http::HeaderMap;

use crate::AuthError;

/// Extract the token from an `Authorization: Bearer <token>` header
///
/// A missing header, a non-UTF-8 value, another scheme, or an empty token
/// are all rejected as missing credentials.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    headers
        .get(http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MissingCredentials)
}
