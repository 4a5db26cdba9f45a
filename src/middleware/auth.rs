use axum::{extract::FromRequestParts, http::request::Parts};

use crate::{AppState, error::AppError};

pub const API_KEY_HEADER: &str = "x-api-key";

/// Proof that the request carried the shared secret. Resolved from headers
/// only, so a rejected request never has its body read.
pub struct ApiKey;

impl FromRequestParts<AppState> for ApiKey {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let expected = state
            .config
            .api_key_secret
            .as_deref()
            .ok_or(AppError::Unauthorized)?;

        let provided = parts
            .headers
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        if !keys_match(provided.as_bytes(), expected.as_bytes()) {
            return Err(AppError::Unauthorized);
        }

        Ok(ApiKey)
    }
}

/// Compares in time independent of where the first mismatch is.
fn keys_match(provided: &[u8], expected: &[u8]) -> bool {
    if provided.len() != expected.len() {
        return false;
    }
    provided
        .iter()
        .zip(expected)
        .fold(0u8, |diff, (a, b)| diff | (a ^ b))
        == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_match() {
        assert!(keys_match(b"s3cret-key", b"s3cret-key"));
        assert!(!keys_match(b"s3cret-kez", b"s3cret-key"));
        assert!(!keys_match(b"x3cret-key", b"s3cret-key"));
        assert!(!keys_match(b"s3cret", b"s3cret-key"));
        assert!(!keys_match(b"", b"s3cret-key"));
    }
}
