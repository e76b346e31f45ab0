//! `CurrentUser` extractor — resolves the bearer token to an identity.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;
use uuid::Uuid;

use brigade_auth::session::Identity;
use brigade_entity::account::Role;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated caller context available in handlers.
///
/// Extraction runs the full resolve chain (presence, signature, expiry,
/// revocation) once per request; handlers never parse tokens themselves.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// The resolved identity.
    pub identity: Identity,
    /// The raw token the caller presented, kept for logout.
    pub token: String,
}

impl CurrentUser {
    /// The account ID of the caller.
    pub fn id(&self) -> Uuid {
        self.identity.id
    }

    /// The role carried by the caller's token.
    pub fn role(&self) -> Option<Role> {
        self.identity.role
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers);
        let identity = state.authenticator.resolve(token.as_deref()).await?;

        Ok(CurrentUser {
            identity,
            token: token.unwrap_or_default(),
        })
    }
}

/// Pulls the raw token out of an `Authorization: Bearer` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(String::from)
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(bearer_token(&headers), Some("abc.def".to_string()));
    }

    #[test]
    fn test_bearer_token_missing_or_malformed() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);

        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Basic abc"));
        assert_eq!(bearer_token(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Bearer "));
        assert_eq!(bearer_token(&headers), None);
    }
}
