//! Authorization gates.
//!
//! One gate, instantiated per signing domain. The admin gate attaches the
//! decoded `AdminClaims`; the user gate attaches the nested `UserIdentity`.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::config::AUTHORIZATION_SEPARATOR;
use crate::errors::AppError;
use crate::services::{DomainClaims, TokenService};

/// Second space-separated segment of the Authorization header.
///
/// The scheme word itself is not checked.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .split(AUTHORIZATION_SEPARATOR)
        .nth(1)
        .filter(|token| !token.is_empty())
}

async fn authorize<C: DomainClaims>(
    tokens: &TokenService<C>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers()).ok_or(AppError::Unauthorized)?;
    let claims = tokens.verify(token)?;

    tracing::debug!(domain = C::DOMAIN, subject = %claims.subject(), "Request authorized");
    request.extensions_mut().insert(claims.into_identity());

    Ok(next.run(request).await)
}

/// Admin gate: verifies against the admin secret, attaches `AdminClaims`.
pub async fn admin_auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    authorize(&state.admin_tokens, request, next).await
}

/// User gate: verifies against the user secret, attaches `UserIdentity`.
pub async fn user_auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    authorize(&state.user_tokens, request, next).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_takes_second_segment() {
        assert_eq!(bearer_token(&headers("Bearer abc.def")), Some("abc.def"));
        // Scheme is not checked
        assert_eq!(bearer_token(&headers("Token abc.def")), Some("abc.def"));
    }

    #[test]
    fn test_missing_or_empty_token() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
        assert_eq!(bearer_token(&headers("abc.def")), None);
        assert_eq!(bearer_token(&headers("Bearer ")), None);
        assert_eq!(bearer_token(&headers("Bearer  abc")), None);
    }

    #[test]
    fn test_non_utf8_header() {
        let mut map = HeaderMap::new();
        map.insert(
            AUTHORIZATION,
            HeaderValue::from_bytes(b"Bearer \xfftoken").unwrap(),
        );
        assert_eq!(bearer_token(&map), None);
    }
}
