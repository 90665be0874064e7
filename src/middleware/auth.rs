use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated user context resolved from a verified bearer token
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub uid: String,
}

/// Bearer-token authentication middleware.
///
/// Extracts the `Authorization` header, delegates verification to the
/// external identity provider and injects [`AuthUser`] into the request for
/// downstream handlers. Missing/malformed headers and rejected tokens both
/// halt the chain with a 401; rejection causes are collapsed into a single
/// response.
pub async fn require_auth(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&headers).ok_or_else(|| {
        ApiError::unauthorized("Authentication required (missing or malformed bearer token)")
    })?;

    let verified = state.verifier.verify(&token).await?;

    request.extensions_mut().insert(AuthUser { uid: verified.uid });
    Ok(next.run(request).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header
fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let auth_str = headers.get("authorization")?.to_str().ok()?;
    let token = auth_str.strip_prefix("Bearer ")?.trim();

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
