pub mod firebase;

use async_trait::async_trait;
use thiserror::Error;

pub use firebase::FirebaseTokenVerifier;

/// Subject resolved from a verified bearer token.
#[derive(Debug, Clone)]
pub struct VerifiedToken {
    pub uid: String,
}

/// Errors from token verification. Every cause produces the same 401 at the
/// API boundary; the variants exist for logging.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("token rejected: {0}")]
    Rejected(String),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// External identity provider seam. Each request is verified independently;
/// results are never cached.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<VerifiedToken, AuthError>;
}
