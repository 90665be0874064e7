use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::config::FirebaseConfig;

use super::{AuthError, TokenVerifier, VerifiedToken};

/// Verifies Firebase ID tokens against the identity-toolkit
/// `accounts:lookup` REST endpoint.
pub struct FirebaseTokenVerifier {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[derive(Debug, Deserialize)]
struct LookupUser {
    #[serde(rename = "localId", default)]
    local_id: String,
}

impl FirebaseTokenVerifier {
    pub fn new(http: reqwest::Client, config: &FirebaseConfig) -> Self {
        Self {
            http,
            api_key: config.api_key.clone(),
            base_url: config.identity_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn lookup_url(&self) -> String {
        format!("{}/v1/accounts:lookup?key={}", self.base_url, self.api_key)
    }
}

#[async_trait]
impl TokenVerifier for FirebaseTokenVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedToken, AuthError> {
        let response = self
            .http
            .post(self.lookup_url())
            .json(&json!({ "idToken": token }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::Rejected(format!("{}: {}", status, body)));
        }

        let lookup: LookupResponse = response.json().await?;
        let uid = lookup
            .users
            .into_iter()
            .next()
            .map(|user| user.local_id)
            .filter(|uid| !uid.is_empty())
            .ok_or_else(|| AuthError::Rejected("no user resolved for token".to_string()))?;

        Ok(VerifiedToken { uid })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_url_includes_api_key() {
        let verifier = FirebaseTokenVerifier::new(
            reqwest::Client::new(),
            &FirebaseConfig {
                project_id: "demo-forum".to_string(),
                api_key: "key-123".to_string(),
                identity_base_url: "https://identitytoolkit.googleapis.com/".to_string(),
                firestore_base_url: "https://firestore.googleapis.com".to_string(),
            },
        );
        assert_eq!(
            verifier.lookup_url(),
            "https://identitytoolkit.googleapis.com/v1/accounts:lookup?key=key-123"
        );
    }
}
