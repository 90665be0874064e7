use async_trait::async_trait;
use serde_json::{json, Map, Value};

use crate::config::FirebaseConfig;

use super::{DocumentPath, DocumentStore, StoreError};

/// Credential source for the document store, resolved once at startup.
#[derive(Debug, Clone)]
pub enum FirestoreCredentials {
    /// Explicit OAuth2 access token, sent as a bearer header.
    BearerToken(String),
    /// Local emulator host; plain HTTP, no credentials required.
    Emulator(String),
    /// No credential source found. The client still constructs, but every
    /// write fails with `StoreError::CredentialsMissing`.
    None,
}

impl FirestoreCredentials {
    /// Resolve credentials from the environment, first match wins:
    /// `FIRESTORE_AUTH_TOKEN`, then `FIRESTORE_EMULATOR_HOST`, else none.
    pub fn from_env() -> Self {
        if let Ok(token) = std::env::var("FIRESTORE_AUTH_TOKEN") {
            if !token.is_empty() {
                return Self::BearerToken(token);
            }
        }
        if let Ok(host) = std::env::var("FIRESTORE_EMULATOR_HOST") {
            if !host.is_empty() {
                return Self::Emulator(host);
            }
        }
        Self::None
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Document store client speaking the Firestore REST API.
pub struct FirestoreStore {
    http: reqwest::Client,
    project_id: String,
    base_url: String,
    credentials: FirestoreCredentials,
}

impl FirestoreStore {
    pub fn new(
        http: reqwest::Client,
        config: &FirebaseConfig,
        credentials: FirestoreCredentials,
    ) -> Self {
        let base_url = match &credentials {
            FirestoreCredentials::Emulator(host) => format!("http://{}", host),
            _ => config.firestore_base_url.trim_end_matches('/').to_string(),
        };

        Self {
            http,
            project_id: config.project_id.clone(),
            base_url,
            credentials,
        }
    }

    /// `createDocument` endpoint for a collection path. Posting here makes
    /// the server mint the document id.
    fn create_document_url(&self, collection: &DocumentPath) -> String {
        format!(
            "{}/v1/projects/{}/databases/(default)/documents/{}",
            self.base_url, self.project_id, collection
        )
    }
}

#[async_trait]
impl DocumentStore for FirestoreStore {
    async fn insert(&self, collection: &DocumentPath, record: &Value) -> Result<String, StoreError> {
        let mut request = self.http.post(self.create_document_url(collection));
        match &self.credentials {
            FirestoreCredentials::BearerToken(token) => {
                request = request.bearer_auth(token);
            }
            FirestoreCredentials::Emulator(_) => {}
            FirestoreCredentials::None => return Err(StoreError::CredentialsMissing),
        }

        let response = request
            .json(&json!({ "fields": encode_fields(record) }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let created: Value = response.json().await?;
        let name = created
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                StoreError::UnexpectedResponse("created document has no name".to_string())
            })?;

        // The document id is the last segment of the returned resource name
        let id = name.rsplit('/').next().unwrap_or(name);
        if id.is_empty() {
            return Err(StoreError::UnexpectedResponse(format!(
                "created document has malformed name: {}",
                name
            )));
        }

        Ok(id.to_string())
    }
}

/// Encode a JSON record into Firestore's typed `fields` map.
fn encode_fields(record: &Value) -> Map<String, Value> {
    match record {
        Value::Object(fields) => fields
            .iter()
            .map(|(key, value)| (key.clone(), encode_value(value)))
            .collect(),
        _ => Map::new(),
    }
}

/// Encode one JSON value as a Firestore typed value. The REST API carries
/// 64-bit integers as decimal strings.
fn encode_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => match n.as_i64() {
            Some(i) => json!({ "integerValue": i.to_string() }),
            None => json!({ "doubleValue": n.as_f64() }),
        },
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => json!({
            "arrayValue": {
                "values": items.iter().map(encode_value).collect::<Vec<_>>()
            }
        }),
        Value::Object(_) => json!({
            "mapValue": { "fields": encode_fields(value) }
        }),
    }
}
