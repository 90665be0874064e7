use serde::{Deserialize, Serialize};
use std::env;

/// Tenant/application identifier used when the runtime does not supply one.
pub const DEFAULT_APP_ID: &str = "default-app-id";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub tenant: TenantConfig,
    pub firebase: FirebaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantConfig {
    /// Partitions all persisted data under `artifacts/{app_id}/...`.
    /// Not validated; see `TenantPaths`.
    pub app_id: String,
}

/// Endpoints and identities for the external Firebase services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirebaseConfig {
    pub project_id: String,
    pub api_key: String,
    /// Identity-toolkit base URL, overridable for emulators and tests.
    pub identity_base_url: String,
    /// Firestore base URL, overridable for emulators and tests.
    pub firestore_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        Self::defaults(environment).with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Server overrides
        if let Some(port) = env::var("FORUM_API_PORT")
            .ok()
            .or_else(|| env::var("PORT").ok())
            .and_then(|s| s.parse::<u16>().ok())
        {
            self.server.port = port;
        }

        // Tenant overrides
        if let Ok(v) = env::var("FORUM_APP_ID") {
            if !v.is_empty() {
                self.tenant.app_id = v;
            }
        }

        // Firebase overrides
        if let Ok(v) = env::var("FIREBASE_PROJECT_ID") {
            self.firebase.project_id = v;
        }
        if let Ok(v) = env::var("FIREBASE_API_KEY") {
            self.firebase.api_key = v;
        }
        if let Ok(v) = env::var("IDENTITY_BASE_URL") {
            self.firebase.identity_base_url = v;
        }
        if let Ok(v) = env::var("FIRESTORE_BASE_URL") {
            self.firebase.firestore_base_url = v;
        }

        self
    }

    fn defaults(environment: Environment) -> Self {
        Self {
            environment,
            server: ServerConfig { port: 3001 },
            tenant: TenantConfig {
                app_id: DEFAULT_APP_ID.to_string(),
            },
            firebase: FirebaseConfig {
                // "demo-" project ids are never routed to production services
                project_id: "demo-forum".to_string(),
                api_key: String::new(),
                identity_base_url: "https://identitytoolkit.googleapis.com".to_string(),
                firestore_base_url: "https://firestore.googleapis.com".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_app_id_sentinel() {
        let config = AppConfig::defaults(Environment::Development);
        assert_eq!(config.tenant.app_id, "default-app-id");
    }

    #[test]
    fn test_default_port_and_endpoints() {
        let config = AppConfig::defaults(Environment::Development);
        assert_eq!(config.server.port, 3001);
        assert_eq!(
            config.firebase.identity_base_url,
            "https://identitytoolkit.googleapis.com"
        );
        assert_eq!(
            config.firebase.firestore_base_url,
            "https://firestore.googleapis.com"
        );
    }
}
