//! Provider config record loading and validation.
//!
//! Uses serde_yaml / serde_json to load the Firebase web config file, with
//! support for environment variable overrides for provider credentials.

mod error;
mod placeholder;

pub use error::ConfigError;
pub use placeholder::is_placeholder;

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::{env, fs};

/// The flat record of provider-issued identifiers a Firebase web client
/// needs to address a project instance.
///
/// All seven fields are opaque strings copied from the provider console;
/// none are computed or transformed here. The record is authored once and
/// read at application start; it is never mutated afterwards.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// Web API key. The only field treated as sensitive in output.
    pub api_key: String,
    /// Auth domain, e.g. "my-project.firebaseapp.com".
    pub auth_domain: String,
    /// Project identifier.
    pub project_id: String,
    /// Cloud Storage bucket, e.g. "my-project.appspot.com".
    pub storage_bucket: String,
    /// Cloud Messaging sender id.
    pub messaging_sender_id: String,
    /// App id.
    pub app_id: String,
    /// Analytics measurement id.
    pub measurement_id: String,
}

impl ProviderConfig {
    /// Load the provider config from a YAML or JSON file at the given path.
    ///
    /// First loads environment variables from `.env` file (if exists),
    /// then parses the file and applies `FIREBASE_*` environment variable
    /// overrides before validating.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        // Load .env file if it exists (ignore error if not found)
        dotenvy::dotenv().ok();

        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let mut config = Self::parse(path, &content)?;

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parse file content by extension.
    fn parse(path: &Path, content: &str) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(content)?),
            Some("json") => Ok(serde_json::from_str(content)?),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or_default().to_string(),
            )),
        }
    }

    /// Override fields from `FIREBASE_*` environment variables.
    ///
    /// A variable only replaces the file value when it is actually set.
    fn apply_env_overrides(&mut self) {
        for (var, field) in [
            ("FIREBASE_API_KEY", &mut self.api_key),
            ("FIREBASE_AUTH_DOMAIN", &mut self.auth_domain),
            ("FIREBASE_PROJECT_ID", &mut self.project_id),
            ("FIREBASE_STORAGE_BUCKET", &mut self.storage_bucket),
            ("FIREBASE_MESSAGING_SENDER_ID", &mut self.messaging_sender_id),
            ("FIREBASE_APP_ID", &mut self.app_id),
            ("FIREBASE_MEASUREMENT_ID", &mut self.measurement_id),
        ] {
            if let Ok(value) = env::var(var) {
                *field = value;
            }
        }
    }

    /// Validate the record.
    ///
    /// Every field must be non-empty and must not still hold a template
    /// placeholder token.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in self.fields() {
            if value.is_empty() {
                return Err(ConfigError::Validation(format!("{} is required", name)));
            }

            if is_placeholder(value) {
                return Err(ConfigError::Validation(format!(
                    "{} still holds the template placeholder {:?}; replace it with the value from the provider console",
                    name, value
                )));
            }
        }

        Ok(())
    }

    /// Field names paired with their values, in template order.
    fn fields(&self) -> [(&'static str, &str); 7] {
        [
            ("api_key", &self.api_key),
            ("auth_domain", &self.auth_domain),
            ("project_id", &self.project_id),
            ("storage_bucket", &self.storage_bucket),
            ("messaging_sender_id", &self.messaging_sender_id),
            ("app_id", &self.app_id),
            ("measurement_id", &self.measurement_id),
        ]
    }

    /// Log-safe rendering of the record.
    ///
    /// The API key is masked down to its first four characters; the
    /// remaining fields are public project identifiers and shown in full.
    pub fn redacted(&self) -> String {
        let masked: String = self.api_key.chars().take(4).collect();

        self.fields()
            .iter()
            .map(|(name, value)| {
                if *name == "api_key" {
                    format!("{}: {}***", name, masked)
                } else {
                    format!("{}: {}", name, value)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
