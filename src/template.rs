//! The distributable config template and the setup instructions.

use std::fs;
use std::io;
use std::path::Path;
use tracing::info;

/// Template written by `fireconf init`. Every value is a placeholder that
/// must be replaced with the web config from the provider console.
pub const TEMPLATE: &str = r#"# Copy this file to `firebase-config.yaml` and fill the values.
# Do NOT check real secrets into source control.
#
# Steps:
# 1. Create a Firebase project at https://console.firebase.google.com/
# 2. Enable Email/Password sign-in method in Authentication > Sign-in method.
# 3. Create a Firestore database (in test mode for prototyping) and a Storage bucket.
# 4. Copy the web config into `firebase-config.yaml` (same folder) and do NOT commit it.
# 5. The app will detect `firebase-config.yaml` when present and you can enable Firebase mode.

api_key: "YOUR_API_KEY"
auth_domain: "YOUR_PROJECT.firebaseapp.com"
project_id: "YOUR_PROJECT_ID"
storage_bucket: "YOUR_PROJECT.appspot.com"
messaging_sender_id: "SENDER_ID"
app_id: "APP_ID"
measurement_id: "MEASUREMENT_ID"
"#;

/// Default file name written by `fireconf init`.
pub const TEMPLATE_FILE_NAME: &str = "firebase-config.example.yaml";

/// Write the template to `path`.
///
/// Refuses to overwrite an existing file unless `force` is set, so a
/// filled-in config is never clobbered.
pub fn write_template(path: impl AsRef<Path>, force: bool) -> io::Result<()> {
    let path = path.as_ref();

    if path.exists() && !force {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            ),
        ));
    }

    fs::write(path, TEMPLATE)?;
    info!(path = %path.display(), "Template written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ProviderConfig, is_placeholder};
    use tempfile::tempdir;

    #[test]
    fn test_template_parses_as_provider_config() {
        let config: ProviderConfig = serde_yaml::from_str(TEMPLATE).unwrap();

        assert_eq!(config.api_key, "YOUR_API_KEY");
        assert_eq!(config.auth_domain, "YOUR_PROJECT.firebaseapp.com");
        assert_eq!(config.project_id, "YOUR_PROJECT_ID");
        assert_eq!(config.storage_bucket, "YOUR_PROJECT.appspot.com");
        assert_eq!(config.messaging_sender_id, "SENDER_ID");
        assert_eq!(config.app_id, "APP_ID");
        assert_eq!(config.measurement_id, "MEASUREMENT_ID");
    }

    #[test]
    fn test_template_values_are_all_placeholders() {
        let config: ProviderConfig = serde_yaml::from_str(TEMPLATE).unwrap();

        assert!(is_placeholder(&config.api_key));
        assert!(is_placeholder(&config.auth_domain));
        assert!(is_placeholder(&config.project_id));
        assert!(is_placeholder(&config.storage_bucket));
        assert!(is_placeholder(&config.messaging_sender_id));
        assert!(is_placeholder(&config.app_id));
        assert!(is_placeholder(&config.measurement_id));

        // An unfilled template must never validate
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_write_template_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(TEMPLATE_FILE_NAME);

        write_template(&path, false).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), TEMPLATE);
    }

    #[test]
    fn test_write_template_refuses_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(TEMPLATE_FILE_NAME);
        std::fs::write(&path, "api_key: real").unwrap();

        let result = write_template(&path, false);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::AlreadyExists);

        // Existing content is untouched
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "api_key: real");
    }

    #[test]
    fn test_write_template_force_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(TEMPLATE_FILE_NAME);
        std::fs::write(&path, "stale").unwrap();

        write_template(&path, true).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), TEMPLATE);
    }
}
