//! Credential and environment resolution for the Firestore backend.
//!
//! All environment variables the process reads are handled here, so the rest
//! of the codebase takes resolved values as explicit inputs.

use std::env;
use std::path::{Path, PathBuf};

use log::info;

use crate::errors::StoreError;

/// Environment variable overriding the service account key location.
pub const SERVICE_ACCOUNT_KEY_PATH_VAR: &str = "SERVICE_ACCOUNT_KEY_PATH";

/// Environment variable naming a storage bucket. Read and logged only;
/// reserved for future tools.
pub const STORAGE_BUCKET_VAR: &str = "FIREBASE_STORAGE_BUCKET";

/// Conventional key filename looked up next to the running binary when no
/// override is given.
pub const DEFAULT_KEY_FILENAME: &str = "serviceAccountKey.json";

/// Resolve the service account key path from an optional explicit override,
/// the environment, and the conventional file beside the executable.
pub fn resolve_key_path(override_path: Option<PathBuf>) -> Result<PathBuf, StoreError> {
    let override_path =
        override_path.or_else(|| env::var_os(SERVICE_ACCOUNT_KEY_PATH_VAR).map(PathBuf::from));
    let exe_dir = env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf));
    resolve_key_path_in(override_path, exe_dir.as_deref())
}

/// Pure resolution: an explicit override wins unconditionally (a missing
/// override file is an error, not a reason to fall back); otherwise the
/// conventional filename in `exe_dir` is used if it exists.
pub fn resolve_key_path_in(
    override_path: Option<PathBuf>,
    exe_dir: Option<&Path>,
) -> Result<PathBuf, StoreError> {
    if let Some(path) = override_path {
        info!(
            "Using service account key from {}: {}",
            SERVICE_ACCOUNT_KEY_PATH_VAR,
            path.display()
        );
        if path.is_file() {
            return Ok(path);
        }
        return Err(StoreError::Credentials(format!(
            "service account key file not found at: {}",
            path.display()
        )));
    }

    let Some(dir) = exe_dir else {
        return Err(StoreError::Credentials(
            "cannot determine the executable directory for the default key location".to_string(),
        ));
    };
    let fallback = dir.join(DEFAULT_KEY_FILENAME);
    info!(
        "{} not set, falling back to local file: {}",
        SERVICE_ACCOUNT_KEY_PATH_VAR,
        fallback.display()
    );
    if fallback.is_file() {
        Ok(fallback)
    } else {
        Err(StoreError::Credentials(format!(
            "service account key file not found at: {}",
            fallback.display()
        )))
    }
}

/// Read and log the optional storage bucket name. No current tool uses it.
pub fn storage_bucket() -> Option<String> {
    match env::var(STORAGE_BUCKET_VAR) {
        Ok(bucket) if !bucket.is_empty() => {
            info!("{} from environment: {}", STORAGE_BUCKET_VAR, bucket);
            Some(bucket)
        }
        _ => {
            info!("{} environment variable not set", STORAGE_BUCKET_VAR);
            None
        }
    }
}

/// Read the GCP project id out of a service account key file.
pub fn project_id_from_key_file(path: &Path) -> Result<String, StoreError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        StoreError::Credentials(format!("cannot read key file {}: {}", path.display(), e))
    })?;
    let key: serde_json::Value = serde_json::from_str(&raw).map_err(|e| {
        StoreError::Credentials(format!("malformed key file {}: {}", path.display(), e))
    })?;
    key.get("project_id")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| {
            StoreError::Credentials(format!(
                "key file {} has no project_id field",
                path.display()
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_override_wins_when_file_exists() {
        let dir = TempDir::new().unwrap();
        let key = dir.path().join("key.json");
        fs::write(&key, "{}").unwrap();

        let resolved = resolve_key_path_in(Some(key.clone()), None).unwrap();
        assert_eq!(resolved, key);
    }

    #[test]
    fn test_missing_override_does_not_fall_back() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(DEFAULT_KEY_FILENAME), "{}").unwrap();

        // Default file exists, but the override was explicit: fail.
        let missing = dir.path().join("nope.json");
        let result = resolve_key_path_in(Some(missing), Some(dir.path()));
        assert!(result.is_err());
    }

    #[test]
    fn test_falls_back_to_conventional_file() {
        let dir = TempDir::new().unwrap();
        let default = dir.path().join(DEFAULT_KEY_FILENAME);
        fs::write(&default, "{}").unwrap();

        let resolved = resolve_key_path_in(None, Some(dir.path())).unwrap();
        assert_eq!(resolved, default);
    }

    #[test]
    fn test_fails_when_nothing_exists() {
        let dir = TempDir::new().unwrap();
        let result = resolve_key_path_in(None, Some(dir.path()));
        assert!(result.is_err());
    }

    #[test]
    fn test_project_id_read_from_key_file() {
        let dir = TempDir::new().unwrap();
        let key = dir.path().join("key.json");
        fs::write(&key, r#"{"type": "service_account", "project_id": "demo-project"}"#).unwrap();

        assert_eq!(project_id_from_key_file(&key).unwrap(), "demo-project");
    }

    #[test]
    fn test_malformed_key_file_is_a_credentials_error() {
        let dir = TempDir::new().unwrap();
        let key = dir.path().join("key.json");
        fs::write(&key, "not json at all").unwrap();

        let err = project_id_from_key_file(&key).unwrap_err();
        assert!(matches!(err, StoreError::Credentials(_)));
    }
}
