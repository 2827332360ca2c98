use std::fmt;
use std::path::{Path, PathBuf};

use secrecy::SecretString;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Contents of `~/.tracker/config.toml`.
///
/// ```toml
/// token = "0123456789abcdef"
/// base_url = "https://www.pivotaltracker.com/services/v5"
/// ```
#[derive(Deserialize, Default, Clone)]
pub struct TrackerConfig {
    #[serde(default)]
    token: String,
    pub base_url: Option<String>,
}

impl TrackerConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: None,
        }
    }

    /// The configured token, or `None` when it is empty.
    pub fn token(&self) -> Option<SecretString> {
        let token = self.token.trim();
        (!token.is_empty()).then(|| SecretString::from(token.to_string()))
    }
}

impl fmt::Debug for TrackerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackerConfig")
            .field("token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".tracker")
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Loads the default config file. A missing file is not an error; it yields
/// an empty config.
pub fn load_config() -> Result<TrackerConfig> {
    let path = config_path();
    if !path.exists() {
        return Ok(TrackerConfig::default());
    }
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<TrackerConfig> {
    let contents = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use secrecy::ExposeSecret;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_token_and_base_url() {
        let file = write_config(
            r#"
token = "VadersToken"
base_url = "http://localhost:3000/services/v5"
"#,
        );
        let config = load_config_from(file.path()).unwrap();

        assert_eq!(config.token().unwrap().expose_secret(), "VadersToken");
        assert_eq!(
            config.base_url.as_deref(),
            Some("http://localhost:3000/services/v5")
        );
    }

    #[test]
    fn base_url_is_optional() {
        let file = write_config(r#"token = "VadersToken""#);
        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config.base_url, None);
    }

    #[test]
    fn blank_token_counts_as_missing() {
        let file = write_config(r#"token = "   ""#);
        let config = load_config_from(file.path()).unwrap();
        assert!(config.token().is_none());
        assert!(TrackerConfig::default().token().is_none());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let file = write_config("token = ");
        let err = load_config_from(file.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn debug_redacts_token() {
        let config = TrackerConfig::new("VadersToken");
        let debug = format!("{config:?}");
        assert!(!debug.contains("VadersToken"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn config_path_ends_with_tracker_config() {
        assert!(config_path().ends_with(".tracker/config.toml"));
    }
}
