use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{CatalogError, Result};

/// Local Functions host the catalog API is served from by default
pub const DEFAULT_API_BASE: &str = "http://localhost:7071/api";

pub const API_BASE_ENV_VAR: &str = "CINETECA_API_BASE";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

/// On-disk shape of `config.json`; every field is optional
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigFile {
    pub api_base: Option<String>,
}

pub fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cineteca")
}

pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.json")
}

/// Load a config file, treating a missing file as empty
pub fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(ConfigFile::default()),
        Err(e) => return Err(CatalogError::Io(e)),
    };

    serde_json::from_str(&content).map_err(|e| CatalogError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

impl ClientConfig {
    /// Resolve the configuration: flag > env > file > default
    pub fn resolve(flag: Option<&str>, config_path: &Path) -> Result<Self> {
        let env = std::env::var(API_BASE_ENV_VAR).ok();
        let file = load_config_file(config_path)?;
        Self::from_sources(flag, env.as_deref(), file)
    }

    pub fn from_sources(flag: Option<&str>, env: Option<&str>, file: ConfigFile) -> Result<Self> {
        let api_base = flag
            .map(str::to_string)
            .or_else(|| env.map(str::to_string))
            .or(file.api_base)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Self::with_api_base(&api_base)
    }

    pub fn with_api_base(api_base: &str) -> Result<Self> {
        let trimmed = api_base.trim().trim_end_matches('/');
        let url = reqwest::Url::parse(trimmed).map_err(|e| CatalogError::InvalidBaseUrl {
            url: api_base.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(CatalogError::InvalidBaseUrl {
                url: api_base.to_string(),
                reason: format!("unsupported scheme {}", url.scheme()),
            });
        }

        Ok(Self {
            api_base: trimmed.to_string(),
        })
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_functions_host() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint("movies"), "http://localhost:7071/api/movies");
    }

    #[test]
    fn flag_wins_over_env_and_file() {
        let file = ConfigFile {
            api_base: Some("http://file.example/api".to_string()),
        };
        let config = ClientConfig::from_sources(
            Some("http://flag.example/api/"),
            Some("http://env.example/api"),
            file,
        )
        .unwrap();
        assert_eq!(config.api_base, "http://flag.example/api");
    }

    #[test]
    fn env_wins_over_file() {
        let file = ConfigFile {
            api_base: Some("http://file.example/api".to_string()),
        };
        let config =
            ClientConfig::from_sources(None, Some("http://env.example/api"), file).unwrap();
        assert_eq!(config.api_base, "http://env.example/api");
    }

    #[test]
    fn file_wins_over_default() {
        let file = ConfigFile {
            api_base: Some("https://catalog.example/api".to_string()),
        };
        let config = ClientConfig::from_sources(None, None, file).unwrap();
        assert_eq!(config.api_base, "https://catalog.example/api");
    }

    #[test]
    fn rejects_non_http_base() {
        let err = ClientConfig::with_api_base("ftp://catalog.example").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidBaseUrl { .. }));
        assert!(ClientConfig::with_api_base("not a url").is_err());
    }

    #[test]
    fn missing_config_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let file = load_config_file(&dir.path().join("config.json")).unwrap();
        assert!(file.api_base.is_none());
    }

    #[test]
    fn reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "apiBase": "http://10.0.0.5:7071/api" }"#).unwrap();

        let file = load_config_file(&path).unwrap();
        assert_eq!(file.api_base.as_deref(), Some("http://10.0.0.5:7071/api"));
    }

    #[test]
    fn malformed_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "apiBase": 7 }"#).unwrap();

        let err = load_config_file(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Config { .. }));
    }
}
