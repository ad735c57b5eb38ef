//! Configuration loading.
//!
//! Settings come from an optional `config.toml`, then environment overrides
//! are applied, then the result is validated and normalized.

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::ScraperConfig;

use std::path::Path;
use tracing::{debug, info};
use url::Url;

/// Environment variable overriding [`ScraperConfig::host`].
pub const HOST_ENV: &str = "REPO_SCOUT_HOST";

/// Environment variable overriding [`ScraperConfig::user_agent`].
pub const USER_AGENT_ENV: &str = "REPO_SCOUT_USER_AGENT";

impl ScraperConfig {
    /// Loads settings from a TOML file.
    ///
    /// Keys not present in the file keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing, unreadable, invalid
    /// TOML, or holds invalid values.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        info!(path = %path.display(), "Loading config");

        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let config: ScraperConfig =
            toml::from_str(&content).map_err(|e| ConfigError::TomlError {
                path: path.display().to_string(),
                source: e,
            })?;

        config.validated()
    }

    /// Applies `REPO_SCOUT_*` environment overrides, then validates.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if an override is invalid.
    pub fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(host) = std::env::var(HOST_ENV) {
            debug!(host = %host, "Host overridden from environment");
            self.host = host;
        }
        if let Ok(user_agent) = std::env::var(USER_AGENT_ENV) {
            debug!(user_agent = %user_agent, "User agent overridden from environment");
            self.user_agent = user_agent;
        }
        self.validated()
    }

    /// Validates settings and normalizes the host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] on the first invalid setting.
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        self.host = validate_host(&self.host)?;

        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                key: "user-agent".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        Ok(self)
    }
}

/// Checks that `host` is an absolute http(s) URL and strips trailing `/`.
fn validate_host(host: &str) -> Result<String, ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        key: "host".to_string(),
        message,
    };

    let url = Url::parse(host).map_err(|e| invalid(format!("'{host}' is not a valid URL: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("'{host}' must use http or https")));
    }
    if url.host_str().is_none() {
        return Err(invalid(format!("'{host}' has no host")));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid(format!("'{host}' must not have a query or fragment")));
    }

    Ok(host.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn defaults_are_valid() {
        let config = ScraperConfig::default().validated().unwrap();
        assert_eq!(config.host, "https://github.com");
        assert!(config.user_agent.starts_with("repo-scout/"));
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn can_load_config() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            &temp,
            r#"
host = "https://git.example.com/"
user-agent = "scout-test"
output-dir = "exports"
"#,
        );

        let config = ScraperConfig::load(&path).unwrap();

        assert_eq!(config.host, "https://git.example.com");
        assert_eq!(config.user_agent, "scout-test");
        assert_eq!(config.output_dir, PathBuf::from("exports"));
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, r#"output-dir = "out""#);

        let config = ScraperConfig::load(&path).unwrap();

        assert_eq!(config.host, "https://github.com");
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = ScraperConfig::load(&temp.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::MissingFile { .. })));
    }

    #[test]
    fn load_rejects_bad_toml() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "host = ");
        let result = ScraperConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::TomlError { .. })));
    }

    #[test]
    fn load_rejects_unknown_keys() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, r#"max-pages = 3"#);
        let result = ScraperConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::TomlError { .. })));
    }

    #[test]
    fn rejects_invalid_hosts() {
        for host in ["github.com", "ftp://github.com", "https://github.com/?q=1"] {
            let config = ScraperConfig {
                host: host.to_string(),
                ..ScraperConfig::default()
            };
            let error = config.validated().unwrap_err();
            assert!(
                matches!(error, ConfigError::ValidationError { ref key, .. } if key == "host"),
                "{host} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_empty_user_agent() {
        let config = ScraperConfig {
            user_agent: "  ".to_string(),
            ..ScraperConfig::default()
        };
        assert!(matches!(
            config.validated(),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn env_overrides_apply() {
        temp_env::with_vars(
            [
                (HOST_ENV, Some("http://localhost:8080/")),
                (USER_AGENT_ENV, Some("from-env")),
            ],
            || {
                let config = ScraperConfig::default().with_env_overrides().unwrap();
                assert_eq!(config.host, "http://localhost:8080");
                assert_eq!(config.user_agent, "from-env");
            },
        );
    }

    #[test]
    fn invalid_env_override_is_rejected() {
        temp_env::with_var(HOST_ENV, Some("not a url"), || {
            let result = ScraperConfig::default().with_env_overrides();
            assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
        });
    }
}
