//! Startup configuration for the vote counter.
//!
//! The configuration is a small JSON document loaded once at process start
//! and never mutated afterwards. A malformed or missing file is a fatal
//! startup error.
//!
//! ```json
//! {
//!     "max_votes": 2,
//!     "people": ["Jane Doe", "Bob O'Brien"]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Immutable process-wide configuration.
///
/// `max_votes` and `people` come from the operator; the remaining fields
/// have sensible defaults and only need to appear in the file when the
/// deployment differs from a local single-machine setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Maximum number of candidates a single submission may select.
    pub max_votes: usize,
    /// Display names of the candidates, in ballot order.
    pub people: Vec<String>,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory the per-candidate `.votes` files live in.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Config {
    /// Loads and validates the configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the structural invariants the rest of the system relies on.
    ///
    /// Identifier uniqueness is checked later, when the candidate roster
    /// is built from `people`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_votes == 0 {
            return Err(ConfigError::ZeroMaxVotes);
        }
        if self.people.is_empty() {
            return Err(ConfigError::NoPeople);
        }
        Ok(())
    }

    /// Socket address the HTTP server binds to.
    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost {
                host: self.host.clone(),
                source,
            })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Config {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_minimal_config_gets_defaults() {
        let config = parse(r#"{"max_votes": 2, "people": ["Jane Doe"]}"#);
        assert_eq!(config.max_votes, 2);
        assert_eq!(config.people, vec!["Jane Doe"]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.data_dir, PathBuf::from("."));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_max_votes_rejected() {
        let config = parse(r#"{"max_votes": 0, "people": ["Jane Doe"]}"#);
        assert!(matches!(config.validate(), Err(ConfigError::ZeroMaxVotes)));
    }

    #[test]
    fn test_empty_people_rejected() {
        let config = parse(r#"{"max_votes": 1, "people": []}"#);
        assert!(matches!(config.validate(), Err(ConfigError::NoPeople)));
    }

    #[test]
    fn test_listen_addr() {
        let mut config = parse(r#"{"max_votes": 1, "people": ["A"], "port": 8080}"#);
        let addr = config.listen_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:8080");

        config.host = "not an ip".to_string();
        assert!(matches!(
            config.listen_addr(),
            Err(ConfigError::InvalidHost { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "maxvotes = 2").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"max_votes": 3, "people": ["Jane Doe", "Bob O'Brien"], "data_dir": "/tmp/votes"}"#,
        )
        .unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.max_votes, 3);
        assert_eq!(config.people.len(), 2);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/votes"));
    }
}
