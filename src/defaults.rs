use crate::validation::is_valid_port;
use log::info;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Values offered when the user leaves a question blank.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub(crate) entrypoint: String,
    pub(crate) port: String,
    pub(crate) network: String,
    pub(crate) common_middlewares: Vec<String>,
    pub(crate) output_file: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            entrypoint: "web".to_string(),
            port: "80".to_string(),
            network: "hasanNet".to_string(),
            common_middlewares: [
                "logger",
                "cloudflarewarp",
                "auth-user",
                "common-ratelimit",
                "strip-all-prefix",
                "error-pages",
                "gzip-compress",
            ]
            .iter()
            .map(|mw| mw.to_string())
            .collect(),
            output_file: "traefik-labels.yml".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum DefaultsError {
    #[error("cannot read defaults file {path}")]
    Io { path: String, source: io::Error },

    #[error("cannot parse defaults file {path}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },

    #[error("default port {0:?} is not a number between 1 and 65535")]
    InvalidPort(String),
}

impl Defaults {
    /// Reads a YAML defaults file. Keys it leaves out keep their built-in value.
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Defaults, DefaultsError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let contents = fs::read_to_string(path).map_err(|source| DefaultsError::Io {
            path: display.clone(),
            source,
        })?;
        let defaults: Defaults =
            serde_yml::from_str(&contents).map_err(|source| DefaultsError::Parse {
                path: display.clone(),
                source,
            })?;

        // A bad default would make the port question unanswerable with Enter
        if !is_valid_port(&defaults.port) {
            return Err(DefaultsError::InvalidPort(defaults.port));
        }

        info!("Defaults loaded from file: {}", display);
        Ok(defaults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn built_in_values() {
        let defaults = Defaults::default();
        assert_eq!(defaults.entrypoint, "web");
        assert_eq!(defaults.port, "80");
        assert_eq!(defaults.network, "hasanNet");
        assert_eq!(defaults.output_file, "traefik-labels.yml");
        assert_eq!(defaults.common_middlewares.len(), 7);
        assert_eq!(defaults.common_middlewares[0], "logger");
    }

    #[test]
    fn partial_file_keeps_other_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("defaults.yml");
        fs::write(&path, "network: proxy\nport: \"8080\"\n").unwrap();

        let defaults = Defaults::read_from_file(&path).unwrap();
        assert_eq!(defaults.network, "proxy");
        assert_eq!(defaults.port, "8080");
        assert_eq!(defaults.entrypoint, "web");
        assert_eq!(defaults.common_middlewares, Defaults::default().common_middlewares);
    }

    #[test]
    fn middleware_list_can_be_replaced() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("defaults.yml");
        fs::write(&path, "common_middlewares:\n  - secure-headers\n  - compress\n").unwrap();

        let defaults = Defaults::read_from_file(&path).unwrap();
        assert_eq!(defaults.common_middlewares, vec!["secure-headers", "compress"]);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("defaults.yml");
        fs::write(&path, "port: \"0\"\n").unwrap();

        match Defaults::read_from_file(&path) {
            Err(DefaultsError::InvalidPort(port)) => assert_eq!(port, "0"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let result = Defaults::read_from_file(dir.path().join("absent.yml"));
        assert!(matches!(result, Err(DefaultsError::Io { .. })));
    }

    #[test]
    fn io_error_message_names_the_file_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.yml");
        let err = Defaults::read_from_file(&path).unwrap_err();

        let message = err.to_string();
        assert_eq!(message, format!("cannot read defaults file {}", path.display()));
        let cause = std::error::Error::source(&err).unwrap().to_string();
        assert!(!message.contains(&cause));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("defaults.yml");
        fs::write(&path, "network: [unterminated\n").unwrap();

        let result = Defaults::read_from_file(&path);
        assert!(matches!(result, Err(DefaultsError::Parse { .. })));
    }
}
