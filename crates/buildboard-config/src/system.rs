//! Server configuration parsing.

use std::net::SocketAddr;
use std::path::PathBuf;

use kdl::{KdlDocument, KdlNode};
use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Server-wide configuration, parsed once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    pub bind: SocketAddr,
    /// Directory the external build runner writes projects into.
    pub projects_dir: PathBuf,
    /// How many of the most recent builds are shown as direct links before
    /// the remainder collapse into the "older builds" list.
    pub build_history_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 3000)),
            projects_dir: PathBuf::from("projects"),
            build_history_limit: 25,
        }
    }
}

/// Load configuration from a file path.
pub fn load_server_config(path: &std::path::Path) -> ConfigResult<ServerConfig> {
    let content = std::fs::read_to_string(path)?;
    parse_server_config(&content)
}

/// Parse server configuration from KDL text.
///
/// ```kdl
/// server {
///     bind "0.0.0.0:3000"
/// }
/// projects-dir "/var/lib/buildboard/projects"
/// build-history-limit 25
/// ```
///
/// Absent nodes fall back to defaults.
pub fn parse_server_config(kdl: &str) -> ConfigResult<ServerConfig> {
    let doc: KdlDocument = kdl.parse()?;
    let mut config = ServerConfig::default();

    for node in doc.nodes() {
        match node.name().value() {
            "server" => {
                if let Some(children) = node.children() {
                    for child in children.nodes() {
                        if child.name().value() == "bind" {
                            config.bind = parse_bind(child)?;
                        }
                    }
                }
            }
            "projects-dir" => {
                let dir = get_first_string_arg(node)
                    .ok_or_else(|| ConfigError::MissingField("projects-dir".to_string()))?;
                config.projects_dir = PathBuf::from(dir);
            }
            "build-history-limit" => {
                config.build_history_limit = parse_history_limit(node)?;
            }
            _ => {} // Ignore unknown nodes
        }
    }

    Ok(config)
}

fn parse_bind(node: &KdlNode) -> ConfigResult<SocketAddr> {
    let addr = get_first_string_arg(node)
        .ok_or_else(|| ConfigError::MissingField("server bind".to_string()))?;
    addr.parse().map_err(|_| ConfigError::InvalidValue {
        field: "server bind".to_string(),
        message: format!("not a socket address: {}", addr),
    })
}

fn parse_history_limit(node: &KdlNode) -> ConfigResult<usize> {
    let value = get_first_int_arg(node)
        .ok_or_else(|| ConfigError::MissingField("build-history-limit".to_string()))?;
    if value < 1 {
        return Err(ConfigError::InvalidValue {
            field: "build-history-limit".to_string(),
            message: format!("must be positive, got {}", value),
        });
    }
    usize::try_from(value).map_err(|_| ConfigError::InvalidValue {
        field: "build-history-limit".to_string(),
        message: format!("too large: {}", value),
    })
}

// Helper functions for extracting values from KDL nodes

fn get_first_string_arg(node: &KdlNode) -> Option<String> {
    node.entries()
        .iter()
        .find(|e| e.name().is_none())
        .and_then(|e| e.value().as_string())
        .map(|s| s.to_string())
}

fn get_first_int_arg(node: &KdlNode) -> Option<i128> {
    node.entries()
        .iter()
        .find(|e| e.name().is_none())
        .and_then(|e| e.value().as_integer())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let kdl = r#"
            server {
                bind "127.0.0.1:8080"
            }
            projects-dir "/var/lib/buildboard/projects"
            build-history-limit 10
        "#;

        let config = parse_server_config(kdl).unwrap();
        assert_eq!(config.bind, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(
            config.projects_dir,
            PathBuf::from("/var/lib/buildboard/projects")
        );
        assert_eq!(config.build_history_limit, 10);
    }

    #[test]
    fn test_absent_nodes_use_defaults() {
        let config = parse_server_config("").unwrap();
        let defaults = ServerConfig::default();
        assert_eq!(config.bind, defaults.bind);
        assert_eq!(config.projects_dir, defaults.projects_dir);
        assert_eq!(config.build_history_limit, 25);
    }

    #[test]
    fn test_reject_non_positive_history_limit() {
        let result = parse_server_config("build-history-limit 0");
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InvalidValue { .. }
        ));

        let result = parse_server_config("build-history-limit -3");
        assert!(result.is_err());
    }

    #[test]
    fn test_reject_bad_bind_address() {
        let kdl = r#"
            server {
                bind "not-an-address"
            }
        "#;
        assert!(matches!(
            parse_server_config(kdl).unwrap_err(),
            ConfigError::InvalidValue { .. }
        ));
    }

    #[test]
    fn test_unknown_nodes_are_ignored() {
        let kdl = r#"
            build-history-limit 5
            some-future-knob "whatever"
        "#;
        let config = parse_server_config(kdl).unwrap();
        assert_eq!(config.build_history_limit, 5);
    }
}
