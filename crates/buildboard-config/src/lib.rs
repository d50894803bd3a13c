//! KDL configuration parsing for Buildboard.
//!
//! The server reads one `buildboard.kdl` file at startup; the parsed
//! configuration is immutable for the life of the process.

pub mod error;
pub mod system;

pub use error::{ConfigError, ConfigResult};
pub use system::{ServerConfig, load_server_config, parse_server_config};
