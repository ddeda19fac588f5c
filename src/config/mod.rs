//! Server configuration
//!
//! `ServerConfig` is built once at startup, either from the environment
//! (`ServerConfig::from_env`) or programmatically (`ServerConfig::builder`), and
//! shared read-only afterwards.

// Sub-modules
pub mod builder;
pub mod env;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::ServerConfigBuilder;
pub use types::ServerConfig;
