//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → command-line overrides (--rpc-url, --contract)
//!     → validation.rs (semantic checks)
//!     → ClientConfig (validated, immutable for the session)
//! ```
//!
//! The private key is never part of the configuration; it is only ever
//! read from the interactive prompt.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ClientConfig, NetworkConfig, ObservabilityConfig};
