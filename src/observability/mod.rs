//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields
//!     → logging.rs (EnvFilter + fmt layer on stderr)
//! ```
//!
//! Stdout belongs to the interactive prompts and command output, so log
//! lines always go to stderr.

pub mod logging;

pub use logging::init_logging;
