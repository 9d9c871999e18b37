//! Host configuration subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → HostConfig (immutable once loaded)
//!     → CLI flags override individual fields
//!     → logging init + host startup read it
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so the host runs with no config file at all
//! - Flags win over file values; the file wins over built-in defaults
//! - Module-specific configuration stays with the modules (`load_cfg`),
//!   not in the host config

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::{HostConfig, LogConfig};
