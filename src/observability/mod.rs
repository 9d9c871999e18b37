//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!
//! Consumers:
//!     → console (fmt layer, toggleable)
//!     → any external sink wired through the tracing ecosystem
//! ```
//!
//! # Design Decisions
//! - Structured key/value fields on every lifecycle line (`module = name`)
//! - Level filter comes from config, overridable via RUST_LOG
//! - File sinks and rotation belong to the deployment environment, not
//!   this process

pub mod logging;
