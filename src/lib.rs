//! Multi-module game server bootstrap library.
//!
//! The core is the module registry and lifecycle orchestrator in
//! [`module`]: subsystems register during a registration phase, then a
//! single orchestrator drives all of them through Init → LoadCfg → Start
//! and, at shutdown, Stop. Everything else here is host plumbing around
//! that core.

// Core
pub mod module;
pub mod modules;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;

pub use config::HostConfig;
pub use lifecycle::Shutdown;
pub use module::{Module, Orchestrator, Registry};
