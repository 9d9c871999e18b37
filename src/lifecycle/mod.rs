//! Process lifecycle plumbing.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     broadcast channel; the host blocks on it, then runs stop_all
//!     exactly once before exiting
//! ```
//!
//! # Design Decisions
//! - Cancellation is binary: not requested, or shutdown initiated
//! - No deadline on module stop calls; a hung module blocks shutdown
//! - Module-level orchestration lives in `crate::module`, not here

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
