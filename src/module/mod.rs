//! Module registry and lifecycle orchestration subsystem.
//!
//! # Data Flow
//! ```text
//! Registration phase (single thread, before orchestration):
//!     each module → Registry::register → ordered record list
//!
//! Orchestration phase (control thread):
//!     Orchestrator::build(registry) → records + name→record map
//!     init_all()  → Init pass, then LoadCfg pass (never interleaved)
//!     start_all() → Start for enabled modules, order weight ascending
//!     ... host blocks on termination signal ...
//!     stop_all()  → Stop for every mapped module, reverse startup order
//! ```
//!
//! # Design Decisions
//! - Explicit registry object instead of global state: two-phase startup
//!   replaces load-order side effects
//! - Best-effort fan-out: a failing module never blocks its siblings;
//!   failures are aggregated into a [`PhaseReport`] the host can inspect
//! - Per-module state is monotone: Registered → Initialized → ConfigLoaded
//!   → Started → Stopped; Stopped is terminal

pub mod orchestrator;
pub mod registry;
pub mod report;

pub use orchestrator::Orchestrator;
pub use registry::{ModuleOptions, Registry};
pub use report::{LifecycleError, Phase, PhaseReport};

/// Boxed error returned by module lifecycle hooks.
///
/// Opaque to the orchestrator, which logs it and moves on without
/// interpreting the cause.
pub type ModuleError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Capability contract every orchestrated module implements.
///
/// Modules are registered once during the registration phase and live for
/// the rest of the process. All hooks run sequentially on the control
/// thread; a module that wants background work spawns it itself.
pub trait Module: Send {
    /// Unique, stable identifier used for lookup and log correlation.
    fn name(&self) -> &str;

    /// Construct internal structures.
    ///
    /// Runs for every registered module before any module's `load_cfg`, so
    /// config loading may reference sibling modules' bare internals.
    fn init(&mut self) -> Result<(), ModuleError>;

    /// Begin active work. Only invoked once the module is initialized and
    /// configured, and never again after `stop`.
    fn start(&mut self) -> Result<(), ModuleError>;

    /// Release resources. Must be safe to call even if `start` never ran.
    fn stop(&mut self) -> Result<(), ModuleError>;

    /// Load module configuration. `is_reload` is false during startup.
    fn load_cfg(&mut self, is_reload: bool) -> Result<(), ModuleError>;
}

/// Lifecycle state of a registered module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ModuleState {
    /// Registered but untouched by the orchestrator.
    Registered,
    /// `init` completed.
    Initialized,
    /// `load_cfg` completed after a successful `init`.
    ConfigLoaded,
    /// `start` completed.
    Started,
    /// `stop` was invoked; terminal from any prior state.
    Stopped,
}
