//! Append-only module registry populated during the registration phase.
//!
//! # Responsibilities
//! - Collect module handles before orchestration begins
//! - Preserve registration order (it drives the Init/LoadCfg passes)
//! - Stay I/O-free so modules can register before logging is up
//!
//! # Design Decisions
//! - No duplicate-name validation here; the orchestrator resolves names
//!   when it builds its map (last registration wins)
//! - The registry is consumed by `Orchestrator::build`; there is no
//!   re-registration after orchestration begins

use super::{Module, ModuleState};

/// Registration options beyond the defaults.
#[derive(Debug, Clone, Copy)]
pub struct ModuleOptions {
    /// Disabled modules still receive `init`/`load_cfg`/`stop` but are
    /// skipped at `start`.
    pub enabled: bool,

    /// Startup order weight; lower starts first, ties break in
    /// registration order.
    pub order: i32,
}

impl Default for ModuleOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            order: 0,
        }
    }
}

/// One registry entry per registration call.
pub(crate) struct ModuleRecord {
    pub(crate) module: Box<dyn Module>,
    pub(crate) state: ModuleState,
    pub(crate) enabled: bool,
    pub(crate) order: i32,
}

/// Ordered collection of registered modules awaiting orchestration.
///
/// Insertion order is registration order. Callers are responsible for
/// registering each module exactly once.
#[derive(Default)]
pub struct Registry {
    records: Vec<ModuleRecord>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a module with defaults: enabled, order weight 0.
    pub fn register(&mut self, module: Box<dyn Module>) {
        self.register_with(module, ModuleOptions::default());
    }

    /// Append a module with an explicit enabled flag and order weight.
    pub fn register_with(&mut self, module: Box<dyn Module>, opts: ModuleOptions) {
        self.records.push(ModuleRecord {
            module,
            state: ModuleState::Registered,
            enabled: opts.enabled,
            order: opts.order,
        });
    }

    /// Number of registration calls, shadowed duplicates included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if nothing has registered.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn into_records(self) -> Vec<ModuleRecord> {
        self.records
    }
}
