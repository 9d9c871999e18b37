//! Lifecycle orchestrator over a registry snapshot.
//!
//! # Responsibilities
//! - Resolve the flat registry into a name-addressable set
//! - Advance every module through Init → LoadCfg → Start → Stop
//! - Aggregate per-module failures without halting the phase
//!
//! # State Transitions
//! ```text
//! Registered → Initialized → ConfigLoaded → Started → Stopped
//!            (any state) ──────────────────────────→ Stopped at shutdown
//! ```
//!
//! # Design Decisions
//! - Two-pass init: every module's `init` completes before any `load_cfg`
//! - Start honors the order weight (ascending, registration-order ties);
//!   stop runs in reverse startup order
//! - A module that never reached ConfigLoaded is skipped at start, never
//!   silently started half-built

use std::collections::HashMap;

use tracing::{error, info, warn};

use super::registry::{ModuleRecord, Registry};
use super::report::{LifecycleError, Phase, PhaseReport};
use super::ModuleState;

/// Drives all registered modules through their lifecycle phases.
///
/// Built once from the registry snapshot; sole owner of the records from
/// that point on. A name maps to exactly one record (last registration
/// wins), while the registration-order passes still visit shadowed records.
pub struct Orchestrator {
    /// Every registration instance, in registration order.
    records: Vec<ModuleRecord>,

    /// Name → index into `records`; duplicates resolved last-wins.
    by_name: HashMap<String, usize>,

    /// Mapped record indices sorted by (order weight, registration index).
    start_order: Vec<usize>,
}

impl Orchestrator {
    /// Snapshot the registry into an orchestrator.
    ///
    /// Logs one "registered module" line per record; invokes no module code.
    pub fn build(registry: Registry) -> Self {
        let records = registry.into_records();

        let mut by_name: HashMap<String, usize> = HashMap::new();
        for (idx, record) in records.iter().enumerate() {
            let name = record.module.name().to_string();
            info!(module = %name, "registered module");

            if let Some(previous) = by_name.insert(name, idx) {
                warn!(
                    module = records[previous].module.name(),
                    "duplicate module name, earlier registration shadowed"
                );
            }
        }

        let mut start_order: Vec<usize> = by_name.values().copied().collect();
        start_order.sort_by_key(|&idx| (records[idx].order, idx));

        Self {
            records,
            by_name,
            start_order,
        }
    }

    /// Number of addressable modules (shadowed duplicates excluded).
    pub fn module_count(&self) -> usize {
        self.by_name.len()
    }

    /// Initialize every module, then load every module's configuration.
    ///
    /// Two full passes over the registration sequence, never interleaved:
    /// a module's `load_cfg` may assume every sibling's `init` already ran.
    /// Failures are collected and logged; the passes never stop early.
    pub fn init_all(&mut self) -> PhaseReport {
        let mut report = PhaseReport::default();

        for record in &mut self.records {
            match record.module.init() {
                Ok(()) => {
                    record.state = ModuleState::Initialized;
                    info!(module = record.module.name(), "module initialized");
                }
                Err(source) => {
                    error!(
                        module = record.module.name(),
                        error = %source,
                        "module init failed"
                    );
                    report.record(LifecycleError {
                        module: record.module.name().to_string(),
                        phase: Phase::Init,
                        source,
                    });
                }
            }
        }

        for record in &mut self.records {
            match record.module.load_cfg(false) {
                Ok(()) => {
                    // Only a successfully initialized module advances; a
                    // failed init leaves it unstartable.
                    if record.state == ModuleState::Initialized {
                        record.state = ModuleState::ConfigLoaded;
                    }
                    info!(module = record.module.name(), "module config loaded");
                }
                Err(source) => {
                    error!(
                        module = record.module.name(),
                        error = %source,
                        "module config load failed"
                    );
                    report.record(LifecycleError {
                        module: record.module.name().to_string(),
                        phase: Phase::LoadCfg,
                        source,
                    });
                }
            }
        }

        report
    }

    /// Start every enabled, ready module in order-weight order.
    ///
    /// Disabled modules and modules that never reached ConfigLoaded are
    /// skipped. Failures are collected; the loop continues to the next
    /// module.
    pub fn start_all(&mut self) -> PhaseReport {
        let mut report = PhaseReport::default();

        let records = &mut self.records;
        for &idx in &self.start_order {
            let record = &mut records[idx];

            if !record.enabled {
                info!(module = record.module.name(), "module disabled, start skipped");
                continue;
            }
            if record.state != ModuleState::ConfigLoaded {
                warn!(
                    module = record.module.name(),
                    state = ?record.state,
                    "module not ready, start skipped"
                );
                continue;
            }

            match record.module.start() {
                Ok(()) => {
                    record.state = ModuleState::Started;
                    info!(module = record.module.name(), "module started");
                }
                Err(source) => {
                    error!(
                        module = record.module.name(),
                        error = %source,
                        "module start failed"
                    );
                    report.record(LifecycleError {
                        module: record.module.name().to_string(),
                        phase: Phase::Start,
                        source,
                    });
                }
            }
        }

        report
    }

    /// Stop every mapped module in reverse startup order.
    ///
    /// Runs unconditionally: disabled modules and modules that never
    /// started are stopped too (module authors must make `stop` safe in
    /// that case). A stopped module is terminal and cannot start again.
    pub fn stop_all(&mut self) -> PhaseReport {
        let mut report = PhaseReport::default();

        let records = &mut self.records;
        for &idx in self.start_order.iter().rev() {
            let record = &mut records[idx];

            if record.state == ModuleState::Stopped {
                continue;
            }

            match record.module.stop() {
                Ok(()) => {
                    info!(module = record.module.name(), "module stopped");
                }
                Err(source) => {
                    error!(
                        module = record.module.name(),
                        error = %source,
                        "module stop failed"
                    );
                    report.record(LifecycleError {
                        module: record.module.name().to_string(),
                        phase: Phase::Stop,
                        source,
                    });
                }
            }

            record.state = ModuleState::Stopped;
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::module::{Module, ModuleError, ModuleOptions};

    type EventLog = Arc<Mutex<Vec<String>>>;

    /// Test module that records every hook invocation into a shared log.
    struct Probe {
        name: &'static str,
        events: EventLog,
        fail_init: bool,
        fail_start: bool,
    }

    impl Probe {
        fn new(name: &'static str, events: &EventLog) -> Self {
            Self {
                name,
                events: events.clone(),
                fail_init: false,
                fail_start: false,
            }
        }

        fn push(&self, hook: &str) {
            self.events
                .lock()
                .unwrap()
                .push(format!("{}:{}", self.name, hook));
        }
    }

    impl Module for Probe {
        fn name(&self) -> &str {
            self.name
        }

        fn init(&mut self) -> Result<(), ModuleError> {
            self.push("init");
            if self.fail_init {
                return Err("init failure".into());
            }
            Ok(())
        }

        fn start(&mut self) -> Result<(), ModuleError> {
            self.push("start");
            if self.fail_start {
                return Err("start failure".into());
            }
            Ok(())
        }

        fn stop(&mut self) -> Result<(), ModuleError> {
            self.push("stop");
            Ok(())
        }

        fn load_cfg(&mut self, _is_reload: bool) -> Result<(), ModuleError> {
            self.push("load_cfg");
            Ok(())
        }
    }

    fn events(log: &EventLog) -> Vec<String> {
        log.lock().unwrap().clone()
    }

    #[test]
    fn test_init_is_two_full_passes() {
        let log = EventLog::default();
        let mut registry = Registry::new();
        registry.register(Box::new(Probe::new("a", &log)));
        registry.register(Box::new(Probe::new("b", &log)));
        registry.register(Box::new(Probe::new("c", &log)));

        let mut orchestrator = Orchestrator::build(registry);
        let report = orchestrator.init_all();

        assert!(report.is_ok());
        assert_eq!(
            events(&log),
            vec![
                "a:init",
                "b:init",
                "c:init",
                "a:load_cfg",
                "b:load_cfg",
                "c:load_cfg"
            ]
        );
    }

    #[test]
    fn test_disabled_module_skips_start_but_stops() {
        let log = EventLog::default();
        let mut registry = Registry::new();
        registry.register(Box::new(Probe::new("a", &log)));
        registry.register_with(
            Box::new(Probe::new("b", &log)),
            ModuleOptions {
                enabled: false,
                order: 0,
            },
        );

        let mut orchestrator = Orchestrator::build(registry);
        assert!(orchestrator.init_all().is_ok());
        assert!(orchestrator.start_all().is_ok());
        assert!(orchestrator.stop_all().is_ok());

        let seen = events(&log);
        assert!(seen.contains(&"a:start".to_string()));
        assert!(!seen.contains(&"b:start".to_string()));
        assert!(seen.contains(&"b:stop".to_string()));
    }

    #[test]
    fn test_init_failure_does_not_block_siblings() {
        let log = EventLog::default();
        let mut registry = Registry::new();
        let mut broken = Probe::new("a", &log);
        broken.fail_init = true;
        registry.register(Box::new(broken));
        registry.register(Box::new(Probe::new("b", &log)));

        let mut orchestrator = Orchestrator::build(registry);
        let report = orchestrator.init_all();

        assert_eq!(report.failures().len(), 1);
        assert_eq!(report.failures()[0].module, "a");
        assert_eq!(report.failures()[0].phase, Phase::Init);

        let seen = events(&log);
        assert!(seen.contains(&"b:init".to_string()));
        assert!(seen.contains(&"b:load_cfg".to_string()));
        // The reference behavior still offers load_cfg to the failed module.
        assert!(seen.contains(&"a:load_cfg".to_string()));
    }

    #[test]
    fn test_failed_init_module_never_starts() {
        let log = EventLog::default();
        let mut registry = Registry::new();
        let mut broken = Probe::new("a", &log);
        broken.fail_init = true;
        registry.register(Box::new(broken));

        let mut orchestrator = Orchestrator::build(registry);
        orchestrator.init_all();
        let report = orchestrator.start_all();

        // Skipped, not failed: never started half-built.
        assert!(report.is_ok());
        assert!(!events(&log).contains(&"a:start".to_string()));
    }

    #[test]
    fn test_start_failure_does_not_block_siblings() {
        let log = EventLog::default();
        let mut registry = Registry::new();
        let mut broken = Probe::new("a", &log);
        broken.fail_start = true;
        registry.register(Box::new(broken));
        registry.register(Box::new(Probe::new("b", &log)));

        let mut orchestrator = Orchestrator::build(registry);
        orchestrator.init_all();
        let report = orchestrator.start_all();

        assert_eq!(report.failures().len(), 1);
        assert_eq!(report.failures()[0].module, "a");
        assert_eq!(report.failures()[0].phase, Phase::Start);
        assert!(events(&log).contains(&"b:start".to_string()));
    }

    #[test]
    fn test_start_honors_order_weight() {
        let log = EventLog::default();
        let mut registry = Registry::new();
        registry.register_with(
            Box::new(Probe::new("late", &log)),
            ModuleOptions {
                enabled: true,
                order: 10,
            },
        );
        registry.register_with(
            Box::new(Probe::new("early", &log)),
            ModuleOptions {
                enabled: true,
                order: 1,
            },
        );

        let mut orchestrator = Orchestrator::build(registry);
        orchestrator.init_all();
        orchestrator.start_all();

        let starts: Vec<String> = events(&log)
            .into_iter()
            .filter(|e| e.ends_with(":start"))
            .collect();
        assert_eq!(starts, vec!["early:start", "late:start"]);
    }

    #[test]
    fn test_equal_weights_tie_break_in_registration_order() {
        let log = EventLog::default();
        let mut registry = Registry::new();
        registry.register(Box::new(Probe::new("first", &log)));
        registry.register(Box::new(Probe::new("second", &log)));

        let mut orchestrator = Orchestrator::build(registry);
        orchestrator.init_all();
        orchestrator.start_all();

        let starts: Vec<String> = events(&log)
            .into_iter()
            .filter(|e| e.ends_with(":start"))
            .collect();
        assert_eq!(starts, vec!["first:start", "second:start"]);
    }

    #[test]
    fn test_stop_runs_in_reverse_startup_order() {
        let log = EventLog::default();
        let mut registry = Registry::new();
        registry.register(Box::new(Probe::new("a", &log)));
        registry.register(Box::new(Probe::new("b", &log)));

        let mut orchestrator = Orchestrator::build(registry);
        orchestrator.init_all();
        orchestrator.start_all();
        orchestrator.stop_all();

        let stops: Vec<String> = events(&log)
            .into_iter()
            .filter(|e| e.ends_with(":stop"))
            .collect();
        assert_eq!(stops, vec!["b:stop", "a:stop"]);
    }

    #[test]
    fn test_stop_is_safe_for_never_started_module() {
        let log = EventLog::default();
        let mut registry = Registry::new();
        registry.register(Box::new(Probe::new("a", &log)));

        let mut orchestrator = Orchestrator::build(registry);
        // No init, no start; shutdown still stops everything.
        let report = orchestrator.stop_all();

        assert!(report.is_ok());
        assert_eq!(events(&log), vec!["a:stop"]);
    }

    #[test]
    fn test_stopped_module_cannot_start_again() {
        let log = EventLog::default();
        let mut registry = Registry::new();
        registry.register(Box::new(Probe::new("a", &log)));

        let mut orchestrator = Orchestrator::build(registry);
        orchestrator.init_all();
        orchestrator.start_all();
        orchestrator.stop_all();
        orchestrator.start_all();

        let starts = events(&log)
            .iter()
            .filter(|e| e.as_str() == "a:start")
            .count();
        assert_eq!(starts, 1);
    }

    #[test]
    fn test_duplicate_name_last_registration_wins() {
        let log = EventLog::default();
        let mut registry = Registry::new();
        registry.register(Box::new(Probe::new("dup", &log)));
        registry.register(Box::new(Probe::new("dup", &log)));

        let mut orchestrator = Orchestrator::build(registry);
        assert_eq!(orchestrator.module_count(), 1);

        orchestrator.init_all();
        orchestrator.start_all();

        let seen = events(&log);
        // Registration-order passes still visit both instances.
        let inits = seen.iter().filter(|e| e.as_str() == "dup:init").count();
        assert_eq!(inits, 2);
        // Only the mapped (last) instance starts.
        let starts = seen.iter().filter(|e| e.as_str() == "dup:start").count();
        assert_eq!(starts, 1);
    }

    #[test]
    fn test_empty_registry_is_a_noop() {
        let mut orchestrator = Orchestrator::build(Registry::new());
        assert_eq!(orchestrator.module_count(), 0);
        assert!(orchestrator.init_all().is_ok());
        assert!(orchestrator.start_all().is_ok());
        assert!(orchestrator.stop_all().is_ok());
    }
}
