//! Per-phase failure aggregation.
//!
//! The orchestrator never aborts a phase on the first failing module.
//! Instead each phase returns a [`PhaseReport`] listing every per-module
//! failure, so the host can choose fail-fast or best-effort without
//! re-deriving the outcome from log lines.

use thiserror::Error;

use super::ModuleError;

/// A named lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Init,
    LoadCfg,
    Start,
    Stop,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Init => "init",
            Phase::LoadCfg => "load_cfg",
            Phase::Start => "start",
            Phase::Stop => "stop",
        };
        f.write_str(name)
    }
}

/// One module's failure in one lifecycle phase.
#[derive(Debug, Error)]
#[error("module {module} failed during {phase}: {source}")]
pub struct LifecycleError {
    /// Name of the failing module.
    pub module: String,

    /// Phase the failure occurred in.
    pub phase: Phase,

    /// The module's own error, uninterpreted.
    #[source]
    pub source: ModuleError,
}

/// Outcome of one orchestration phase across all modules.
#[derive(Debug, Default)]
pub struct PhaseReport {
    failures: Vec<LifecycleError>,
}

impl PhaseReport {
    /// True if every module completed the phase.
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    /// The per-module failures, in the order they occurred.
    pub fn failures(&self) -> &[LifecycleError] {
        &self.failures
    }

    pub(crate) fn record(&mut self, err: LifecycleError) {
        self.failures.push(err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_error_display() {
        let err = LifecycleError {
            module: "chat".into(),
            phase: Phase::Start,
            source: "port already in use".into(),
        };
        assert_eq!(
            err.to_string(),
            "module chat failed during start: port already in use"
        );
    }

    #[test]
    fn test_empty_report_is_ok() {
        let report = PhaseReport::default();
        assert!(report.is_ok());
        assert!(report.failures().is_empty());
    }

    #[test]
    fn test_report_collects_failures() {
        let mut report = PhaseReport::default();
        report.record(LifecycleError {
            module: "a".into(),
            phase: Phase::Init,
            source: "boom".into(),
        });
        report.record(LifecycleError {
            module: "b".into(),
            phase: Phase::Init,
            source: "bang".into(),
        });

        assert!(!report.is_ok());
        let names: Vec<&str> = report.failures().iter().map(|f| f.module.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
