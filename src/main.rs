//! Game server host process.
//!
//! Startup is two-phase: a registration phase collects every module into
//! the registry, then the orchestration phase builds the orchestrator and
//! drives Init → LoadCfg → Start on the control thread. The host then
//! blocks on a termination signal and runs Stop exactly once on the way
//! out. A module failing a phase is logged and reported but never aborts
//! the rest of the server.

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};

use gamed::config::{self, HostConfig};
use gamed::lifecycle::{signals, Shutdown};
use gamed::module::{Orchestrator, PhaseReport, Registry};
use gamed::{modules, observability};

#[derive(Parser, Debug)]
#[command(name = "gamed", about = "Multi-module game server host")]
struct Args {
    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,

    /// Emit log lines to the console.
    #[arg(long)]
    console: Option<bool>,

    /// Deployment environment name.
    #[arg(long)]
    env: Option<String>,

    /// Optional TOML config file; flags override file values.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> Result<HostConfig, config::ConfigError> {
        let mut cfg = match &self.config {
            Some(path) => config::load_config(path)?,
            None => HostConfig::default(),
        };
        if let Some(level) = self.log_level {
            cfg.log.level = level;
        }
        if let Some(console) = self.console {
            cfg.log.console = console;
        }
        if let Some(env) = self.env {
            cfg.env.0 = env;
        }
        Ok(cfg)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let cfg = args.into_config()?;

    // Logging comes up first; module registration is I/O-free and could
    // run earlier, but everything else logs.
    observability::logging::init(&cfg.log)?;

    info!(
        env = %cfg.env,
        log_level = %cfg.log.level,
        console = cfg.log.console,
        "gamed starting"
    );

    // TODO: bring up the network listener once a net module lands.

    // Registration phase.
    let mut registry = Registry::new();
    modules::register_all(&mut registry);

    // Orchestration phase.
    let mut orchestrator = Orchestrator::build(registry);
    warn_on_failures("init", &orchestrator.init_all());
    warn_on_failures("start", &orchestrator.start_all());

    info!(modules = orchestrator.module_count(), "gamed running");

    let shutdown = Shutdown::new();
    let mut shutdown_rx = shutdown.subscribe();
    tokio::spawn(async move {
        if let Err(error) = signals::listen(shutdown).await {
            tracing::error!(%error, "signal listener failed");
        }
    });
    let _ = shutdown_rx.recv().await;

    warn_on_failures("stop", &orchestrator.stop_all());
    info!("shutdown complete");
    Ok(())
}

/// Best-effort policy: individual failures were already logged by the
/// orchestrator; the host records the tally and keeps going.
fn warn_on_failures(phase: &str, report: &PhaseReport) {
    if !report.is_ok() {
        warn!(
            phase,
            failed = report.failures().len(),
            "phase completed with module failures"
        );
    }
}
