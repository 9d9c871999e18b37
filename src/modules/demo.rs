//! Placeholder module demonstrating the lifecycle contract.
//!
//! Carries no state and does no work; each hook logs one line. New modules
//! start from this shape: implement [`Module`], then add the type to
//! `modules::register_all`.

use tracing::info;

use crate::module::{Module, ModuleError};

/// Empty demo module.
#[derive(Debug, Default)]
pub struct Demo;

impl Demo {
    pub fn new() -> Self {
        Self
    }
}

impl Module for Demo {
    fn name(&self) -> &str {
        "demo"
    }

    fn init(&mut self) -> Result<(), ModuleError> {
        info!(module = self.name(), "demo init");
        Ok(())
    }

    fn start(&mut self) -> Result<(), ModuleError> {
        info!(module = self.name(), "demo start");
        Ok(())
    }

    fn stop(&mut self) -> Result<(), ModuleError> {
        info!(module = self.name(), "demo stop");
        Ok(())
    }

    fn load_cfg(&mut self, is_reload: bool) -> Result<(), ModuleError> {
        info!(module = self.name(), is_reload, "demo load_cfg");
        Ok(())
    }
}
