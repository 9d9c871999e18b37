//! Concrete module implementations.
//!
//! Every module in this tree is wired into the host through
//! [`register_all`], called exactly once during the registration phase,
//! before the orchestrator is built.

pub mod demo;

use crate::module::Registry;

/// Register every shipped module.
pub fn register_all(registry: &mut Registry) {
    registry.register(Box::new(demo::Demo::new()));
}
