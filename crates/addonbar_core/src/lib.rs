//! Deferred addon-menu registration for the host application shell.
//! This crate owns the gate between host startup and view-menu availability.

pub mod host;
pub mod logging;
pub mod menu;

pub use host::run_mode::{parse_run_mode, supported_run_mode_strings, RunMode, RunModeError};
pub use host::spi::{
    ActionError, CapabilityHandle, CapabilityRegistry, HostRuntime, MenuContainer, MenuSurface,
    RetryScheduler, ToolkitError, ToolkitSet,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use menu::action::{
    parse_module_action, supported_module_action_strings, ModuleAction, ModuleActionError,
};
pub use menu::catalog::{CatalogValidationError, MenuCatalog, MenuEntrySpec, MenuExtensionSpec};
pub use menu::entry::{DispatchOutcome, EntryHandler};
pub use menu::registrar::{
    DeferredMenuRegistrar, RegistrarState, RetryPolicy, DEFAULT_RETRY_DELAY, VIEW_MENU_CONTAINER,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
