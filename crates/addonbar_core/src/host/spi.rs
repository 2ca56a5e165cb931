//! Injectable trait contracts for the host facilities the registrar uses.
//!
//! # Responsibility
//! - Define the seam between this crate and the surrounding application:
//!   run-mode discovery, toolkit preload, menu container access, delayed
//!   re-invocation, and optional-module lookup.
//!
//! # Invariants
//! - All calls are synchronous and non-blocking; absence is reported as
//!   `None`, not by waiting.
//! - `CapabilityRegistry` is read-only from this crate's perspective; the
//!   host alone loads and unloads modules.

use crate::host::run_mode::RunMode;
use crate::menu::action::ModuleAction;
use crate::menu::entry::EntryHandler;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use std::time::Duration;

/// UI toolkit capability set the host can preload on request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolkitSet {
    /// Non-visual toolkit primitives (object model, signals, timers).
    Core,
    /// Widget layer required to manipulate containers and entries.
    Gui,
}

impl ToolkitSet {
    /// Stable string id used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Gui => "gui",
        }
    }
}

/// Toolkit preload errors reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolkitError {
    Unavailable { set: ToolkitSet, message: String },
}

impl Display for ToolkitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable { set, message } => {
                write!(f, "toolkit set `{}` is unavailable: {message}", set.as_str())
            }
        }
    }
}

impl Error for ToolkitError {}

/// Host runtime facade: run-mode discovery and toolkit preload.
pub trait HostRuntime {
    /// Returns the process run mode, fixed for the process lifetime.
    fn run_mode(&self) -> RunMode;

    /// Ensures one toolkit capability set is loaded before UI work.
    fn ensure_toolkit(&self, set: ToolkitSet) -> Result<(), ToolkitError>;
}

/// Action dispatch errors reported by a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// The module does not implement the requested action.
    ActionUnsupported {
        capability: String,
        action: ModuleAction,
    },
    /// The module accepted the request but failed to carry it out.
    ActionRejected {
        capability: String,
        action: ModuleAction,
        message: String,
    },
}

impl Display for ActionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ActionUnsupported { capability, action } => write!(
                f,
                "module `{capability}` does not support action `{}`",
                action.as_str()
            ),
            Self::ActionRejected {
                capability,
                action,
                message,
            } => write!(
                f,
                "module `{capability}` rejected action `{}`: {message}",
                action.as_str()
            ),
        }
    }
}

impl Error for ActionError {}

/// Live handle to one optional host module.
pub trait CapabilityHandle {
    /// Stable module name as registered with the host.
    fn capability_name(&self) -> &str;

    /// Forwards one action to the module.
    fn perform(&self, action: ModuleAction) -> Result<(), ActionError>;
}

/// Read-only lookup of optional host modules by name.
///
/// The host populates and depopulates this registry as modules load and
/// unload; callers must treat every lookup result as valid only for the
/// current call.
pub trait CapabilityRegistry {
    /// Returns the live handle for `name`, or `None` while unloaded.
    fn lookup(&self, name: &str) -> Option<Arc<dyn CapabilityHandle>>;
}

/// Menu container able to hold clickable entries.
pub trait MenuContainer {
    /// Appends one entry; the handler runs whenever the entry is triggered.
    fn add_entry(&self, label: &str, handler: EntryHandler);
}

/// UI surface that owns named menu containers.
pub trait MenuSurface {
    /// Returns the container registered under `name`, or `None` while the
    /// host has not created it yet.
    fn find_container(&self, name: &str) -> Option<Arc<dyn MenuContainer>>;
}

/// One-shot delayed re-invocation backed by the host event loop.
///
/// The host arranges for the registrar's next attempt to run after `delay`
/// on its event-processing thread; the call itself returns immediately.
pub trait RetryScheduler {
    fn schedule_retry(&self, delay: Duration);
}
