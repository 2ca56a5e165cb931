//! Triggered-entry dispatch back into optional host modules.

use crate::host::spi::CapabilityRegistry;
use crate::menu::action::ModuleAction;
use log::{debug, warn};
use std::sync::Arc;

/// Handler bound to one menu entry.
///
/// The backing capability is re-resolved by name on every invocation;
/// module handles are never captured at binding time.
pub struct EntryHandler {
    capability: String,
    action: ModuleAction,
    registry: Arc<dyn CapabilityRegistry>,
}

/// Outcome of one entry invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The action reached the module.
    Forwarded,
    /// The backing module is no longer loaded; nothing was forwarded.
    CapabilityUnloaded,
    /// The module was reached but reported a dispatch error.
    ActionFailed(String),
}

impl EntryHandler {
    /// Binds a handler for one capability/action pair.
    pub fn new(
        capability: impl Into<String>,
        action: ModuleAction,
        registry: Arc<dyn CapabilityRegistry>,
    ) -> Self {
        Self {
            capability: capability.into(),
            action,
            registry,
        }
    }

    /// Capability name this handler forwards to.
    pub fn capability(&self) -> &str {
        &self.capability
    }

    /// Action this handler forwards.
    pub fn action(&self) -> ModuleAction {
        self.action
    }

    /// Forwards the bound action to the backing module.
    ///
    /// Absence of the module and module-side dispatch failures are
    /// downgraded to warn-level diagnostics; this method runs on the host
    /// event thread and must never propagate a failure into it.
    pub fn invoke(&self) -> DispatchOutcome {
        let handle = match self.registry.lookup(&self.capability) {
            Some(handle) => handle,
            None => {
                warn!(
                    "event=entry_invoke module=menu status=skipped capability={} action={} reason=capability_unloaded",
                    self.capability,
                    self.action.as_str()
                );
                return DispatchOutcome::CapabilityUnloaded;
            }
        };

        match handle.perform(self.action) {
            Ok(()) => {
                debug!(
                    "event=entry_invoke module=menu status=ok capability={} action={}",
                    self.capability,
                    self.action.as_str()
                );
                DispatchOutcome::Forwarded
            }
            Err(err) => {
                warn!(
                    "event=entry_invoke module=menu status=error capability={} action={} error={err}",
                    self.capability,
                    self.action.as_str()
                );
                DispatchOutcome::ActionFailed(err.to_string())
            }
        }
    }
}
