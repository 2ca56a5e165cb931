//! Deferred view-menu registration with timer-based retry.
//!
//! # Responsibility
//! - Gate all menu work on the host run mode.
//! - Wait for the named menu container to appear, one non-blocking lookup
//!   per attempt, rescheduling through the host timer while absent.
//! - Attach catalog entries for loaded optional modules exactly once.
//!
//! # Invariants
//! - Headless mode performs no lookups, schedules no timers, and creates
//!   no entries.
//! - The registration pass runs at most once per registrar instance; the
//!   capability set is sampled only during that pass.
//! - Entries are never removed.

use crate::host::spi::{
    CapabilityRegistry, HostRuntime, MenuContainer, MenuSurface, RetryScheduler, ToolkitSet,
};
use crate::menu::catalog::MenuCatalog;
use crate::menu::entry::EntryHandler;
use log::{debug, error, info, warn};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Name of the host menu container this registrar attaches to.
pub const VIEW_MENU_CONTAINER: &str = "ViewMenu";

/// Delay between container lookup attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Retry pacing and bounds for container discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Fixed delay between attempts. No backoff growth.
    pub delay: Duration,
    /// Total attempt budget. `None` retries indefinitely, which matches the
    /// host's historical startup behavior.
    pub max_attempts: Option<NonZeroU32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            delay: DEFAULT_RETRY_DELAY,
            max_attempts: None,
        }
    }
}

/// Registrar lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrarState {
    /// Waiting for the container to appear.
    Searching,
    /// Registration pass completed; no further work is scheduled.
    Registered,
    /// Attempt budget exhausted before the container appeared.
    Exhausted,
    /// Headless run mode; registration is permanently suppressed.
    Suppressed,
}

/// Attaches addon menu entries to the host view menu once it exists.
///
/// All host facilities are injected at construction so the registrar can be
/// driven deterministically in tests. The host wires its timer callback to
/// [`DeferredMenuRegistrar::attempt_registration`]; the registrar never
/// blocks and never re-enters a terminal state.
pub struct DeferredMenuRegistrar {
    host: Arc<dyn HostRuntime>,
    surface: Arc<dyn MenuSurface>,
    scheduler: Arc<dyn RetryScheduler>,
    registry: Arc<dyn CapabilityRegistry>,
    catalog: MenuCatalog,
    policy: RetryPolicy,
    state: RegistrarState,
    attempts: u32,
}

impl DeferredMenuRegistrar {
    /// Creates a registrar with the stock catalog and default retry policy.
    pub fn new(
        host: Arc<dyn HostRuntime>,
        surface: Arc<dyn MenuSurface>,
        scheduler: Arc<dyn RetryScheduler>,
        registry: Arc<dyn CapabilityRegistry>,
    ) -> Self {
        Self::with_options(
            host,
            surface,
            scheduler,
            registry,
            MenuCatalog::view_menu_defaults(),
            RetryPolicy::default(),
        )
    }

    /// Creates a registrar with an explicit catalog and retry policy.
    pub fn with_options(
        host: Arc<dyn HostRuntime>,
        surface: Arc<dyn MenuSurface>,
        scheduler: Arc<dyn RetryScheduler>,
        registry: Arc<dyn CapabilityRegistry>,
        catalog: MenuCatalog,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            host,
            surface,
            scheduler,
            registry,
            catalog,
            policy,
            state: RegistrarState::Searching,
            attempts: 0,
        }
    }

    /// Runs the mode gate, preloads the UI toolkit, and makes the first
    /// container lookup attempt.
    ///
    /// In headless mode this is a no-op beyond marking the registrar
    /// [`RegistrarState::Suppressed`]. Toolkit preload failure is logged and
    /// aborts initialization without scheduling a retry; the registrar stays
    /// in `Searching` so the host may initialize again after repair.
    pub fn initialize(&mut self) {
        let mode = self.host.run_mode();
        if !mode.is_interactive() {
            self.state = RegistrarState::Suppressed;
            info!(
                "event=menu_init module=menu status=suppressed run_mode={}",
                mode.as_str()
            );
            return;
        }

        for set in [ToolkitSet::Core, ToolkitSet::Gui] {
            if let Err(err) = self.host.ensure_toolkit(set) {
                error!(
                    "event=menu_init module=menu status=error toolkit={} error={err}",
                    set.as_str()
                );
                return;
            }
        }

        info!(
            "event=menu_init module=menu status=start container={} extensions={}",
            VIEW_MENU_CONTAINER,
            self.catalog.len()
        );
        self.attempt_registration();
    }

    /// Makes one container lookup attempt.
    ///
    /// While the container is absent, logs a notice and schedules exactly
    /// one delayed re-invocation per attempt, until the policy's attempt
    /// budget (if any) runs out. On the first successful lookup, runs the
    /// registration pass and goes terminal. Calls in any terminal state are
    /// no-ops.
    pub fn attempt_registration(&mut self) {
        match self.state {
            RegistrarState::Searching => {}
            other => {
                debug!(
                    "event=menu_attach module=menu status=ignored state={other:?} attempts={}",
                    self.attempts
                );
                return;
            }
        }

        self.attempts += 1;
        match self.surface.find_container(VIEW_MENU_CONTAINER) {
            Some(container) => {
                self.state = RegistrarState::Registered;
                info!(
                    "event=menu_attach module=menu status=found container={} attempt={}",
                    VIEW_MENU_CONTAINER, self.attempts
                );
                self.register_entries(container.as_ref());
            }
            None => {
                if self.attempt_budget_spent() {
                    self.state = RegistrarState::Exhausted;
                    warn!(
                        "event=menu_attach module=menu status=exhausted container={} attempts={}",
                        VIEW_MENU_CONTAINER, self.attempts
                    );
                    return;
                }
                info!(
                    "event=menu_attach module=menu status=retry container={} attempt={} delay_ms={}",
                    VIEW_MENU_CONTAINER,
                    self.attempts,
                    self.policy.delay.as_millis()
                );
                self.scheduler.schedule_retry(self.policy.delay);
            }
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RegistrarState {
        self.state
    }

    /// Number of container lookup attempts made so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    fn attempt_budget_spent(&self) -> bool {
        self.policy
            .max_attempts
            .is_some_and(|max| self.attempts >= max.get())
    }

    /// One-shot registration pass over the catalog.
    ///
    /// Only presence is sampled here; the handle itself is re-resolved by
    /// the entry handler at invocation time.
    fn register_entries(&self, container: &dyn MenuContainer) {
        let mut created = 0usize;
        for extension in self.catalog.extensions() {
            if self.registry.lookup(&extension.capability).is_none() {
                debug!(
                    "event=menu_entry module=menu status=skipped capability={} reason=not_loaded",
                    extension.capability
                );
                continue;
            }

            for entry in &extension.entries {
                container.add_entry(
                    &entry.label,
                    EntryHandler::new(
                        extension.capability.clone(),
                        entry.action,
                        Arc::clone(&self.registry),
                    ),
                );
                created += 1;
                info!(
                    "event=menu_entry module=menu status=ok capability={} label={} action={}",
                    extension.capability,
                    entry.label,
                    entry.action.as_str()
                );
            }
        }

        info!(
            "event=menu_attach module=menu status=ok container={} entries={created}",
            VIEW_MENU_CONTAINER
        );
    }
}
