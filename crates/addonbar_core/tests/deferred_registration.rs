use addonbar_core::{
    ActionError, CapabilityHandle, CapabilityRegistry, DeferredMenuRegistrar, EntryHandler,
    HostRuntime, MenuContainer, MenuSurface, ModuleAction, RegistrarState, RetryScheduler,
    RunMode, ToolkitError, ToolkitSet, DEFAULT_RETRY_DELAY, VIEW_MENU_CONTAINER,
};
use std::cell::{Cell, RefCell};
use std::sync::Arc;
use std::time::Duration;

struct FixedRuntime {
    mode: RunMode,
    toolkit_calls: RefCell<Vec<ToolkitSet>>,
}

impl FixedRuntime {
    fn new(mode: RunMode) -> Self {
        Self {
            mode,
            toolkit_calls: RefCell::new(vec![]),
        }
    }
}

impl HostRuntime for FixedRuntime {
    fn run_mode(&self) -> RunMode {
        self.mode
    }

    fn ensure_toolkit(&self, set: ToolkitSet) -> Result<(), ToolkitError> {
        self.toolkit_calls.borrow_mut().push(set);
        Ok(())
    }
}

#[derive(Default)]
struct FakeMenu {
    entries: RefCell<Vec<(String, EntryHandler)>>,
}

impl FakeMenu {
    fn labels(&self) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .map(|(label, _)| label.clone())
            .collect()
    }
}

impl MenuContainer for FakeMenu {
    fn add_entry(&self, label: &str, handler: EntryHandler) {
        self.entries.borrow_mut().push((label.to_string(), handler));
    }
}

struct ScriptedSurface {
    misses_remaining: Cell<u32>,
    lookups: Cell<u32>,
    container: Arc<FakeMenu>,
}

impl ScriptedSurface {
    fn available_after(misses: u32) -> Self {
        Self {
            misses_remaining: Cell::new(misses),
            lookups: Cell::new(0),
            container: Arc::new(FakeMenu::default()),
        }
    }
}

impl MenuSurface for ScriptedSurface {
    fn find_container(&self, name: &str) -> Option<Arc<dyn MenuContainer>> {
        assert_eq!(name, VIEW_MENU_CONTAINER);
        self.lookups.set(self.lookups.get() + 1);
        let misses = self.misses_remaining.get();
        if misses > 0 {
            self.misses_remaining.set(misses - 1);
            return None;
        }
        Some(self.container.clone() as Arc<dyn MenuContainer>)
    }
}

#[derive(Default)]
struct RecordingScheduler {
    delays: RefCell<Vec<Duration>>,
}

impl RetryScheduler for RecordingScheduler {
    fn schedule_retry(&self, delay: Duration) {
        self.delays.borrow_mut().push(delay);
    }
}

struct StubCapability {
    name: String,
}

impl CapabilityHandle for StubCapability {
    fn capability_name(&self) -> &str {
        &self.name
    }

    fn perform(&self, _action: ModuleAction) -> Result<(), ActionError> {
        Ok(())
    }
}

#[derive(Default)]
struct FakeRegistry {
    loaded: RefCell<Vec<String>>,
}

impl FakeRegistry {
    fn with_loaded(names: &[&str]) -> Self {
        Self {
            loaded: RefCell::new(names.iter().map(|name| name.to_string()).collect()),
        }
    }
}

impl CapabilityRegistry for FakeRegistry {
    fn lookup(&self, name: &str) -> Option<Arc<dyn CapabilityHandle>> {
        if self.loaded.borrow().iter().any(|loaded| loaded == name) {
            Some(Arc::new(StubCapability {
                name: name.to_string(),
            }) as Arc<dyn CapabilityHandle>)
        } else {
            None
        }
    }
}

fn build_registrar(
    mode: RunMode,
    misses: u32,
    loaded: &[&str],
) -> (
    DeferredMenuRegistrar,
    Arc<FixedRuntime>,
    Arc<ScriptedSurface>,
    Arc<RecordingScheduler>,
    Arc<FakeRegistry>,
) {
    let runtime = Arc::new(FixedRuntime::new(mode));
    let surface = Arc::new(ScriptedSurface::available_after(misses));
    let scheduler = Arc::new(RecordingScheduler::default());
    let registry = Arc::new(FakeRegistry::with_loaded(loaded));
    let registrar = DeferredMenuRegistrar::new(
        runtime.clone() as Arc<dyn HostRuntime>,
        surface.clone() as Arc<dyn MenuSurface>,
        scheduler.clone() as Arc<dyn RetryScheduler>,
        registry.clone() as Arc<dyn CapabilityRegistry>,
    );
    (registrar, runtime, surface, scheduler, registry)
}

#[test]
fn headless_initialize_performs_no_lookups_schedules_or_entries() {
    let (mut registrar, runtime, surface, scheduler, _registry) =
        build_registrar(RunMode::Headless, 0, &["CAVEStereo"]);

    registrar.initialize();

    assert_eq!(registrar.state(), RegistrarState::Suppressed);
    assert_eq!(surface.lookups.get(), 0);
    assert!(scheduler.delays.borrow().is_empty());
    assert!(surface.container.entries.borrow().is_empty());
    assert!(runtime.toolkit_calls.borrow().is_empty());
}

#[test]
fn retry_converges_after_scripted_misses() {
    // Container discoverable after exactly two failed lookups.
    let (mut registrar, _runtime, surface, scheduler, _registry) =
        build_registrar(RunMode::Interactive, 2, &["CAVEStereo"]);

    registrar.initialize();
    assert_eq!(registrar.state(), RegistrarState::Searching);

    registrar.attempt_registration();
    assert_eq!(registrar.state(), RegistrarState::Searching);

    registrar.attempt_registration();
    assert_eq!(registrar.state(), RegistrarState::Registered);

    assert_eq!(registrar.attempts(), 3);
    assert_eq!(surface.lookups.get(), 3);
    assert_eq!(
        scheduler.delays.borrow().as_slice(),
        &[DEFAULT_RETRY_DELAY, DEFAULT_RETRY_DELAY]
    );
    assert_eq!(surface.container.labels(), vec!["Cave", "Stereoscopy"]);
}

#[test]
fn registration_is_single_pass_even_when_capabilities_change_later() {
    let (mut registrar, _runtime, surface, scheduler, registry) =
        build_registrar(RunMode::Interactive, 0, &["CAVEStereo"]);

    registrar.initialize();
    assert_eq!(registrar.state(), RegistrarState::Registered);
    assert_eq!(surface.lookups.get(), 1);

    registry.loaded.borrow_mut().push("PythonScript".to_string());
    registrar.attempt_registration();
    registrar.attempt_registration();

    assert_eq!(registrar.attempts(), 1);
    assert_eq!(surface.lookups.get(), 1);
    assert!(scheduler.delays.borrow().is_empty());
    assert_eq!(surface.container.labels(), vec!["Cave", "Stereoscopy"]);
}

#[test]
fn startup_scenario_two_misses_one_loaded_module() {
    // Interactive host, container absent on attempts 1-2, present on 3,
    // only CAVEStereo loaded.
    let (mut registrar, _runtime, surface, _scheduler, _registry) =
        build_registrar(RunMode::Interactive, 2, &["CAVEStereo"]);

    registrar.initialize();
    registrar.attempt_registration();
    registrar.attempt_registration();

    assert_eq!(registrar.attempts(), 3);
    assert_eq!(registrar.state(), RegistrarState::Registered);

    let entries = surface.container.entries.borrow();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|(_, handler)| handler.capability() == "CAVEStereo"));
}

#[test]
fn interactive_initialize_preloads_toolkit_sets_in_order() {
    let (mut registrar, runtime, _surface, _scheduler, _registry) =
        build_registrar(RunMode::Interactive, 0, &[]);

    registrar.initialize();

    assert_eq!(
        runtime.toolkit_calls.borrow().as_slice(),
        &[ToolkitSet::Core, ToolkitSet::Gui]
    );
}
