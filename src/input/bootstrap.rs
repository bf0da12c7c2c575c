//! Capture filter installation and client bootstrap
//!
//! The filter is two capture-phase listeners on the root target, one per key
//! transition. A privileged event has its immediate propagation stopped; the
//! default host action is left alone.

use super::dispatch::{EventTarget, ListenerId, Phase};
use super::event::KeyEventKind;
use super::filter::is_privileged;

/// The embedded game engine, seen from the client shell.
///
/// Loading is a side-effecting step with no value exchanged either way.
pub trait EngineModule {
    fn load(self);
}

impl<F: FnOnce()> EngineModule for F {
    fn load(self) {
        self()
    }
}

/// Listener handles of an installed capture filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "dropping the handle leaves the filter installed with no way to remove it"]
pub struct CaptureFilterHandle {
    keydown: ListenerId,
    keyup: ListenerId,
}

impl CaptureFilterHandle {
    /// Detach both listeners. Returns true if both were still registered.
    pub fn uninstall<T: EventTarget + ?Sized>(self, target: &mut T) -> bool {
        let down = target.remove_key_listener(self.keydown);
        let up = target.remove_key_listener(self.keyup);
        down && up
    }
}

/// Register the capture filter on `target`
pub fn install_capture_filter<T: EventTarget + ?Sized>(target: &mut T) -> CaptureFilterHandle {
    let [keydown, keyup] = KeyEventKind::ALL.map(|kind| {
        target.add_key_listener(
            kind,
            Phase::Capture,
            Box::new(|event, control| {
                if is_privileged(event) {
                    control.stop_immediate_propagation();
                }
            }),
        )
    });
    CaptureFilterHandle { keydown, keyup }
}

/// Load-once client startup: filter first, then the engine.
#[derive(Debug, Default)]
pub struct Bootstrap {
    filter: Option<CaptureFilterHandle>,
}

impl Bootstrap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the filter and load the engine. Later calls are no-ops and
    /// return false; the engine passed to them is dropped unloaded.
    pub fn run<T, E>(&mut self, target: &mut T, engine: E) -> bool
    where
        T: EventTarget + ?Sized,
        E: EngineModule,
    {
        if self.filter.is_some() {
            return false;
        }
        self.filter = Some(install_capture_filter(target));
        engine.load();
        true
    }

    pub fn is_installed(&self) -> bool {
        self.filter.is_some()
    }

    /// Detach the filter for scoped lifetimes (tests, embedding hosts)
    pub fn teardown<T: EventTarget + ?Sized>(&mut self, target: &mut T) -> bool {
        match self.filter.take() {
            Some(handle) => handle.uninstall(target),
            None => false,
        }
    }
}
