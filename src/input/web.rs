//! Browser binding: the capture filter on `window`
//!
//! Registered in the capture phase on the window so it runs before any
//! listener on the document or its elements.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use super::event::{KeyEvent, KeyEventKind};
use super::filter::is_privileged;

fn to_key_event(event: &KeyboardEvent, kind: KeyEventKind) -> KeyEvent {
    KeyEvent {
        key: event.key(),
        ctrl_key: event.ctrl_key(),
        alt_key: event.alt_key(),
        meta_key: event.meta_key(),
        kind,
    }
}

type KeyClosure = Closure<dyn FnMut(KeyboardEvent)>;

/// Installed window listeners. Dropping the guard detaches them.
pub struct WebCaptureFilter {
    window: web_sys::Window,
    listeners: Vec<(KeyEventKind, KeyClosure)>,
}

impl WebCaptureFilter {
    /// Keep the listeners for the lifetime of the page
    pub fn forget(mut self) {
        for (_, closure) in self.listeners.drain(..) {
            closure.forget();
        }
    }
}

impl Drop for WebCaptureFilter {
    fn drop(&mut self) {
        for (kind, closure) in &self.listeners {
            let _ = self.window.remove_event_listener_with_callback_and_bool(
                kind.event_type(),
                closure.as_ref().unchecked_ref(),
                true,
            );
        }
    }
}

/// Register the filter on the global window
pub fn install_window_capture_filter() -> Result<WebCaptureFilter, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let mut listeners = Vec::with_capacity(KeyEventKind::ALL.len());

    for kind in KeyEventKind::ALL {
        let closure: KeyClosure = Closure::new(move |event: KeyboardEvent| {
            if is_privileged(&to_key_event(&event, kind)) {
                event.stop_immediate_propagation();
            }
        });
        window.add_event_listener_with_callback_and_bool(
            kind.event_type(),
            closure.as_ref().unchecked_ref(),
            true,
        )?;
        listeners.push((kind, closure));
    }

    Ok(WebCaptureFilter { window, listeners })
}

/// Page-lifetime install, called from the client's JS shell before the
/// engine module is imported.
#[wasm_bindgen(js_name = installKeyCapture)]
pub fn install_key_capture() -> Result<(), JsValue> {
    install_window_capture_filter()?.forget();
    Ok(())
}
