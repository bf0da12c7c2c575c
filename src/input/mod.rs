//! Input Capture Filter
//!
//! Keeps browser and OS shortcuts away from the page so the embedded game
//! engine sees every Ctrl, Alt, Meta and function-key combination.
//!
//! ## Structure
//!
//! - `event` - the key event fields the filter reads
//! - `filter` - the privileged-event predicate
//! - `dispatch` - the `EventTarget` seam and an in-process `Document`
//! - `bootstrap` - filter installation and load-once client startup
//! - `web` - the same filter on `web_sys::Window` (wasm32 only)

mod bootstrap;
mod dispatch;
mod event;
mod filter;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use bootstrap::{install_capture_filter, Bootstrap, CaptureFilterHandle, EngineModule};
pub use dispatch::{
    DispatchControl, DispatchOutcome, Document, EventTarget, KeyListener, ListenerId, NodeId,
    Phase,
};
pub use event::{KeyEvent, KeyEventKind};
pub use filter::{is_function_key, is_privileged, FUNCTION_KEY_PATTERN};
