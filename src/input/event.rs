//! Keyboard event model
//!
//! Mirrors the fields of a DOM `KeyboardEvent` that the capture filter reads.

use serde::{Deserialize, Serialize};

/// Key transition type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyEventKind {
    KeyDown,
    KeyUp,
}

impl KeyEventKind {
    pub const ALL: [KeyEventKind; 2] = [KeyEventKind::KeyDown, KeyEventKind::KeyUp];

    /// DOM event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            KeyEventKind::KeyDown => "keydown",
            KeyEventKind::KeyUp => "keyup",
        }
    }
}

impl std::fmt::Display for KeyEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.event_type())
    }
}

/// A single key transition as delivered by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: String,
    pub ctrl_key: bool,
    pub alt_key: bool,
    pub meta_key: bool,
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Key-down event with no modifiers
    pub fn down(key: impl Into<String>) -> Self {
        Self::new(key, KeyEventKind::KeyDown)
    }

    /// Key-up event with no modifiers
    pub fn up(key: impl Into<String>) -> Self {
        Self::new(key, KeyEventKind::KeyUp)
    }

    pub fn new(key: impl Into<String>, kind: KeyEventKind) -> Self {
        Self {
            key: key.into(),
            ctrl_key: false,
            alt_key: false,
            meta_key: false,
            kind,
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl_key = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt_key = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta_key = true;
        self
    }

    /// True if any of Ctrl, Alt or Meta is held
    pub fn has_modifier(&self) -> bool {
        self.ctrl_key || self.alt_key || self.meta_key
    }
}
