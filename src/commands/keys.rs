use std::cell::Cell;
use std::rc::Rc;

use anyhow::Result;
use firecat::input::{install_capture_filter, Document, EventTarget, Phase};
use firecat::{is_privileged, KeyEvent, KeyEventKind};

use crate::cli::ColorWhen;
use crate::ui::context::UiContext;
use crate::ui::theme::{colors, icon, icons, icons_ascii, paint};

/// Outcome of running one key event through a filtered document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCheck {
    pub event: KeyEvent,
    /// The page listener never saw the event
    pub captured: bool,
}

/// Dispatch `event` at a page element under a document with the capture
/// filter installed, and report whether a page listener observed it
pub fn check_key(event: KeyEvent) -> KeyCheck {
    let mut document = Document::new();
    let _filter = install_capture_filter(&mut document);

    let page = document.create_element(Document::ROOT);
    let seen = Rc::new(Cell::new(false));
    let seen_clone = seen.clone();
    document.add_listener_at(
        page,
        event.kind,
        Phase::Bubble,
        Box::new(move |_, _| seen_clone.set(true)),
    );
    // Root bubble listener, the usual place for page-wide shortcuts
    let seen_root = seen.clone();
    document.add_key_listener(
        event.kind,
        Phase::Bubble,
        Box::new(move |_, _| seen_root.set(true)),
    );

    document.dispatch(page, &event);
    KeyCheck {
        captured: !seen.get(),
        event,
    }
}

pub fn cmd_keys(
    key: String,
    ctrl: bool,
    alt: bool,
    meta: bool,
    up: bool,
    json: bool,
    color: Option<ColorWhen>,
) -> Result<()> {
    let kind = if up {
        KeyEventKind::KeyUp
    } else {
        KeyEventKind::KeyDown
    };
    let event = KeyEvent {
        key,
        ctrl_key: ctrl,
        alt_key: alt,
        meta_key: meta,
        kind,
    };
    let check = check_key(event);

    if json {
        println!(
            "{}",
            serde_json::json!({
                "event": "key_check",
                "command": "keys",
                "key": check.event.key,
                "type": check.event.kind.event_type(),
                "ctrl": check.event.ctrl_key,
                "alt": check.event.alt_key,
                "meta": check.event.meta_key,
                "privileged": is_privileged(&check.event),
                "captured": check.captured,
            })
        );
        return Ok(());
    }

    let config = firecat::Config::default();
    let ui = UiContext::new(json, 0, color, &config);
    println!("{}", render_text(&check, &ui));
    Ok(())
}

fn describe(event: &KeyEvent) -> String {
    let mut parts = Vec::new();
    if event.ctrl_key {
        parts.push("Ctrl");
    }
    if event.alt_key {
        parts.push("Alt");
    }
    if event.meta_key {
        parts.push("Meta");
    }
    parts.push(&event.key);
    format!("{} {}", event.kind.event_type(), parts.join("+"))
}

fn render_text(check: &KeyCheck, ui: &UiContext) -> String {
    if check.captured {
        format!(
            "{} {} is captured; the page never sees it",
            paint(ui.color, icon(ui.unicode, icons::WARNING, icons_ascii::WARNING), colors::WARNING),
            describe(&check.event)
        )
    } else {
        format!(
            "{} {} reaches the page",
            paint(ui.color, icon(ui.unicode, icons::SUCCESS, icons_ascii::SUCCESS), colors::SUCCESS),
            describe(&check.event)
        )
    }
}
