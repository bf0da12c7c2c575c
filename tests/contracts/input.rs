//! Capture filter contracts
//!
//! A page is modelled as a `Document` with the filter installed on the root,
//! a later capture listener on the root, a capture listener on a nested
//! element and bubble listeners on both.

use std::cell::RefCell;
use std::rc::Rc;

use firecat::input::{Document, KeyEventKind, NodeId, Phase};
use firecat::{Bootstrap, KeyEvent};

struct Page {
    doc: Document,
    canvas: NodeId,
    seen: Rc<RefCell<Vec<&'static str>>>,
}

impl Page {
    fn new() -> Self {
        let mut doc = Document::new();
        let mut boot = Bootstrap::new();
        assert!(boot.run(&mut doc, || {}));

        let body = doc.create_element(Document::ROOT);
        let canvas = doc.create_element(body);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let listeners: [(NodeId, Phase, &'static str); 4] = [
            (Document::ROOT, Phase::Capture, "root-capture"),
            (canvas, Phase::Capture, "canvas-capture"),
            (canvas, Phase::Bubble, "canvas-bubble"),
            (Document::ROOT, Phase::Bubble, "root-bubble"),
        ];
        for (node, phase, name) in listeners {
            for kind in KeyEventKind::ALL {
                let seen = Rc::clone(&seen);
                doc.add_listener_at(
                    node,
                    kind,
                    phase,
                    Box::new(move |_, _| seen.borrow_mut().push(name)),
                );
            }
        }

        Self { doc, canvas, seen }
    }

    /// Dispatch at the canvas and return which page listeners ran
    fn press(&mut self, event: KeyEvent) -> Vec<&'static str> {
        self.seen.borrow_mut().clear();
        self.doc.dispatch(self.canvas, &event);
        self.seen.borrow().clone()
    }
}

/// CONTRACT: any of Ctrl, Alt or Meta keeps the event from every other listener
#[test]
fn contract_modified_events_reach_no_listener() {
    let mut page = Page::new();

    for kind in KeyEventKind::ALL {
        for event in [
            KeyEvent::new("a", kind).with_ctrl(),
            KeyEvent::new("a", kind).with_alt(),
            KeyEvent::new("a", kind).with_meta(),
            KeyEvent::new("Tab", kind).with_alt().with_ctrl(),
            KeyEvent::new("z", kind).with_ctrl().with_alt().with_meta(),
        ] {
            assert!(page.press(event.clone()).is_empty(), "{event:?}");
        }
    }
}

/// CONTRACT: a function-key pattern anywhere in `key` halts propagation
#[test]
fn contract_function_keys_reach_no_listener() {
    let mut page = Page::new();

    for key in ["F1", "F5", "F12", "f12", "F24", "xF1y", "KeyF9"] {
        assert!(page.press(KeyEvent::down(key)).is_empty(), "{key}");
        assert!(page.press(KeyEvent::up(key)).is_empty(), "{key}");
        assert!(page.press(KeyEvent::down(key).with_ctrl()).is_empty(), "{key}");
    }
}

/// CONTRACT: a plain key is observed normally, in capture-then-bubble order
#[test]
fn contract_plain_key_is_observed() {
    let mut page = Page::new();

    assert_eq!(
        page.press(KeyEvent::down("a")),
        vec!["root-capture", "canvas-capture", "canvas-bubble", "root-bubble"]
    );
    assert_eq!(page.press(KeyEvent::up("a")).len(), 4);
}

/// CONTRACT: the filter never suppresses the host default action
#[test]
fn contract_default_action_is_left_alone() {
    let mut doc = Document::new();
    Bootstrap::new().run(&mut doc, || {});

    let outcome = doc.dispatch(Document::ROOT, &KeyEvent::down("F5"));

    assert!(outcome.propagation_stopped);
    assert!(!outcome.default_prevented);
}

/// CONTRACT: bootstrap is load-once per target
#[test]
fn contract_bootstrap_registers_once() {
    let mut doc = Document::new();
    let mut boot = Bootstrap::new();
    let loads = Rc::new(RefCell::new(0));

    for _ in 0..3 {
        let loads = Rc::clone(&loads);
        boot.run(&mut doc, move || *loads.borrow_mut() += 1);
    }

    assert_eq!(*loads.borrow(), 1);
    assert_eq!(doc.listener_count(), 2);
}
