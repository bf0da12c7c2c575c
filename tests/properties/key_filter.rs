//! Property tests for the capture filter predicate.

use proptest::prelude::*;

use std::cell::Cell;
use std::rc::Rc;

use firecat::input::{is_function_key, Document, KeyEventKind, Phase};
use firecat::{is_privileged, Bootstrap, KeyEvent};

fn kind() -> impl Strategy<Value = KeyEventKind> {
    prop_oneof![Just(KeyEventKind::KeyDown), Just(KeyEventKind::KeyUp)]
}

fn event() -> impl Strategy<Value = KeyEvent> {
    ("(?s).{0,24}", any::<bool>(), any::<bool>(), any::<bool>(), kind()).prop_map(
        |(key, ctrl_key, alt_key, meta_key, kind)| KeyEvent {
            key,
            ctrl_key,
            alt_key,
            meta_key,
            kind,
        },
    )
}

/// Does a bubble listener on the page observe `event`?
fn observed(event: &KeyEvent) -> bool {
    let mut doc = Document::new();
    Bootstrap::new().run(&mut doc, || {});
    let seen = Rc::new(Cell::new(false));
    for kind in KeyEventKind::ALL {
        let seen = Rc::clone(&seen);
        doc.add_listener_at(
            Document::ROOT,
            kind,
            Phase::Bubble,
            Box::new(move |_, _| seen.set(true)),
        );
    }
    let page = doc.create_element(Document::ROOT);
    doc.dispatch(page, event);
    seen.get()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// PROPERTY: the predicate never panics
    #[test]
    fn property_predicate_never_panics(event in event()) {
        let _ = is_privileged(&event);
    }

    /// PROPERTY: a page listener observes the event iff it is not privileged
    #[test]
    fn property_observed_iff_not_privileged(event in event()) {
        prop_assert_eq!(observed(&event), !is_privileged(&event));
    }

    /// PROPERTY: any modifier makes an event privileged
    #[test]
    fn property_modifier_is_privileged(
        event in event(),
        which in 0..3u8,
    ) {
        let event = match which {
            0 => event.with_ctrl(),
            1 => event.with_alt(),
            _ => event.with_meta(),
        };
        prop_assert!(is_privileged(&event));
        prop_assert!(!observed(&event));
    }

    /// PROPERTY: `F<digits>` anywhere in the key is privileged
    #[test]
    fn property_embedded_function_key(
        prefix in "[a-zA-Z ]{0,8}",
        f in "[fF]",
        digits in "[0-9]{1,3}",
        suffix in "[a-zA-Z ]{0,8}",
        kind in kind(),
    ) {
        let key = format!("{prefix}{f}{digits}{suffix}");
        prop_assert!(is_function_key(&key));
        prop_assert!(!observed(&KeyEvent::new(key, kind)));
    }

    /// PROPERTY: keys without any digit are never function keys
    #[test]
    fn property_no_digit_no_function_key(key in "[A-Za-z _.+-]{0,24}") {
        prop_assert!(!is_function_key(&key));
    }
}
