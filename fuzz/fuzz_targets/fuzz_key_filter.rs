#![no_main]

use libfuzzer_sys::fuzz_target;

use firecat::{is_privileged, KeyEvent};

fuzz_target!(|data: &[u8]| {
    let Some((&flags, key)) = data.split_first() else {
        return;
    };
    if let Ok(key) = std::str::from_utf8(key) {
        let mut event = KeyEvent::down(key);
        event.ctrl_key = flags & 1 != 0;
        event.alt_key = flags & 2 != 0;
        event.meta_key = flags & 4 != 0;
        let privileged = is_privileged(&event);
        if event.has_modifier() {
            assert!(privileged);
        }
    }
});
