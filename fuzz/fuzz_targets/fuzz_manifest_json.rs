#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // `firecat preview` reads manifests written by older builds
        if let Ok(manifest) = firecat::BuildManifest::from_json(content) {
            let _ = manifest.url(&manifest.entry);
        }
    }
});
