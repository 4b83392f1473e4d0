//! Fuzz target for HTML escaping.
//!
//! Goal: escaping should never panic, and the output must never contain a
//! raw `<`, since tenant-controlled strings land directly in the report body.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_html_escape
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let escaped = caguard_render::escape_html(text);
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert!(!escaped.contains('"'));
    }
});
