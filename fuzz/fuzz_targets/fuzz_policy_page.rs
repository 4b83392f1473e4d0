//! Fuzz target for Graph policy page parsing.
//!
//! Goal: The parser should **never panic** on any input.
//! It may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_policy_page
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only test valid UTF-8 strings (Graph responses are UTF-8 JSON)
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = caguard_graph::fuzz::parse_policy_page(text);
    }
});
