//! Directory-service adapters: session handshake and policy listing.
//!
//! This crate is allowed to do network IO. Transport details stay behind
//! [`GraphClient`]; the orchestrator consumes it through the `Directory`
//! seam in `caguard-app` so it can run against fakes in tests.

#![forbid(unsafe_code)]

mod client;
mod error;
mod parse;

pub use client::{Credentials, GraphClient, Session};
pub use error::{AuthError, FetchError};
pub use parse::{parse_policy_page, PolicyPage};

/// Fuzz-friendly API for testing parsing robustness without network access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    /// Parse arbitrary text as a policy list response page.
    ///
    /// Returns `Ok(...)` on a valid page body, `Err(...)` otherwise.
    /// **Never panics** on any input.
    pub fn parse_policy_page(text: &str) -> anyhow::Result<()> {
        let _ = super::parse::parse_policy_page(text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn fuzz_page_parser_never_panics(input in ".*") {
            let _ = super::fuzz::parse_policy_page(&input);
        }
    }
}
