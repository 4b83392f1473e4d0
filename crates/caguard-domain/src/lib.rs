//! Pure rule evaluation (no IO).
//!
//! Input: policy snapshots fetched elsewhere.
//! Output: findings per policy, aggregated into an ordered report model.

#![forbid(unsafe_code)]

pub mod config;
pub mod report;

mod engine;
pub mod rules;

#[cfg(test)]
mod proptest;
#[cfg(test)]
pub(crate) mod test_support;

pub use engine::{evaluate, evaluate_all};
