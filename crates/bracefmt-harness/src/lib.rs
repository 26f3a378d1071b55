//! Conformance testing harness for bracefmt.
//!
//! This crate provides:
//! - Fixture model: JSON-serialized template/argument/expected-output cases
//! - Built-in suite: the canonical cases pinning the engine's contract
//! - Fixture verify: replay fixture sets through the engine and diff outputs
//! - Report generation: human-readable + machine-readable conformance reports
//! - Structured logging: JSONL evidence records for verification runs

#![forbid(unsafe_code)]

pub mod diff;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod suite;
pub mod verify;

pub use fixtures::{ArgValue, FixtureCase, FixtureSet, HarnessError, arg_list};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use suite::builtin_suite;
pub use verify::{CaseResult, SuiteSummary};
