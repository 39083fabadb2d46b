//! Integration test harness.
//!
//! Cross-module tests that exercise the public API the way the binary
//! does: full animation runs, determinism guarantees, golden settled
//! frames, and the CLI surface.

mod helpers;

mod cli_test;
mod determinism_test;
mod golden_test;
mod scenario_test;
