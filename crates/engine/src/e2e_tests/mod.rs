//! Engine E2E tests.
//!
//! These tests drive a fully wired `App` against the built-in catalog:
//! - literal story flows (`story_flow_tests`)
//! - runtime properties over the whole catalog (`property_tests`)
//! - file-backed persistence across app restarts (`persistence_tests`)
//! - concurrent choices for one and many players (`concurrency_tests`)
//!
//! # Running E2E Tests
//!
//! ```bash
//! cargo test -p storyloom-engine --lib e2e_tests
//! ```

mod concurrency_tests;
mod e2e_helpers;
mod property_tests;
mod story_flow_tests;

pub use e2e_helpers::*;
