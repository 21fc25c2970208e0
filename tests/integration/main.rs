//! Integration test harness.
//!
//! Requires the test database configured in `tests/fixtures/test_config.toml`.

mod helpers;

mod auth_test;
mod claim_test;
mod list_test;
mod masking_test;
