//! Helpers for tuning test runs from CI environment variables.

pub mod property_test_profile;
