//! Library integration tests.

mod configuration_tests;
