//! Unit tests for the SMS notification module


mod bulk_tests;
mod notifier_tests;
