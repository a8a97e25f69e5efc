//! Tests for the contact repository mock

#[cfg(test)]
mod mock_tests;
