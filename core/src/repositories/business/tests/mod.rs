//! Tests for the business repository mock
