//! Property-based tests for date layouts.
