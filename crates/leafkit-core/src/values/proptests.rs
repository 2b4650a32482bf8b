//! Property-based tests for zero-value selection.
