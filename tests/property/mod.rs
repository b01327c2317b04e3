//! Property-based tests for content-intel
