//! Property-based tests for the combinator laws.
