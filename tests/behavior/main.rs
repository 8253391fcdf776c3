//! Integration tests for Layer 2: Behavior
//!
//! Tests timeout definitions, behavior tables, and the dispatch loop.
