//! Integration tests for Layer 1: Algebra
//!
//! Tests the combinators on concrete sequences and their algebraic laws.

mod combinators;
mod contracts;
mod laws;
